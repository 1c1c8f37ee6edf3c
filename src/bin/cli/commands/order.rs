use std::path::Path;

use anyhow::{Context, Result};

use taxis::deck::{self, OrderKey};

use crate::OutputFormat;

pub fn run(path: &Path, key: OrderKey, format: &OutputFormat) -> Result<()> {
    let deck = deck::load_deck(path)
        .with_context(|| format!("Failed to load deck '{}'", path.display()))?;
    let order = deck::study_order(&deck, key)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&order)?);
        }
        OutputFormat::Plain => {
            for card_id in order {
                println!("{}", card_id);
            }
        }
    }

    Ok(())
}
