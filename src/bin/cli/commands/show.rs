use std::path::Path;

use anyhow::{Context, Result};

use taxis::deck::{self, CardState};

use crate::OutputFormat;

pub fn run(path: &Path, format: &OutputFormat) -> Result<()> {
    let deck = deck::load_deck(path)
        .with_context(|| format!("Failed to load deck '{}'", path.display()))?;
    let prereqs = deck::card_prerequisites(&deck);

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = deck
                .cards
                .iter()
                .map(|card| {
                    serde_json::json!({
                        "id": card.id,
                        "noteId": card.note_id,
                        "due": card.due,
                        "state": format!("{:?}", card.state).to_lowercase(),
                        "requires": prereqs.get(&card.id).cloned().unwrap_or_default(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if deck.cards.is_empty() {
                println!("Deck '{}' has no cards.", deck.name);
                return Ok(());
            }

            println!("Deck '{}': {} cards", deck.name, deck.cards.len());
            for card in &deck.cards {
                let required = prereqs.get(&card.id).cloned().unwrap_or_default();
                let state = match card.state {
                    CardState::New => "new",
                    CardState::Learning => "learning",
                    CardState::Review => "review",
                };
                if required.is_empty() {
                    println!(
                        "  card {} (note {}, {}, due {})",
                        card.id, card.note_id, state, card.due
                    );
                } else {
                    println!(
                        "  card {} (note {}, {}, due {}) requires {:?}",
                        card.id, card.note_id, state, card.due, required
                    );
                }
            }
        }
    }

    Ok(())
}
