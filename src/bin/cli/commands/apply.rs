use std::path::Path;

use anyhow::{Context, Result};

use taxis::deck::{self, CardState, OrderKey};

pub fn run(path: &Path, output: Option<&Path>, key: OrderKey) -> Result<()> {
    let mut deck = deck::load_deck(path)
        .with_context(|| format!("Failed to load deck '{}'", path.display()))?;

    let order = deck::study_order(&deck, key)?;
    deck::apply_order(&mut deck, &order);

    let target = output.unwrap_or(path);
    deck::save_deck(target, &deck)
        .with_context(|| format!("Failed to write deck '{}'", target.display()))?;

    let new_cards = deck
        .cards
        .iter()
        .filter(|card| card.state == CardState::New)
        .count();
    println!(
        "Reordered {} new cards out of {} in '{}'",
        new_cards,
        deck.cards.len(),
        target.display()
    );

    Ok(())
}
