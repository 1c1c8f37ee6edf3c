//! Deck persistence
//!
//! A deck is stored as a single JSON document:
//! ```text
//! {
//!   "name": "Linear Algebra",
//!   "notes": [ { "id": 1, "tags": "vectors" }, ... ],
//!   "cards": [ { "id": 10, "noteId": 1, "due": 0, "state": "new" }, ... ],
//!   "createdAt": "...", "updatedAt": "..."
//! }
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::models::Deck;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;

/// Load a deck from a JSON file.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a deck to disk as pretty-printed JSON.
pub fn save_deck(path: &Path, deck: &Deck) -> Result<()> {
    let json = serde_json::to_string_pretty(deck)?;
    fs::write(path, json)?;
    Ok(())
}
