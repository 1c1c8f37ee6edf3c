//! Data models for decks, notes, and cards
//!
//! A note is the unit that carries tags; each note owns one or more cards,
//! and cards are what actually get scheduled. The `due` value of a new card
//! is its position in the introduction queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a note within a deck.
pub type NoteId = i64;

/// Identifier of a card within a deck.
pub type CardId = i64;

/// Scheduling state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardState {
    /// Never studied; `due` is a queue position.
    New,
    /// In the initial learning phase.
    Learning,
    /// In regular spaced review.
    Review,
}

impl Default for CardState {
    fn default() -> Self {
        Self::New
    }
}

/// A note: front/back content lives elsewhere; here it is the tag carrier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    /// Space-delimited tag string, exactly as stored.
    #[serde(default)]
    pub tags: String,
}

impl Note {
    pub fn new(id: NoteId, tags: impl Into<String>) -> Self {
        Self {
            id,
            tags: tags.into(),
        }
    }

    /// Whether the note carries `tag` (exact match, not a prefix).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.split_whitespace().any(|t| t == tag)
    }
}

/// A single card belonging to a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub note_id: NoteId,
    /// Queue position while the card is new.
    #[serde(default)]
    pub due: i64,
    #[serde(default)]
    pub state: CardState,
}

impl Card {
    pub fn new(id: CardId, note_id: NoteId) -> Self {
        Self {
            id,
            note_id,
            due: 0,
            state: CardState::New,
        }
    }
}

/// A deck of notes and their cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            notes: Vec::new(),
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    /// Ids of all cards belonging to `note_id`, in deck order.
    pub fn cards_of_note(&self, note_id: NoteId) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|card| card.note_id == note_id)
            .map(|card| card.id)
            .collect()
    }
}
