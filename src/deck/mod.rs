//! Deck model, persistence, and prerequisite linking
//!
//! This module provides:
//! - Deck / note / card data models
//! - JSON deck file load/save
//! - Resolution of `pre:` tags into a card-level prerequisite graph

pub mod linker;
pub mod models;
pub mod storage;

pub use linker::{apply_order, card_prerequisites, note_prerequisites, study_order, OrderKey};
pub use models::*;
pub use storage::{load_deck, save_deck, DeckError};
