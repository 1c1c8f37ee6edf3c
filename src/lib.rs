//! Prerequisite-aware study ordering for flashcard decks
//!
//! Some cards only make sense after others have been studied. Taxis takes a
//! deck where notes declare such dependencies through `pre:` tags and
//! computes a single linear study order that never places a card before any
//! of its prerequisites, while otherwise staying as close as possible to the
//! deck's natural order.
//!
//! The crate is split into three layers:
//! - [`ordering`] — the dependency-aware stable sort itself, generic over
//!   the id type
//! - [`prerequisites`] — extraction of `pre:` references from tag strings
//! - [`deck`] — deck models, JSON persistence, and the glue that resolves
//!   tags into a card-level prerequisite graph

pub mod deck;
pub mod ordering;
pub mod prerequisites;

pub use deck::{Deck, DeckError};
pub use ordering::{CardGraphs, CardSorter, OrderingError};
