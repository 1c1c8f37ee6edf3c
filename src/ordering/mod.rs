//! Dependency-aware study ordering
//!
//! This module provides:
//! - Requirement/dependents graph construction from a prerequisite lookup
//! - A stable topological sort biased toward the natural card order
//! - Cycle detection over the prerequisite relation

pub mod graph;
pub mod sorter;

pub use graph::CardGraphs;
pub use sorter::CardSorter;

use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderingError<I: Debug> {
    #[error("card {0:?} appears more than once in the card set")]
    DuplicateCard(I),

    #[error("card {prerequisite:?} was listed as a prerequisite of card {card:?} but is not in the card set")]
    UnknownPrerequisite { card: I, prerequisite: I },

    #[error("prerequisite cycle involving cards {0:?}")]
    PrerequisiteCycle(Vec<I>),
}

pub type Result<T, I> = std::result::Result<T, OrderingError<I>>;
