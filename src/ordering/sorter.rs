//! Stable, prerequisite-respecting topological sort
//!
//! The sorter walks the cards in natural order and emits each one as soon as
//! all of its prerequisites have been emitted. Emitting a card can unblock
//! cards that were passed over earlier; those cascade into the queue
//! immediately. A card whose natural slot has not been reached yet waits for
//! the outer walk even when it becomes ready early, so the queue never
//! strays further from the natural order than the prerequisites force.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::graph::CardGraphs;
use super::{OrderingError, Result};

/// One unit of pending work during the sort.
///
/// `Unblock` records that `emitted` has entered the queue and must be
/// struck from `dependent`'s remaining requirements before the dependent is
/// re-checked. Indices refer to the canonical (natural) order.
enum Step {
    Visit(usize),
    Unblock { emitted: usize, dependent: usize },
}

/// Computes the study order for one card set.
///
/// The graphs are consumed by [`CardSorter::sort`]; build a new sorter for
/// every invocation.
pub struct CardSorter<I> {
    graphs: CardGraphs<I>,
}

impl<I: Copy + Eq + Hash + Debug> CardSorter<I> {
    /// Build the graphs and wrap them for sorting.
    ///
    /// See [`CardGraphs::build`] for the contract of `prereqs` and
    /// `position`.
    pub fn new<R, P, N>(
        cards: impl IntoIterator<Item = I>,
        prereqs: P,
        position: N,
    ) -> Result<Self, I>
    where
        R: Ord,
        P: FnMut(I) -> Vec<I>,
        N: FnMut(I) -> R,
    {
        CardGraphs::build(cards, prereqs, position).map(Self::from_graphs)
    }

    /// Sort graphs that were built separately.
    pub fn from_graphs(graphs: CardGraphs<I>) -> Self {
        Self { graphs }
    }

    /// Produce the study order: a permutation of the card set in which
    /// every card comes after all of its prerequisites.
    ///
    /// Fails with [`OrderingError::PrerequisiteCycle`] if some cards can
    /// never become ready; the error carries every unresolved card,
    /// including cards merely downstream of the cycle itself.
    pub fn sort(self) -> Result<Vec<I>, I> {
        let CardGraphs {
            requirements,
            dependents,
        } = self.graphs;

        let order: Vec<I> = requirements.keys().copied().collect();
        let index_of: HashMap<I, usize> = order
            .iter()
            .enumerate()
            .map(|(ndx, &card)| (card, ndx))
            .collect();

        // Working state, indexed by canonical position. `remaining` shrinks
        // as prerequisites are satisfied; a retired card is already queued.
        let mut remaining: Vec<Vec<I>> = requirements.into_values().collect();
        let dependents: Vec<Vec<usize>> = dependents
            .into_values()
            .map(|deps| deps.into_iter().map(|dep| index_of[&dep]).collect())
            .collect();

        let mut queue: Vec<I> = Vec::with_capacity(order.len());
        let mut retired = vec![false; order.len()];

        // Explicit worklist instead of call-stack recursion: a cascade can
        // run as deep as the longest dependency chain, which overflows the
        // stack on large decks.
        let mut work: Vec<Step> = Vec::new();

        for current in 0..order.len() {
            work.push(Step::Visit(current));

            while let Some(step) = work.pop() {
                let ndx = match step {
                    Step::Visit(ndx) => ndx,
                    Step::Unblock { emitted, dependent } => {
                        let card = order[emitted];
                        let reqs = &mut remaining[dependent];
                        if let Some(at) = reqs.iter().position(|&req| req == card) {
                            reqs.remove(at);
                        }
                        dependent
                    }
                };

                if retired[ndx] || !remaining[ndx].is_empty() {
                    continue;
                }
                // Ready, but its natural slot lies ahead of the walk: the
                // outer loop will emit it when it gets there.
                if ndx > current {
                    continue;
                }

                retired[ndx] = true;
                queue.push(order[ndx]);

                // Dependents are re-checked in natural order; the stack
                // pops in reverse push order.
                for &dependent in dependents[ndx].iter().rev() {
                    work.push(Step::Unblock {
                        emitted: ndx,
                        dependent,
                    });
                }
            }
        }

        if queue.len() != order.len() {
            let unresolved: Vec<I> = order
                .iter()
                .zip(&retired)
                .filter(|&(_, &done)| !done)
                .map(|(&card, _)| card)
                .collect();
            return Err(OrderingError::PrerequisiteCycle(unresolved));
        }

        log::debug!("queued {} cards", queue.len());
        Ok(queue)
    }
}
