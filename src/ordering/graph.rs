//! Requirement and dependents graph construction
//!
//! The sorter consumes two adjacency structures built here in one pass over
//! the card set. Both are keyed in ascending natural-order position, since
//! that key order decides which card wins when prerequisites allow a choice.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use super::{OrderingError, Result};

/// Adjacency structures for one sort invocation.
///
/// With cards 1-4 where card 1 requires 2 and 3, card 2 requires 3, and
/// card 4 requires 2, the graphs look like:
///
/// ```text
/// requirements = {1: [2, 3], 2: [3], 3: [], 4: [2]}
/// dependents   = {1: [], 2: [1, 4], 3: [1, 2], 4: []}
/// ```
///
/// Every id referenced as a prerequisite must itself be a card, so the two
/// maps always share one key set.
#[derive(Debug, Clone)]
pub struct CardGraphs<I> {
    /// Card id -> ids that must be studied before it.
    pub requirements: IndexMap<I, Vec<I>>,
    /// Card id -> ids that list it as a prerequisite, in natural order.
    pub dependents: IndexMap<I, Vec<I>>,
}

impl<I: Copy + Eq + Hash + Debug> CardGraphs<I> {
    /// Build both graphs from the card set.
    ///
    /// `prereqs` maps each card to the cards that must precede it, and
    /// `position` supplies the natural study order. Cards with equal
    /// positions keep the order they were passed in.
    pub fn build<R, P, N>(
        cards: impl IntoIterator<Item = I>,
        mut prereqs: P,
        mut position: N,
    ) -> Result<Self, I>
    where
        R: Ord,
        P: FnMut(I) -> Vec<I>,
        N: FnMut(I) -> R,
    {
        let mut cards: Vec<I> = cards.into_iter().collect();

        let mut seen = HashSet::with_capacity(cards.len());
        for &card in &cards {
            if !seen.insert(card) {
                return Err(OrderingError::DuplicateCard(card));
            }
        }

        // Stable sort, one position lookup per card; ties keep their
        // first-seen order.
        cards.sort_by_cached_key(|&card| position(card));

        let mut requirements = IndexMap::with_capacity(cards.len());
        for &card in &cards {
            requirements.insert(card, prereqs(card));
        }

        let mut dependents: IndexMap<I, Vec<I>> =
            cards.iter().map(|&card| (card, Vec::new())).collect();
        for (&card, required) in &requirements {
            for &prerequisite in required {
                match dependents.get_mut(&prerequisite) {
                    Some(deps) => deps.push(card),
                    None => {
                        return Err(OrderingError::UnknownPrerequisite { card, prerequisite });
                    }
                }
            }
        }

        debug_assert_eq!(requirements.len(), dependents.len());

        Ok(Self {
            requirements,
            dependents,
        })
    }

    /// Cards in natural study order.
    pub fn cards(&self) -> impl Iterator<Item = I> + '_ {
        self.requirements.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_prereqs(_card: i64) -> Vec<i64> {
        Vec::new()
    }

    fn keys(map: &IndexMap<i64, Vec<i64>>) -> Vec<i64> {
        map.keys().copied().collect()
    }

    #[test]
    fn test_single_card() {
        let graphs = CardGraphs::build([1], no_prereqs, |card| card).unwrap();

        assert_eq!(keys(&graphs.requirements), vec![1]);
        assert_eq!(graphs.requirements[&1], Vec::<i64>::new());
        assert_eq!(graphs.dependents[&1], Vec::<i64>::new());
    }

    #[test]
    fn test_cards_sorted_by_position() {
        let graphs = CardGraphs::build([2, 1], no_prereqs, |card| card).unwrap();

        assert_eq!(keys(&graphs.requirements), vec![1, 2]);
        assert_eq!(keys(&graphs.dependents), vec![1, 2]);
    }

    #[test]
    fn test_cards_sorted_by_reverse_position() {
        let graphs = CardGraphs::build([1, 2], no_prereqs, |card| -card).unwrap();

        assert_eq!(keys(&graphs.requirements), vec![2, 1]);
        assert_eq!(keys(&graphs.dependents), vec![2, 1]);
    }

    #[test]
    fn test_equal_positions_keep_input_order() {
        let graphs = CardGraphs::build([3, 1, 2], no_prereqs, |_| 0).unwrap();

        assert_eq!(keys(&graphs.requirements), vec![3, 1, 2]);
    }

    #[test]
    fn test_one_prereq() {
        let prereqs = |card| if card == 1 { vec![2] } else { vec![] };
        let graphs = CardGraphs::build([1, 2], prereqs, |card: i64| -card).unwrap();

        assert_eq!(keys(&graphs.requirements), vec![2, 1]);
        assert_eq!(graphs.requirements[&1], vec![2]);
        assert_eq!(graphs.requirements[&2], Vec::<i64>::new());
        assert_eq!(graphs.dependents[&2], vec![1]);
        assert_eq!(graphs.dependents[&1], Vec::<i64>::new());
    }

    #[test]
    fn test_dependents_follow_natural_order() {
        let prereqs = |card| if card == 1 { vec![] } else { vec![1] };
        let graphs = CardGraphs::build([2, 3, 1], prereqs, |card: i64| -card).unwrap();

        assert_eq!(keys(&graphs.requirements), vec![3, 2, 1]);
        assert_eq!(graphs.requirements[&3], vec![1]);
        assert_eq!(graphs.requirements[&2], vec![1]);
        assert_eq!(graphs.requirements[&1], Vec::<i64>::new());
        assert_eq!(graphs.dependents[&1], vec![3, 2]);
        assert_eq!(graphs.dependents[&2], Vec::<i64>::new());
        assert_eq!(graphs.dependents[&3], Vec::<i64>::new());
    }

    #[test]
    fn test_unknown_prerequisite() {
        let result = CardGraphs::build([1], |_| vec![2], |card: i64| card);

        assert_eq!(
            result.unwrap_err(),
            OrderingError::UnknownPrerequisite {
                card: 1,
                prerequisite: 2
            }
        );
    }

    #[test]
    fn test_duplicate_card() {
        let result = CardGraphs::build([1, 2, 1], no_prereqs, |card| card);

        assert_eq!(result.unwrap_err(), OrderingError::DuplicateCard(1));
    }
}
