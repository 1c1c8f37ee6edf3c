//! Prerequisite resolution across a deck
//!
//! Connects the tag layer to the ordering layer: `pre:` tags on notes are
//! resolved to note ids, widened to the cards of those notes, and fed to
//! the sorter as a card-level prerequisite graph.

use std::collections::HashMap;

use chrono::Utc;

use crate::ordering::{CardSorter, Result};
use crate::prerequisites::extract_prerequisite_tags;

use super::models::{CardId, CardState, Deck, NoteId};

/// Natural order used when prerequisites allow a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    /// Ascending card id (creation order).
    Id,
    /// Ascending current due position, card id as tie-break.
    Due,
}

/// Ids of notes carrying `tag`, in deck order, without duplicates.
pub fn notes_matching_tag(deck: &Deck, tag: &str) -> Vec<NoteId> {
    let mut matches = Vec::new();
    for note in &deck.notes {
        if note.has_tag(tag) && !matches.contains(&note.id) {
            matches.push(note.id);
        }
    }
    matches
}

/// Per-note prerequisite notes, resolved from `pre:` tags.
///
/// A prerequisite tag that matches no note resolves to nothing; it names a
/// topic, not a note, so an unused topic simply has no cards to wait for.
pub fn note_prerequisites(deck: &Deck) -> HashMap<NoteId, Vec<NoteId>> {
    deck.notes
        .iter()
        .map(|note| {
            let mut required = Vec::new();
            for tag in extract_prerequisite_tags(&note.tags) {
                for note_id in notes_matching_tag(deck, tag) {
                    if !required.contains(&note_id) {
                        required.push(note_id);
                    }
                }
            }
            (note.id, required)
        })
        .collect()
}

/// Per-card prerequisite cards: a card inherits every card of every
/// prerequisite note of its own note.
pub fn card_prerequisites(deck: &Deck) -> HashMap<CardId, Vec<CardId>> {
    let by_note = note_prerequisites(deck);

    deck.cards
        .iter()
        .map(|card| {
            let required = by_note
                .get(&card.note_id)
                .map(|note_ids| {
                    note_ids
                        .iter()
                        .flat_map(|&note_id| deck.cards_of_note(note_id))
                        .collect()
                })
                .unwrap_or_default();
            (card.id, required)
        })
        .collect()
}

/// Compute the full study order for a deck.
pub fn study_order(deck: &Deck, key: OrderKey) -> Result<Vec<CardId>, CardId> {
    let prereqs = card_prerequisites(deck);
    let due_of: HashMap<CardId, i64> = deck.cards.iter().map(|card| (card.id, card.due)).collect();

    log::debug!(
        "sorting {} cards, {} with prerequisites",
        deck.cards.len(),
        prereqs.values().filter(|required| !required.is_empty()).count()
    );

    let ids = deck.cards.iter().map(|card| card.id);
    let lookup = |card: CardId| prereqs.get(&card).cloned().unwrap_or_default();

    let sorter = match key {
        OrderKey::Id => CardSorter::new(ids, lookup, |card| card)?,
        OrderKey::Due => CardSorter::new(ids, lookup, |card| {
            (due_of.get(&card).copied().unwrap_or(0), card)
        })?,
    };
    sorter.sort()
}

/// Rewrite the due positions of new cards to match `order`.
///
/// Cards already in learning or review keep their schedule.
pub fn apply_order(deck: &mut Deck, order: &[CardId]) {
    for (position, &card_id) in order.iter().enumerate() {
        match deck.card_mut(card_id) {
            Some(card) if card.state == CardState::New => card.due = position as i64,
            Some(_) => {}
            None => log::warn!("card {} is in the study order but not in the deck", card_id),
        }
    }
    deck.updated_at = Utc::now();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::models::{Card, Note};
    use crate::ordering::OrderingError;

    /// Three topics: vectors, then matrices (requires vectors), then
    /// determinants (requires matrices). Card ids run counter to the
    /// dependency direction so the sort has real work to do.
    fn sample_deck() -> Deck {
        let mut deck = Deck::new("Linear Algebra");
        deck.notes.push(Note::new(1, "pre:matrices determinants"));
        deck.notes.push(Note::new(2, "pre:vectors matrices"));
        deck.notes.push(Note::new(3, "vectors"));
        deck.cards.push(Card::new(10, 1));
        deck.cards.push(Card::new(11, 2));
        deck.cards.push(Card::new(12, 3));
        deck
    }

    #[test]
    fn test_notes_matching_tag() {
        let deck = sample_deck();

        assert_eq!(notes_matching_tag(&deck, "vectors"), vec![3]);
        assert_eq!(notes_matching_tag(&deck, "matrices"), vec![2]);
        assert_eq!(notes_matching_tag(&deck, "nope"), Vec::<NoteId>::new());
    }

    #[test]
    fn test_note_prerequisites() {
        let deck = sample_deck();
        let by_note = note_prerequisites(&deck);

        assert_eq!(by_note[&1], vec![2]);
        assert_eq!(by_note[&2], vec![3]);
        assert_eq!(by_note[&3], Vec::<NoteId>::new());
    }

    #[test]
    fn test_card_prerequisites() {
        let deck = sample_deck();
        let by_card = card_prerequisites(&deck);

        assert_eq!(by_card[&10], vec![11]);
        assert_eq!(by_card[&11], vec![12]);
        assert_eq!(by_card[&12], Vec::<CardId>::new());
    }

    #[test]
    fn test_multi_card_notes_inherit_all_prerequisite_cards() {
        let mut deck = Deck::new("test");
        deck.notes.push(Note::new(1, "basics"));
        deck.notes.push(Note::new(2, "pre:basics"));
        deck.cards.push(Card::new(10, 1));
        deck.cards.push(Card::new(11, 1));
        deck.cards.push(Card::new(12, 2));

        let by_card = card_prerequisites(&deck);

        assert_eq!(by_card[&12], vec![10, 11]);
    }

    #[test]
    fn test_study_order_by_id() {
        let deck = sample_deck();

        assert_eq!(study_order(&deck, OrderKey::Id).unwrap(), vec![12, 11, 10]);
    }

    #[test]
    fn test_study_order_by_due_breaks_ties_by_id() {
        let mut deck = sample_deck();
        // All cards due at 0: order falls back to card id.
        for card in &mut deck.cards {
            card.due = 0;
        }

        assert_eq!(study_order(&deck, OrderKey::Due).unwrap(), vec![12, 11, 10]);
    }

    #[test]
    fn test_study_order_honors_due_positions() {
        let mut deck = Deck::new("test");
        deck.notes.push(Note::new(1, "a"));
        deck.notes.push(Note::new(2, "b"));
        deck.cards.push(Card::new(10, 1));
        deck.cards.push(Card::new(11, 2));
        deck.card_mut(10).unwrap().due = 5;
        deck.card_mut(11).unwrap().due = 2;

        assert_eq!(study_order(&deck, OrderKey::Due).unwrap(), vec![11, 10]);
        assert_eq!(study_order(&deck, OrderKey::Id).unwrap(), vec![10, 11]);
    }

    #[test]
    fn test_mutual_prerequisites_report_a_cycle() {
        let mut deck = Deck::new("test");
        deck.notes.push(Note::new(1, "a pre:b"));
        deck.notes.push(Note::new(2, "b pre:a"));
        deck.cards.push(Card::new(10, 1));
        deck.cards.push(Card::new(11, 2));

        assert_eq!(
            study_order(&deck, OrderKey::Id).unwrap_err(),
            OrderingError::PrerequisiteCycle(vec![10, 11])
        );
    }

    #[test]
    fn test_apply_order_rewrites_new_cards_only() {
        let mut deck = sample_deck();
        deck.card_mut(11).unwrap().state = CardState::Review;
        deck.card_mut(11).unwrap().due = 99;

        let order = study_order(&deck, OrderKey::Id).unwrap();
        apply_order(&mut deck, &order);

        assert_eq!(deck.card(12).unwrap().due, 0);
        assert_eq!(deck.card(10).unwrap().due, 2);
        // Review card keeps its schedule.
        assert_eq!(deck.card(11).unwrap().due, 99);
    }
}
