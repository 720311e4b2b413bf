//! Copy-on-write card collection
//!
//! Every mutation returns a new `CardCollection` and leaves the receiver
//! untouched. Snapshots are cheap to clone (the entries live behind an `Arc`),
//! so a view can hold on to the collection it last rendered and compare it
//! with the current one to see whether anything changed.

use std::sync::Arc;

use thiserror::Error;

use super::models::{Card, CardEntry, CardId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlashcardError {
    #[error("Card index {index} out of range (collection has {len} cards)")]
    OutOfRange { index: i64, len: usize },

    #[error("Card not found: {0}")]
    CardNotFound(CardId),
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Ordered sequence of cards, in display order
#[derive(Debug, Clone, Default)]
pub struct CardCollection {
    entries: Arc<Vec<CardEntry>>,
    /// Next id to hand out; ids are never reused within a lineage
    next_id: u64,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from cards, in the given order
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let entries: Vec<CardEntry> = cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| CardEntry::new(CardId(i as u64), card))
            .collect();
        let next_id = entries.len() as u64;

        Self {
            entries: Arc::new(entries),
            next_id,
        }
    }

    /// Append a card, returning the new collection
    pub fn add(&self, card: Card) -> Self {
        let mut entries = (*self.entries).clone();
        entries.push(CardEntry::new(CardId(self.next_id), card));

        Self {
            entries: Arc::new(entries),
            next_id: self.next_id + 1,
        }
    }

    /// Remove the card at `index`, returning the new collection
    pub fn delete(&self, index: usize) -> Result<Self> {
        if index >= self.entries.len() {
            return Err(FlashcardError::OutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.entries.len(),
            });
        }

        let entries: Vec<CardEntry> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, entry)| entry.clone())
            .collect();

        Ok(Self {
            entries: Arc::new(entries),
            next_id: self.next_id,
        })
    }

    /// Remove the card with the given id, wherever it currently sits
    pub fn delete_by_id(&self, id: CardId) -> Result<Self> {
        let index = self.position(id).ok_or(FlashcardError::CardNotFound(id))?;
        self.delete(index)
    }

    /// Current cards, in order
    pub fn list(&self) -> Vec<Card> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.entries.iter().map(|entry| &entry.card)
    }

    /// Cards with their ids, in order
    pub fn entries(&self) -> &[CardEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.entries.get(index).map(|entry| &entry.card)
    }

    pub fn find(&self, id: CardId) -> Option<&CardEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when both snapshots are the very same collection value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

/// Equal when the same cards carry the same ids in the same order;
/// creation timestamps are bookkeeping and do not take part.
impl PartialEq for CardCollection {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.entries.len() == other.entries.len()
                && self
                    .entries
                    .iter()
                    .zip(other.entries.iter())
                    .all(|(a, b)| a.id == b.id && a.card == b.card))
    }
}

impl Eq for CardCollection {}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::models::seed_cards;

    fn cards(n: usize) -> Vec<Card> {
        (1..=n)
            .map(|i| Card::new(format!("f{}", i), format!("b{}", i)))
            .collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut collection = CardCollection::new();
        for card in cards(5) {
            collection = collection.add(card);
        }

        assert_eq!(collection.list(), cards(5));
    }

    #[test]
    fn test_add_accepts_empty_text() {
        let collection = CardCollection::new().add(Card::new("", ""));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0), Some(&Card::new("", "")));
    }

    #[test]
    fn test_add_leaves_previous_snapshot_untouched() {
        let before = CardCollection::from_cards(seed_cards());
        let after = before.add(Card::new("f3", "b3"));

        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 3);
        assert!(!before.ptr_eq(&after));
        assert_ne!(before, after);
    }

    #[test]
    fn test_delete_every_valid_index() {
        let original = cards(4);
        let collection = CardCollection::from_cards(original.clone());

        for i in 0..original.len() {
            let deleted = collection.delete(i).unwrap();
            let mut expected = original.clone();
            expected.remove(i);

            assert_eq!(deleted.len(), original.len() - 1);
            assert_eq!(deleted.list(), expected);
        }
        assert_eq!(collection.list(), original);
    }

    #[test]
    fn test_delete_out_of_range_fails() {
        let collection = CardCollection::from_cards(cards(2));

        assert_eq!(
            collection.delete(2),
            Err(FlashcardError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            collection.delete(usize::MAX),
            Err(FlashcardError::OutOfRange { index: i64::MAX, len: 2 })
        );
        assert_eq!(collection.list(), cards(2));
    }

    #[test]
    fn test_delete_from_empty_collection_fails() {
        let collection = CardCollection::new();
        assert!(matches!(
            collection.delete(0),
            Err(FlashcardError::OutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_ids_survive_deletion_and_are_not_reused() {
        let collection = CardCollection::from_cards(cards(3));
        let second = collection.entries()[1].id;

        let collection = collection.delete(0).unwrap();
        assert_eq!(collection.position(second), Some(0));

        let collection = collection.add(Card::new("f4", "b4"));
        let ids: Vec<CardId> = collection.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![CardId(1), CardId(2), CardId(3)]);
    }

    #[test]
    fn test_delete_by_id() {
        let collection = CardCollection::from_cards(cards(3));
        let id = collection.entries()[2].id;

        let collection = collection.delete_by_id(id).unwrap();
        assert_eq!(collection.list(), cards(2));
        assert!(collection.find(id).is_none());
        assert_eq!(
            collection.delete_by_id(id),
            Err(FlashcardError::CardNotFound(id))
        );
    }

    #[test]
    fn test_clone_shares_snapshot() {
        let collection = CardCollection::from_cards(cards(2));
        let copy = collection.clone();
        assert!(collection.ptr_eq(&copy));
    }

    #[test]
    fn test_from_iterator() {
        let collection: CardCollection = cards(3).into_iter().collect();
        assert_eq!(collection.iter().len(), 3);
        assert_eq!(collection.get(1), Some(&Card::new("f2", "b2")));
    }

    #[test]
    fn test_equality_ignores_creation_time() {
        let a = CardCollection::from_cards(seed_cards());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = CardCollection::from_cards(seed_cards());

        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);

        // Same cards under different ids are different collections
        let shifted = CardCollection::new().add(Card::new("x", "y")).delete(0).unwrap();
        let shifted = seed_cards().into_iter().fold(shifted, |c, card| c.add(card));
        assert_eq!(shifted.list(), a.list());
        assert_ne!(shifted, a);
    }
}
