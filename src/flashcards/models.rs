//! Data models for the flashcard collection

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flashcard with question (front) and answer (back)
///
/// Cards are plain values: two cards with the same text are equal, and a card
/// is never edited in place once it has been added to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Surrogate key assigned to a card when it enters a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card together with its collection bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEntry {
    pub id: CardId,
    pub card: Card,
    pub created_at: DateTime<Utc>,
}

impl CardEntry {
    pub fn new(id: CardId, card: Card) -> Self {
        Self {
            id,
            card,
            created_at: Utc::now(),
        }
    }
}

/// The example cards every new session starts with
pub fn seed_cards() -> Vec<Card> {
    vec![Card::new("front1", "back1"), Card::new("front2", "back2")]
}
