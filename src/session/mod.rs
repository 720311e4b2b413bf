//! Session state for flashdeck
//!
//! A `Session` is the single owner of the card collection and the mode
//! controller. Views never hold a mutable reference to either; they read
//! snapshots and ask the session to apply commands.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::flashcards::{seed_cards, Card, CardCollection, CardId, FlashcardError};
use crate::mode::{self, Mode, ModeController, ModeSource};

pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Read-only view of a session at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub cards: CardCollection,
    pub mode: Mode,
}

/// Serializable summary, used for JSON output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub mode: Mode,
    pub source: ModeSource,
    pub path: String,
    pub cards: Vec<Card>,
}

pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    cards: CardCollection,
    controller: ModeController,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CardCollection::from_cards(seed_cards()), ModeController::default())
    }
}

impl Session {
    pub fn new(cards: CardCollection, controller: ModeController) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            cards,
            controller,
        };
        log::debug!(
            "Session {} started with {} cards in {} mode",
            session.id,
            session.cards.len(),
            session.mode()
        );
        session
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.starting_deck(), config.mode_controller())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    // ==================== Card Commands ====================

    /// Append a card and return the updated collection
    pub fn add_card(&mut self, card: Card) -> CardCollection {
        self.cards = self.cards.add(card);
        log::debug!("Session {}: added card, {} total", self.id, self.cards.len());
        self.cards.clone()
    }

    /// Delete the card at `index` and return the updated collection
    ///
    /// Negative or too-large indices fail with `OutOfRange` and change nothing.
    pub fn delete_card(&mut self, index: i64) -> Result<CardCollection> {
        let len = self.cards.len();
        let result = usize::try_from(index)
            .map_err(|_| FlashcardError::OutOfRange { index, len })
            .and_then(|i| self.cards.delete(i));

        match result {
            Ok(cards) => {
                self.cards = cards;
                log::debug!("Session {}: deleted card {}, {} left", self.id, index, self.cards.len());
                Ok(self.cards.clone())
            }
            Err(e) => {
                log::warn!("Session {}: delete rejected: {}", self.id, e);
                Err(e)
            }
        }
    }

    /// Delete a card by its id and return the updated collection
    pub fn delete_card_by_id(&mut self, id: CardId) -> Result<CardCollection> {
        match self.cards.delete_by_id(id) {
            Ok(cards) => {
                self.cards = cards;
                log::debug!("Session {}: deleted card {}", self.id, id);
                Ok(self.cards.clone())
            }
            Err(e) => {
                log::warn!("Session {}: delete rejected: {}", self.id, e);
                Err(e)
            }
        }
    }

    // ==================== Mode Commands ====================

    /// Flip between editor and viewer
    pub fn switch_mode(&mut self) -> Mode {
        let mode = self.controller.toggle();
        log::debug!("Session {}: switched to {} mode", self.id, mode);
        mode
    }

    /// Map a path to a mode without navigating
    pub fn resolve_path(&self, path: &str) -> Mode {
        self.controller.resolve(path)
    }

    /// Map a path to a mode, failing for paths outside the route table
    pub fn try_resolve_path(&self, path: &str) -> mode::Result<Mode> {
        self.controller.try_resolve(path)
    }

    /// Navigate to `path` and return the mode it selects
    pub fn navigate(&mut self, path: &str) -> Mode {
        let mode = self.controller.navigate(path);
        log::debug!("Session {}: navigated to {:?} ({} mode)", self.id, path, mode);
        mode
    }

    // ==================== Queries ====================

    pub fn cards(&self) -> &CardCollection {
        &self.cards
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    pub fn mode_source(&self) -> ModeSource {
        self.controller.source()
    }

    pub fn path(&self) -> &str {
        self.controller.path()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cards: self.cards.clone(),
            mode: self.mode(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            started_at: self.started_at,
            mode: self.mode(),
            source: self.mode_source(),
            path: self.path().to_string(),
            cards: self.cards.list(),
        }
    }
}
