//! flashdeck: author flashcards, then review them
//!
//! The library holds the in-memory model: the card collection, the
//! editor/viewer mode controller and the session that owns both. The
//! `flashdeck-cli` binary is the shell around it.

pub mod config;
pub mod flashcards;
pub mod mode;
pub mod session;

pub use config::AppConfig;
pub use flashcards::{Card, CardCollection, CardId, FlashcardError};
pub use mode::{Mode, ModeController, ModeSource, PathRouter};
pub use session::Session;
