//! Flashcard collection for flashdeck
//!
//! This module provides:
//! - The `Card` value type (front/back text pair)
//! - `CardCollection`, an ordered copy-on-write sequence of cards
//! - Stable per-collection card ids

pub mod collection;
pub mod models;

pub use collection::{CardCollection, FlashcardError};
pub use models::*;
