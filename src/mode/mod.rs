//! Mode tracking for flashdeck
//!
//! The application is either in the editor or in the viewer. The active mode
//! is stored and toggled, or derived from a navigation path, depending on the
//! configured `ModeSource`.

pub mod controller;
pub mod models;
pub mod router;

use thiserror::Error;

pub use controller::{ModeContext, ModeController};
pub use models::{Mode, ModeSource};
pub use router::PathRouter;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("No mode is mapped to path: {0}")]
    UnmappedPath(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, ModeError>;
