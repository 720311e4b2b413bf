//! Path-to-mode resolution for the routed configuration
//!
//! The table is fixed: `/editor` and `/viewer`. Paths outside the table are
//! unmapped and resolve to the router's fallback mode.

use super::models::Mode;
use super::{ModeError, Result};

const ROUTES: [(&str, Mode); 2] = [("/editor", Mode::Editor), ("/viewer", Mode::Viewer)];

/// Stateless path resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathRouter {
    fallback: Mode,
}

impl PathRouter {
    pub fn new(fallback: Mode) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> Mode {
        self.fallback
    }

    /// Resolve a path, failing for paths outside the table
    pub fn try_resolve(&self, path: &str) -> Result<Mode> {
        let normalized = normalize(path);
        ROUTES
            .iter()
            .find(|(route, _)| *route == normalized)
            .map(|(_, mode)| *mode)
            .ok_or_else(|| ModeError::UnmappedPath(path.to_string()))
    }

    /// Resolve a path, using the fallback mode for unmapped paths
    pub fn resolve(&self, path: &str) -> Mode {
        match self.try_resolve(path) {
            Ok(mode) => mode,
            Err(_) => {
                log::debug!("Unmapped path {:?}, falling back to {}", path, self.fallback);
                self.fallback
            }
        }
    }
}

/// Drop a single trailing slash ("/viewer/" → "/viewer"); "/" stays as is
fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}
