use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ModeError;

/// Presentation mode; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Cards can be added and deleted
    #[default]
    Editor,
    /// Cards are presented for review, no editing controls
    Viewer,
}

impl Mode {
    /// The opposite mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Editor => Self::Viewer,
            Self::Viewer => Self::Editor,
        }
    }

    /// Canonical navigation path for this mode
    pub fn path(self) -> &'static str {
        match self {
            Self::Editor => "/editor",
            Self::Viewer => "/viewer",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ModeError::UnknownMode(s.to_string())),
        }
    }
}

/// Where the active mode comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSource {
    /// Stored state flipped by explicit toggles
    #[default]
    Toggle,
    /// Derived from the current navigation path
    Routed,
}

impl ModeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Routed => "routed",
        }
    }
}

impl fmt::Display for ModeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
