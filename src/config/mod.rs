//! Configuration for flashdeck
//!
//! Read from `<config_dir>/flashdeck/config.toml`. Every key is optional; a
//! missing file means defaults throughout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flashcards::{seed_cards, Card, CardCollection};
use crate::mode::{Mode, ModeController, ModeSource};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Mode settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ModeConfig {
    /// Toggle-based or path-based mode
    pub source: ModeSource,
    /// Mode at startup
    pub initial: Mode,
    /// Mode selected by paths outside the route table
    pub fallback: Mode,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            source: ModeSource::Toggle,
            initial: Mode::Editor,
            fallback: Mode::Editor,
        }
    }
}

/// Starting deck settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DeckConfig {
    /// Start with the example cards
    pub seed: bool,
    /// Replacement for the example cards, used when `seed` is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            seed: true,
            cards: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: ModeConfig,
    pub deck: DeckConfig,
}

impl AppConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("flashdeck").join("config.toml"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Cards a new session starts with
    pub fn starting_deck(&self) -> CardCollection {
        if !self.deck.seed {
            return CardCollection::new();
        }
        match &self.deck.cards {
            Some(cards) => CardCollection::from_cards(cards.iter().cloned()),
            None => CardCollection::from_cards(seed_cards()),
        }
    }

    /// Mode controller for a new session
    pub fn mode_controller(&self) -> ModeController {
        ModeController::for_source(self.mode.source, self.mode.initial, self.mode.fallback)
    }
}
