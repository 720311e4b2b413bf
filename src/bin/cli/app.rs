use std::path::Path;

use anyhow::{Context, Result};

use flashdeck_lib::config::AppConfig;
use flashdeck_lib::mode::{Mode, ModeSource};
use flashdeck_lib::session::Session;

/// Command-line overrides applied on top of the config file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub routed: bool,
    pub initial_mode: Option<Mode>,
}

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub session: Session,
}

impl App {
    /// Load the config (explicit path or default location) and start a session
    pub fn new(config_path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => AppConfig::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => AppConfig::load().context("Failed to load config")?,
        };

        if overrides.routed {
            config.mode.source = ModeSource::Routed;
        }
        if let Some(mode) = overrides.initial_mode {
            config.mode.initial = mode;
        }

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: AppConfig) -> Self {
        let session = Session::from_config(&config);
        Self { config, session }
    }
}
