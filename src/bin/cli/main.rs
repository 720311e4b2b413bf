mod app;
mod commands;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use flashdeck_lib::mode::Mode;

#[derive(Parser)]
#[command(name = "flashdeck-cli", about = "Flashcard editor and viewer", version)]
struct Cli {
    /// Use a specific config file (default: <config dir>/flashdeck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Derive the mode from navigation paths instead of toggling
    #[arg(long, global = true)]
    routed: bool,

    /// Mode to start in
    #[arg(long, global = true, value_parser = parse_mode)]
    initial_mode: Option<Mode>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print the deck a new session starts with
    List,

    /// Apply a command script to a fresh session
    Run {
        /// Script file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse().map_err(|e: flashdeck_lib::mode::ModeError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let overrides = app::Overrides {
        routed: cli.routed,
        initial_mode: cli.initial_mode,
    };
    let app = app::App::new(cli.config.as_deref(), &overrides)?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::List) => {
            commands::list::run(&app, &cli.format)?;
        }
        Some(Command::Run { file }) => {
            let mut app = app;
            commands::run::run_script(&mut app, file.as_deref(), &cli.format)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(app)?;
        }
    }

    Ok(())
}
