use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let session = &app.session;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&session.summary())?);
        }
        OutputFormat::Plain => {
            println!("{} mode ({}, {})", session.mode(), session.path(), session.mode_source());

            if session.cards().is_empty() {
                println!("    (no cards)");
            } else {
                for (i, card) in session.cards().iter().enumerate() {
                    println!("  {:>3}. {} | {}", i, card.front, card.back);
                }
            }
        }
    }

    Ok(())
}
