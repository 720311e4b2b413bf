//! Line-oriented command scripts
//!
//! ```text
//! # comment
//! add <front> | <back>
//! delete <index>
//! switch
//! go <path>
//! resolve <path>
//! list
//! mode
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use flashdeck_lib::flashcards::Card;
use flashdeck_lib::session::Session;

use crate::app::App;
use crate::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(Card),
    Delete(i64),
    Switch,
    Go(String),
    Resolve(String),
    List,
    Mode,
}

/// Parse one script line; `Ok(None)` for blank lines and comments
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "add" => {
            let Some((front, back)) = rest.split_once('|') else {
                bail!("expected `add <front> | <back>`");
            };
            ScriptCommand::Add(Card::new(front.trim(), back.trim()))
        }
        "delete" => {
            let index = rest
                .parse::<i64>()
                .with_context(|| format!("invalid card index '{}'", rest))?;
            ScriptCommand::Delete(index)
        }
        "switch" | "toggle" => ScriptCommand::Switch,
        "go" if !rest.is_empty() => ScriptCommand::Go(rest.to_string()),
        "resolve" if !rest.is_empty() => ScriptCommand::Resolve(rest.to_string()),
        "go" | "resolve" => bail!("expected `{} <path>`", verb),
        "list" => ScriptCommand::List,
        "mode" => ScriptCommand::Mode,
        other => bail!("unknown command '{}'", other),
    };

    Ok(Some(command))
}

/// Apply one command and describe the resulting state
pub fn apply(session: &mut Session, command: ScriptCommand, out: &mut impl Write) -> Result<()> {
    match command {
        ScriptCommand::Add(card) => {
            let front = card.front.clone();
            let cards = session.add_card(card);
            writeln!(out, "added \"{}\" ({} cards)", front, cards.len())?;
        }
        ScriptCommand::Delete(index) => {
            let cards = session.delete_card(index)?;
            writeln!(out, "deleted card {} ({} cards)", index, cards.len())?;
        }
        ScriptCommand::Switch => {
            let mode = session.switch_mode();
            writeln!(out, "mode: {}", mode)?;
        }
        ScriptCommand::Go(path) => {
            let mode = session.navigate(&path);
            writeln!(out, "mode: {} ({})", mode, session.path())?;
        }
        ScriptCommand::Resolve(path) => {
            writeln!(out, "{} -> {}", path, session.resolve_path(&path))?;
        }
        ScriptCommand::List => {
            if session.cards().is_empty() {
                writeln!(out, "(no cards)")?;
            }
            for (i, card) in session.cards().iter().enumerate() {
                writeln!(out, "{}. {} | {}", i, card.front, card.back)?;
            }
        }
        ScriptCommand::Mode => {
            writeln!(out, "mode: {} ({})", session.mode(), session.path())?;
        }
    }
    Ok(())
}

/// Run every line of `script`, reporting failures and carrying on
///
/// Returns the number of failed lines.
pub fn execute(session: &mut Session, script: &str, out: &mut impl Write, err: &mut impl Write) -> Result<usize> {
    let mut failed = 0;

    for (lineno, line) in script.lines().enumerate() {
        let outcome = parse_line(line).and_then(|command| match command {
            Some(command) => apply(session, command, out),
            None => Ok(()),
        });

        if let Err(e) = outcome {
            failed += 1;
            writeln!(err, "line {}: {}", lineno + 1, e)?;
        }
    }

    Ok(failed)
}

pub fn run_script(app: &mut App, file: Option<&Path>, format: &OutputFormat) -> Result<()> {
    let script = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read script from stdin")?;
            buf
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let failed = match format {
        OutputFormat::Plain => execute(&mut app.session, &script, &mut stdout.lock(), &mut stderr.lock())?,
        OutputFormat::Json => {
            let failed = execute(&mut app.session, &script, &mut io::sink(), &mut stderr.lock())?;
            println!("{}", serde_json::to_string_pretty(&app.session.summary())?);
            failed
        }
    };

    if failed > 0 {
        bail!("{} command(s) failed", failed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck_lib::mode::{Mode, ModeController, PathRouter};
    use flashdeck_lib::CardCollection;

    fn run(session: &mut Session, script: &str) -> (String, String, usize) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failed = execute(session, script, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            failed,
        )
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("  # note").unwrap(), None);
        assert_eq!(
            parse_line("add  What is 2+2? |  4 ").unwrap(),
            Some(ScriptCommand::Add(Card::new("What is 2+2?", "4")))
        );
        assert_eq!(parse_line("add | ").unwrap(), Some(ScriptCommand::Add(Card::new("", ""))));
        assert_eq!(parse_line("delete -1").unwrap(), Some(ScriptCommand::Delete(-1)));
        assert_eq!(parse_line("toggle").unwrap(), Some(ScriptCommand::Switch));
        assert_eq!(
            parse_line("go /viewer").unwrap(),
            Some(ScriptCommand::Go("/viewer".to_string()))
        );
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("add no separator").is_err());
        assert!(parse_line("delete first").is_err());
        assert!(parse_line("go").is_err());
        assert!(parse_line("shuffle").is_err());
    }

    #[test]
    fn test_scenario_script() {
        let mut session = Session::default();
        let (out, err, failed) = run(
            &mut session,
            "add f3 | b3\ndelete 0\nlist\nswitch\nswitch\n",
        );

        assert_eq!(failed, 0);
        assert!(err.is_empty());
        assert_eq!(
            out,
            "added \"f3\" (3 cards)\n\
             deleted card 0 (2 cards)\n\
             0. front2 | back2\n\
             1. f3 | b3\n\
             mode: viewer\n\
             mode: editor\n"
        );
        assert_eq!(session.mode(), Mode::Editor);
    }

    #[test]
    fn test_failed_lines_do_not_stop_the_script() {
        let mut session = Session::default();
        let (out, err, failed) = run(&mut session, "delete 5\nbogus\nadd a | b\n");

        assert_eq!(failed, 2);
        assert!(err.starts_with("line 1: Card index 5 out of range"));
        assert!(err.contains("line 2: unknown command 'bogus'"));
        assert_eq!(out, "added \"a\" (3 cards)\n");
        assert_eq!(session.cards().len(), 3);
    }

    #[test]
    fn test_routed_script() {
        let controller = ModeController::routed(PathRouter::default(), "/editor");
        let mut session = Session::new(CardCollection::new(), controller);
        let (out, _, failed) = run(&mut session, "resolve /unknown\ngo /viewer\nmode\nlist\n");

        assert_eq!(failed, 0);
        assert_eq!(
            out,
            "/unknown -> editor\n\
             mode: viewer (/viewer)\n\
             mode: viewer (/viewer)\n\
             (no cards)\n"
        );
    }
}
