/// Line commands for the interactive store.
use std::io::Write;

use anyhow::{bail, Context, Result};
use temporal_store::{Outcome, TemporalStore};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the value.
    Set(String),
    /// Append to the current value (functional update).
    Append(String),
    Undo,
    Redo,
    Pause,
    Resume,
    Clear,
    Show,
    History,
    Quit,
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Command {
    /// Parses one input line. The argument of `set`/`append` is everything
    /// after the first space, kept verbatim.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (word, arg) = match line.split_once(' ') {
            Some((word, arg)) => (word, Some(arg).filter(|a| !a.trim().is_empty())),
            None => (line, None),
        };

        let command = match (word, arg) {
            ("set", Some(arg)) => Self::Set(arg.to_string()),
            ("set", None) => Self::Set(String::new()),
            ("append", Some(arg)) => Self::Append(arg.to_string()),
            ("append", None) => bail!("append needs text"),
            ("undo", None) => Self::Undo,
            ("redo", None) => Self::Redo,
            ("pause", None) => Self::Pause,
            ("resume", None) => Self::Resume,
            ("clear", None) => Self::Clear,
            ("show", None) => Self::Show,
            ("history", None) => Self::History,
            ("quit" | "exit", None) => Self::Quit,
            (word, Some(_)) if is_bare(word) => bail!("{word} takes no arguments"),
            (word, _) => bail!("unknown command: {word}"),
        };
        Ok(command)
    }
}

fn is_bare(word: &str) -> bool {
    matches!(
        word,
        "undo" | "redo" | "pause" | "resume" | "clear" | "show" | "history" | "quit" | "exit"
    )
}

/// Runs `command` against `store`, writing a short report to `out`.
pub fn execute<W: Write>(
    store: &mut TemporalStore<String>,
    command: Command,
    out: &mut W,
) -> Result<Flow> {
    let outcome = match command {
        Command::Set(text) => Some(store.set(text)),
        Command::Append(text) => Some(store.set_with(move |prev| format!("{prev}{text}"))),
        Command::Undo => Some(store.undo()),
        Command::Redo => Some(store.redo()),
        Command::Pause => {
            store.pause_recording();
            None
        }
        Command::Resume => {
            store.resume_recording();
            None
        }
        Command::Clear => {
            store.clear_history();
            None
        }
        Command::Show => None,
        Command::History => {
            write_history(store, out)?;
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
    };

    if let Some(outcome) = outcome {
        tracing::debug!(?outcome, "Command applied");
        writeln!(out, "{}", describe(outcome)).context("Failed to write output")?;
    }
    write_status(store, out)?;
    Ok(Flow::Continue)
}

fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Recorded => "recorded",
        Outcome::Replaced => "replaced (not recorded)",
        Outcome::Undone => "undone",
        Outcome::Redone => "redone",
        Outcome::Unchanged => "nothing to do",
    }
}

fn write_status<W: Write>(store: &TemporalStore<String>, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "state={:?} can_undo={} can_redo={}{}",
        store.state(),
        store.can_undo(),
        store.can_redo(),
        if store.is_recording() { "" } else { " (paused)" }
    )
    .context("Failed to write status")
}

fn write_history<W: Write>(store: &TemporalStore<String>, out: &mut W) -> Result<()> {
    for value in store.past() {
        writeln!(out, "  past    {value:?}").context("Failed to write history")?;
    }
    writeln!(out, "> present {:?}", store.state()).context("Failed to write history")?;
    for value in store.future() {
        writeln!(out, "  future  {value:?}").context("Failed to write history")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use temporal_store::StoreOptions;

    fn run(store: &mut TemporalStore<String>, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            let command = Command::parse(line).expect("parse");
            if execute(store, command, &mut out).expect("execute") == Flow::Quit {
                break;
            }
        }
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("undo").unwrap(), Command::Undo);
        assert_eq!(Command::parse("  redo  ").unwrap(), Command::Redo);
        assert_eq!(
            Command::parse("set hello world").unwrap(),
            Command::Set("hello world".to_string())
        );
        assert_eq!(
            Command::parse("append  x").unwrap(),
            Command::Append(" x".to_string())
        );
        assert_eq!(Command::parse("set").unwrap(), Command::Set(String::new()));
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("jump").is_err());
        assert!(Command::parse("append").is_err());
        let err = Command::parse("undo now").unwrap_err();
        assert!(err.to_string().contains("takes no arguments"));
    }

    #[test]
    fn test_execute_set_undo_redo() {
        let mut store = TemporalStore::new(String::new());
        let output = run(&mut store, &["set a", "append b", "undo", "redo"]);
        assert_eq!(store.state(), "ab");
        assert!(output.contains("recorded"));
        assert!(output.contains("undone"));
        assert!(output.contains("redone"));
        assert!(output.contains("state=\"ab\" can_undo=true can_redo=false"));
    }

    #[test]
    fn test_execute_noop_undo() {
        let mut store = TemporalStore::new(String::from("x"));
        let output = run(&mut store, &["undo"]);
        assert!(output.starts_with("nothing to do"));
        assert_eq!(store.state(), "x");
    }

    #[test]
    fn test_execute_pause_resume() {
        let mut store = TemporalStore::new(String::new());
        let output = run(&mut store, &["pause", "set a", "resume", "set b"]);
        assert!(output.contains("replaced (not recorded)"));
        assert!(output.contains("(paused)"));
        assert_eq!(store.past().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_execute_history_listing() {
        let mut store =
            TemporalStore::with_options(String::from("0"), StoreOptions::default().limit(2));
        let output = run(&mut store, &["set 1", "set 2", "set 3", "undo"]);
        assert!(output.contains("state=\"2\""));

        let listing = run(&mut store, &["history"]);
        assert_eq!(listing, "  past    \"1\"\n> present \"2\"\n  future  \"3\"\n");
    }

    #[test]
    fn test_execute_clear_and_quit() {
        let mut store = TemporalStore::new(String::new());
        let output = run(&mut store, &["set a", "clear", "quit", "set b"]);
        assert!(output.contains("can_undo=false"));
        // Lines after quit are not executed
        assert_eq!(store.state(), "a");
    }
}
