use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use temporal_store::{StoreOptions, TemporalStore};
use temporal_store_config::HistorySettings;

mod repl;

use repl::{Command, Flow};

/// Interactive undo/redo playground over a text value.
///
/// Reads one command per line from stdin: `set <text>`, `append <text>`,
/// `undo`, `redo`, `pause`, `resume`, `clear`, `show`, `history`, `quit`.
#[derive(Parser, Debug)]
#[command(name = "tstore", version, about)]
struct Cli {
    /// Initial value of the store.
    #[arg(long, default_value = "")]
    initial: String,

    /// History limit (overrides the settings file).
    #[arg(long)]
    limit: Option<usize>,

    /// Settings file to load instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(HistorySettings::config_path);
    let mut settings = HistorySettings::load_or_create(&config_path);
    if let Some(limit) = cli.limit {
        settings.limit = limit;
        settings.sanitize();
    }

    tracing::info!(
        "Starting tstore (limit {}, settings {})",
        settings.limit,
        config_path.display()
    );

    let mut store =
        TemporalStore::with_options(cli.initial, StoreOptions::from_settings(&settings));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => {
                if repl::execute(&mut store, command, &mut out)? == Flow::Quit {
                    break;
                }
            }
            Err(e) => writeln!(out, "error: {e}").context("Failed to write to stdout")?,
        }
        out.flush().context("Failed to flush stdout")?;
    }

    tracing::info!("Exiting tstore");
    Ok(())
}
