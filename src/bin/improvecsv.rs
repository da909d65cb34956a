//! Console front end of the catalog transcoder.
//!
//! Processes the CSV files given as arguments as an independent batch; with
//! no arguments it falls back to an interactive path prompt. Each file's
//! success or failure is reported individually.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use csv_transcoder::config::{BlacklistConfig, Blacklists};
use csv_transcoder::TranscodePipeline;

#[derive(Parser)]
#[command(name = "improvecsv")]
#[command(about = "Bereinigt Produktkatalog-CSV-Exporte", version)]
struct Cli {
    /// CSV-Dateien, die verarbeitet werden sollen (ohne Angabe: Eingabeaufforderung)
    files: Vec<PathBuf>,

    /// TOML-Datei mit eigenen Marken-/Kategorie-Blacklists
    #[arg(long)]
    blacklist: Option<PathBuf>,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}

/// Strips one pair of wrapping quote characters, as pasted from file
/// managers on Windows.
fn strip_wrapping_quotes(input: &str) -> &str {
    let trimmed = input.trim();
    if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

fn load_blacklists(override_path: Option<&PathBuf>) -> Result<Blacklists> {
    let config = match override_path {
        Some(path) => BlacklistConfig::load(path)
            .with_context(|| format!("Blacklist-Datei konnte nicht geladen werden: {}", path.display()))?,
        None => BlacklistConfig::default(),
    };
    Ok(config.compile())
}

fn prompt_for_path() -> Result<Option<PathBuf>> {
    println!("Bitte gib den VOLLEN PFAD zur CSV-Datei ein (z.B. C:\\Users\\david\\Desktop\\Python CSV\\Dateiname.csv):");
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let path = strip_wrapping_quotes(&line);
    if path.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(path)))
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let blacklists = match load_blacklists(cli.blacklist.as_ref()) {
        Ok(lists) => lists,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    let pipeline = TranscodePipeline::with_blacklists(&blacklists);

    let files = if cli.files.is_empty() {
        match prompt_for_path() {
            Ok(Some(path)) => vec![path],
            Ok(None) => {
                eprintln!("Keine Datei angegeben.");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("❌ {:#}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        cli.files
    };

    let mut failures = 0usize;
    for file in &files {
        // arguments may also arrive quoted
        let target = PathBuf::from(strip_wrapping_quotes(&file.to_string_lossy()));
        match pipeline.process_file(&target) {
            Ok(outcome) => {
                println!("\n✅ Fertig! Die Datei wurde erfolgreich erstellt:");
                println!("{}", outcome.output_path.display());
                if !outcome.missing_images.is_empty() {
                    println!(
                        "⚠️  {} Zeilen ohne Bildverweis: {}",
                        outcome.missing_images.len(),
                        outcome.missing_images.join(", ")
                    );
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("❌ Fehler bei {}: {}", target.display(), e);
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
