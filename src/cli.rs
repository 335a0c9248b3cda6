//! Command-line flags for the binary.

use crate::catalog::{write_manifest, MANIFEST_FILE};
use crate::config::Config;
use crate::logger;
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Rewrite manifest.json in the decks directory and exit.
    #[arg(long)]
    pub update_manifest: bool,
    /// Directory holding the deck CSV files.
    #[arg(long, value_name = "DIR")]
    pub decks_dir: Option<PathBuf>,
}

impl Cli {
    /// Flags given on the command line win over the environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.decks_dir {
            config.decks_dir = dir.clone();
        }
    }
}

/// Regenerate the manifest for `dir` and describe what was written.
pub fn update_manifest(dir: &Path) -> io::Result<String> {
    let decks = write_manifest(dir)?;
    if decks.is_empty() {
        logger::log(&format!("No CSV files in {}, manifest left alone", dir.display()));
        return Ok(format!("No CSV files found in {}", dir.display()));
    }

    let mut report = format!(
        "Wrote {} with {} decks:",
        dir.join(MANIFEST_FILE).display(),
        decks.len()
    );
    for deck in &decks {
        report.push_str(&format!("\n  {} ({})", deck.name, deck.file));
    }
    logger::log(&format!(
        "Updated manifest in {} with {} decks",
        dir.display(),
        decks.len()
    ));
    Ok(report)
}
