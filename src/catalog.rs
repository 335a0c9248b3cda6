//! Discovery of deck files and the `manifest.json` that lists them.

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckEntry {
    pub name: String,
    pub file: String,
    #[serde(skip)]
    pub path: PathBuf,
}

/// Turn `spanish_countries_and_capitals.csv` into
/// `Spanish Countries And Capitals`.
pub fn format_deck_name(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".csv").unwrap_or(file_name);
    stem.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Every `*.csv` in `dir`, sorted by file name. A missing directory yields an
/// empty list.
pub fn list_decks(dir: &Path) -> Vec<DeckEntry> {
    let mut decks = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == "csv")
                && let Some(file) = path.file_name().map(|f| f.to_string_lossy().to_string())
            {
                decks.push(DeckEntry {
                    name: format_deck_name(&file),
                    file,
                    path,
                });
            }
        }
    }

    decks.sort_by(|a, b| a.file.cmp(&b.file));
    decks
}

/// Rewrite `dir/manifest.json` from the decks currently in `dir`.
///
/// Nothing is written when `dir` holds no decks, so an existing manifest
/// survives an accidental run against the wrong directory.
pub fn write_manifest(dir: &Path) -> io::Result<Vec<DeckEntry>> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", dir.display()),
        ));
    }
    let decks = list_decks(dir);
    if decks.is_empty() {
        return Ok(decks);
    }
    let json = serde_json::to_string_pretty(&decks).map_err(io::Error::other)?;
    let mut file = fs::File::create(dir.join(MANIFEST_FILE))?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(decks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_deck_name() {
        assert_eq!(format_deck_name("vocabulary_level_1.csv"), "Vocabulary Level 1");
        assert_eq!(
            format_deck_name("spanish_speaking_countries_and_capitals.csv"),
            "Spanish Speaking Countries And Capitals"
        );
        assert_eq!(format_deck_name("VERBS__irregular.csv"), "Verbs Irregular");
        assert_eq!(format_deck_name("plain"), "Plain");
    }

    #[test]
    fn test_list_decks_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("verbs.csv"), "a,b\n").unwrap();
        fs::write(dir.path().join("animals_1.csv"), "a,b\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("animals_1")).unwrap();

        let decks = list_decks(dir.path());
        let files: Vec<_> = decks.iter().map(|d| d.file.as_str()).collect();
        assert_eq!(files, vec!["animals_1.csv", "verbs.csv"]);
        assert_eq!(decks[0].name, "Animals 1");
        assert_eq!(decks[0].path, dir.path().join("animals_1.csv"));
    }

    #[test]
    fn test_list_decks_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_decks(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_write_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("food_and_drink.csv"), "a,b\n").unwrap();

        write_manifest(dir.path()).unwrap();
        let written = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(written.ends_with("]\n"));

        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "name": "Food And Drink", "file": "food_and_drink.csv" }])
        );
    }

    #[test]
    fn test_write_manifest_skips_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let decks = write_manifest(dir.path()).unwrap();
        assert!(decks.is_empty());
        assert!(!dir.path().join(MANIFEST_FILE).exists());
    }

    #[test]
    fn test_write_manifest_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_manifest(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
