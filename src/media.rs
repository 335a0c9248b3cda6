//! Lookup of pronunciation recordings that sit beside a deck.
//!
//! A deck `data/words.csv` keeps its recordings in `data/words/`, one WAV per
//! card side, named after the sanitized text (`el muchacho` ->
//! `el_muchacho.wav`). Only existence is checked here.

use std::path::{Path, PathBuf};

pub const AUDIO_EXTENSION: &str = "wav";

pub fn sanitize_filename(text: &str) -> String {
    text.replace([' ', '/'], "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioLookup {
    dir: PathBuf,
}

impl AudioLookup {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Recordings for `deck_path` live in a directory named after its stem.
    pub fn for_deck(deck_path: &Path) -> Self {
        Self::new(deck_path.with_extension(""))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn resolve(&self, text: &str) -> Option<PathBuf> {
        let name = sanitize_filename(text.trim());
        if name.is_empty() {
            return None;
        }
        let path = self.dir.join(format!("{}.{}", name, AUDIO_EXTENSION));
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("el muchacho"), "el_muchacho");
        assert_eq!(sanitize_filename("and/or"), "and_or");
        assert_eq!(sanitize_filename("¿qué tal?"), "qué_tal");
        assert_eq!(sanitize_filename("Mr. Smith-Jones"), "Mr._Smith-Jones");
    }

    #[test]
    fn test_for_deck_uses_stem_directory() {
        let lookup = AudioLookup::for_deck(Path::new("flashcards/words.csv"));
        assert_eq!(lookup.dir(), Path::new("flashcards/words"));
    }

    #[test]
    fn test_resolve_existing_recording() {
        let root = tempfile::tempdir().unwrap();
        let deck = root.path().join("words.csv");
        fs::write(&deck, "el muchacho,the boy\n").unwrap();
        fs::create_dir(root.path().join("words")).unwrap();
        fs::write(root.path().join("words/el_muchacho.wav"), b"RIFF").unwrap();

        let lookup = AudioLookup::for_deck(&deck);
        assert_eq!(
            lookup.resolve("el muchacho"),
            Some(root.path().join("words/el_muchacho.wav"))
        );
        assert_eq!(lookup.resolve("the boy"), None);
        assert_eq!(lookup.resolve("   "), None);
    }
}
