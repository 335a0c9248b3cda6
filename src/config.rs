use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "FLIP_DECK_DATA_DIR";
pub const DECKS_DIR_ENV: &str = "FLIP_DECK_DECKS_DIR";

const APP_DIR: &str = "flip-deck";
const DEFAULT_DECKS_DIR: &str = "flashcards";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub decks_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| default_data_dir(&lookup));
        let decks_dir = lookup(DECKS_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DECKS_DIR));
        Self {
            data_dir,
            decks_dir,
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("flip-deck.log")
    }
}

fn default_data_dir(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = lookup("USERPROFILE").unwrap_or_else(|| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share").join(APP_DIR)
    } else {
        let home = lookup("HOME").unwrap_or_else(|| "/home/user".to_string());
        PathBuf::from(home).join(".local/share").join(APP_DIR)
    }
}
