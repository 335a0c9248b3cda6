pub mod catalog;
pub mod cli;
pub mod config;
pub mod csv;
pub mod engine;
pub mod error;
pub mod logger;
pub mod media;
pub mod models;
pub mod preferences;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use catalog::{list_decks, write_manifest, DeckEntry};
pub use cli::Cli;
pub use config::Config;
pub use csv::load_csv;
pub use engine::SessionEngine;
pub use error::{Result, SessionError};
pub use media::AudioLookup;
pub use models::{AppState, Card, Mode, Score, SessionPhase, SessionStatus};
pub use preferences::Preferences;
pub use session::{handle_session_input, handle_summary_input, StudySession};
pub use ui::{draw_card, draw_menu, draw_summary};
