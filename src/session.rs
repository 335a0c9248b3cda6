use crate::catalog::DeckEntry;
use crate::csv::load_csv;
use crate::engine::SessionEngine;
use crate::error::{Result, SessionError};
use crate::logger;
use crate::media::AudioLookup;
use crate::models::{AppState, Card, SessionPhase, SessionStatus};
use crate::preferences::Preferences;
use crossterm::event::{KeyCode, KeyEvent};
use std::io;
use std::path::PathBuf;

/// What the terminal front end keeps around an engine: the deck it came
/// from and whether the current card has been flipped.
#[derive(Debug)]
pub struct StudySession {
    pub engine: SessionEngine,
    pub deck_name: String,
    pub flipped: bool,
    pub notice: Option<String>,
    pub audio: AudioLookup,
}

impl StudySession {
    pub fn new(deck_name: String, cards: Vec<Card>, audio: AudioLookup) -> Result<Self> {
        let engine = SessionEngine::load(cards)?;
        Ok(Self {
            engine,
            deck_name,
            flipped: false,
            notice: None,
            audio,
        })
    }

    pub fn open(deck: &DeckEntry, prefs: &Preferences) -> io::Result<Self> {
        let cards = load_csv(&deck.path)?;
        let count = cards.len();
        let mut session = Self::new(deck.name.clone(), cards, AudioLookup::for_deck(&deck.path))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if prefs.shuffle_on_start {
            session.engine.shuffle_deck();
        }
        logger::log(&format!("Loaded deck '{}' with {} cards", deck.name, count));
        Ok(session)
    }

    pub fn status(&self) -> SessionStatus {
        self.engine.status()
    }

    /// The side shown before flipping.
    pub fn prompt_side(&self, prefs: &Preferences) -> Option<&str> {
        let card = self.engine.current_card()?;
        Some(if prefs.back_first { card.back.as_str() } else { card.front.as_str() })
    }

    pub fn answer_side(&self, prefs: &Preferences) -> Option<&str> {
        let card = self.engine.current_card()?;
        Some(if prefs.back_first { card.front.as_str() } else { card.back.as_str() })
    }

    /// Recording for whichever side is currently facing up.
    pub fn visible_audio(&self, prefs: &Preferences) -> Option<PathBuf> {
        let text = if self.flipped {
            self.answer_side(prefs)?
        } else {
            self.prompt_side(prefs)?
        };
        self.audio.resolve(text)
    }

    fn apply(&mut self, operation: &str, result: Result<SessionStatus>, app_state: &mut AppState) {
        match result {
            Ok(status) => {
                self.flipped = false;
                self.notice = None;
                if status.is_complete() {
                    self.log_completion(status.phase);
                    *app_state = AppState::Summary;
                } else {
                    *app_state = AppState::Card;
                }
            }
            Err(SessionError::NothingToUndo) => {
                self.notice = Some("Nothing to undo".to_string());
            }
            Err(e) => {
                logger::log(&format!("Rejected {} on '{}': {}", operation, self.deck_name, e));
                self.notice = Some(e.to_string());
            }
        }
    }

    fn log_completion(&self, phase: SessionPhase) {
        match phase {
            SessionPhase::StudyComplete => {
                logger::log(&format!("Finished studying '{}'", self.deck_name));
            }
            SessionPhase::TestComplete => {
                if let Ok(score) = self.engine.score() {
                    logger::log(&format!(
                        "Finished test on '{}': {}/{} ({}%)",
                        self.deck_name, score.correct, score.total, score.percent
                    ));
                }
            }
            _ => {}
        }
    }
}

pub fn handle_session_input(session: &mut StudySession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => {
            *app_state = AppState::Menu;
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if session.engine.current_card().is_some() {
                session.flipped = !session.flipped;
            }
        }
        KeyCode::Char('y') | KeyCode::Right => {
            let result = session.engine.mark_recalled();
            session.apply("mark_recalled", result, app_state);
        }
        KeyCode::Char('n') | KeyCode::Left => {
            let result = session.engine.mark_not_recalled();
            session.apply("mark_not_recalled", result, app_state);
        }
        KeyCode::Char('s') | KeyCode::Tab => {
            let result = session.engine.advance();
            session.apply("advance", result, app_state);
        }
        KeyCode::Char('u') | KeyCode::Backspace => {
            let result = session.engine.undo();
            session.apply("undo", result, app_state);
        }
        KeyCode::Char('x') => {
            let result = Ok(session.engine.shuffle_deck());
            session.apply("shuffle_deck", result, app_state);
        }
        KeyCode::Char('r') => {
            logger::log(&format!("Restarting '{}'", session.deck_name));
            let result = Ok(session.engine.reset_deck());
            session.apply("reset_deck", result, app_state);
        }
        KeyCode::Char('t') => {
            logger::log(&format!("Starting test on '{}'", session.deck_name));
            let result = Ok(session.engine.start_test());
            session.apply("start_test", result, app_state);
        }
        _ => {}
    }
}

pub fn handle_summary_input(session: &mut StudySession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => {
            *app_state = AppState::Menu;
        }
        KeyCode::Char('f') => {
            logger::log(&format!("Reviewing failed cards of '{}'", session.deck_name));
            let result = session.engine.review_failed();
            session.apply("review_failed", result, app_state);
        }
        KeyCode::Char('t') => {
            logger::log(&format!("Retaking test on '{}'", session.deck_name));
            let result = Ok(session.engine.start_test());
            session.apply("start_test", result, app_state);
        }
        KeyCode::Char('r') => {
            let result = Ok(session.engine.reset_deck());
            session.apply("reset_deck", result, app_state);
        }
        KeyCode::Char('u') | KeyCode::Backspace => {
            let result = session.engine.undo();
            session.apply("undo", result, app_state);
        }
        _ => {}
    }
}
