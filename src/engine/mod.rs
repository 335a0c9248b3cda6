//! In-memory session engine: deck ordering, study/test scoring and undo.
//!
//! The engine is purely order based. Cards marked "not recalled" in study
//! mode come back within the next few cards; in test mode they are retired
//! and counted as failures. Every operation either applies fully or returns
//! an error with the session untouched.

use crate::error::{Result, SessionError};
use crate::models::{Card, Mode, Score, SessionPhase, SessionStatus};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

#[cfg(test)]
mod prop_tests;

/// Largest number of cards shown before a missed study card comes back.
pub const MAX_REINSERT_OFFSET: usize = 5;

/// Saved state for a single undo step. The memorized set is cloned on push,
/// never shared with the live set.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    active: Vec<usize>,
    cursor: usize,
    memorized: BTreeSet<usize>,
}

#[derive(Debug)]
pub struct SessionEngine<R: Rng = StdRng> {
    cards: Vec<Card>,
    active: Vec<usize>,
    cursor: usize,
    memorized: BTreeSet<usize>,
    mode: Mode,
    test_failed: Vec<usize>,
    test_complete: bool,
    history: Vec<Snapshot>,
    rng: R,
}

impl SessionEngine<StdRng> {
    /// Start a study session over `cards` in load order.
    pub fn load(cards: Vec<Card>) -> Result<Self> {
        Self::with_rng(cards, StdRng::from_entropy())
    }
}

impl<R: Rng> SessionEngine<R> {
    pub fn with_rng(cards: Vec<Card>, rng: R) -> Result<Self> {
        if cards.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        let active = (0..cards.len()).collect();
        Ok(Self {
            cards,
            active,
            cursor: 0,
            memorized: BTreeSet::new(),
            mode: Mode::Study,
            test_failed: Vec::new(),
            test_complete: false,
            history: Vec::new(),
            rng,
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn active_deck(&self) -> &[usize] {
        &self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn memorized(&self) -> &BTreeSet<usize> {
        &self.memorized
    }

    /// Ids marked "not recalled" during the current test, in the order they
    /// were failed.
    pub fn test_failed(&self) -> &[usize] {
        &self.test_failed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_test_complete(&self) -> bool {
        self.test_complete
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn phase(&self) -> SessionPhase {
        match self.mode {
            Mode::Test if self.test_complete => SessionPhase::TestComplete,
            Mode::Test => SessionPhase::TestActive,
            Mode::Study if self.active.is_empty() => SessionPhase::StudyComplete,
            Mode::Study => SessionPhase::StudyActive,
        }
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase(),
            cursor: self.cursor,
            remaining: self.active.len(),
            total: self.cards.len(),
            memorized: self.memorized.len(),
            failed: self.test_failed.len(),
            can_undo: self.can_undo(),
        }
    }

    /// Id of the card on display, if there is one.
    pub fn current_id(&self) -> Option<usize> {
        if self.phase().is_complete() {
            return None;
        }
        self.active.get(self.cursor).copied()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current_id().map(|id| &self.cards[id])
    }

    /// Uniformly permute the remaining cards. History is dropped because its
    /// snapshots describe the old ordering.
    pub fn shuffle_deck(&mut self) -> SessionStatus {
        self.active.shuffle(&mut self.rng);
        self.cursor = 0;
        self.history.clear();
        self.status()
    }

    /// Full restart in study mode with the original card order.
    pub fn reset_deck(&mut self) -> SessionStatus {
        self.active = (0..self.cards.len()).collect();
        self.cursor = 0;
        self.memorized.clear();
        self.history.clear();
        self.mode = Mode::Study;
        self.test_failed.clear();
        self.test_complete = false;
        self.status()
    }

    /// Begin (or retake) a test over every card in a fresh random order.
    pub fn start_test(&mut self) -> SessionStatus {
        let mut active: Vec<usize> = (0..self.cards.len()).collect();
        active.shuffle(&mut self.rng);
        self.active = active;
        self.cursor = 0;
        self.memorized.clear();
        self.history.clear();
        self.mode = Mode::Test;
        self.test_failed.clear();
        self.test_complete = false;
        self.status()
    }

    /// Retire the current card for the rest of the session.
    pub fn mark_recalled(&mut self) -> Result<SessionStatus> {
        let id = self.require_current("mark_recalled")?;
        self.push_history();
        self.memorized.insert(id);
        self.active.remove(self.cursor);
        self.settle_after_removal();
        Ok(self.status())
    }

    pub fn mark_not_recalled(&mut self) -> Result<SessionStatus> {
        let id = self.require_current("mark_not_recalled")?;
        self.push_history();
        self.active.remove(self.cursor);
        match self.mode {
            Mode::Study => self.reinsert_nearby(id),
            Mode::Test => {
                if !self.test_failed.contains(&id) {
                    self.test_failed.push(id);
                }
                self.settle_after_removal();
            }
        }
        Ok(self.status())
    }

    /// Skip to the next card without scoring, wrapping at the end.
    pub fn advance(&mut self) -> Result<SessionStatus> {
        self.require_current("advance")?;
        self.push_history();
        self.cursor = (self.cursor + 1) % self.active.len();
        Ok(self.status())
    }

    /// Step back one operation.
    ///
    /// Only the deck order, cursor and memorized set are restored. The mode,
    /// the test failures and the completion flag are not part of a snapshot,
    /// so undoing a failed test answer puts the card back in the deck while it
    /// stays recorded as failed.
    pub fn undo(&mut self) -> Result<SessionStatus> {
        let snapshot = self.history.pop().ok_or(SessionError::NothingToUndo)?;
        self.active = snapshot.active;
        self.cursor = snapshot.cursor;
        self.memorized = snapshot.memorized;
        Ok(self.status())
    }

    /// Study the cards failed in the finished test, in the order they failed.
    ///
    /// A failed answer that was undone and then recalled leaves the card both
    /// failed and memorized. Reviewed cards are taken out of `memorized` so a
    /// card is never retired and in the deck at once.
    pub fn review_failed(&mut self) -> Result<SessionStatus> {
        if !self.test_complete || self.test_failed.is_empty() {
            return Err(self.invalid("review_failed"));
        }
        self.active = std::mem::take(&mut self.test_failed);
        for id in &self.active {
            self.memorized.remove(id);
        }
        self.cursor = 0;
        self.mode = Mode::Study;
        self.test_complete = false;
        self.history.clear();
        Ok(self.status())
    }

    pub fn score(&self) -> Result<Score> {
        if !self.test_complete {
            return Err(self.invalid("score"));
        }
        Ok(Score::new(self.cards.len(), self.test_failed.len()))
    }

    fn require_current(&self, operation: &'static str) -> Result<usize> {
        self.current_id().ok_or_else(|| self.invalid(operation))
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidOperationForState {
            operation,
            phase: self.phase(),
        }
    }

    fn push_history(&mut self) {
        self.history.push(Snapshot {
            active: self.active.clone(),
            cursor: self.cursor,
            memorized: self.memorized.clone(),
        });
    }

    fn settle_after_removal(&mut self) {
        if self.active.is_empty() {
            if self.mode == Mode::Test {
                self.test_complete = true;
            }
        } else if self.cursor >= self.active.len() {
            self.cursor = self.active.len() - 1;
        }
    }

    /// Put a missed study card back 1 to 5 places after the cursor. The card
    /// now under the cursor is shown next, so the missed one never repeats
    /// immediately unless it is the only card left. Missing the last card
    /// wraps the cursor to the start first.
    fn reinsert_nearby(&mut self, id: usize) {
        if self.cursor >= self.active.len() {
            self.cursor = 0;
        }
        let after = self.active.len() - self.cursor;
        if after == 0 {
            self.active.push(id);
            return;
        }
        let offset = self.rng.gen_range(1..=after.min(MAX_REINSERT_OFFSET));
        self.active.insert(self.cursor + offset, id);
    }
}
