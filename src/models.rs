use std::fmt;

/// A two-sided study item. Its id is its position in the loaded deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Study,
    Test,
}

/// The four states of a session: mode crossed with whether the deck is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    StudyActive,
    StudyComplete,
    TestActive,
    TestComplete,
}

impl SessionPhase {
    pub fn mode(self) -> Mode {
        match self {
            Self::StudyActive | Self::StudyComplete => Mode::Study,
            Self::TestActive | Self::TestComplete => Mode::Test,
        }
    }

    pub fn is_complete(self) -> bool {
        matches!(self, Self::StudyComplete | Self::TestComplete)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::StudyActive => "studying",
            Self::StudyComplete => "study is complete",
            Self::TestActive => "testing",
            Self::TestComplete => "the test is complete",
        };
        f.write_str(text)
    }
}

/// Observable state handed back after every engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub phase: SessionPhase,
    pub cursor: usize,
    pub remaining: usize,
    pub total: usize,
    pub memorized: usize,
    pub failed: usize,
    pub can_undo: bool,
}

impl SessionStatus {
    pub fn mode(&self) -> Mode {
        self.phase.mode()
    }

    pub fn is_complete(&self) -> bool {
        self.phase.is_complete()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

impl Score {
    pub fn new(total: usize, failed: usize) -> Self {
        let correct = total.saturating_sub(failed);
        let percent = if total == 0 {
            0
        } else {
            (100.0 * correct as f64 / total as f64).round() as u32
        };
        Self {
            correct,
            total,
            percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Card,
    Summary,
}
