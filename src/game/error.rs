//! Error types for the game engine and the dataset loader.

use super::Phase;

/// A contract violation: the caller asked the session for something the
/// current phase or the current era cannot give.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The action is not accepted in the phase the session is in.
    #[error("cannot {action} while in phase {phase:?}")]
    WrongPhase {
        /// The rejected action.
        action: &'static str,
        /// The phase the session was in.
        phase: Phase,
    },

    /// The answer index does not name one of the era's answers.
    #[error("answer {index} is out of range for era {era} ({len} answers)")]
    AnswerOutOfRange { era: usize, index: usize, len: usize },

    /// The pivot index does not name one of the era's pivots.
    #[error("pivot {index} is out of range for era {era} ({len} pivots)")]
    PivotOutOfRange { era: usize, index: usize, len: usize },
}

/// Problems found while loading the era dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset contains no eras")]
    Empty,

    #[error("era {era} ({name}) has {len} answers, at least 2 are required")]
    TooFewAnswers { era: usize, name: String, len: usize },

    #[error("era {era} ({name}) marks answer {correct} as correct but only has {len} answers")]
    CorrectOutOfRange {
        era: usize,
        name: String,
        correct: usize,
        len: usize,
    },

    #[error("era {era} ({name}) has no pivots")]
    NoPivots { era: usize, name: String },

    /// Picking the largest pivots up to this era could push a running total
    /// past what the score can hold.
    #[error("era {era} ({name}) lets the {total} total exceed {max}")]
    TotalTooLarge {
        era: usize,
        name: String,
        total: &'static str,
        max: i64,
    },
}
