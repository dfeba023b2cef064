pub mod currency;
pub mod era;
pub mod error;
pub mod score;
pub mod summary;

use std::sync::Arc;

use era::{EraRecord, Eras};
use error::GameError;
use score::{HistoryEntry, ScoreBoard};
use summary::FinalSummary;

/// Where the session is in the timeline. Every era walks through
/// `EraIntro -> Quiz -> PivotSelection -> EraSummary` before the next one
/// starts; `FinalSummary` follows the last era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    EraIntro { era: usize },
    Quiz { era: usize },
    PivotSelection { era: usize, answer: AnswerOutcome },
    EraSummary { era: usize, answer: AnswerOutcome },
    FinalSummary,
}

impl Phase {
    /// True once the current era's question has been answered.
    pub fn quiz_answered(&self) -> bool {
        matches!(
            self,
            Phase::PivotSelection { .. } | Phase::EraSummary { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected: usize,
    pub correct_index: usize,
    pub correct: bool,
}

/// One play-through over a shared era dataset.
#[derive(Debug, Clone)]
pub struct Game {
    eras: Arc<Eras>,
    phase: Phase,
    score: ScoreBoard,
}

impl Game {
    pub fn new(eras: Arc<Eras>) -> Self {
        log::debug!("New game over {} eras", eras.len());
        Self {
            eras,
            phase: Phase::EraIntro { era: 0 },
            score: ScoreBoard::new(),
        }
    }

    /// Throws the current state away and starts over from the first era.
    pub fn restart(&mut self) {
        *self = Self::new(Arc::clone(&self.eras));
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn eras(&self) -> &Eras {
        &self.eras
    }

    /// Index of the era in play; equals the number of eras once the game is over.
    pub fn current_era_index(&self) -> usize {
        match self.phase {
            Phase::EraIntro { era }
            | Phase::Quiz { era }
            | Phase::PivotSelection { era, .. }
            | Phase::EraSummary { era, .. } => era,
            Phase::FinalSummary => self.eras.len(),
        }
    }

    pub fn current_era(&self) -> Option<&EraRecord> {
        self.eras.get(self.current_era_index())
    }

    /// `(era number, era count)` for a "Era 3 of 9" style progress line.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.eras.len();
        ((self.current_era_index() + 1).min(total), total)
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::FinalSummary
    }

    /// Leaves the era introduction for its quiz question.
    pub fn advance(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::EraIntro { era } => {
                self.enter(Phase::Quiz { era });
                Ok(())
            }
            phase => Err(GameError::WrongPhase {
                action: "advance",
                phase,
            }),
        }
    }

    /// Checks the selected answer of the current era.
    ///
    /// Returns `Ok(None)` without touching anything when the question was
    /// already answered.
    pub fn submit_answer(&mut self, selected: usize) -> Result<Option<AnswerOutcome>, GameError> {
        if self.phase.quiz_answered() {
            log::debug!("Ignoring answer {}, already answered", selected);
            return Ok(None);
        }
        let era = match self.phase {
            Phase::Quiz { era } => era,
            phase => {
                return Err(GameError::WrongPhase {
                    action: "submit an answer",
                    phase,
                })
            }
        };

        let record = &self.eras[era];
        if selected >= record.answers.len() {
            return Err(GameError::AnswerOutOfRange {
                era,
                index: selected,
                len: record.answers.len(),
            });
        }

        let answer = AnswerOutcome {
            selected,
            correct_index: record.correct,
            correct: selected == record.correct,
        };
        self.score.record_answer(answer.correct);
        self.enter(Phase::PivotSelection { era, answer });
        Ok(Some(answer))
    }

    /// Applies the chosen pivot of the current era to the score.
    pub fn select_pivot(&mut self, pivot: usize) -> Result<&HistoryEntry, GameError> {
        let (era, answer) = match self.phase {
            Phase::PivotSelection { era, answer } => (era, answer),
            phase => {
                return Err(GameError::WrongPhase {
                    action: "select a pivot",
                    phase,
                })
            }
        };

        let record = &self.eras[era];
        let option = record.pivots.get(pivot).ok_or(GameError::PivotOutOfRange {
            era,
            index: pivot,
            len: record.pivots.len(),
        })?;

        self.phase = Phase::EraSummary { era, answer };
        log::debug!("Entering {:?}", self.phase);
        Ok(self.score.apply_pivot(record, option))
    }

    /// Moves past the era summary, either to the next era or to the end.
    pub fn continue_game(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::EraSummary { era, .. } if era + 1 < self.eras.len() => {
                self.enter(Phase::EraIntro { era: era + 1 });
                Ok(())
            }
            Phase::EraSummary { .. } => {
                self.enter(Phase::FinalSummary);
                Ok(())
            }
            phase => Err(GameError::WrongPhase {
                action: "continue",
                phase,
            }),
        }
    }

    pub fn finalize(&self) -> Result<FinalSummary, GameError> {
        if !self.is_over() {
            return Err(GameError::WrongPhase {
                action: "finalize the game",
                phase: self.phase,
            });
        }
        Ok(FinalSummary::new(&self.score, self.eras.len()))
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("Entering {:?}", phase);
        self.phase = phase;
    }
}
