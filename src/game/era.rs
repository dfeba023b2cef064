use std::ops::Deref;

use super::error::DatasetError;
use super::score::STARTING_WEALTH;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraRecord {
    pub year: i32,
    pub era_name: String,
    pub description: String,
    pub disruption: String,
    pub question: String,
    pub answers: Vec<String>,
    pub correct: usize,
    // Shown whether or not the player got the question right
    pub fact: String,
    pub pivots: Vec<PivotOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotOption {
    pub name: String,
    pub wealth: i64,
    pub jobs_created: u64,
    pub jobs_lost: u64,
}

/// The validated, non-empty era timeline a game is played over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eras {
    eras: Vec<EraRecord>,
}

impl Eras {
    pub fn new(eras: Vec<EraRecord>) -> Result<Self, DatasetError> {
        if eras.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (i, era) in eras.iter().enumerate() {
            validate_era(i, era)?;
        }
        check_totals(&eras)?;
        log::info!("Loaded {} eras", eras.len());
        Ok(Self { eras })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let eras: Vec<EraRecord> = serde_json::from_slice(bytes)?;
        Self::new(eras)
    }
}

impl Deref for Eras {
    type Target = [EraRecord];

    fn deref(&self) -> &Self::Target {
        &self.eras
    }
}

fn validate_era(index: usize, era: &EraRecord) -> Result<(), DatasetError> {
    let name = || era.era_name.clone();
    if era.answers.len() < 2 {
        return Err(DatasetError::TooFewAnswers {
            era: index,
            name: name(),
            len: era.answers.len(),
        });
    }
    if era.correct >= era.answers.len() {
        return Err(DatasetError::CorrectOutOfRange {
            era: index,
            name: name(),
            correct: era.correct,
            len: era.answers.len(),
        });
    }
    if era.pivots.is_empty() {
        return Err(DatasetError::NoPivots {
            era: index,
            name: name(),
        });
    }
    Ok(())
}

/// Worst case over the whole timeline has to fit in an `i64`: wealth moving
/// by the largest pivot magnitude every era, and jobs summing the largest
/// counts. Every game the score can then play is free of overflow.
fn check_totals(eras: &[EraRecord]) -> Result<(), DatasetError> {
    const MAX: u128 = i64::MAX as u128;

    let mut wealth = STARTING_WEALTH.unsigned_abs() as u128;
    let mut created = 0u128;
    let mut lost = 0u128;
    for (i, era) in eras.iter().enumerate() {
        let largest = |f: fn(&PivotOption) -> u128| era.pivots.iter().map(f).max().unwrap_or(0);
        wealth += largest(|p| p.wealth.unsigned_abs() as u128);
        created += largest(|p| p.jobs_created as u128);
        lost += largest(|p| p.jobs_lost as u128);

        for (total, sum) in [("wealth", wealth), ("jobsCreated", created), ("jobsLost", lost)] {
            if sum > MAX {
                return Err(DatasetError::TotalTooLarge {
                    era: i,
                    name: era.era_name.clone(),
                    total,
                    max: i64::MAX,
                });
            }
        }
    }
    Ok(())
}
