use super::era::{EraRecord, PivotOption};

pub const STARTING_WEALTH: i64 = 1000;

/// One completed era as the player lived it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub era: String,
    pub year: i32,
    pub pivot: String,
    pub wealth_gained: i64,
    pub jobs_created: u64,
    pub jobs_lost: u64,
    /// Wealth right after this pivot was applied.
    pub total_wealth: i64,
}

impl HistoryEntry {
    pub fn net_jobs(&self) -> i64 {
        self.jobs_created as i64 - self.jobs_lost as i64
    }
}

/// Running totals of a game. Only [`ScoreBoard::record_answer`] and
/// [`ScoreBoard::apply_pivot`] change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    wealth: i64,
    total_jobs_created: u64,
    total_jobs_lost: u64,
    correct_answers: usize,
    history: Vec<HistoryEntry>,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self {
            wealth: STARTING_WEALTH,
            total_jobs_created: 0,
            total_jobs_lost: 0,
            correct_answers: 0,
            history: Vec::new(),
        }
    }
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wealth(&self) -> i64 {
        self.wealth
    }

    pub fn total_jobs_created(&self) -> u64 {
        self.total_jobs_created
    }

    pub fn total_jobs_lost(&self) -> u64 {
        self.total_jobs_lost
    }

    /// Jobs created minus jobs lost, can go below zero.
    pub fn net_jobs(&self) -> i64 {
        self.total_jobs_created as i64 - self.total_jobs_lost as i64
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub(crate) fn record_answer(&mut self, correct: bool) {
        if correct {
            self.correct_answers += 1;
        }
    }

    // Eras::new bounds every total to i64, so none of these can overflow
    pub(crate) fn apply_pivot(&mut self, era: &EraRecord, pivot: &PivotOption) -> &HistoryEntry {
        self.wealth += pivot.wealth;
        self.total_jobs_created += pivot.jobs_created;
        self.total_jobs_lost += pivot.jobs_lost;

        let entry = HistoryEntry {
            era: era.era_name.clone(),
            year: era.year,
            pivot: pivot.name.clone(),
            wealth_gained: pivot.wealth,
            jobs_created: pivot.jobs_created,
            jobs_lost: pivot.jobs_lost,
            total_wealth: self.wealth,
        };
        self.history.push(entry);
        // It is safe to expect here because we've just pushed the entry
        self.history.last().expect("history entry was just pushed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::era::tests::{era, pivot};

    #[test]
    fn starts_with_seed_money() {
        let score = ScoreBoard::new();
        assert_eq!(score.wealth(), 1000);
        assert_eq!(score.net_jobs(), 0);
        assert_eq!(score.correct_answers(), 0);
        assert!(score.history().is_empty());
    }

    #[test]
    fn pivots_add_exactly() {
        let steam = era("Steam", 1780, 0, vec![pivot("Mill", 5000, 100, 50)]);
        let rail = era("Rail", 1830, 0, vec![pivot("Bust", -7500, 0, 300)]);
        let mut score = ScoreBoard::new();

        let entry = score.apply_pivot(&steam, &steam.pivots[0]).clone();
        assert_eq!(entry.total_wealth, 6000);
        assert_eq!(entry.era, "Steam");
        assert_eq!(entry.year, 1780);
        assert_eq!(entry.net_jobs(), 50);
        assert_eq!(score.history().last(), Some(&entry));

        let entry = score.apply_pivot(&rail, &rail.pivots[0]).clone();
        assert_eq!(entry.wealth_gained, -7500);
        assert_eq!(entry.total_wealth, -1500);
        assert_eq!(score.wealth(), -1500);
        assert_eq!(score.total_jobs_created(), 100);
        assert_eq!(score.total_jobs_lost(), 350);
        assert_eq!(score.net_jobs(), -250);

        let eras: Vec<_> = score.history().iter().map(|h| h.era.as_str()).collect();
        assert_eq!(eras, ["Steam", "Rail"]);
    }

    #[test]
    fn answers_do_not_touch_wealth() {
        let mut score = ScoreBoard::new();
        score.record_answer(true);
        score.record_answer(false);
        score.record_answer(true);
        assert_eq!(score.correct_answers(), 2);
        assert_eq!(score.wealth(), STARTING_WEALTH);
        assert!(score.history().is_empty());
    }
}
