use std::fmt;

use super::currency::{format_currency, signed_grouped};
use super::score::{HistoryEntry, ScoreBoard};

/// Final label earned from the wealth a player ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Grade {
    #[serde(rename = "Master Entrepreneur")]
    MasterEntrepreneur,
    #[serde(rename = "Pivot Expert")]
    PivotExpert,
    #[serde(rename = "Quick Adapter")]
    QuickAdapter,
    Survivor,
    Struggling,
}

// Highest first, the first threshold the wealth reaches wins
const GRADE_THRESHOLDS: [(i64, Grade); 4] = [
    (500_000_000, Grade::MasterEntrepreneur),
    (100_000_000, Grade::PivotExpert),
    (10_000_000, Grade::QuickAdapter),
    (1_000_000, Grade::Survivor),
];

impl Grade {
    pub fn from_wealth(wealth: i64) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| wealth >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::Struggling)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::MasterEntrepreneur => "Master Entrepreneur",
            Grade::PivotExpert => "Pivot Expert",
            Grade::QuickAdapter => "Quick Adapter",
            Grade::Survivor => "Survivor",
            Grade::Struggling => "Struggling",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `round(100 * correct / total)` with halves going up, in integers.
pub fn accuracy_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u64;
    let total = total as u64;
    ((200 * correct + total) / (2 * total)) as u32
}

/// Everything the end screen shows, derived once the last era is done.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalSummary {
    pub final_wealth: i64,
    pub total_jobs_created: u64,
    pub total_jobs_lost: u64,
    pub net_jobs: i64,
    pub correct_answers: usize,
    pub era_count: usize,
    pub accuracy_percent: u32,
    pub grade: Grade,
    pub history: Vec<HistoryEntry>,
}

impl FinalSummary {
    pub fn new(score: &ScoreBoard, era_count: usize) -> Self {
        Self {
            final_wealth: score.wealth(),
            total_jobs_created: score.total_jobs_created(),
            total_jobs_lost: score.total_jobs_lost(),
            net_jobs: score.net_jobs(),
            correct_answers: score.correct_answers(),
            era_count,
            accuracy_percent: accuracy_percent(score.correct_answers(), era_count),
            grade: Grade::from_wealth(score.wealth()),
            history: score.history().to_vec(),
        }
    }

    pub fn share_text(&self) -> String {
        format!(
            "I survived 250 years of disruption in Pivot or Die!\n\n\
             Final Wealth: {}\n\
             Quiz Accuracy: {}%\n\
             Grade: {}\n\
             Net Jobs Impact: {}\n\n\
             Can you adapt faster than technology?",
            format_currency(self.final_wealth),
            self.accuracy_percent,
            self.grade,
            signed_grouped(self.net_jobs),
        )
    }

    /// One line per completed era, oldest first.
    pub fn timeline(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|entry| {
                format!(
                    "{:>5}  {} -> {}  (Wealth: {}, Net Jobs: {})",
                    entry.year,
                    entry.era,
                    entry.pivot,
                    format_currency(entry.total_wealth),
                    signed_grouped(entry.net_jobs()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::era::tests::{era, pivot};

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(Grade::from_wealth(500_000_000), Grade::MasterEntrepreneur);
        assert_eq!(Grade::from_wealth(499_999_999), Grade::PivotExpert);
        assert_eq!(Grade::from_wealth(100_000_000), Grade::PivotExpert);
        assert_eq!(Grade::from_wealth(10_000_000), Grade::QuickAdapter);
        assert_eq!(Grade::from_wealth(9_999_999), Grade::Survivor);
        assert_eq!(Grade::from_wealth(1_000_000), Grade::Survivor);
        assert_eq!(Grade::from_wealth(999_999), Grade::Struggling);
        assert_eq!(Grade::from_wealth(-5_000), Grade::Struggling);
        assert_eq!(Grade::PivotExpert.to_string(), "Pivot Expert");
    }

    #[test]
    fn accuracy_rounds_half_up() {
        assert_eq!(accuracy_percent(1, 2), 50);
        assert_eq!(accuracy_percent(1, 3), 33);
        assert_eq!(accuracy_percent(2, 3), 67);
        assert_eq!(accuracy_percent(1, 8), 13);
        assert_eq!(accuracy_percent(0, 9), 0);
        assert_eq!(accuracy_percent(9, 9), 100);
    }

    #[test]
    fn renders_share_text_and_timeline() {
        let steam = era("Steam", 1780, 0, vec![pivot("Textile mill", 2_500_000, 300, 1_500)]);
        let mut score = ScoreBoard::new();
        score.record_answer(true);
        score.apply_pivot(&steam, &steam.pivots[0]);

        let summary = FinalSummary::new(&score, 2);
        assert_eq!(summary.net_jobs, -1_200);
        assert_eq!(summary.grade, Grade::Survivor);
        assert_eq!(
            summary.share_text(),
            "I survived 250 years of disruption in Pivot or Die!\n\n\
             Final Wealth: $2.50M\n\
             Quiz Accuracy: 50%\n\
             Grade: Survivor\n\
             Net Jobs Impact: -1,200\n\n\
             Can you adapt faster than technology?"
        );
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["finalWealth"], 2_501_000);
        assert_eq!(json["accuracyPercent"], 50);
        assert_eq!(json["grade"], "Survivor");
        assert_eq!(json["history"][0]["totalWealth"], 2_501_000);
        assert_eq!(json["history"][0]["pivot"], "Textile mill");

        assert_eq!(
            summary.timeline(),
            vec![" 1780  Steam -> Textile mill  (Wealth: $2.50M, Net Jobs: -1,200)".to_string()]
        );
    }
}
