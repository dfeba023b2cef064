use crate::game::currency::{format_currency, group_digits, signed_grouped};
use crate::game::era::EraRecord;
use crate::game::error::GameError;
use crate::game::score::HistoryEntry;
use crate::game::summary::FinalSummary;
use crate::game::{AnswerOutcome, Game, Phase};

const RULE: &str = "------------------------------------------------------------";

/// Renders the screen for the phase the game has just entered.
pub fn render(game: &Game) -> Result<String, GameError> {
    let (number, total) = game.progress();
    let progress = format!("Era {} of {}", number, total);
    let eras = game.eras();

    let screen = match game.phase() {
        Phase::EraIntro { era } => era_intro(&progress, &eras[era], game.score().wealth()),
        Phase::Quiz { era } => quiz(&eras[era]),
        Phase::PivotSelection { era, answer } => {
            format!("{}\n\n{}", feedback(&eras[era], answer), pivots(&eras[era]))
        }
        Phase::EraSummary { .. } => match game.score().history().last() {
            Some(entry) => era_summary(entry, game.current_era().map(|e| e.fact.as_str())),
            None => String::new(),
        },
        Phase::FinalSummary => final_summary(&game.finalize()?),
    };
    Ok(screen)
}

fn era_intro(progress: &str, era: &EraRecord, wealth: i64) -> String {
    format!(
        "{RULE}\n{progress}  |  Wealth: {}\n{RULE}\n{} - {}\n\n{}\n\nDisruption: {}\n\n[Enter] Take the quiz",
        format_currency(wealth),
        era.year,
        era.era_name,
        era.description,
        era.disruption,
    )
}

fn quiz(era: &EraRecord) -> String {
    format!("{}\n\n{}", era.question, numbered(&era.answers))
}

fn feedback(era: &EraRecord, answer: AnswerOutcome) -> String {
    let verdict = if answer.correct {
        "Correct!".to_string()
    } else {
        format!(
            "Not quite. The answer was: {}",
            era.answers[answer.correct_index]
        )
    };
    format!("{}\n{}", verdict, era.fact)
}

fn pivots(era: &EraRecord) -> String {
    let cards = era
        .pivots
        .iter()
        .enumerate()
        .map(|(i, pivot)| {
            format!(
                "{}. {}\n   Wealth Gain: {}  Jobs Created: +{}  Jobs Lost: -{}",
                i + 1,
                pivot.name,
                signed_currency(pivot.wealth),
                group_digits(pivot.jobs_created),
                group_digits(pivot.jobs_lost),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Choose your pivot:\n{}", cards)
}

fn era_summary(entry: &HistoryEntry, fact: Option<&str>) -> String {
    let mut screen = format!(
        "You chose: {}\nWealth: {}  Jobs Created: +{}  Jobs Lost: -{}\nTotal Wealth: {}",
        entry.pivot,
        signed_currency(entry.wealth_gained),
        group_digits(entry.jobs_created),
        group_digits(entry.jobs_lost),
        format_currency(entry.total_wealth),
    );
    if let Some(fact) = fact {
        screen.push_str("\n\nDid you know? ");
        screen.push_str(fact);
    }
    screen.push_str("\n\n[Enter] Continue");
    screen
}

fn final_summary(summary: &FinalSummary) -> String {
    format!(
        "{RULE}\nFinal Wealth: {}\nJobs Created: {}\nJobs Lost: {}\nCorrect Answers: {}/{}\n{RULE}\n{}\n{RULE}\n{}\n{RULE}\n[r] Play again  [q] Quit",
        format_currency(summary.final_wealth),
        group_digits(summary.total_jobs_created),
        group_digits(summary.total_jobs_lost),
        summary.correct_answers,
        summary.era_count,
        summary.timeline().join("\n"),
        summary.share_text(),
    )
}

fn signed_currency(amount: i64) -> String {
    if amount >= 0 {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::game::era::tests::{era, pivot};
    use crate::game::era::Eras;

    fn game() -> Game {
        let eras = Eras::new(vec![era(
            "Steam",
            1780,
            0,
            vec![pivot("Mill", 5000, 1200, 50), pivot("Canal", -300, 0, 80)],
        )])
        .unwrap();
        Game::new(Arc::new(eras))
    }

    #[test]
    fn renders_each_phase() {
        let mut game = game();
        let intro = render(&game).unwrap();
        assert!(intro.contains("Era 1 of 1  |  Wealth: $1.0K"));
        assert!(intro.contains("1780 - Steam"));

        game.advance().unwrap();
        assert_eq!(
            render(&game).unwrap(),
            "What happened in 1780?\n\n1. A\n2. B\n3. C"
        );

        game.submit_answer(2).unwrap();
        let pivot_screen = render(&game).unwrap();
        assert!(pivot_screen.starts_with("Not quite. The answer was: A\nSteam fact"));
        assert!(pivot_screen.contains("1. Mill\n   Wealth Gain: +$5.0K  Jobs Created: +1,200  Jobs Lost: -50"));
        assert!(pivot_screen.contains("2. Canal\n   Wealth Gain: $-300"));

        game.select_pivot(0).unwrap();
        let summary = render(&game).unwrap();
        assert!(summary.starts_with("You chose: Mill\nWealth: +$5.0K"));
        assert!(summary.contains("Total Wealth: $6.0K"));
        assert!(summary.contains("Did you know? Steam fact"));

        game.continue_game().unwrap();
        let end = render(&game).unwrap();
        assert!(end.contains("Correct Answers: 0/1"));
        assert!(end.contains("Quiz Accuracy: 0%"));
        assert!(end.contains("Grade: Struggling"));
        assert!(end.contains("Net Jobs Impact: +1,150"));
    }

    #[test]
    fn renders_full_width_job_counts() {
        let eras = Eras::new(vec![era(
            "Steam",
            1780,
            0,
            vec![pivot("Mill", 1, i64::MAX as u64, 0)],
        )])
        .unwrap();
        let mut game = Game::new(Arc::new(eras));
        game.advance().unwrap();
        game.submit_answer(0).unwrap();
        assert!(render(&game)
            .unwrap()
            .contains("Jobs Created: +9,223,372,036,854,775,807"));
    }

    #[test]
    fn correct_answer_feedback() {
        let mut game = game();
        game.advance().unwrap();
        game.submit_answer(0).unwrap();
        assert!(render(&game).unwrap().starts_with("Correct!\nSteam fact"));
    }
}
