mod game;
mod screens;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use game::{era::Eras, error::DatasetError, summary::FinalSummary, Game, Phase};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "pivot-or-die")]
#[command(about = "Survive 250 years of technological disruption, one pivot at a time")]
struct Args {
    /// Era dataset (JSON)
    #[arg(long, env = "PIVOT_ERAS_PATH", default_value = "data/eras.json")]
    eras: PathBuf,

    /// Write the final summary as JSON here when a game ends
    #[arg(long, env = "PIVOT_EXPORT_PATH")]
    export: Option<PathBuf>,
}

/// Where screens go. Stdout only; logs stay on stderr.
struct Console {
    out: Stdout,
}

impl Console {
    fn new() -> Self {
        Self {
            out: tokio::io::stdout(),
        }
    }

    async fn send(&mut self, text: impl AsRef<str>) -> std::io::Result<()> {
        self.out.write_all(text.as_ref().as_bytes()).await?;
        self.out.write_all(b"\n\n").await?;
        self.out.flush().await
    }
}

#[tokio::main]
async fn main() -> HandlerResult {
    // No .env is fine, everything has a default
    let _ = dotenv();
    pretty_env_logger::init();
    let args = Args::parse();

    log::info!("Loading eras from {}", args.eras.display());
    let eras = load_eras(&args.eras).await.map_err(|err| {
        log::error!("Failed to load {}: {}", args.eras.display(), err);
        err
    })?;

    let mut console = Console::new();
    let mut game = Game::new(Arc::new(eras));
    console.send(screens::render(&game)?).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let msg = line.trim();
        if msg.eq_ignore_ascii_case("q") {
            break;
        }

        match game.phase() {
            Phase::EraIntro { .. } => era_intro(&mut console, &mut game).await?,
            Phase::Quiz { .. } => quiz(&mut console, &mut game, msg).await?,
            Phase::PivotSelection { .. } => pivot_selection(&mut console, &mut game, msg).await?,
            Phase::EraSummary { .. } => {
                era_summary(&mut console, &mut game, args.export.as_deref()).await?
            }
            Phase::FinalSummary => final_summary(&mut console, &mut game, msg).await?,
        }
    }

    log::info!("Bye!");
    Ok(())
}

async fn load_eras(path: &Path) -> Result<Eras, DatasetError> {
    let bytes = tokio::fs::read(path).await?;
    Eras::from_slice(&bytes)
}

async fn era_intro(console: &mut Console, game: &mut Game) -> HandlerResult {
    game.advance()?;
    console.send(screens::render(game)?).await?;
    Ok(())
}

async fn quiz(console: &mut Console, game: &mut Game, msg: &str) -> HandlerResult {
    let answers = game.current_era().map_or(0, |era| era.answers.len());
    let Some(selected) = parse_choice(msg, answers) else {
        console.send(choose_prompt(answers)).await?;
        return Ok(());
    };

    if let Some(answer) = game.submit_answer(selected)? {
        log::debug!("Answer {} correct: {}", selected, answer.correct);
    }
    console.send(screens::render(game)?).await?;
    Ok(())
}

async fn pivot_selection(console: &mut Console, game: &mut Game, msg: &str) -> HandlerResult {
    let pivots = game.current_era().map_or(0, |era| era.pivots.len());
    let Some(pivot) = parse_choice(msg, pivots) else {
        console.send(choose_prompt(pivots)).await?;
        return Ok(());
    };

    let entry = game.select_pivot(pivot)?;
    log::debug!("Picked {:?}, wealth now {}", entry.pivot, entry.total_wealth);
    console.send(screens::render(game)?).await?;
    Ok(())
}

async fn era_summary(console: &mut Console, game: &mut Game, export: Option<&Path>) -> HandlerResult {
    game.continue_game()?;
    if game.is_over() {
        log::info!("Game over with wealth {}", game.score().wealth());
        if let Some(path) = export {
            export_summary(path, &game.finalize()?).await?;
        }
    }
    console.send(screens::render(game)?).await?;
    Ok(())
}

async fn final_summary(console: &mut Console, game: &mut Game, msg: &str) -> HandlerResult {
    if !msg.eq_ignore_ascii_case("r") {
        console.send("Type r to play again or q to quit.").await?;
        return Ok(());
    }

    game.restart();
    console.send(screens::render(game)?).await?;
    Ok(())
}

async fn export_summary(path: &Path, summary: &FinalSummary) -> HandlerResult {
    let json = serde_json::to_vec_pretty(summary)?;
    tokio::fs::write(path, json).await?;
    log::info!("Wrote final summary to {}", path.display());
    Ok(())
}

/// Turns a 1-based menu number into an index below `len`.
fn parse_choice(msg: &str, len: usize) -> Option<usize> {
    match msg.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn choose_prompt(len: usize) -> String {
    format!("Please choose one of the options (1-{}).", len)
}
