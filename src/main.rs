#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{path::PathBuf, sync::Arc};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tictactoe::{init_logging, run_cli, Difficulty, GameMode, Player, Scoreboard, Session, Settings};
#[cfg(feature = "std")]
use tokio::{sync::Mutex, time::Duration};

#[derive(Parser)]
#[command(author, version, about = "Tic-Tac-Toe in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_enum, default_value_t = GameMode::HumanVsHuman)]
    mode: GameMode,
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,
    #[arg(long, value_enum, default_value_t = Player::X, help = "Player who moves first")]
    start: Player,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 280, help = "Pause before the computer replies, in milliseconds")]
    delay_ms: u64,
    #[arg(long, help = "JSON file to load and save the score tally")]
    scores: Option<PathBuf>,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let scores = match &cli.scores {
        Some(path) => Scoreboard::load(path)?,
        None => Scoreboard::new(),
    };
    let settings = Settings {
        mode: cli.mode,
        difficulty: cli.difficulty,
        starting_player: cli.start,
        computer_delay: Duration::from_millis(cli.delay_ms),
        ..Settings::default()
    };
    println!("Starting {} game ({} computer)...", settings.mode, settings.difficulty);

    let session = Arc::new(Mutex::new(Session::with_scores(settings, scores, rng)));
    run_cli(session, cli.scores).await
}
