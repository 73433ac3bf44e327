use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, play_out, AiAgent, Difficulty, GameEngine, Player, Scoreboard};

/// Computer-vs-computer batch run; prints a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Difficulty::Heuristic)]
    x: Difficulty,
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    o: Difficulty,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut x = AiAgent::new(args.x);
    let mut o = AiAgent::new(args.o);
    let mut engine = GameEngine::new();
    let mut scores = Scoreboard::new();

    for game in 0..args.games {
        // alternate who opens
        let first = if game % 2 == 0 { Player::X } else { Player::O };
        engine.reset(first);
        let result = play_out(&mut engine, &mut x, &mut o, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
        scores.record(result);
    }

    let result = json!({
        "games": scores.games_played(),
        "x": args.x.to_string(),
        "o": args.o.to_string(),
        "x_wins": scores.x_wins,
        "o_wins": scores.o_wins,
        "draws": scores.draws,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
