#![cfg(feature = "std")]

//! Text-based front end: command parsing and the interactive game loop.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use crate::{
    board::Board,
    common::Player,
    config::{Difficulty, GameMode, NUM_CELLS},
    scores::Scoreboard,
    session::{spawn_computer_move, Session},
    ui::{print_session, render_scores},
};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Cell(usize),
    Undo,
    NewGame,
    ClearData,
    Mode(GameMode),
    Difficulty(Difficulty),
    Start(Player),
    Scores,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  1-9 | <row> <col>      place a mark (rows and columns count from 1)
  undo                   take back the last move
  new                    start a new game, keeping scores
  clear                  zero the scores and start over with X
  mode pvp|ai            switch game mode (starts a new game)
  diff easy|heuristic    computer strength
  start x|o              starting player (starts a new game)
  scores                 show the tally
  help                   show this text
  quit                   leave";

fn parse_cell(words: &[&str]) -> anyhow::Result<usize> {
    let nums: Vec<usize> = words
        .iter()
        .map(|w| w.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| anyhow::anyhow!("unknown command; type 'help'"))?;
    match nums.as_slice() {
        [n] if (1..=NUM_CELLS).contains(n) => Ok(n - 1),
        [r, c] if *r >= 1 && *c >= 1 => {
            Board::index_of(r - 1, c - 1).map_err(|e| anyhow::anyhow!(e))
        }
        _ => Err(anyhow::anyhow!("cells are numbered 1 to {}", NUM_CELLS)),
    }
}

/// Parse one line of input.
pub fn parse_command(line: &str) -> anyhow::Result<Command> {
    let words: Vec<&str> = line.split(|c: char| c.is_whitespace() || c == ',').filter(|w| !w.is_empty()).collect();
    let (head, rest) = match words.split_first() {
        Some((head, rest)) => (head.to_ascii_lowercase(), rest),
        None => return Err(anyhow::anyhow!("empty input; type 'help'")),
    };
    let arg = || {
        rest.first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("'{}' needs an argument", head))
    };
    let cmd = match head.as_str() {
        "undo" | "u" => Command::Undo,
        "new" | "n" => Command::NewGame,
        "clear" => Command::ClearData,
        "mode" => Command::Mode(arg()?.parse::<GameMode>().map_err(|e| anyhow::anyhow!("bad mode: {}", e))?),
        "diff" | "difficulty" => Command::Difficulty(arg()?.parse::<Difficulty>().map_err(|e| anyhow::anyhow!("bad difficulty: {}", e))?),
        "start" => Command::Start(arg()?.parse::<Player>().map_err(|e| anyhow::anyhow!("bad player: {}", e))?),
        "scores" | "s" => Command::Scores,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Cell(parse_cell(&words)?),
    };
    Ok(cmd)
}

fn save_scores(path: Option<&Path>, scores: &Scoreboard) {
    if let Some(path) = path {
        if let Err(e) = scores.save(path) {
            log::warn!("could not save scores: {:#}", e);
        }
    }
}

/// Interactive loop reading commands from stdin until `quit` or end of input.
pub async fn run_cli(session: Arc<Mutex<Session>>, scores_path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", HELP);
    loop {
        let pending = {
            let s = session.lock().await;
            print_session(&s);
            if s.engine().result().is_terminal() {
                println!("Type 'new' to play again.");
            }
            s.pending_computer_move()
        };

        if let Some(task) = pending {
            println!("Computer is thinking...");
            if let Some(outcome) = spawn_computer_move(session.clone(), task).await? {
                println!("Computer plays {}", outcome.index + 1);
                if outcome.result.is_terminal() {
                    save_scores(scores_path.as_deref(), session.lock().await.scores());
                }
            }
            continue;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let mut s = session.lock().await;
        match cmd {
            Command::Cell(index) => match s.select_cell(index) {
                Some(outcome) if outcome.result.is_terminal() => {
                    save_scores(scores_path.as_deref(), s.scores());
                }
                Some(_) => {}
                None => println!("Cell {} is not available.", index + 1),
            },
            Command::Undo => {
                if !s.undo() {
                    println!("Nothing to undo.");
                }
            }
            Command::NewGame => s.new_game(),
            Command::ClearData => {
                s.clear_data();
                save_scores(scores_path.as_deref(), s.scores());
            }
            Command::Mode(mode) => {
                s.set_mode(mode);
                println!("Mode: {}", mode);
            }
            Command::Difficulty(difficulty) => {
                s.set_difficulty(difficulty);
                println!("Difficulty: {}", difficulty);
            }
            Command::Start(player) => {
                s.set_starting_player(player);
                println!("Starting player: {}", player);
            }
            Command::Scores => println!("{}", render_scores(s.scores())),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }
    save_scores(scores_path.as_deref(), session.lock().await.scores());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_by_number_and_coordinates() {
        assert_eq!(parse_command("5").unwrap(), Command::Cell(4));
        assert_eq!(parse_command(" 1 ").unwrap(), Command::Cell(0));
        assert_eq!(parse_command("3 1").unwrap(), Command::Cell(6));
        assert_eq!(parse_command("2,3").unwrap(), Command::Cell(5));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("4 1").is_err());
    }

    #[test]
    fn keyword_commands() {
        assert_eq!(parse_command("undo").unwrap(), Command::Undo);
        assert_eq!(parse_command("NEW").unwrap(), Command::NewGame);
        assert_eq!(parse_command("mode ai").unwrap(), Command::Mode(GameMode::HumanVsComputer));
        assert_eq!(parse_command("mode pvp").unwrap(), Command::Mode(GameMode::HumanVsHuman));
        assert_eq!(parse_command("diff hard").unwrap(), Command::Difficulty(Difficulty::Heuristic));
        assert_eq!(parse_command("diff easy").unwrap(), Command::Difficulty(Difficulty::Easy));
        assert_eq!(parse_command("start o").unwrap(), Command::Start(Player::O));
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse_command("").is_err());
        assert!(parse_command("mode").is_err());
        assert!(parse_command("start z").is_err());
        assert!(parse_command("dance").is_err());
    }
}
