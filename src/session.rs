#![cfg(feature = "std")]

//! Front-end adapter: turns cell selections and button presses into engine
//! calls, keeps the score tally and schedules the computer's reply.

use std::sync::Arc;

use rand::rngs::SmallRng;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::{
    common::{GameResult, Player},
    config::{Difficulty, GameMode, Settings},
    game::GameEngine,
    scores::Scoreboard,
};

/// An accepted move and the result it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub index: usize,
    pub player: Player,
    pub result: GameResult,
}

/// A computer reply waiting for its delay to elapse. Only valid for the
/// engine generation it was created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledMove {
    generation: u64,
    player: Player,
    delay: Duration,
}

impl ScheduledMove {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

pub struct Session {
    engine: GameEngine,
    settings: Settings,
    scores: Scoreboard,
    rng: SmallRng,
}

impl Session {
    pub fn new(settings: Settings, rng: SmallRng) -> Self {
        Self::with_scores(settings, Scoreboard::new(), rng)
    }

    /// Start a session continuing a previously saved tally.
    pub fn with_scores(settings: Settings, scores: Scoreboard, rng: SmallRng) -> Self {
        let mut engine = GameEngine::with_mode(settings.mode, settings.difficulty);
        engine.reset(settings.starting_player);
        Self {
            engine,
            settings,
            scores,
            rng,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    fn vs_computer(&self) -> bool {
        self.engine.mode() == GameMode::HumanVsComputer
    }

    /// True when the game is running and the computer is on turn.
    pub fn is_computer_turn(&self) -> bool {
        self.vs_computer()
            && !self.engine.result().is_terminal()
            && self.engine.turn() == self.settings.computer
    }

    /// A human picked `index`. Returns the outcome if the move was accepted.
    pub fn select_cell(&mut self, index: usize) -> Option<MoveOutcome> {
        if self.is_computer_turn() {
            log::debug!("cell {} ignored: waiting for the computer", index);
            return None;
        }
        let player = self.engine.turn();
        match self.engine.try_apply_move(index, player) {
            Ok(result) => Some(self.finish_move(index, player, result)),
            Err(e) => {
                log::debug!("cell {} ignored: {}", index, e);
                None
            }
        }
    }

    fn finish_move(&mut self, index: usize, player: Player, result: GameResult) -> MoveOutcome {
        if result.is_terminal() {
            self.scores.record(result);
            log::info!("game over: {:?}", result);
        }
        MoveOutcome {
            index,
            player,
            result,
        }
    }

    /// The computer reply owed by the current position, if any.
    pub fn pending_computer_move(&self) -> Option<ScheduledMove> {
        if !self.is_computer_turn() {
            return None;
        }
        Some(ScheduledMove {
            generation: self.engine.generation(),
            player: self.settings.computer,
            delay: self.settings.computer_delay,
        })
    }

    /// Carry out a scheduled computer move. Tasks from an earlier generation,
    /// or whose player is no longer on turn, are dropped.
    pub fn fire(&mut self, task: ScheduledMove) -> Option<MoveOutcome> {
        if task.generation != self.engine.generation() {
            log::debug!(
                "dropping computer move from generation {} (now {})",
                task.generation,
                self.engine.generation()
            );
            return None;
        }
        if self.engine.result().is_terminal() || self.engine.turn() != task.player {
            log::debug!("dropping computer move: {} is not on turn", task.player);
            return None;
        }
        match self.engine.play_computer(&mut self.rng) {
            Ok((index, result)) => Some(self.finish_move(index, task.player, result)),
            Err(e) => {
                log::warn!("computer could not move: {}", e);
                None
            }
        }
    }

    /// Start a fresh game with the configured starting player. Scores stay.
    pub fn new_game(&mut self) {
        self.engine.reset(self.settings.starting_player);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.engine.set_mode(mode);
        self.new_game();
    }

    /// Applies from the computer's next move on; the board is kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        self.engine.set_difficulty(difficulty);
    }

    pub fn set_starting_player(&mut self, player: Player) {
        self.settings.starting_player = player;
        self.new_game();
    }

    /// Zero the tally, make X the starting player again and start over.
    pub fn clear_data(&mut self) {
        self.scores.clear();
        self.settings.starting_player = Player::X;
        self.new_game();
    }

    /// Take back the last human move (and the computer reply that followed
    /// it, against the computer). Finished games cannot be undone since their
    /// result is already on the scoreboard.
    pub fn undo(&mut self) -> bool {
        if self.engine.result().is_terminal() || !self.engine.undo() {
            return false;
        }
        if self.vs_computer() {
            while self.engine.turn() == self.settings.computer && self.engine.undo() {}
        }
        true
    }

    /// One-line status text for the current position.
    pub fn status_line(&self) -> String {
        match self.engine.result() {
            GameResult::InProgress => format!("Player {}'s turn", self.engine.turn()),
            GameResult::Win(p) => format!("{} Wins!", p),
            GameResult::Draw => "Draw!".to_string(),
        }
    }

    /// Cells to highlight after a win.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.engine.winning_line()
    }
}

/// Run `task` after its delay on the tokio runtime. A reset or undo during
/// the delay makes the task a no-op.
pub fn spawn_computer_move(
    session: Arc<Mutex<Session>>,
    task: ScheduledMove,
) -> JoinHandle<Option<MoveOutcome>> {
    tokio::spawn(async move {
        if !task.delay.is_zero() {
            sleep(task.delay).await;
        }
        session.lock().await.fire(task)
    })
}
