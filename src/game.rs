use alloc::vec::Vec;

use rand::Rng;

use crate::{
    ai,
    board::Board,
    common::{BoardError, GameResult, Player},
    config::{Difficulty, GameMode},
};

/// Serializable snapshot of a game in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    pub result: GameResult,
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

impl GameState {
    /// Empty board with `starting_player` to move.
    pub fn new(starting_player: Player, mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            turn: starting_player,
            result: GameResult::InProgress,
            mode,
            difficulty,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::X, GameMode::default(), Difficulty::default())
    }
}

/// Position saved before a move so it can be taken back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    turn: Player,
    result: GameResult,
}

/// Core game logic: board, turn order, result and undo history.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    state: GameState,
    history: Vec<Snapshot>,
    generation: u64,
}

impl GameEngine {
    /// Create an engine with an empty board and X to move.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            state: GameState::new(Player::X, mode, difficulty),
            ..Self::default()
        }
    }

    /// Restore an engine from a previously saved state. Undo history starts empty.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn turn(&self) -> Player {
        self.state.turn
    }

    /// Result recorded after the last accepted move.
    pub fn result(&self) -> GameResult {
        self.state.result
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    /// Takes effect at the next reset; the board is left alone.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.state.mode = mode;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
    }

    /// Counter that changes on every reset and undo. Work scheduled against
    /// one generation must not be applied to another.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of moves that can currently be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Apply `player`'s mark at `index`, reporting why a move is refused.
    pub fn try_apply_move(&mut self, index: usize, player: Player) -> Result<GameResult, BoardError> {
        if self.state.result.is_terminal() {
            return Err(BoardError::GameOver);
        }
        if player != self.state.turn {
            return Err(BoardError::WrongTurn {
                expected: self.state.turn,
                got: player,
            });
        }
        let before = Snapshot {
            board: self.state.board,
            turn: self.state.turn,
            result: self.state.result,
        };
        self.state.board.place(index, player)?;
        self.history.push(before);

        self.state.result = self.evaluate();
        if !self.state.result.is_terminal() {
            self.state.turn = player.other();
        }
        Ok(self.state.result)
    }

    /// Apply a move, silently ignoring illegal ones. Returns the result after
    /// the call, which is the unchanged prior result when the move is refused.
    pub fn apply_move(&mut self, index: usize, player: Player) -> GameResult {
        match self.try_apply_move(index, player) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("ignoring move {} by {}: {}", index, player, e);
                self.state.result
            }
        }
    }

    /// Apply a move for whoever is on turn.
    pub fn play(&mut self, index: usize) -> GameResult {
        self.apply_move(index, self.state.turn)
    }

    /// Classify the current board without changing anything.
    pub fn evaluate(&self) -> GameResult {
        self.state.board.evaluate()
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.state.board.winning_line().map(|(_, line)| line)
    }

    /// Pick a cell for the player on turn using the configured difficulty.
    pub fn select_computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, BoardError> {
        if self.state.result.is_terminal() {
            return Err(BoardError::GameOver);
        }
        ai::select_computer_move(&self.state.board, self.state.turn, self.state.difficulty, rng)
    }

    /// Let the computer move for the player on turn.
    pub fn play_computer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(usize, GameResult), BoardError> {
        let index = self.select_computer_move(rng)?;
        let result = self.try_apply_move(index, self.state.turn)?;
        Ok((index, result))
    }

    /// Start a new game. Mode and difficulty carry over.
    pub fn reset(&mut self, starting_player: Player) -> GameState {
        self.state = GameState::new(starting_player, self.state.mode, self.state.difficulty);
        self.history.clear();
        self.generation = self.generation.wrapping_add(1);
        self.state
    }

    /// Take back the last accepted move, restoring the board and whose turn
    /// it was. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.state.board = snapshot.board;
                self.state.turn = snapshot.turn;
                self.state.result = snapshot.result;
                self.generation = self.generation.wrapping_add(1);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_alternates_until_game_ends() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.play(0), GameResult::InProgress);
        assert_eq!(engine.turn(), Player::O);
        assert_eq!(engine.play(3), GameResult::InProgress);
        assert_eq!(engine.turn(), Player::X);
        engine.play(1);
        engine.play(4);
        assert_eq!(engine.play(2), GameResult::Win(Player::X));
        // winner keeps the turn; nothing else is accepted
        assert_eq!(engine.turn(), Player::X);
        assert_eq!(engine.try_apply_move(8, Player::X), Err(BoardError::GameOver));
        assert_eq!(engine.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn wrong_player_is_rejected() {
        let mut engine = GameEngine::new();
        let err = engine.try_apply_move(0, Player::O).unwrap_err();
        assert_eq!(
            err,
            BoardError::WrongTurn {
                expected: Player::X,
                got: Player::O
            }
        );
        assert!(engine.board().is_empty());
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn undo_restores_board_and_turn() {
        let mut engine = GameEngine::new();
        engine.play(4);
        engine.play(0);
        let generation = engine.generation();
        assert!(engine.undo());
        assert_eq!(engine.turn(), Player::O);
        assert_eq!(engine.board().empty_count(), 8);
        assert_ne!(engine.generation(), generation);
        assert!(engine.undo());
        assert_eq!(engine.turn(), Player::X);
        assert!(engine.board().is_empty());
        assert!(!engine.undo());
    }

    #[test]
    fn undo_reopens_a_finished_game() {
        let mut engine = GameEngine::new();
        for i in [0, 3, 1, 4, 2] {
            engine.play(i);
        }
        assert_eq!(engine.result(), GameResult::Win(Player::X));
        assert!(engine.undo());
        assert_eq!(engine.result(), GameResult::InProgress);
        assert_eq!(engine.turn(), Player::X);
    }

    #[test]
    fn reset_clears_history_and_keeps_settings() {
        let mut engine = GameEngine::with_mode(GameMode::HumanVsComputer, Difficulty::Heuristic);
        engine.play(0);
        let state = engine.reset(Player::O);
        assert!(state.board.is_empty());
        assert_eq!(state.turn, Player::O);
        assert_eq!(state.mode, GameMode::HumanVsComputer);
        assert_eq!(state.difficulty, Difficulty::Heuristic);
        assert!(!engine.undo());
    }
}
