//! Commonly used types and utilities for ease of import.

pub use crate::{
    play_out, select_computer_move, AiAgent, Agent, Board, BoardError, Cell, Difficulty,
    GameEngine, GameMode, GameResult, GameState, Player, Settings,
};

#[cfg(feature = "std")]
pub use crate::{print_session, Scoreboard, Session};
