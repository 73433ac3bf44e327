//! Common types for Tic-Tac-Toe: players, cells, game results and board errors.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoardError;

/// One of the two marks that take turns on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    /// The opponent of this player.
    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some('x' | 'X'), None) => Ok(Player::X),
            (Some('o' | 'O'), None) => Ok(Player::O),
            (Some(c), _) => Err(BoardError::InvalidSymbol(c)),
            (None, _) => Err(BoardError::InvalidLength(0)),
        }
    }
}

/// Contents of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Parse a single board character. `.`, `-`, `_` and a blank mark an empty cell.
    pub fn from_char(c: char) -> Result<Cell, BoardError> {
        match c {
            'x' | 'X' => Ok(Cell::X),
            'o' | 'O' => Ok(Cell::O),
            '.' | '-' | '_' | ' ' => Ok(Cell::Empty),
            other => Err(BoardError::InvalidSymbol(other)),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Outcome of a game at a given point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    #[default]
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    /// True for `Win` and `Draw`.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(p) => Some(p),
            _ => None,
        }
    }
}

/// Errors returned by board and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index is outside `0..9`.
    OutOfRange(usize),
    /// Target cell already holds a mark.
    Occupied(usize),
    /// The game has concluded; only a reset accepts moves again.
    GameOver,
    /// A move was submitted for the player who is not on turn.
    WrongTurn { expected: Player, got: Player },
    /// No empty cell remains to choose from.
    BoardFull,
    /// Unrecognised character in a textual board or player.
    InvalidSymbol(char),
    /// Textual board did not describe exactly nine cells.
    InvalidLength(usize),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { index } => BoardError::OutOfRange(index),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange(i) => write!(f, "Cell index {} is out of range", i),
            BoardError::Occupied(i) => write!(f, "Cell {} is already taken", i),
            BoardError::GameOver => write!(f, "Game is over; reset to play again"),
            BoardError::WrongTurn { expected, got } => {
                write!(f, "It is {}'s turn, not {}'s", expected, got)
            }
            BoardError::BoardFull => write!(f, "No empty cell left on the board"),
            BoardError::InvalidSymbol(c) => write!(f, "Invalid board symbol {:?}", c),
            BoardError::InvalidLength(n) => write!(f, "Expected 9 cells, found {}", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
