use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use crate::common::{BoardError, Player};

pub const GRID_SIZE: usize = 3;
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// The eight three-in-a-row lines, checked in this order.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// How many finished games the scoreboard remembers.
pub const MAX_RECENT_RESULTS: usize = 5;

/// Pause before the computer replies so the human's move shows first.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(280);

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[cfg_attr(feature = "std", value(name = "pvp"))]
    HumanVsHuman,
    /// One human against the computer.
    #[cfg_attr(feature = "std", value(name = "ai"))]
    HumanVsComputer,
}

impl FromStr for GameMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if matches_any(s, &["pvp", "human", "hvh"]) {
            Ok(GameMode::HumanVsHuman)
        } else if matches_any(s, &["ai", "computer", "cpu", "hvc"]) {
            Ok(GameMode::HumanVsComputer)
        } else {
            Err(s.chars().next().map_or(BoardError::InvalidLength(0), BoardError::InvalidSymbol))
        }
    }
}

fn matches_any(s: &str, names: &[&str]) -> bool {
    names.iter().any(|n| s.eq_ignore_ascii_case(n))
}

/// Computer opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Win, block, center, corner, then anything.
    #[cfg_attr(feature = "std", value(alias = "medium", alias = "hard"))]
    Heuristic,
}

impl FromStr for Difficulty {
    type Err = BoardError;

    /// Anything other than "easy" selects the heuristic player, matching the
    /// medium/hard buttons that shared one strategy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(BoardError::InvalidLength(0))
        } else if s.eq_ignore_ascii_case("easy") {
            Ok(Difficulty::Easy)
        } else {
            Ok(Difficulty::Heuristic)
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Heuristic => write!(f, "heuristic"),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "human vs human"),
            GameMode::HumanVsComputer => write!(f, "human vs computer"),
        }
    }
}

/// Configuration surface exposed to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub starting_player: Player,
    /// Mark played by the computer in [`GameMode::HumanVsComputer`].
    pub computer: Player,
    pub computer_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            starting_player: Player::X,
            computer: Player::O,
            computer_delay: DEFAULT_COMPUTER_DELAY,
        }
    }
}
