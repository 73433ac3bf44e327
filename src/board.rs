//! 3×3 board built from two occupancy `BitBoard`s, one per player.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, GameResult, Player};
use crate::config::{GRID_SIZE, NUM_CELLS, WIN_PATTERNS};

pub type BB = BitBoard<u16, GRID_SIZE>;

fn line_mask(pattern: &[usize; 3]) -> BB {
    BB::from_raw(pattern.iter().fold(0u16, |acc, &i| acc | (1 << i)))
}

/// Board cells in row-major order (`index = row * 3 + col`).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[Cell; NUM_CELLS]", into = "[Cell; NUM_CELLS]")
)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `(row, col)` to a cell index.
    pub fn index_of(row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoardError::OutOfRange(row * GRID_SIZE + col));
        }
        Ok(row * GRID_SIZE + col)
    }

    /// Occupancy mask of `player`'s marks.
    pub fn marks(&self, player: Player) -> BB {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Mask of every occupied cell.
    pub fn occupied(&self) -> BB {
        self.x | self.o
    }

    pub fn cell(&self, index: usize) -> Result<Cell, BoardError> {
        if self.x.get(index)? {
            Ok(Cell::X)
        } else if self.o.get(index)? {
            Ok(Cell::O)
        } else {
            Ok(Cell::Empty)
        }
    }

    pub fn cells(&self) -> [Cell; NUM_CELLS] {
        core::array::from_fn(|i| self.cell(i).unwrap_or_default())
    }

    /// Put `player`'s mark on an empty cell.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        if self.occupied().get(index)? {
            return Err(BoardError::Occupied(index));
        }
        match player {
            Player::X => self.x.set(index)?,
            Player::O => self.o.set(index)?,
        }
        Ok(())
    }

    /// Empty cell indices in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> {
        (!self.occupied()).iter_set_bits()
    }

    pub fn empty_count(&self) -> usize {
        NUM_CELLS - self.occupied().count_ones()
    }

    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// True if `player` owns any complete line.
    pub fn is_winner(&self, player: Player) -> bool {
        let marks = self.marks(player);
        WIN_PATTERNS.iter().any(|p| marks.contains(line_mask(p)))
    }

    /// First line (in pattern order) fully owned by one player.
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        WIN_PATTERNS.iter().find_map(|p| {
            let mask = line_mask(p);
            if self.x.contains(mask) {
                Some((Player::X, *p))
            } else if self.o.contains(mask) {
                Some((Player::O, *p))
            } else {
                None
            }
        })
    }

    /// Classify the position. Pure function of the cells.
    pub fn evaluate(&self) -> GameResult {
        if let Some((player, _)) = self.winning_line() {
            GameResult::Win(player)
        } else if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    /// Copy of the board with `player` placed at `index`, or `None` if the move is illegal.
    pub fn with_move(&self, index: usize, player: Player) -> Option<Board> {
        let mut next = *self;
        next.place(index, player).ok()?;
        Some(next)
    }
}

impl From<[Cell; NUM_CELLS]> for Board {
    fn from(cells: [Cell; NUM_CELLS]) -> Self {
        let mut board = Board::new();
        for (i, cell) in cells.iter().enumerate() {
            if let Some(player) = cell.player() {
                // indices are in range and distinct
                let _ = board.place(i, player);
            }
        }
        board
    }
}

impl From<Board> for [Cell; NUM_CELLS] {
    fn from(board: Board) -> Self {
        board.cells()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse nine cell characters (`X`, `O`, and `.`/`-`/`_` for empty).
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; NUM_CELLS];
        let mut n = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = Cell::from_char(c)?;
            if n < NUM_CELLS {
                cells[n] = cell;
            }
            n += 1;
        }
        if n != NUM_CELLS {
            return Err(BoardError::InvalidLength(n));
        }
        Ok(Board::from(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells().iter().enumerate() {
            if i > 0 && i % GRID_SIZE == 0 {
                writeln!(f)?;
            }
            let ch = match cell.player() {
                Some(p) => p.symbol(),
                None => '.',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for cell in self.cells() {
            let ch = match cell.player() {
                Some(p) => p.symbol(),
                None => '.',
            };
            write!(f, "{}", ch)?;
        }
        write!(f, ")")
    }
}
