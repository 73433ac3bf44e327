// Computer move selection. Uses no_std and avoids heap allocations.

use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Player},
    config::{Difficulty, CENTER, CORNERS, NUM_CELLS},
};

/// Choose a cell for `player` on `board`.
///
/// `Easy` picks uniformly among empty cells. `Heuristic` takes the lowest
/// winning cell, else the lowest cell that blocks the opponent, else the
/// center, else a random free corner, else any random free cell.
///
/// Fails with [`BoardError::BoardFull`] when no empty cell remains.
pub fn select_computer_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, BoardError> {
    if board.is_full() {
        return Err(BoardError::BoardFull);
    }
    let index = match difficulty {
        Difficulty::Easy => random_empty(board, rng),
        Difficulty::Heuristic => heuristic_move(board, player, rng),
    };
    index.ok_or(BoardError::BoardFull)
}

/// First empty cell (lowest index) that completes a line for `player`.
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    board.empty_cells().find(|&i| {
        board
            .with_move(i, player)
            .is_some_and(|next| next.is_winner(player))
    })
}

fn heuristic_move<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<usize> {
    if let Some(i) = winning_move(board, player) {
        return Some(i);
    }
    if let Some(i) = winning_move(board, player.other()) {
        return Some(i);
    }
    let occupied = board.occupied();
    if !occupied.get(CENTER).unwrap_or(true) {
        return Some(CENTER);
    }

    let mut corners = [0usize; CORNERS.len()];
    let mut n = 0;
    for &c in CORNERS.iter() {
        if !occupied.get(c).unwrap_or(true) {
            corners[n] = c;
            n += 1;
        }
    }
    if n > 0 {
        return Some(corners[rng.random_range(0..n)]);
    }
    random_empty(board, rng)
}

fn random_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let mut free = [0usize; NUM_CELLS];
    let mut n = 0;
    for i in board.empty_cells() {
        free[n] = i;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some(free[rng.random_range(0..n)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn takes_the_win() {
        let mut rng = SmallRng::seed_from_u64(1);
        let b = board("OO. XX. ...");
        let pick = select_computer_move(&b, Player::O, Difficulty::Heuristic, &mut rng).unwrap();
        assert_eq!(pick, 2);
    }

    #[test]
    fn prefers_win_over_block() {
        let mut rng = SmallRng::seed_from_u64(2);
        // X threatens 5, O can win at 2
        let b = board("OO. XX. ...");
        assert_eq!(winning_move(&b, Player::X), Some(5));
        assert_eq!(winning_move(&b, Player::O), Some(2));
        let pick = select_computer_move(&b, Player::O, Difficulty::Heuristic, &mut rng).unwrap();
        assert_eq!(pick, 2);
    }

    #[test]
    fn blocks_the_opponent() {
        let mut rng = SmallRng::seed_from_u64(3);
        let b = board("X.. X.. ...");
        let pick = select_computer_move(&b, Player::O, Difficulty::Heuristic, &mut rng).unwrap();
        assert_eq!(pick, 6);
    }

    #[test]
    fn lowest_index_breaks_ties() {
        let mut rng = SmallRng::seed_from_u64(4);
        // X wins at 2 (row) or 6 (column); both available
        let b = board("XX. X.. .OO");
        assert_eq!(winning_move(&b, Player::X), Some(2));
        let pick = select_computer_move(&b, Player::X, Difficulty::Heuristic, &mut rng).unwrap();
        assert_eq!(pick, 2);
    }

    #[test]
    fn takes_center_then_corner() {
        let mut rng = SmallRng::seed_from_u64(5);
        let empty = Board::new();
        let pick = select_computer_move(&empty, Player::O, Difficulty::Heuristic, &mut rng).unwrap();
        assert_eq!(pick, CENTER);

        let center_taken = board("... .X. ...");
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pick =
                select_computer_move(&center_taken, Player::O, Difficulty::Heuristic, &mut rng).unwrap();
            assert!(CORNERS.contains(&pick), "picked {}", pick);
        }
    }

    #[test]
    fn falls_back_to_sides() {
        let b = board("OXO .X. XOX");
        // no win, no block, center and corners taken
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pick = select_computer_move(&b, Player::O, Difficulty::Heuristic, &mut rng).unwrap();
            assert!(pick == 3 || pick == 5, "picked {}", pick);
        }
    }

    #[test]
    fn easy_picks_only_empty_cells() {
        let b = board("XOX OX. O..");
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pick = select_computer_move(&b, Player::X, Difficulty::Easy, &mut rng).unwrap();
            assert!(b.cell(pick).unwrap().is_empty());
        }
    }

    #[test]
    fn full_board_is_an_error() {
        let mut rng = SmallRng::seed_from_u64(6);
        let b = board("XOXXOOOXX");
        for difficulty in [Difficulty::Easy, Difficulty::Heuristic] {
            assert_eq!(
                select_computer_move(&b, Player::O, difficulty, &mut rng),
                Err(BoardError::BoardFull)
            );
        }
    }
}
