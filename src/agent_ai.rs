use rand::rngs::SmallRng;

use crate::{
    agent::Agent,
    ai,
    board::Board,
    common::{BoardError, Player},
    config::Difficulty,
};

/// Computer agent backed by [`ai::select_computer_move`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AiAgent {
    difficulty: Difficulty,
}

impl AiAgent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }
}

impl Agent for AiAgent {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, me: Player) -> Result<usize, BoardError> {
        ai::select_computer_move(board, me, self.difficulty, rng)
    }
}
