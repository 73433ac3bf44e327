use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, GameResult, Player},
    game::GameEngine,
};

/// Anything that can choose moves for one side of the board.
pub trait Agent: Send {
    /// Choose an empty cell for `me` on `board`.
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, me: Player) -> Result<usize, BoardError>;
}

/// Play `engine`'s current game to the end with one agent per side.
pub fn play_out(
    engine: &mut GameEngine,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    rng: &mut SmallRng,
) -> Result<GameResult, BoardError> {
    while !engine.result().is_terminal() {
        let me = engine.turn();
        let agent: &mut dyn Agent = match me {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let index = agent.select_move(rng, engine.board(), me)?;
        engine.try_apply_move(index, me)?;
    }
    Ok(engine.result())
}
