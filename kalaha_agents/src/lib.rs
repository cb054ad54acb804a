mod greedy;
mod human;
mod minimax;
mod random;

pub use greedy::*;
pub use human::*;
pub use minimax::*;
pub use random::*;

use kalaha::Board;

/// A trait to simplify writing agents.
pub trait Agent {
    /// Picks one of the board's legal moves for the player currently on move.
    ///
    /// Only called on positions with at least one legal move. An error means
    /// the agent lost its move source (e.g. a human closed the input stream),
    /// not that it picked badly; bad picks are rejected by
    /// [`Board::apply_move`] and can be retried.
    ///
    /// [`Board::apply_move`]: kalaha::Board::apply_move
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<usize>;
}
