use kalaha::Board;
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};

use crate::Agent;

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<usize> {
        let moves = board.legal_moves();
        Ok(*moves
            .choose(&mut self.rng)
            .expect("choose_move called on a position without legal moves"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_seeds_produce_equal_choices() {
        let board = Board::new(6, 6).unwrap();
        let mut first = RandomAgent::new(7);
        let mut second = RandomAgent::new(7);
        for _ in 0..20 {
            let a = first.choose_move(&board).unwrap();
            let b = second.choose_move(&board).unwrap();
            assert_eq!(a, b);
            assert!(board.legal_moves().contains(&a));
        }
    }
}
