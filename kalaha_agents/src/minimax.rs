use kalaha::{Board, Player};
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};
use tracing::debug;

use crate::Agent;

/// Depth-bounded minimax with optional alpha-beta pruning.
///
/// Positions are valued as the searching player's house lead, so every value
/// is from the root mover's perspective no matter whose turn a node is.
/// Whether a node maximizes or minimizes follows from who is on move there,
/// not from the depth: the extra-turn rule can keep the same player on move
/// across several levels.
pub struct MinimaxAgent {
    max_depth: u32,
    alpha_beta: bool,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(max_depth: u32, alpha_beta: bool, seed: u64) -> Self {
        Self {
            max_depth,
            alpha_beta,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// House lead of `perspective` on `board`.
    fn evaluate(board: &Board, perspective: Player) -> i32 {
        let scores = board.scores();
        scores[perspective.index()] as i32 - scores[perspective.opponent().index()] as i32
    }

    fn search(
        &self,
        board: &Board,
        root_mover: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth >= self.max_depth || board.is_terminal() {
            return Self::evaluate(board, root_mover);
        }
        let maximizing = board.current_player() == root_mover;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pit in board.legal_moves() {
            let mut child = board.clone();
            child
                .apply_move(pit)
                .expect("a legal move was rejected by the board");
            let value = self.search(&child, root_mover, depth + 1, alpha, beta);
            if maximizing {
                best = best.max(value);
                if self.alpha_beta {
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break;
                    }
                }
            } else {
                best = best.min(value);
                if self.alpha_beta {
                    beta = beta.min(best);
                    if beta <= alpha {
                        break;
                    }
                }
            }
        }
        best
    }

    /// Searches every root move with a fresh window and returns the values in
    /// `legal_moves` order.
    fn score_root_moves(&self, board: &Board) -> Vec<(usize, i32)> {
        let root_mover = board.current_player();
        let mut scored = Vec::new();
        for pit in board.legal_moves() {
            let mut child = board.clone();
            child
                .apply_move(pit)
                .expect("a legal move was rejected by the board");
            let value = self.search(&child, root_mover, 1, i32::MIN, i32::MAX);
            debug!(pit, value, "scored root move");
            scored.push((pit, value));
        }
        scored
    }
}

impl Agent for MinimaxAgent {
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<usize> {
        let moves = board.legal_moves();
        if moves.len() == 1 {
            return Ok(moves[0]);
        }
        let scored = self.score_root_moves(board);
        let best = scored
            .iter()
            .map(|&(_, value)| value)
            .max()
            .expect("choose_move called on a position without legal moves");
        let best_moves: Vec<usize> = scored
            .iter()
            .filter(|&&(_, value)| value == best)
            .map(|&(pit, _)| pit)
            .collect();
        // Equally valued moves are broken at random on purpose, it makes the
        // agent noticeably stronger than always playing the first one.
        Ok(*best_moves
            .choose(&mut self.rng)
            .expect("best_moves is never empty"))
    }
}
