use kalaha::Board;

use crate::Agent;

/// Sows from the fullest own cup, preferring the lowest pit index on ties.
pub struct GreedyAgent;

impl Agent for GreedyAgent {
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<usize> {
        let pits = board.pits();
        let mut best: Option<(usize, u32)> = None;
        for pit in board.legal_moves() {
            match best {
                Some((_, most)) if most >= pits[pit] => {}
                _ => best = Some((pit, pits[pit])),
            }
        }
        Ok(best
            .expect("choose_move called on a position without legal moves")
            .0)
    }
}

#[cfg(test)]
mod tests {
    use kalaha::Player;

    use super::*;

    #[test]
    fn picks_the_fullest_cup() {
        let board = Board::from_pits(
            6,
            6,
            vec![2, 5, 0, 5, 1, 3, 20, 6, 6, 6, 6, 6, 6, 0],
            Player::One,
        )
        .unwrap();
        // Two cups hold 5 stones, the earlier one wins the tie.
        assert_eq!(GreedyAgent.choose_move(&board).unwrap(), 1);
    }

    #[test]
    fn works_with_player_twos_row_offsets() {
        let board = Board::from_pits(
            6,
            6,
            vec![6, 6, 6, 6, 6, 6, 0, 1, 1, 9, 1, 1, 1, 22],
            Player::Two,
        )
        .unwrap();
        assert_eq!(GreedyAgent.choose_move(&board).unwrap(), 9);
    }

    #[test]
    fn fresh_board_tie_resolves_to_the_first_cup() {
        let board = Board::new(6, 6).unwrap();
        assert_eq!(GreedyAgent.choose_move(&board).unwrap(), 0);
    }
}
