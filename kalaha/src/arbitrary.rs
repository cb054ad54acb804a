use crate::Board;

/// A board position reachable from a fresh board via legal moves.
#[derive(Clone, Debug)]
pub struct ReachablePosition(pub Board);

impl quickcheck::Arbitrary for ReachablePosition {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let cups = *g.choose(&[1, 2, 3, 4, 6, 8]).unwrap();
        let stones = *g.choose(&[1, 2, 3, 4, 6]).unwrap();
        let mut board = Board::new(cups, stones).unwrap();
        let num_moves = usize::arbitrary(g) % 64;
        for _ in 0..num_moves {
            if board.is_terminal() {
                break;
            }
            let moves = board.legal_moves();
            let &pit = g.choose(&moves).unwrap();
            board.apply_move(pit).unwrap();
        }
        ReachablePosition(board)
    }
}
