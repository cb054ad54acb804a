use crate::{Board, Player};

/// Renders the board as text, with player Two's row reversed on top so that
/// both players read their own cups left to right, the way they sow them.
/// The 1-based cup numbers around the rows are the ones human players enter.
pub fn visualize_board(board: &Board) -> String {
    let pits = board.pits();
    let mut out = String::new();

    out.push_str("     ");
    for cup_number in (1..=board.cups_per_player()).rev() {
        out.push_str(&format!("{:>3} ", cup_number));
    }
    out.push('\n');

    out.push_str(&format!("({:>3})", pits[board.house(Player::Two)]));
    for pit in board.cups(Player::Two).rev() {
        out.push_str(&format!("[{:>2}]", pits[pit]));
    }
    out.push_str("  player two\n");

    out.push_str("     ");
    for pit in board.cups(Player::One) {
        out.push_str(&format!("[{:>2}]", pits[pit]));
    }
    out.push_str(&format!("({:>3})  player one\n", pits[board.house(Player::One)]));

    out.push_str("     ");
    for cup_number in 1..=board.cups_per_player() {
        out.push_str(&format!("{:>3} ", cup_number));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_rows_with_the_top_row_reversed() {
        let board = Board::from_pits(2, 3, vec![3, 2, 1, 4, 0, 2], Player::One).unwrap();
        let expected = concat!(
            "       2   1 \n",
            "(  2)[ 0][ 4]  player two\n",
            "     [ 3][ 2](  1)  player one\n",
            "       1   2 \n",
        );
        assert_eq!(visualize_board(&board), expected);
    }
}
