use std::ops::Range;

use crate::{IllegalMove, InvalidBoardConfig};

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0 for [`Player::One`], 1 for [`Player::Two`].
    ///
    /// Useful for indexing per-player arrays such as [`Board::scores`].
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player one"),
            Player::Two => write!(f, "player two"),
        }
    }
}

/// Summarizes the effects of one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The pit that received the last sown stone.
    pub landing_pit: usize,
    /// Whether the mover keeps the turn.
    pub extra_turn: bool,
    /// Stones banked by a capture, 0 when no capture happened.
    pub captured: u32,
}

/// A Kalaha board: two rows of cups with a house at the end of each row.
///
/// Pit layout for `cups_per_player = 6`: indices 0-5 are player One's cups,
/// 6 is player One's house, 7-12 are player Two's cups and 13 is player Two's
/// house. Sowing walks the indices in ascending order and wraps around after
/// the last pit.
///
/// The total number of stones on the board is invariant. Cloning produces a
/// fully independent copy, which is how search agents explore moves without
/// disturbing the live game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cups_per_player: usize,
    stones_per_cup: u32,
    pits: Vec<u32>,
    to_move: Player,
}

impl Board {
    /// Creates a board with every cup filled and both houses empty.
    /// Player One moves first.
    pub fn new(cups_per_player: usize, stones_per_cup: u32) -> Result<Self, InvalidBoardConfig> {
        if cups_per_player == 0 {
            return Err(InvalidBoardConfig::NoCups);
        }
        if stones_per_cup == 0 {
            return Err(InvalidBoardConfig::NoStones);
        }
        let mut pits = vec![stones_per_cup; 2 * cups_per_player + 2];
        pits[cups_per_player] = 0;
        pits[2 * cups_per_player + 1] = 0;
        Ok(Self {
            cups_per_player,
            stones_per_cup,
            pits,
            to_move: Player::One,
        })
    }

    /// Restores a board from an explicit pit layout.
    ///
    /// The layout must match the geometry and hold exactly
    /// `2 * cups_per_player * stones_per_cup` stones in total.
    pub fn from_pits(
        cups_per_player: usize,
        stones_per_cup: u32,
        pits: Vec<u32>,
        to_move: Player,
    ) -> Result<Self, InvalidBoardConfig> {
        if cups_per_player == 0 {
            return Err(InvalidBoardConfig::NoCups);
        }
        if stones_per_cup == 0 {
            return Err(InvalidBoardConfig::NoStones);
        }
        let expected_pits = 2 * cups_per_player + 2;
        if pits.len() != expected_pits {
            return Err(InvalidBoardConfig::WrongPitCount {
                expected: expected_pits,
                actual: pits.len(),
            });
        }
        let expected_stones = 2 * cups_per_player as u32 * stones_per_cup;
        let actual_stones = pits.iter().sum();
        if actual_stones != expected_stones {
            return Err(InvalidBoardConfig::WrongStoneCount {
                expected: expected_stones,
                actual: actual_stones,
            });
        }
        Ok(Self {
            cups_per_player,
            stones_per_cup,
            pits,
            to_move,
        })
    }

    pub fn cups_per_player(&self) -> usize {
        self.cups_per_player
    }

    pub fn stones_per_cup(&self) -> u32 {
        self.stones_per_cup
    }

    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Read-only view of all pits, in board order.
    pub fn pits(&self) -> &[u32] {
        &self.pits
    }

    /// The index of `player`'s house.
    pub fn house(&self, player: Player) -> usize {
        player.index() * (self.cups_per_player + 1) + self.cups_per_player
    }

    /// The indices of `player`'s cups.
    pub fn cups(&self, player: Player) -> Range<usize> {
        let first = player.index() * (self.cups_per_player + 1);
        first..first + self.cups_per_player
    }

    /// Both house counts, indexed by [`Player::index`].
    pub fn scores(&self) -> [u32; 2] {
        [
            self.pits[self.house(Player::One)],
            self.pits[self.house(Player::Two)],
        ]
    }

    /// Every cup the player to move can sow from, in ascending pit order.
    ///
    /// Empty exactly when the mover's row is empty, which is a terminal
    /// position.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cups(self.to_move)
            .filter(|&pit| self.pits[pit] > 0)
            .collect()
    }

    /// Whether the game is over: a row has run out of stones, or a house
    /// already holds at least half of all stones and the outcome is decided.
    pub fn is_terminal(&self) -> bool {
        if self.row_is_empty(Player::One) || self.row_is_empty(Player::Two) {
            return true;
        }
        let majority = self.total_stones() / 2;
        self.scores().iter().any(|&banked| banked >= majority)
    }

    /// Sows the stones from `pit` and resolves capture, extra turn and the
    /// end sweep.
    ///
    /// On error the board is left untouched.
    ///
    /// # Panics
    ///
    /// If the move breaks stone conservation, which would mean the rules
    /// implementation itself is broken.
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveOutcome, IllegalMove> {
        let mover = self.to_move;
        if pit >= self.pits.len() {
            return Err(IllegalMove::OutOfBounds { pit });
        }
        if !self.cups(mover).contains(&pit) {
            return Err(IllegalMove::NotMoversCup { pit, mover });
        }
        if self.pits[pit] == 0 {
            return Err(IllegalMove::EmptyCup { pit });
        }

        let own_house = self.house(mover);
        let opponent_house = self.house(mover.opponent());

        // Sow one stone per pit in ascending order, wrapping around and
        // passing over the opponent's house without depositing.
        let mut stones = std::mem::replace(&mut self.pits[pit], 0);
        let mut landing_pit = pit;
        while stones > 0 {
            landing_pit = (landing_pit + 1) % self.pits.len();
            if landing_pit == opponent_house {
                continue;
            }
            self.pits[landing_pit] += 1;
            stones -= 1;
        }

        // Landing in an own cup that was empty captures that stone together
        // with the contents of the directly opposite cup, if there are any.
        let mut captured = 0;
        if landing_pit != own_house
            && self.pits[landing_pit] == 1
            && self.cups(mover).contains(&landing_pit)
        {
            let opposite = 2 * self.cups_per_player - landing_pit;
            if self.pits[opposite] > 0 {
                captured = self.pits[opposite] + self.pits[landing_pit];
                self.pits[own_house] += captured;
                self.pits[opposite] = 0;
                self.pits[landing_pit] = 0;
            }
        }

        let extra_turn = landing_pit == own_house;
        if !extra_turn {
            self.to_move = mover.opponent();
        }

        // Once either side has nothing left to sow the game is decided, and
        // the other side banks the remainder of its row.
        for starved in [self.to_move, self.to_move.opponent()] {
            if self.row_is_empty(starved) {
                let other = starved.opponent();
                let other_house = self.house(other);
                for cup in self.cups(other) {
                    self.pits[other_house] += self.pits[cup];
                    self.pits[cup] = 0;
                }
                break;
            }
        }

        assert_eq!(
            self.pits.iter().sum::<u32>(),
            self.total_stones(),
            "stone conservation violated after sowing from pit {}",
            pit
        );

        Ok(MoveOutcome {
            landing_pit,
            extra_turn,
            captured,
        })
    }

    fn row_is_empty(&self, player: Player) -> bool {
        self.cups(player).all(|pit| self.pits[pit] == 0)
    }

    fn total_stones(&self) -> u32 {
        2 * self.cups_per_player as u32 * self.stones_per_cup
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ReachablePosition;

    fn board_6x6(pits: Vec<u32>, to_move: Player) -> Board {
        Board::from_pits(6, 6, pits, to_move).unwrap()
    }

    #[test]
    fn fresh_board_layout() {
        let board = Board::new(6, 6).unwrap();
        assert_eq!(
            board.pits(),
            &[6, 6, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0]
        );
        assert_eq!(board.current_player(), Player::One);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(board.scores(), [0, 0]);
        assert!(!board.is_terminal());
    }

    #[test]
    fn rejects_zero_geometry() {
        assert_eq!(Board::new(0, 6), Err(InvalidBoardConfig::NoCups));
        assert_eq!(Board::new(6, 0), Err(InvalidBoardConfig::NoStones));
    }

    #[test]
    fn from_pits_validates_the_restored_layout() {
        assert_eq!(
            Board::from_pits(6, 6, vec![6; 13], Player::One),
            Err(InvalidBoardConfig::WrongPitCount {
                expected: 14,
                actual: 13
            })
        );
        assert_eq!(
            Board::from_pits(6, 6, vec![6; 14], Player::One),
            Err(InvalidBoardConfig::WrongStoneCount {
                expected: 72,
                actual: 84
            })
        );
        let pits = vec![6, 6, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0];
        let board = Board::from_pits(6, 6, pits.clone(), Player::Two).unwrap();
        assert_eq!(board.pits(), pits.as_slice());
        assert_eq!(board.current_player(), Player::Two);
    }

    #[test]
    fn landing_in_the_own_house_keeps_the_turn() {
        let mut board = Board::new(6, 6).unwrap();
        let outcome = board.apply_move(0).unwrap();
        assert_eq!(outcome.landing_pit, 6);
        assert!(outcome.extra_turn);
        assert_eq!(board.current_player(), Player::One);
        assert_eq!(board.scores(), [1, 0]);
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn landing_anywhere_else_passes_the_turn() {
        let mut board = Board::new(6, 6).unwrap();
        let outcome = board.apply_move(2).unwrap();
        assert_eq!(outcome.landing_pit, 8);
        assert!(!outcome.extra_turn);
        assert_eq!(board.current_player(), Player::Two);
    }

    #[test]
    fn capture_takes_the_opposite_cup() {
        let mut board = board_6x6(
            vec![4, 1, 0, 6, 6, 6, 10, 6, 6, 6, 5, 6, 6, 4],
            Player::One,
        );
        let outcome = board.apply_move(1).unwrap();
        assert_eq!(outcome.landing_pit, 2);
        assert_eq!(outcome.captured, 6);
        assert_eq!(board.pits()[2], 0);
        assert_eq!(board.pits()[10], 0);
        assert_eq!(board.scores(), [16, 4]);
        assert_eq!(board.current_player(), Player::Two);
    }

    #[test]
    fn no_capture_when_the_opposite_cup_is_empty() {
        let mut board = board_6x6(
            vec![4, 1, 0, 6, 6, 6, 10, 6, 6, 6, 0, 6, 6, 9],
            Player::One,
        );
        let outcome = board.apply_move(1).unwrap();
        assert_eq!(outcome.landing_pit, 2);
        assert_eq!(outcome.captured, 0);
        assert_eq!(board.pits()[2], 1);
        assert_eq!(board.scores(), [10, 9]);
    }

    #[test]
    fn sowing_skips_the_opponents_house() {
        let mut board = board_6x6(
            vec![4, 6, 6, 6, 6, 8, 0, 6, 6, 6, 6, 6, 5, 1],
            Player::One,
        );
        let outcome = board.apply_move(5).unwrap();
        // Eight stones from pit 5 reach all the way around: the own house and
        // every opposing cup get one, the opposing house gets none, and the
        // last stone wraps into pit 0.
        assert_eq!(outcome.landing_pit, 0);
        assert_eq!(
            board.pits(),
            &[5, 6, 6, 6, 6, 0, 1, 7, 7, 7, 7, 7, 6, 1]
        );
    }

    #[test]
    fn sweep_fires_for_a_mover_starved_by_their_own_extra_turn() {
        let mut board = board_6x6(
            vec![0, 0, 0, 0, 0, 1, 35, 5, 5, 5, 5, 5, 5, 6],
            Player::One,
        );
        let outcome = board.apply_move(5).unwrap();
        assert!(outcome.extra_turn);
        assert_eq!(board.scores(), [36, 36]);
        assert_eq!(board.pits()[7..13], [0, 0, 0, 0, 0, 0]);
        assert!(board.is_terminal());
    }

    #[test]
    fn sweep_fires_when_the_mover_empties_their_own_row() {
        let mut board =
            Board::from_pits(3, 1, vec![0, 0, 2, 1, 1, 1, 1, 0], Player::One).unwrap();
        let outcome = board.apply_move(2).unwrap();
        assert!(!outcome.extra_turn);
        assert_eq!(board.pits(), &[0, 0, 0, 2, 0, 0, 0, 4]);
        assert_eq!(board.scores(), [2, 4]);
        assert!(board.is_terminal());
    }

    #[test]
    fn a_banked_majority_ends_the_game() {
        let board = board_6x6(
            vec![1, 0, 0, 0, 0, 0, 36, 6, 6, 6, 6, 6, 5, 0],
            Player::One,
        );
        assert!(!board.legal_moves().is_empty());
        assert!(board.is_terminal());
    }

    #[test]
    fn an_empty_row_ends_the_game() {
        let board = board_6x6(
            vec![0, 0, 0, 0, 0, 0, 40, 6, 6, 6, 6, 6, 2, 0],
            Player::One,
        );
        assert!(board.is_terminal());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn illegal_moves_leave_the_board_untouched() {
        let board = Board::new(6, 6).unwrap();

        let mut attempt = board.clone();
        assert_eq!(
            attempt.apply_move(99),
            Err(IllegalMove::OutOfBounds { pit: 99 })
        );
        assert_eq!(attempt, board);

        let mut attempt = board.clone();
        assert_eq!(
            attempt.apply_move(6),
            Err(IllegalMove::NotMoversCup {
                pit: 6,
                mover: Player::One
            })
        );
        assert_eq!(attempt, board);

        let mut attempt = board.clone();
        assert_eq!(
            attempt.apply_move(8),
            Err(IllegalMove::NotMoversCup {
                pit: 8,
                mover: Player::One
            })
        );
        assert_eq!(attempt, board);

        let mut empty_cup = board_6x6(
            vec![0, 7, 6, 6, 6, 6, 5, 6, 6, 6, 6, 6, 6, 0],
            Player::One,
        );
        let before = empty_cup.clone();
        assert_eq!(
            empty_cup.apply_move(0),
            Err(IllegalMove::EmptyCup { pit: 0 })
        );
        assert_eq!(empty_cup, before);
    }

    quickcheck! {
        fn conservation_holds(pos: ReachablePosition) -> bool {
            let board = pos.0;
            let total = 2 * board.cups_per_player() as u32 * board.stones_per_cup();
            board.pits().iter().sum::<u32>() == total
        }

        fn only_legal_moves_succeed(pos: ReachablePosition) -> bool {
            let board = pos.0;
            let legal = board.legal_moves();
            for pit in 0..board.pits().len() + 2 {
                let mut attempt = board.clone();
                let result = attempt.apply_move(pit);
                if legal.contains(&pit) {
                    if result.is_err() {
                        return false;
                    }
                } else if result.is_ok() || attempt != board {
                    return false;
                }
            }
            true
        }

        fn cloning_isolates_the_original(pos: ReachablePosition) -> bool {
            let board = pos.0;
            if board.is_terminal() {
                return true;
            }
            let pits_before = board.pits().to_vec();
            let player_before = board.current_player();
            let mut clone = board.clone();
            let pit = clone.legal_moves()[0];
            clone.apply_move(pit).unwrap();
            board.pits() == pits_before.as_slice() && board.current_player() == player_before
        }

        fn starved_positions_are_fully_swept(pos: ReachablePosition) -> bool {
            let board = pos.0;
            if !board.legal_moves().is_empty() {
                return true;
            }
            let total = 2 * board.cups_per_player() as u32 * board.stones_per_cup();
            board.scores().iter().sum::<u32>() == total
        }
    }
}
