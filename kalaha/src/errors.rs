use crate::Player;

/// The error type for [`Board::apply_move`](crate::Board::apply_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { pit: usize },
    NotMoversCup { pit: usize, mover: Player },
    EmptyCup { pit: usize },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { pit } =>
                write!(f, "Pit index {} does not exist on this board", pit),
            IllegalMove::NotMoversCup { pit, mover } =>
                write!(f, "Pit {} is not a cup belonging to {}", pit, mover),
            IllegalMove::EmptyCup { pit } =>
                write!(f, "Cup {} holds no stones", pit),
        }
    }
}

/// The error type for creating or restoring a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidBoardConfig {
    NoCups,
    NoStones,
    WrongPitCount { expected: usize, actual: usize },
    WrongStoneCount { expected: u32, actual: u32 },
}

impl std::error::Error for InvalidBoardConfig {}

impl std::fmt::Display for InvalidBoardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoardConfig::NoCups => {
                write!(f, "A board needs at least one cup per player")
            }
            InvalidBoardConfig::NoStones => {
                write!(f, "A board needs at least one stone per cup")
            }
            InvalidBoardConfig::WrongPitCount { expected, actual } => write!(
                f,
                "Restored a board with {} pits, but the geometry requires {}",
                actual, expected
            ),
            InvalidBoardConfig::WrongStoneCount { expected, actual } => write!(
                f,
                "Restored a board holding {} stones, but the geometry requires {}",
                actual, expected
            ),
        }
    }
}
