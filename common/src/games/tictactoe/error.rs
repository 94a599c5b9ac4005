use super::types::{GameResult, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied,
    EmptyMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidMove {
        index: usize,
        reason: InvalidMoveReason,
    },
    GameOver {
        result: GameResult,
    },
    OutOfTurn {
        expected: Turn,
    },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidMove { index, reason } => match reason {
                InvalidMoveReason::OutOfRange => write!(f, "Cell {} is out of range", index),
                InvalidMoveReason::Occupied => write!(f, "Cell {} is already marked", index),
                InvalidMoveReason::EmptyMark => {
                    write!(f, "Cannot place an empty mark on cell {}", index)
                }
            },
            MoveError::GameOver { result } => write!(f, "Game is already over: {:?}", result),
            MoveError::OutOfTurn { expected } => {
                write!(f, "Not your turn, waiting for {:?}", expected)
            }
        }
    }
}

impl std::error::Error for MoveError {}
