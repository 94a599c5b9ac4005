mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::choose_computer_move;
pub use error::{InvalidMoveReason, MoveError};
pub use game_state::{GameSnapshot, TicTacToeGame};
pub use types::{
    BOARD_SIDE, CELL_COUNT, CENTER, CORNERS, GamePhase, GameResult, Mark, MoveRecord, Position,
    Turn, WinPattern, WinningLine,
};
pub use win_detector::{WIN_PATTERNS, check_win, check_win_with_line, evaluate};
