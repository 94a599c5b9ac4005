use super::board::Board;
use super::types::{GameResult, Mark, WinPattern, WinningLine};

/// Rows, then columns, then diagonals. Scan order decides which line is reported first.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for pattern in WIN_PATTERNS {
        let [a, b, c] = pattern;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, pattern));
        }
    }

    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn evaluate(board: &Board) -> GameResult {
    if let Some(mark) = check_win(board) {
        return GameResult::Won(mark);
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
