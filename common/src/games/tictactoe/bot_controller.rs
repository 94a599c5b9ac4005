use crate::games::RandomSource;
use super::board::Board;
use super::types::{CENTER, CORNERS, Mark};
use super::win_detector::WIN_PATTERNS;

/// Picks the computer's cell with a fixed priority: win, block, center,
/// random corner, then the lowest free index. Returns `None` on a full board.
pub fn choose_computer_move<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    if board.is_full() {
        return None;
    }

    if let Some(index) = find_completing_move(board, Mark::Computer) {
        return Some(index);
    }

    if let Some(index) = find_completing_move(board, Mark::Player) {
        return Some(index);
    }

    if board.is_empty(CENTER) {
        return Some(CENTER);
    }

    if let Some(index) = pick_random_corner(board, rng) {
        return Some(index);
    }

    board.available_moves().first().copied()
}

/// First pattern, in scan order, holding two `mark`s and one empty cell.
fn find_completing_move(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();

    for pattern in WIN_PATTERNS {
        let owned = pattern.iter().filter(|&&index| cells[index] == mark).count();
        if owned != 2 {
            continue;
        }

        if let Some(&free) = pattern.iter().find(|&&index| cells[index] == Mark::Empty) {
            return Some(free);
        }
    }

    None
}

fn pick_random_corner<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let free_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| board.is_empty(index))
        .collect();

    if free_corners.is_empty() {
        return None;
    }

    let choice = rng.pick_index(free_corners.len());
    free_corners.get(choice).copied()
}
