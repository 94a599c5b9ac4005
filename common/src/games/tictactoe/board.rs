use super::error::{InvalidMoveReason, MoveError};
use super::types::{CELL_COUNT, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Out-of-range indices report `false`, so callers can pre-filter clicks with this alone.
    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let reason = match self.get(index) {
            None => Some(InvalidMoveReason::OutOfRange),
            Some(Mark::Empty) if mark == Mark::Empty => Some(InvalidMoveReason::EmptyMark),
            Some(Mark::Empty) => None,
            Some(_) => Some(InvalidMoveReason::Occupied),
        };

        if let Some(reason) = reason {
            return Err(MoveError::InvalidMove { index, reason });
        }

        self.cells[index] = mark;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}
