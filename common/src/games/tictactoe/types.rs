use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    Player,
    Computer,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::Player => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Player),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Mark::Player => Some('O'),
            Mark::Computer => Some('X'),
            Mark::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Player,
    Computer,
}

impl Turn {
    pub fn mark(self) -> Mark {
        match self {
            Turn::Player => Mark::Player,
            Turn::Computer => Mark::Computer,
        }
    }

    pub fn next(self) -> Turn {
        match self {
            Turn::Player => Turn::Computer,
            Turn::Computer => Turn::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }
}

/// Where the session stands, derived from the turn and the evaluated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    PlayerTurn,
    ComputerTurn,
    Finished(GameResult),
}

/// Row/column view of a cell index, row-major over the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIDE, index % BOARD_SIDE))
    }

    pub fn index(&self) -> Option<usize> {
        if self.row >= BOARD_SIDE || self.col >= BOARD_SIDE {
            return None;
        }
        Some(self.row * BOARD_SIDE + self.col)
    }
}

pub type WinPattern = [usize; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: WinPattern,
}

impl WinningLine {
    pub fn new(mark: Mark, cells: WinPattern) -> Self {
        Self { mark, cells }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub turn: Turn,
    pub index: usize,
}
