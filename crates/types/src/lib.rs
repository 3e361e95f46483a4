//! Core types shared across the application.
//!
//! Pure data types and constants with no external dependencies, usable from
//! the engine, the input layer, and the terminal renderer alike.

/// Grid is square, `GRID_SIZE` cells per side.
pub const GRID_SIZE: u8 = 4;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of tiles placed by a new game.
pub const STARTING_TILES: usize = 2;

/// Spawned tile values. One spawn in [`HIGH_SPAWN_ODDS`] produces the high
/// value, the rest produce the low value (0.9 / 0.1 split).
pub const SPAWN_VALUE_LOW: u32 = 2;
pub const SPAWN_VALUE_HIGH: u32 = 4;
pub const HIGH_SPAWN_ODDS: u32 = 10;

/// Delay between accepting a move and committing the spawn/terminal check,
/// so the presentation layer can finish its slide animation (milliseconds).
pub const SETTLE_DELAY_MS: u64 = 120;

/// The four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)`; `x` grows right, `y` grows down.
    pub fn vector(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    NewGame,
}
