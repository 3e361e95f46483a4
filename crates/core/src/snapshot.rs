//! Render-facing state export.
//!
//! The renderer pulls a full snapshot after every move (the grid is small
//! enough that no diff contract is needed). `tiles` carries stable ids so a
//! presentation layer can key view models across frames.

use arrayvec::ArrayVec;

use crate::grid::Tile;
use crate::types::{CELL_COUNT, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub id: u32,
    pub value: u32,
    pub x: i8,
    pub y: i8,
}

impl From<Tile> for TileSnapshot {
    fn from(tile: Tile) -> Self {
        Self {
            id: tile.id,
            value: tile.value,
            x: tile.x,
            y: tile.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Tile values by cell, row-major; 0 = empty.
    pub cells: [[u32; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub tiles: ArrayVec<TileSnapshot, CELL_COUNT>,
    pub score: u32,
    pub busy: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub move_count: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[0u32; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.tiles.clear();
        self.score = 0;
        self.busy = false;
        self.game_over = false;
        self.episode_id = 0;
        self.move_count = 0;
        self.seed = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[0u32; GRID_SIZE as usize]; GRID_SIZE as usize],
            tiles: ArrayVec::new(),
            score: 0,
            busy: false,
            game_over: false,
            episode_id: 0,
            move_count: 0,
            seed: 0,
        }
    }
}
