//! Grid module - tile storage for the 4x4 board.
//!
//! The grid is a flat row-major array of optional tiles for cache locality
//! and zero-allocation access. Coordinates: (x, y) where x ranges 0..3
//! (left to right) and y ranges 0..3 (top to bottom). A cell holds at most
//! one tile; a tile's position fields always agree with the cell it occupies.

use arrayvec::ArrayVec;

use crate::types::{CELL_COUNT, GRID_SIZE};

/// A single numbered tile.
///
/// `id` is a stable identity assigned by the engine so presentation layers
/// can track tiles across snapshots. `merged_this_turn` marks a tile created
/// by a merge during the current move; it blocks double-merging and is
/// cleared before the move returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: u32,
    pub value: u32,
    pub x: i8,
    pub y: i8,
    pub merged_this_turn: bool,
}

impl Tile {
    pub fn new(id: u32, value: u32, x: i8, y: i8) -> Self {
        Self {
            id,
            value,
            x,
            y,
            merged_this_turn: false,
        }
    }
}

/// Cell on the grid (None = empty).
pub type Cell = Option<Tile>;

/// The game grid - 4x4 using flat array storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * GRID_SIZE + x).
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_SIZE as i8 || y < 0 || y >= GRID_SIZE as i8 {
            return None;
        }
        Some((y as usize) * (GRID_SIZE as usize) + (x as usize))
    }

    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Remove and return the tile at (x, y), leaving the cell empty.
    pub fn take(&mut self, x: i8, y: i8) -> Cell {
        Self::index(x, y).and_then(|idx| self.cells[idx].take())
    }

    /// Check if position is within bounds and empty.
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and holds a tile.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= GRID_SIZE as i8 || y < 0 || y >= GRID_SIZE as i8
    }

    /// Collect all empty cell coordinates (zero-allocation).
    pub fn empty_cells(&self) -> ArrayVec<(i8, i8), CELL_COUNT> {
        let mut empty = ArrayVec::new();
        for y in 0..GRID_SIZE as i8 {
            for x in 0..GRID_SIZE as i8 {
                if self.is_empty(x, y) {
                    empty.push((x, y));
                }
            }
        }
        empty
    }

    /// Iterate all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Sum of all tile values on the grid.
    pub fn value_sum(&self) -> u64 {
        self.tiles().map(|tile| tile.value as u64).sum()
    }

    /// Clear the `merged_this_turn` flag on every tile.
    pub fn clear_merged_flags(&mut self) {
        for cell in &mut self.cells {
            if let Some(tile) = cell {
                tile.merged_this_turn = false;
            }
        }
    }

    /// Clear the entire grid.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write tile values into a 2D array (0 = empty), for snapshots.
    pub fn write_value_grid(&self, out: &mut [[u32; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        for y in 0..GRID_SIZE as usize {
            for x in 0..GRID_SIZE as usize {
                out[y][x] = self.cells[y * GRID_SIZE as usize + x]
                    .map(|tile| tile.value)
                    .unwrap_or(0);
            }
        }
    }

    /// Build a grid from a 2D value array (0 = empty).
    ///
    /// Tiles get sequential ids starting at 1. Intended for tests and
    /// tooling; gameplay grids are built through the engine.
    pub fn from_values(values: [[u32; GRID_SIZE as usize]; GRID_SIZE as usize]) -> Self {
        let mut grid = Self::new();
        let mut next_id = 1;
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    grid.set(x as i8, y as i8, Some(Tile::new(next_id, value, x as i8, y as i8)));
                    next_id += 1;
                }
            }
        }
        grid
    }

    /// Convert to a 2D value array (0 = empty).
    pub fn to_values(&self) -> [[u32; GRID_SIZE as usize]; GRID_SIZE as usize] {
        let mut out = [[0u32; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.write_value_grid(&mut out);
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
