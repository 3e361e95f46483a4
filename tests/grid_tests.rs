//! Grid tests - storage invariants for the 4x4 board

use tui_2048::core::{Grid, Tile};
use tui_2048::types::{CELL_COUNT, GRID_SIZE};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.size(), GRID_SIZE);
    assert_eq!(grid.tile_count(), 0);

    for y in 0..GRID_SIZE as i8 {
        for x in 0..GRID_SIZE as i8 {
            assert!(grid.is_empty(x, y), "cell ({}, {}) should be empty", x, y);
            assert_eq!(grid.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new();

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_SIZE as i8, 0), None);
    assert_eq!(grid.get(0, GRID_SIZE as i8), None);

    assert!(grid.is_out_of_bounds(-1, 0));
    assert!(grid.is_out_of_bounds(GRID_SIZE as i8, 3));
    assert!(!grid.is_out_of_bounds(0, 0));
}

#[test]
fn test_grid_set_out_of_bounds_rejected() {
    let mut grid = Grid::new();
    assert!(!grid.set(-1, 0, Some(Tile::new(1, 2, -1, 0))));
    assert!(!grid.set(0, GRID_SIZE as i8, Some(Tile::new(1, 2, 0, GRID_SIZE as i8))));
    assert_eq!(grid.tile_count(), 0);
}

#[test]
fn test_grid_cell_holds_at_most_one_tile() {
    let mut grid = Grid::new();
    grid.set(1, 1, Some(Tile::new(1, 2, 1, 1)));
    grid.set(1, 1, Some(Tile::new(2, 4, 1, 1)));

    // Second set replaces, never stacks.
    assert_eq!(grid.tile_count(), 1);
    assert_eq!(grid.get(1, 1).unwrap().unwrap().value, 4);
}

#[test]
fn test_grid_take_empties_cell() {
    let mut grid = Grid::new();
    let tile = Tile::new(9, 8, 2, 3);
    grid.set(2, 3, Some(tile));

    assert_eq!(grid.take(2, 3), Some(tile));
    assert!(grid.is_empty(2, 3));
    assert_eq!(grid.take(2, 3), None);
}

#[test]
fn test_grid_empty_cells_and_value_sum() {
    let grid = Grid::from_values([
        [2, 4, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 8, 0],
        [0, 0, 0, 0],
    ]);

    assert_eq!(grid.empty_cells().len(), CELL_COUNT - 3);
    assert_eq!(grid.tile_count(), 3);
    assert_eq!(grid.value_sum(), 14);
}

#[test]
fn test_grid_value_roundtrip() {
    let values = [
        [2, 0, 4, 0],
        [0, 16, 0, 0],
        [0, 0, 0, 32],
        [8, 0, 0, 2],
    ];
    let grid = Grid::from_values(values);
    assert_eq!(grid.to_values(), values);

    // Every tile's position fields agree with the cell holding it.
    for tile in grid.tiles() {
        assert_eq!(grid.get(tile.x, tile.y), Some(Some(tile)));
    }
}

#[test]
fn test_grid_clear() {
    let mut grid = Grid::from_values([[2; 4]; 4]);
    assert_eq!(grid.tile_count(), CELL_COUNT);

    grid.clear();
    assert_eq!(grid.tile_count(), 0);
}
