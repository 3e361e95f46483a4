//! Engine module - the grid transition state machine.
//!
//! Owns the grid, the score, and the per-move phase. A move is two-phased:
//! [`GameEngine::apply_move`] computes the slide/merge result and returns
//! immediately; [`GameEngine::commit_spawn_and_check`] later performs the
//! spawn and the terminal check. Between the two the engine is busy and
//! drops further input, which is what lets the presentation layer run its
//! settle animation without the core depending on wall-clock time.

use crate::grid::{Grid, Tile};
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::types::{
    Direction, GRID_SIZE, HIGH_SPAWN_ODDS, SPAWN_VALUE_HIGH, SPAWN_VALUE_LOW, STARTING_TILES,
};

/// Outcome of a single [`GameEngine::apply_move`] call.
///
/// `game_over` is always false here; termination is only decided after the
/// spawn in [`GameEngine::commit_spawn_and_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    pub moved: bool,
    pub score_delta: u32,
    pub game_over: bool,
}

impl MoveResult {
    /// Result for input that was dropped (busy engine or dead session).
    fn rejected() -> Self {
        Self::default()
    }
}

/// Per-move lifecycle phase.
///
/// `Settling` is the busy window between a successful move and its
/// spawn/terminal commit. `GameOver` is terminal until [`GameEngine::new_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Settling,
    GameOver,
}

/// Per-axis iteration order for one move.
///
/// Ascending by default; the axis pointing toward the destination edge is
/// reversed so tiles nearer that edge are processed first and never block a
/// tile that has not slid yet.
struct Traversals {
    xs: [i8; GRID_SIZE as usize],
    ys: [i8; GRID_SIZE as usize],
}

fn build_traversals(dx: i8, dy: i8) -> Traversals {
    let mut xs = [0i8; GRID_SIZE as usize];
    let mut ys = [0i8; GRID_SIZE as usize];
    for i in 0..GRID_SIZE as usize {
        xs[i] = i as i8;
        ys[i] = i as i8;
    }
    if dx == 1 {
        xs.reverse();
    }
    if dy == 1 {
        ys.reverse();
    }
    Traversals { xs, ys }
}

/// The sliding-tile merge engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    score: u32,
    phase: Phase,
    rng: SimpleRng,
    /// Next stable tile id (increments on spawn and on merge).
    next_tile_id: u32,
    /// Monotonic episode id (increments on new game).
    episode_id: u32,
    /// Number of accepted (tile-moving) moves this episode.
    move_count: u32,
}

impl GameEngine {
    /// Create an engine with an empty grid. Call [`Self::new_game`] to play.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            score: 0,
            phase: Phase::Idle,
            rng: SimpleRng::new(seed),
            next_tile_id: 1,
            episode_id: 0,
            move_count: 0,
        }
    }

    /// Create an engine over a prepared grid, for tests and tooling.
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        let next_tile_id = grid.tiles().map(|tile| tile.id).max().unwrap_or(0) + 1;
        Self {
            grid,
            score: 0,
            phase: Phase::Idle,
            rng: SimpleRng::new(seed),
            next_tile_id,
            episode_id: 0,
            move_count: 0,
        }
    }

    /// Reset to a fresh game: empty grid, zero score, two spawned tiles.
    ///
    /// Callable at any time, including from `GameOver`.
    pub fn new_game(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.phase = Phase::Idle;
        self.move_count = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        for _ in 0..STARTING_TILES {
            self.spawn_tile();
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a move awaits its spawn/terminal commit; input is dropped.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Settling
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Apply a directional move: slide, merge, re-slide.
    ///
    /// Input is dropped (all-false result) unless the engine is idle. On a
    /// move that changed the grid the engine enters `Settling` and expects a
    /// [`Self::commit_spawn_and_check`] call; a no-op move stays idle since
    /// nothing will spawn and the terminal condition cannot have changed.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.phase != Phase::Idle {
            return MoveResult::rejected();
        }

        let (dx, dy) = direction.vector();
        let trav = build_traversals(dx, dy);

        let mut moved = self.slide_pass(&trav, dx, dy);
        let (score_delta, merged_any) = self.merge_pass(&trav, dx, dy);
        moved |= merged_any;
        // Merges open gaps behind the merged pair; close them.
        moved |= self.slide_pass(&trav, dx, dy);

        self.grid.clear_merged_flags();
        self.score += score_delta;

        if moved {
            self.move_count += 1;
            self.phase = Phase::Settling;
        }

        MoveResult {
            moved,
            score_delta,
            game_over: false,
        }
    }

    /// Second half of a move: spawn one tile, then check for termination.
    ///
    /// Returns true when the game just ended (or had already ended). Calling
    /// this outside the `Settling` phase changes nothing.
    pub fn commit_spawn_and_check(&mut self) -> bool {
        if self.phase != Phase::Settling {
            return self.phase == Phase::GameOver;
        }

        self.spawn_tile();
        if self.can_move() {
            self.phase = Phase::Idle;
            false
        } else {
            self.phase = Phase::GameOver;
            true
        }
    }

    /// Place a random tile (2 at 90%, 4 at 10%) on a uniformly chosen empty
    /// cell. No-op on a full grid; terminal detection is [`Self::can_move`]'s
    /// job, not this one's.
    pub fn spawn_tile(&mut self) {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return;
        }

        let (x, y) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_range(HIGH_SPAWN_ODDS) == 0 {
            SPAWN_VALUE_HIGH
        } else {
            SPAWN_VALUE_LOW
        };
        let tile = Tile::new(self.alloc_tile_id(), value, x, y);
        self.grid.set(x, y, Some(tile));
    }

    /// True if any legal move remains: an empty cell, or a right- or
    /// down-neighbor of equal value.
    pub fn can_move(&self) -> bool {
        for y in 0..GRID_SIZE as i8 {
            for x in 0..GRID_SIZE as i8 {
                let Some(Some(tile)) = self.grid.get(x, y) else {
                    return true;
                };
                if let Some(Some(right)) = self.grid.get(x + 1, y) {
                    if right.value == tile.value {
                        return true;
                    }
                }
                if let Some(Some(down)) = self.grid.get(x, y + 1) {
                    if down.value == tile.value {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_value_grid(&mut out.cells);
        out.tiles.clear();
        for tile in self.grid.tiles() {
            out.tiles.push(TileSnapshot::from(tile));
        }
        out.score = self.score;
        out.busy = self.is_busy();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.move_count = self.move_count;
        out.seed = self.rng.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn alloc_tile_id(&mut self) -> u32 {
        let id = self.next_tile_id;
        self.next_tile_id = self.next_tile_id.wrapping_add(1);
        id
    }

    /// Slide every tile as far as it goes along the vector. Returns whether
    /// any tile changed cell.
    fn slide_pass(&mut self, trav: &Traversals, dx: i8, dy: i8) -> bool {
        let mut moved = false;
        for &y in &trav.ys {
            for &x in &trav.xs {
                if !self.grid.is_occupied(x, y) {
                    continue;
                }

                // Furthest empty cell reachable along the vector.
                let (mut fx, mut fy) = (x, y);
                let (mut nx, mut ny) = (x + dx, y + dy);
                while self.grid.is_empty(nx, ny) {
                    (fx, fy) = (nx, ny);
                    (nx, ny) = (nx + dx, ny + dy);
                }

                if (fx, fy) != (x, y) {
                    if let Some(mut tile) = self.grid.take(x, y) {
                        tile.x = fx;
                        tile.y = fy;
                        self.grid.set(fx, fy, Some(tile));
                        moved = true;
                    }
                }
            }
        }
        moved
    }

    /// Merge equal adjacent pairs along the vector. Each tile merges at most
    /// once per move: the replacement tile carries `merged_this_turn` and is
    /// skipped by later pairings. Returns (score delta, merged anything).
    fn merge_pass(&mut self, trav: &Traversals, dx: i8, dy: i8) -> (u32, bool) {
        let mut score_delta = 0;
        let mut merged_any = false;

        for &y in &trav.ys {
            for &x in &trav.xs {
                let Some(Some(current)) = self.grid.get(x, y) else {
                    continue;
                };
                let (nx, ny) = (x + dx, y + dy);
                let Some(Some(neighbor)) = self.grid.get(nx, ny) else {
                    continue;
                };
                if neighbor.value != current.value
                    || neighbor.merged_this_turn
                    || current.merged_this_turn
                {
                    continue;
                }

                // Both source tiles are consumed; the product is a new tile
                // with a fresh identity at the neighbor cell.
                self.grid.take(x, y);
                self.grid.take(nx, ny);
                let mut product = Tile::new(self.alloc_tile_id(), current.value * 2, nx, ny);
                product.merged_this_turn = true;
                score_delta += product.value;
                self.grid.set(nx, ny, Some(product));
                merged_any = true;
            }
        }

        (score_delta, merged_any)
    }
}
