//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the complete 2048 rule set with **zero dependencies**
//! on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same spawn sequence
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile storage with bounds-checked access
//! - [`engine`]: the move state machine (slide, merge, re-slide, spawn,
//!   terminal detection)
//! - [`rng`]: seedable LCG used for tile spawning
//! - [`snapshot`]: full-state export for renderers
//!
//! # Game Rules
//!
//! A move slides every tile as far as possible in the chosen direction,
//! merges equal adjacent pairs once each (a merge product never merges again
//! in the same move), then slides again to close the gaps merges leave
//! behind. A move that changed the grid is followed by one random spawn
//! (2 at 90%, 4 at 10%); the game ends when the grid is full and no equal
//! neighbors remain.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameEngine;
//! use tui_2048_types::Direction;
//!
//! let mut engine = GameEngine::new(12345);
//! engine.new_game();
//!
//! let result = engine.apply_move(Direction::Left);
//! if result.moved {
//!     // Spawn a tile and find out whether the game just ended. A real
//!     // front-end defers this call until its slide animation settles.
//!     let game_over = engine.commit_spawn_and_check();
//!     assert!(!game_over);
//! }
//! ```

pub mod engine;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{GameEngine, MoveResult, Phase};
pub use grid::{Cell, Grid, Tile};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, TileSnapshot};
