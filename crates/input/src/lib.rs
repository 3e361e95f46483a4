//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine
//! itself never sees key codes; anything that is not a recognized action is
//! ignored here, and input arriving while the engine is busy is dropped by
//! the engine's own reentrancy guard.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
