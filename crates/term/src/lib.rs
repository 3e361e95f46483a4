//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board is drawn into a simple
//! framebuffer of styled cells which is then flushed to the terminal. No
//! widget/layout framework; this keeps `core` deterministic and lets the
//! view itself be unit-tested without a TTY.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
