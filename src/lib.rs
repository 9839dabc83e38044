//! Ink Reef: a single-screen underwater arcade game.
//!
//! Core modules:
//! - `entities`: plain game data and the `GameSession` struct
//! - `compute`: the per-frame `tick` and input-driven state transitions
//! - `level`: per-level entity placement
//! - `render`: session → draw commands, with sprite fallbacks
//!
//! Nothing in the library touches the terminal; the binary hosts it.

pub mod assets;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod level;
pub mod render;
pub mod spawn;

pub use collision::{overlaps, Bounded, Rect};
pub use compute::{confirm, go_to_start_screen, start_game, tick};
pub use config::{BossPolicy, GameConfig};
pub use entities::{GameSession, GameStatus, Outcome, TickInput};
