//! Two-player, turn-based console Battleship.
//!
//! The library half holds the board model (grid, ships, fleets) and the
//! round state machine; `console` supplies the interactive session the
//! binary runs, and `ui` renders boards and summaries to strings.

mod common;
mod config;
pub mod console;
mod fleet;
mod game;
mod grid;
mod logging;
mod player;
mod ship;
mod shot;
pub mod ui;

pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
pub use shot::*;
