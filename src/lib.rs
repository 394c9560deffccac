//! Rules engine for a human-versus-computer game of Battleships, plus a
//! terminal front end and a high-score store.

mod ai;
mod bitboard;
mod common;
mod config;
mod game;
mod grid;
mod player;
mod player_ai;
mod screen;
mod ship;
mod simulation;
mod tile;
#[cfg(feature = "std")]
mod highscores;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player_cli;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use player::*;
pub use player_ai::*;
pub use screen::*;
pub use ship::*;
pub use simulation::*;
pub use tile::*;
#[cfg(feature = "std")]
pub use highscores::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::{run, PlayOptions};
