//! Dodge the falling obstacles on a 5x5 LED matrix.
//!
//! The game logic lives here, independent of any board. Everything that
//! touches hardware (LEDs, buttons, the random source and the delay) is
//! reached through the traits in [`hardware`], so the firmware in
//! `microbit/` and the host tests drive the very same state machine.
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod trace;

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod explosion;
pub mod game;
pub mod hardware;
pub mod obstacle;
pub mod player;
pub mod render;

#[cfg(test)]
mod testing;

pub use board::{Board, Frame, SIZE};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Game, GameState, Phase, TurnOutcome};
pub use hardware::{Buttons, ColumnSource, LedMatrix};
pub use player::Position;
