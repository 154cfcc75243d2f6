#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod collision;
mod common;
mod config;
mod drift;
mod game;
mod graph;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
pub mod metro;
mod path;
mod placement;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError, ShotMask};
pub use board::*;
pub use collision::*;
pub use common::*;
pub use config::*;
pub use drift::*;
pub use game::*;
pub use graph::*;
#[cfg(feature = "std")]
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use path::*;
pub use placement::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
