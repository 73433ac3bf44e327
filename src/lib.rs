#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
mod agent;
mod agent_ai;
pub mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
mod scores;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
mod ui;

pub use agent::*;
pub use agent_ai::*;
pub use ai::{select_computer_move, winning_move};
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use scores::*;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use ui::*;
