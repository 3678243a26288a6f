//! Headless arena for varchess bots
//!
//! This crate provides infrastructure for:
//! - Running matches between two difficulty levels on any board size
//! - Recording every game's moves and outcome
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Very Hard against Easy on a 6x6 board
//! cargo run -p arena -- match very-hard easy --games 20 --size 6
//!
//! # Ask one bot for a move
//! cargo run -p arena -- select --layout "2k2/5/5/QR3/2K2" --side white --difficulty hard
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
