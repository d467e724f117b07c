//! Match orchestration for Reversi
//!
//! This crate provides the infrastructure around the core rules:
//! - The turn-driven game loop connecting two players and a notifier
//! - Console and silent notifiers for game progress output
//! - A series runner for repeated games with seat rotation
//!
//! # Usage
//!
//! ```bash
//! # Play an interactive game against the random baseline
//! cargo run -p arena -- play
//!
//! # Run a 20 game series between two random players
//! cargo run -p arena -- series random random --games 20
//! ```

mod game;
mod notifier;
mod series;

pub use game::*;
pub use notifier::*;
pub use series::*;
