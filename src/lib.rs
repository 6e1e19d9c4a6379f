//! Fang engine library.
//!
//! Exposes the board graph, the turn engine, move strategies, board-file
//! loading, and batch self-play for use by the binaries and integration tests.

pub mod board;
pub mod game;
pub mod protocol;
pub mod selfplay;
pub mod strategy;
