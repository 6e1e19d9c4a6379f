//! External board formats.
//!
//! Boards are authored as JSON documents that name vertices and connect them
//! by name; `board_file` turns them into a `BoardDescription` ready for
//! `BoardGraph::new`.

pub mod board_file;

pub use board_file::{load_board, parse_board, BoardFileError};
