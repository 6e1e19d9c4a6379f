//! Board representation.
//!
//! Contains the static board graph, its search primitives, and the reusable
//! scratch buffers those searches write into.

pub mod graph;
pub mod query;

pub use graph::{
    BoardDescription, BoardGraph, Directedness, Edge, EdgeRecord, GraphError, VertexId,
};
pub use query::SearchScratch;
