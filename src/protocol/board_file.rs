//! JSON board files.
//!
//! A board file names its vertices and connects them by name:
//!
//! ```json
//! {
//!   "directed": false,
//!   "vertices": [
//!     { "name": "harbour" },
//!     { "name": "mill", "target": true }
//!   ],
//!   "edges": [
//!     { "source": "harbour", "target": "mill", "boeg_only": false }
//!   ]
//! }
//! ```
//!
//! Vertex ids follow file order. Target vertices become candidate goals and
//! every other vertex becomes a station. A repeated vertex name is ignored
//! after its first appearance.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::board::{BoardDescription, BoardGraph, Directedness, EdgeRecord, GraphError, VertexId};

/// Errors that can occur while reading a board file.
#[derive(Debug, thiserror::Error)]
pub enum BoardFileError {
    #[error("failed to read board file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed board file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("edge refers to unknown vertex '{0}'")]
    UnknownVertex(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardFile {
    #[serde(default)]
    directed: bool,
    vertices: Vec<VertexEntry>,
    #[serde(default)]
    edges: Vec<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VertexEntry {
    name: String,
    #[serde(default)]
    target: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    source: String,
    target: String,
    #[serde(default)]
    boeg_only: bool,
}

/// Parses a board file's JSON text into a board description.
pub fn parse_board(json: &str) -> Result<BoardDescription, BoardFileError> {
    let file: BoardFile = serde_json::from_str(json)?;

    let mut ids: HashMap<&str, VertexId> = HashMap::with_capacity(file.vertices.len());
    let mut names = Vec::with_capacity(file.vertices.len());
    let mut target_vertices = Vec::new();
    let mut station_vertices = Vec::new();
    for vertex in &file.vertices {
        if ids.contains_key(vertex.name.as_str()) {
            warn!(name = %vertex.name, "duplicate vertex ignored");
            continue;
        }
        let id = names.len() as VertexId;
        ids.insert(vertex.name.as_str(), id);
        names.push(vertex.name.clone());
        if vertex.target {
            target_vertices.push(id);
        } else {
            station_vertices.push(id);
        }
    }

    let lookup = |name: &str| -> Result<VertexId, BoardFileError> {
        ids.get(name)
            .copied()
            .ok_or_else(|| BoardFileError::UnknownVertex(name.to_string()))
    };
    let edges = file
        .edges
        .iter()
        .map(|e| {
            Ok(EdgeRecord {
                source: lookup(&e.source)?,
                target: lookup(&e.target)?,
                restricted: e.boeg_only,
            })
        })
        .collect::<Result<Vec<_>, BoardFileError>>()?;

    Ok(BoardDescription {
        vertex_count: names.len() as u32,
        directedness: if file.directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        },
        edges,
        target_vertices,
        station_vertices,
        names,
    })
}

/// Reads and builds the board stored at `path`.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<BoardGraph, BoardFileError> {
    let text = fs::read_to_string(path)?;
    let description = parse_board(&text)?;
    Ok(BoardGraph::new(description)?)
}
