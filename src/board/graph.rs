//! Static board graph.
//!
//! The board is stored in compressed adjacency form: `offsets[v]..offsets[v+1]`
//! indexes the outgoing edges of vertex `v` in one flat edge array. Undirected
//! boards store every edge twice, once per direction. Edges come in two
//! classes: normal edges usable by everyone, and restricted edges usable only
//! by whoever is currently moving the Boeg.
//!
//! Besides breadth-first shortest paths, the graph answers two bounded
//! simple-path questions used by the move rules: "is there a simple path of
//! exactly `n` edges from A to B" and "which vertices end a simple path of
//! exactly `n` edges from A". Both use an explicit-stack depth-first walk
//! with per-call buffers, so `&self` stays immutable during every query.

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use super::query::SearchScratch;

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = u32;

/// Errors raised while building or querying a board graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a board with {count} vertices")]
    VertexOutOfRange { vertex: VertexId, count: u32 },

    #[error("vertex {0} is listed more than once among target and station vertices")]
    OverlappingVertexSets(VertexId),

    #[error("board has no station vertices")]
    NoStations,

    #[error("board has {available} target vertices, {required} are required")]
    InsufficientTargets { required: usize, available: usize },

    #[error("{players} players with {targets_per_player} targets each is more than any board holds")]
    CapacityOverflow {
        players: usize,
        targets_per_player: usize,
    },

    #[error("expected {expected} vertex names, got {found}")]
    NameCount { expected: usize, found: usize },

    #[error("no simple path from {from} to {to} of length {length}")]
    PathNotFound {
        from: VertexId,
        to: VertexId,
        length: u32,
    },
}

/// Whether each edge record describes one or both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directedness {
    Directed,
    #[default]
    Undirected,
}

/// One edge as delivered by a board loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: VertexId,
    pub target: VertexId,
    /// Only the Boeg may travel along this edge.
    #[serde(default)]
    pub restricted: bool,
}

impl EdgeRecord {
    /// Shorthand for an edge everyone may use.
    pub const fn normal(source: VertexId, target: VertexId) -> Self {
        EdgeRecord {
            source,
            target,
            restricted: false,
        }
    }

    /// Shorthand for a Boeg-only edge.
    pub const fn restricted(source: VertexId, target: VertexId) -> Self {
        EdgeRecord {
            source,
            target,
            restricted: true,
        }
    }
}

/// Pre-parsed board: everything `BoardGraph::new` needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDescription {
    pub vertex_count: u32,
    #[serde(default)]
    pub directedness: Directedness,
    pub edges: Vec<EdgeRecord>,
    /// Candidate goal locations.
    pub target_vertices: Vec<VertexId>,
    /// Valid non-target starting locations.
    pub station_vertices: Vec<VertexId>,
    /// Optional display names, one per vertex.
    #[serde(default)]
    pub names: Vec<String>,
}

/// A stored outgoing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub neighbor: VertexId,
    pub restricted: bool,
}

impl Edge {
    /// Returns whether a mover with the given rights may use this edge.
    #[inline]
    pub fn is_usable(&self, allow_restricted: bool) -> bool {
        allow_restricted || !self.restricted
    }
}

/// Immutable board graph in compressed adjacency layout.
#[derive(Debug, Clone)]
pub struct BoardGraph {
    vertex_count: u32,
    directedness: Directedness,
    offsets: Vec<u32>,
    edges: Vec<Edge>,
    target_vertices: Vec<VertexId>,
    station_vertices: Vec<VertexId>,
    names: Vec<String>,
}

impl BoardGraph {
    /// Builds the graph from a loader's description.
    ///
    /// Fails if any edge or listed vertex is out of range, if a vertex is
    /// listed twice among targets and stations, or if there are no stations.
    pub fn new(description: BoardDescription) -> Result<Self, GraphError> {
        let BoardDescription {
            vertex_count,
            directedness,
            edges: records,
            target_vertices,
            station_vertices,
            names,
        } = description;

        let check = |v: VertexId| -> Result<(), GraphError> {
            if v < vertex_count {
                Ok(())
            } else {
                Err(GraphError::VertexOutOfRange {
                    vertex: v,
                    count: vertex_count,
                })
            }
        };

        let mut listed = vec![false; vertex_count as usize];
        for &v in target_vertices.iter().chain(station_vertices.iter()) {
            check(v)?;
            if listed[v as usize] {
                return Err(GraphError::OverlappingVertexSets(v));
            }
            listed[v as usize] = true;
        }
        if station_vertices.is_empty() {
            return Err(GraphError::NoStations);
        }
        if !names.is_empty() && names.len() != vertex_count as usize {
            return Err(GraphError::NameCount {
                expected: vertex_count as usize,
                found: names.len(),
            });
        }

        // Count out-degrees, then bucket each directed edge under its source.
        let mut counts = vec![0u32; vertex_count as usize];
        let mut directed: Vec<(VertexId, Edge)> = Vec::with_capacity(match directedness {
            Directedness::Directed => records.len(),
            Directedness::Undirected => records.len() * 2,
        });
        for rec in &records {
            check(rec.source)?;
            check(rec.target)?;
            counts[rec.source as usize] += 1;
            directed.push((
                rec.source,
                Edge {
                    neighbor: rec.target,
                    restricted: rec.restricted,
                },
            ));
            if directedness == Directedness::Undirected {
                counts[rec.target as usize] += 1;
                directed.push((
                    rec.target,
                    Edge {
                        neighbor: rec.source,
                        restricted: rec.restricted,
                    },
                ));
            }
        }

        let mut offsets = Vec::with_capacity(vertex_count as usize + 1);
        offsets.push(0u32);
        let mut running = 0u32;
        for &c in &counts {
            running += c;
            offsets.push(running);
        }

        counts.fill(0);
        let placeholder = Edge {
            neighbor: 0,
            restricted: false,
        };
        let mut edges = vec![placeholder; directed.len()];
        for (source, edge) in directed {
            let slot = offsets[source as usize] + counts[source as usize];
            counts[source as usize] += 1;
            edges[slot as usize] = edge;
        }

        Ok(BoardGraph {
            vertex_count,
            directedness,
            offsets,
            edges,
            target_vertices,
            station_vertices,
            names,
        })
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Number of board edges; undirected edges count once.
    pub fn edge_count(&self) -> usize {
        match self.directedness {
            Directedness::Directed => self.edges.len(),
            Directedness::Undirected => self.edges.len() / 2,
        }
    }

    /// Length of the flat directed edge array.
    pub fn raw_edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn target_vertices(&self) -> &[VertexId] {
        &self.target_vertices
    }

    pub fn station_vertices(&self) -> &[VertexId] {
        &self.station_vertices
    }

    /// Display name of a vertex, if the loader provided names.
    pub fn vertex_name(&self, v: VertexId) -> Option<&str> {
        self.names.get(v as usize).map(String::as_str)
    }

    /// Outgoing edges of `v`.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[Edge] {
        let start = self.offsets[v as usize] as usize;
        let end = self.offsets[v as usize + 1] as usize;
        &self.edges[start..end]
    }

    /// Returns the compressed-layout offsets (length `vertex_count + 1`).
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Allocates scratch buffers sized for this board.
    pub fn new_scratch(&self) -> SearchScratch {
        SearchScratch::new(self.vertex_count as usize)
    }

    /// Checks that the board can seat `players` players with
    /// `targets_per_player` targets each, plus one spare target for the Boeg.
    pub fn ensure_capacity(
        &self,
        players: usize,
        targets_per_player: usize,
    ) -> Result<(), GraphError> {
        let required = players
            .checked_mul(targets_per_player)
            .and_then(|dealt| dealt.checked_add(1))
            .ok_or(GraphError::CapacityOverflow {
                players,
                targets_per_player,
            })?;
        if self.target_vertices.len() < required {
            return Err(GraphError::InsufficientTargets {
                required,
                available: self.target_vertices.len(),
            });
        }
        if self.station_vertices.is_empty() {
            return Err(GraphError::NoStations);
        }
        Ok(())
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if v < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                count: self.vertex_count,
            })
        }
    }

    /// Breadth-first traversal from `source`, recording hop distances and
    /// parent pointers in `scratch`.
    pub fn shortest_paths(
        &self,
        source: VertexId,
        scratch: &mut SearchScratch,
        allow_restricted: bool,
    ) -> Result<(), GraphError> {
        self.check_vertex(source)?;
        scratch.reset(self.vertex_count as usize);
        scratch.source = Some(source);
        scratch.visited[source as usize] = true;
        scratch.queue.push_back(source);

        while let Some(v) = scratch.queue.pop_front() {
            let next = scratch.distance[v as usize] + 1;
            for edge in self.neighbors(v) {
                let n = edge.neighbor as usize;
                if edge.is_usable(allow_restricted) && !scratch.visited[n] {
                    scratch.visited[n] = true;
                    scratch.distance[n] = next;
                    scratch.parent[n] = v;
                    scratch.queue.push_back(edge.neighbor);
                }
            }
        }

        Ok(())
    }

    /// Finds a simple path of exactly `length` edges from `source` to `target`.
    pub fn find_path_of_length(
        &self,
        source: VertexId,
        target: VertexId,
        length: u32,
        allow_restricted: bool,
    ) -> Result<Vec<VertexId>, GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let mut found = None;
        self.walk_simple_paths(source, length, allow_restricted, Some(target), |path| {
            if path.last() == Some(&target) {
                found = Some(path.to_vec());
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        found.ok_or(GraphError::PathNotFound {
            from: source,
            to: target,
            length,
        })
    }

    /// Collects every vertex that ends some simple path of exactly `length`
    /// edges from `source`.
    ///
    /// This is path-length, not graph distance: a vertex reachable by both a
    /// 2-edge and a 4-edge simple path is reported for `length == 4`.
    pub fn find_all_reachable_vertices(
        &self,
        source: VertexId,
        length: u32,
        allow_restricted: bool,
    ) -> Result<BTreeSet<VertexId>, GraphError> {
        self.check_vertex(source)?;

        let mut reachable = BTreeSet::new();
        self.walk_simple_paths(source, length, allow_restricted, None, |path| {
            if let Some(&end) = path.last() {
                reachable.insert(end);
            }
            ControlFlow::Continue(())
        });

        Ok(reachable)
    }

    /// Checks that `path` is a simple path of `length` edges from `source` to
    /// `target` using only edges the mover may take.
    pub fn is_valid_path(
        &self,
        path: &[VertexId],
        source: VertexId,
        target: VertexId,
        length: u32,
        allow_restricted: bool,
    ) -> bool {
        if path.len() != length as usize + 1 {
            return false;
        }
        if path.first() != Some(&source) || path.last() != Some(&target) {
            return false;
        }
        if path.iter().any(|&v| v >= self.vertex_count) {
            return false;
        }

        let mut seen = vec![false; self.vertex_count as usize];
        seen[source as usize] = true;
        for step in path.windows(2) {
            let (u, v) = (step[0], step[1]);
            if seen[v as usize] {
                return false;
            }
            let adjacent = self
                .neighbors(u)
                .iter()
                .any(|e| e.neighbor == v && e.is_usable(allow_restricted));
            if !adjacent {
                return false;
            }
            seen[v as usize] = true;
        }

        true
    }

    /// Depth-first enumeration of simple paths of exactly `length` edges.
    ///
    /// `on_full` sees every such path; returning `Break` stops the walk.
    /// Branches that reach `stop_at` before the final step are pruned, since
    /// no simple path can revisit it later.
    fn walk_simple_paths<F>(
        &self,
        source: VertexId,
        length: u32,
        allow_restricted: bool,
        stop_at: Option<VertexId>,
        mut on_full: F,
    ) where
        F: FnMut(&[VertexId]) -> ControlFlow<()>,
    {
        let mut path: Vec<VertexId> = Vec::with_capacity(length as usize + 1);
        path.push(source);
        if length == 0 {
            let _ = on_full(&path);
            return;
        }

        let mut on_path = vec![false; self.vertex_count as usize];
        on_path[source as usize] = true;
        // cursors[d] is the next edge slot to try from path[d].
        let mut cursors: Vec<u32> = vec![self.offsets[source as usize]];

        while let Some(&cursor) = cursors.last() {
            let depth = cursors.len() - 1;
            let v = path[depth];
            if cursor == self.offsets[v as usize + 1] {
                cursors.pop();
                path.pop();
                on_path[v as usize] = false;
                continue;
            }
            cursors[depth] += 1;

            let edge = self.edges[cursor as usize];
            let n = edge.neighbor;
            if !edge.is_usable(allow_restricted) || on_path[n as usize] {
                continue;
            }

            if depth as u32 + 1 == length {
                path.push(n);
                let flow = on_full(&path);
                path.pop();
                if flow.is_break() {
                    return;
                }
                continue;
            }
            if stop_at == Some(n) {
                continue;
            }

            on_path[n as usize] = true;
            path.push(n);
            cursors.push(self.offsets[n as usize]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undirected cycle 0-1-2-3-0 with 2 as the only target and 0 as station.
    fn square() -> BoardGraph {
        BoardGraph::new(BoardDescription {
            vertex_count: 4,
            directedness: Directedness::Undirected,
            edges: vec![
                EdgeRecord::normal(0, 1),
                EdgeRecord::normal(1, 2),
                EdgeRecord::normal(2, 3),
                EdgeRecord::normal(3, 0),
            ],
            target_vertices: vec![2],
            station_vertices: vec![0],
            names: Vec::new(),
        })
        .unwrap()
    }

    /// Undirected path 0-1-2 plus a restricted shortcut 0-2.
    fn shortcut() -> BoardGraph {
        BoardGraph::new(BoardDescription {
            vertex_count: 3,
            directedness: Directedness::Undirected,
            edges: vec![
                EdgeRecord::normal(0, 1),
                EdgeRecord::normal(1, 2),
                EdgeRecord::restricted(0, 2),
            ],
            target_vertices: vec![2],
            station_vertices: vec![0],
            names: Vec::new(),
        })
        .unwrap()
    }

    #[test]
    fn undirected_edges_are_stored_twice() {
        let g = square();
        assert_eq!(g.raw_edge_count(), 8);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.offsets().len(), 5);
        assert!(g.offsets().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn directed_edges_are_stored_once() {
        let g = BoardGraph::new(BoardDescription {
            vertex_count: 3,
            directedness: Directedness::Directed,
            edges: vec![EdgeRecord::normal(0, 1), EdgeRecord::normal(1, 2)],
            target_vertices: vec![2],
            station_vertices: vec![0],
            names: Vec::new(),
        })
        .unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.raw_edge_count(), 2);
        assert!(g.neighbors(2).is_empty());
    }

    #[test]
    fn rejects_out_of_range_edge() {
        let err = BoardGraph::new(BoardDescription {
            vertex_count: 2,
            edges: vec![EdgeRecord::normal(0, 5)],
            target_vertices: vec![1],
            station_vertices: vec![0],
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, GraphError::VertexOutOfRange { vertex: 5, count: 2 });
    }

    #[test]
    fn rejects_overlapping_vertex_sets() {
        let err = BoardGraph::new(BoardDescription {
            vertex_count: 2,
            edges: vec![EdgeRecord::normal(0, 1)],
            target_vertices: vec![1],
            station_vertices: vec![1],
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, GraphError::OverlappingVertexSets(1));
    }

    #[test]
    fn rejects_board_without_stations() {
        let err = BoardGraph::new(BoardDescription {
            vertex_count: 2,
            edges: vec![EdgeRecord::normal(0, 1)],
            target_vertices: vec![0, 1],
            station_vertices: vec![],
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, GraphError::NoStations);
    }

    #[test]
    fn rejects_mismatched_names() {
        let err = BoardGraph::new(BoardDescription {
            vertex_count: 2,
            edges: vec![EdgeRecord::normal(0, 1)],
            target_vertices: vec![1],
            station_vertices: vec![0],
            names: vec!["only-one".to_string()],
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, GraphError::NameCount { expected: 2, found: 1 });
    }

    #[test]
    fn capacity_reserves_a_boeg_target() {
        let g = square();
        assert!(g.ensure_capacity(1, 1).is_err());
        let err = g.ensure_capacity(2, 1).unwrap_err();
        assert_eq!(
            err,
            GraphError::InsufficientTargets {
                required: 3,
                available: 1
            }
        );
    }

    #[test]
    fn capacity_overflow_is_an_error() {
        let g = square();
        assert_eq!(
            g.ensure_capacity(2, usize::MAX / 2 + 1),
            Err(GraphError::CapacityOverflow {
                players: 2,
                targets_per_player: usize::MAX / 2 + 1
            })
        );
        // The product fits but the spare Boeg target does not.
        assert!(matches!(
            g.ensure_capacity(1, usize::MAX),
            Err(GraphError::CapacityOverflow { .. })
        ));
    }

    #[test]
    fn square_shortest_paths() {
        let g = square();
        let mut scratch = g.new_scratch();
        g.shortest_paths(0, &mut scratch, false).unwrap();
        let dist: Vec<u32> = (0..4).map(|v| scratch.min_distance(v)).collect();
        assert_eq!(dist, vec![0, 1, 2, 1]);
        assert_eq!(scratch.source(), Some(0));
    }

    #[test]
    fn shortest_paths_rejects_bad_source() {
        let g = square();
        let mut scratch = g.new_scratch();
        assert!(g.shortest_paths(4, &mut scratch, false).is_err());
    }

    #[test]
    fn shortest_paths_grows_default_scratch() {
        let g = square();
        let mut scratch = SearchScratch::default();
        g.shortest_paths(1, &mut scratch, false).unwrap();
        assert_eq!(scratch.len(), 4);
        assert_eq!(scratch.distance_to(3), Some(2));
    }

    #[test]
    fn restricted_edges_only_for_boeg() {
        let g = shortcut();
        let mut scratch = g.new_scratch();
        g.shortest_paths(0, &mut scratch, false).unwrap();
        assert_eq!(scratch.distance_to(2), Some(2));
        g.shortest_paths(0, &mut scratch, true).unwrap();
        assert_eq!(scratch.distance_to(2), Some(1));
        assert_eq!(scratch.follow_min_path(2, 6), Some(vec![0, 2]));
    }

    #[test]
    fn unreachable_vertex_keeps_sentinel() {
        let g = BoardGraph::new(BoardDescription {
            vertex_count: 3,
            edges: vec![EdgeRecord::normal(0, 1)],
            target_vertices: vec![2],
            station_vertices: vec![0],
            ..Default::default()
        })
        .unwrap();
        let mut scratch = g.new_scratch();
        g.shortest_paths(0, &mut scratch, true).unwrap();
        assert_eq!(scratch.min_distance(2), 0);
        assert_eq!(scratch.distance_to(2), None);
        assert_eq!(scratch.follow_min_path(2, 6), None);
    }

    #[test]
    fn square_path_of_length_two() {
        let g = square();
        let path = g.find_path_of_length(0, 2, 2, false).unwrap();
        assert!(path == vec![0, 1, 2] || path == vec![0, 3, 2], "got {:?}", path);
        assert!(g.is_valid_path(&path, 0, 2, 2, false));
    }

    #[test]
    fn square_has_no_path_of_length_four_back_to_source() {
        let g = square();
        let err = g.find_path_of_length(0, 0, 4, false).unwrap_err();
        assert_eq!(
            err,
            GraphError::PathNotFound {
                from: 0,
                to: 0,
                length: 4
            }
        );
    }

    #[test]
    fn path_of_length_three_avoids_early_target() {
        let g = square();
        // 0 -> 1 -> 2 -> 3 is the only way to reach 3 in three steps
        // without passing 3 first.
        let path = g.find_path_of_length(0, 3, 3, false).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn path_of_length_zero() {
        let g = square();
        assert_eq!(g.find_path_of_length(1, 1, 0, false).unwrap(), vec![1]);
        assert!(g.find_path_of_length(1, 2, 0, false).is_err());
    }

    #[test]
    fn square_reachable_in_two() {
        let g = square();
        let reachable = g.find_all_reachable_vertices(0, 2, false).unwrap();
        assert_eq!(reachable.into_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn reachable_in_zero_is_source() {
        let g = square();
        let reachable = g.find_all_reachable_vertices(3, 0, false).unwrap();
        assert_eq!(reachable.into_iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn reachable_counts_path_length_not_distance() {
        // Triangle: 1 and 2 are both adjacent to 0, yet each also ends a
        // two-edge simple path through the other.
        let g = BoardGraph::new(BoardDescription {
            vertex_count: 3,
            edges: vec![
                EdgeRecord::normal(0, 1),
                EdgeRecord::normal(1, 2),
                EdgeRecord::normal(2, 0),
            ],
            target_vertices: vec![1],
            station_vertices: vec![0],
            ..Default::default()
        })
        .unwrap();
        let reachable = g.find_all_reachable_vertices(0, 2, false).unwrap();
        assert_eq!(reachable.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn reachable_respects_restriction() {
        let g = shortcut();
        let regular = g.find_all_reachable_vertices(0, 1, false).unwrap();
        assert_eq!(regular.into_iter().collect::<Vec<_>>(), vec![1]);
        let boeg = g.find_all_reachable_vertices(0, 1, true).unwrap();
        assert_eq!(boeg.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn valid_path_checks() {
        let g = square();
        assert!(g.is_valid_path(&[0, 1, 2], 0, 2, 2, false));
        assert!(g.is_valid_path(&[0], 0, 0, 0, false));
        // wrong length
        assert!(!g.is_valid_path(&[0, 1, 2], 0, 2, 3, false));
        // wrong endpoints
        assert!(!g.is_valid_path(&[0, 1, 2], 1, 2, 2, false));
        assert!(!g.is_valid_path(&[0, 1, 2], 0, 1, 2, false));
        // non-adjacent step
        assert!(!g.is_valid_path(&[0, 2], 0, 2, 1, false));
        // repeated vertex
        assert!(!g.is_valid_path(&[0, 1, 0], 0, 0, 2, false));
        // out of range
        assert!(!g.is_valid_path(&[0, 9], 0, 9, 1, false));
        assert!(!g.is_valid_path(&[], 0, 0, 0, false));
    }

    #[test]
    fn valid_path_honours_restriction() {
        let g = shortcut();
        assert!(!g.is_valid_path(&[0, 2], 0, 2, 1, false));
        assert!(g.is_valid_path(&[0, 2], 0, 2, 1, true));
    }

    #[test]
    fn vertex_names_are_optional() {
        let g = square();
        assert_eq!(g.vertex_name(0), None);

        let named = BoardGraph::new(BoardDescription {
            vertex_count: 2,
            edges: vec![EdgeRecord::normal(0, 1)],
            target_vertices: vec![1],
            station_vertices: vec![0],
            names: vec!["harbour".to_string(), "mill".to_string()],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(named.vertex_name(1), Some("mill"));
    }
}
