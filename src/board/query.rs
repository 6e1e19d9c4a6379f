//! Reusable working memory for board traversals.
//!
//! A `SearchScratch` holds the per-vertex distance, parent, and visited
//! arrays filled in by `BoardGraph::shortest_paths`. Buffers are sized to the
//! board on first use and reset (not reallocated) before every traversal, so
//! a long-lived owner such as a `Player` pays for the allocation only once.

use std::collections::VecDeque;

use super::graph::VertexId;

/// Working buffers for one breadth-first traversal at a time.
#[derive(Debug, Clone, Default)]
pub struct SearchScratch {
    /// Hop count from the traversal source. 0 for the source and for unvisited vertices.
    pub(crate) distance: Vec<u32>,
    /// Source-ward neighbor of each visited vertex.
    pub(crate) parent: Vec<VertexId>,
    pub(crate) visited: Vec<bool>,
    pub(crate) queue: VecDeque<VertexId>,
    pub(crate) source: Option<VertexId>,
}

impl SearchScratch {
    /// Creates scratch buffers for a board with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        SearchScratch {
            distance: vec![0; vertex_count],
            parent: vec![0; vertex_count],
            visited: vec![false; vertex_count],
            queue: VecDeque::with_capacity(vertex_count),
            source: None,
        }
    }

    /// Number of vertices the buffers currently cover.
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    /// Clears all buffers, growing or shrinking them to `vertex_count` entries.
    pub(crate) fn reset(&mut self, vertex_count: usize) {
        if self.distance.len() != vertex_count {
            self.distance.resize(vertex_count, 0);
            self.parent.resize(vertex_count, 0);
            self.visited.resize(vertex_count, false);
        }
        self.distance.fill(0);
        self.parent.fill(0);
        self.visited.fill(false);
        self.queue.clear();
        self.source = None;
    }

    /// Source of the last traversal recorded in these buffers.
    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    /// Raw recorded distance to `target`.
    ///
    /// Unreached vertices report the sentinel 0, the same as the source
    /// itself; use [`SearchScratch::distance_to`] to tell the two apart.
    pub fn min_distance(&self, target: VertexId) -> u32 {
        debug_assert!((target as usize) < self.distance.len(), "invalid target vertex");
        self.distance[target as usize]
    }

    /// Whether the last traversal reached `vertex`.
    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.visited.get(vertex as usize).copied().unwrap_or(false)
    }

    /// Shortest distance to `target`, or `None` if the last traversal never reached it.
    pub fn distance_to(&self, target: VertexId) -> Option<u32> {
        if self.is_reached(target) {
            Some(self.distance[target as usize])
        } else {
            None
        }
    }

    /// Walks the shortest path toward `target` for at most `max_length` steps.
    ///
    /// Returns the vertex sequence starting at the traversal source, in
    /// forward order. When `max_length` is at least the distance to `target`
    /// the path ends at `target`; otherwise it ends at the vertex reached after
    /// `max_length` steps along the shortest path. Returns `None` if `target`
    /// was not reached.
    pub fn follow_min_path(&self, target: VertexId, max_length: u32) -> Option<Vec<VertexId>> {
        if !self.is_reached(target) {
            return None;
        }

        let distance = self.distance[target as usize];
        let length = distance.min(max_length);
        let mut path = vec![target; length as usize + 1];

        // Parents point toward the source, so walk backwards from the target.
        let mut v = target;
        let mut i = distance;
        loop {
            if i <= length {
                path[i as usize] = v;
            }
            if i == 0 {
                break;
            }
            v = self.parent[v as usize];
            i -= 1;
        }

        Some(path)
    }
}
