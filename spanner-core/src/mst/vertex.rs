//! Per-vertex algorithm state shared by every MST strategy.
//!
//! One [`MstVertex`] exists per graph vertex, held in a [`VertexStates`]
//! side-table keyed by vertex id so the read-only graph never references
//! per-run state. The union-find fields live directly on the record; the
//! table provides path-compressed `find` and rank-balanced `union` over them.

use std::ops::{Index, IndexMut};

use crate::heap::IndexedItem;

/// Sentinel distance for a vertex the frontier has not reached yet.
pub(crate) const UNDISCOVERED: i64 = i64::MAX;

/// Mutable per-vertex record, reset at the start of every algorithm run.
#[derive(Clone, Debug)]
pub(crate) struct MstVertex {
    /// True once the vertex is permanently part of the tree.
    pub(crate) seen: bool,
    /// Best known weight of an edge connecting the vertex to the tree.
    pub(crate) distance: i64,
    /// Tree-side endpoint of the best known connecting edge.
    pub(crate) parent: Option<usize>,
    /// Edge id realising `distance`.
    pub(crate) incident_edge: Option<usize>,
    /// Heap slot back-pointer, meaningful only while the indexed Prim runs.
    pub(crate) heap_index: usize,
    /// Union-find parent pointer, self-referential at the root.
    representative: usize,
    /// Union-find rank, meaningful only on representatives.
    rank: u8,
}

impl MstVertex {
    fn new(id: usize) -> Self {
        Self {
            seen: false,
            distance: UNDISCOVERED,
            parent: None,
            incident_edge: None,
            heap_index: 0,
            representative: id,
            rank: 0,
        }
    }
}

impl IndexedItem for MstVertex {
    type Key = i64;

    fn key(&self) -> i64 {
        self.distance
    }

    fn heap_index(&self) -> usize {
        self.heap_index
    }

    fn set_heap_index(&mut self, slot: usize) {
        self.heap_index = slot;
    }
}

/// Side-table of [`MstVertex`] records, one per graph vertex.
#[derive(Clone, Debug)]
pub(crate) struct VertexStates {
    vertices: Vec<MstVertex>,
}

impl VertexStates {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            vertices: (0..vertex_count).map(MstVertex::new).collect(),
        }
    }

    /// Restores every record to its undiscovered, unsettled initial state.
    ///
    /// Each algorithm body calls this first, so re-running any algorithm on
    /// the same table reproduces identical output.
    pub(crate) fn reset(&mut self) {
        for (id, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.seen = false;
            vertex.distance = UNDISCOVERED;
            vertex.parent = None;
            vertex.incident_edge = None;
            vertex.heap_index = 0;
            vertex.representative = id;
            vertex.rank = 0;
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [MstVertex] {
        &mut self.vertices
    }

    /// Finds the representative of `vertex`'s component with path compression.
    ///
    /// Two passes: locate the root, then rewrite every visited record's
    /// `representative` to point at it.
    pub(crate) fn find(&mut self, vertex: usize) -> usize {
        let mut root = vertex;
        while self.vertices[root].representative != root {
            root = self.vertices[root].representative;
        }

        let mut current = vertex;
        while self.vertices[current].representative != current {
            let next = self.vertices[current].representative;
            self.vertices[current].representative = root;
            current = next;
        }

        root
    }

    /// Unites the components containing `left` and `right`.
    ///
    /// Returns `false` when they already share a representative; otherwise
    /// attaches the lower-rank root under the higher-rank one, bumping the
    /// winner's rank on ties, and returns `true`. Roots are never attached
    /// to themselves.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left_root = self.find(left);
        let mut right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        let left_rank = self.vertices[left_root].rank;
        let right_rank = self.vertices[right_root].rank;
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.vertices[right_root].representative = left_root;
        if left_rank == right_rank {
            self.vertices[left_root].rank = left_rank.saturating_add(1);
        }
        true
    }
}

impl Index<usize> for VertexStates {
    type Output = MstVertex;

    fn index(&self, vertex: usize) -> &MstVertex {
        &self.vertices[vertex]
    }
}

impl IndexMut<usize> for VertexStates {
    fn index_mut(&mut self, vertex: usize) -> &mut MstVertex {
        &mut self.vertices[vertex]
    }
}
