//! Minimum spanning tree strategies over a shared vertex-state table.
//!
//! Four algorithm bodies produce the same tree weight on connected input:
//! Kruskal over the union-find embedded in the vertex records, Prim driven by
//! an edge priority queue, Prim driven by a vertex queue of frontier
//! snapshots, and Prim driven by the indexed decrease-key heap. Each body
//! resets the state table before it runs, then accumulates tree edges until
//! `vertex_count - 1` have been chosen or its frontier is exhausted.
//!
//! On disconnected input every body returns a partial forest, short of
//! `vertex_count - 1` edges, without signalling an error; callers that care
//! must check [`MstResult::is_spanning`] themselves.

mod vertex;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::graph::{Edge, Graph};
use crate::heap::{HeapError, IndexedHeap};

pub(crate) use vertex::{UNDISCOVERED, VertexStates};

/// Selects which strategy [`crate::Spanner::run`] executes.
///
/// All four produce the same total weight on connected graphs; they differ
/// in queue discipline and asymptotics. `PrimIndexedHeap` is the intended
/// choice for dense graphs: every vertex occupies exactly one heap slot for
/// the whole run, giving O(E log V) instead of O(E log E).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Kruskal's algorithm: global edge sort plus union-find cycle checks.
    Kruskal,
    /// Prim's algorithm over a priority queue of candidate edges.
    PrimEdgeQueue,
    /// Prim's algorithm over a priority queue of frontier vertex snapshots.
    PrimVertexQueue,
    /// Prim's algorithm over the indexed decrease-key heap.
    PrimIndexedHeap,
}

impl Algorithm {
    /// Returns the display name used in logs and CLI output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::PrimEdgeQueue => "prim (edge queue)",
            Self::PrimVertexQueue => "prim (vertex queue)",
            Self::PrimIndexedHeap => "prim (indexed heap)",
        }
    }
}

/// The output of a spanning tree computation.
///
/// # Examples
/// ```
/// use spanner_core::{Algorithm, Graph, SpannerBuilder};
///
/// let graph = Graph::new(2, [(0, 1, 7)]).expect("endpoints are in range");
/// let result = SpannerBuilder::new()
///     .with_algorithm(Algorithm::Kruskal)
///     .build()
///     .run(&graph)
///     .expect("graph is non-empty");
/// assert_eq!(result.total_weight(), 7);
/// assert!(result.is_spanning(graph.vertex_count()));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MstResult {
    algorithm: Algorithm,
    total_weight: i64,
    edges: Vec<Edge>,
}

impl MstResult {
    pub(crate) fn new(algorithm: Algorithm, total_weight: i64, edges: Vec<Edge>) -> Self {
        Self {
            algorithm,
            total_weight,
            edges,
        }
    }

    /// Returns the algorithm that produced the result.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the summed weight of the chosen edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the chosen edges in the order they were settled.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns `true` when the result spans a graph of `vertex_count`
    /// vertices, i.e. exactly `vertex_count - 1` edges were chosen.
    #[must_use]
    pub fn is_spanning(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }
}

/// Shared tree accumulator: weight, ordered edges, and the early-exit target.
struct TreeAccumulator {
    total_weight: i64,
    edges: Vec<Edge>,
    target: usize,
}

impl TreeAccumulator {
    fn new(vertex_count: usize) -> Self {
        let target = vertex_count.saturating_sub(1);
        Self {
            total_weight: 0,
            edges: Vec::with_capacity(target),
            target,
        }
    }

    fn attach(&mut self, edge: Edge) {
        self.total_weight += edge.weight();
        self.edges.push(edge);
    }

    /// True once `vertex_count - 1` edges are in; valid as an exit condition
    /// only for connected input.
    fn complete(&self) -> bool {
        self.edges.len() == self.target
    }

    fn into_parts(self) -> (i64, Vec<Edge>) {
        (self.total_weight, self.edges)
    }
}

/// Kruskal: stable sort of all edges by weight, then union-find cycle checks.
///
/// The stable sort keeps input order between equal weights, so the chosen
/// tree is deterministic for a fixed input.
pub(crate) fn kruskal(graph: &Graph, states: &mut VertexStates) -> (i64, Vec<Edge>) {
    states.reset();
    let mut accumulator = TreeAccumulator::new(graph.vertex_count());

    let mut edges = graph.edges().to_vec();
    edges.sort_by_key(Edge::weight);

    for edge in edges {
        if accumulator.complete() {
            break;
        }
        if states.union(edge.source(), edge.target()) {
            accumulator.attach(edge);
        }
    }
    accumulator.into_parts()
}

/// Candidate edge queued by the edge-driven Prim; ordered by weight with the
/// edge id as a deterministic tie-break.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
struct EdgeCandidate {
    weight: i64,
    edge: usize,
}

impl EdgeCandidate {
    fn new(edge: Edge) -> Self {
        Self {
            weight: edge.weight(),
            edge: edge.id(),
        }
    }
}

/// Prim over a queue of candidate edges.
///
/// Edges are enqueued while incident to exactly one settled endpoint, but
/// the queue stores no orientation: on pop, whichever stored endpoint is
/// already settled must be the tree side, so the far endpoint is the
/// candidate. Entries whose candidate settled in the meantime are stale and
/// skipped. The queue may hold O(E) such stale entries.
pub(crate) fn prim_edge_queue(
    graph: &Graph,
    states: &mut VertexStates,
    source: usize,
) -> (i64, Vec<Edge>) {
    states.reset();
    let mut accumulator = TreeAccumulator::new(graph.vertex_count());
    let mut frontier: BinaryHeap<Reverse<EdgeCandidate>> = BinaryHeap::new();

    states[source].seen = true;
    states[source].distance = 0;
    for &edge_id in graph.incident_edges(source) {
        frontier.push(Reverse(EdgeCandidate::new(graph.edge(edge_id))));
    }

    while let Some(Reverse(candidate)) = frontier.pop() {
        if accumulator.complete() {
            break;
        }
        let edge = graph.edge(candidate.edge);
        let (tree_side, vertex) = if states[edge.source()].seen {
            (edge.source(), edge.target())
        } else {
            (edge.target(), edge.source())
        };
        if states[vertex].seen {
            continue;
        }

        {
            let record = &mut states[vertex];
            record.seen = true;
            record.distance = edge.weight();
            record.parent = Some(tree_side);
            record.incident_edge = Some(edge.id());
        }
        trace!(
            vertex,
            parent = ?states[vertex].parent,
            weight = edge.weight(),
            "vertex settled"
        );
        accumulator.attach(edge);

        for &edge_id in graph.incident_edges(vertex) {
            let next = graph.edge(edge_id);
            if !states[next.other_end(vertex)].seen {
                frontier.push(Reverse(EdgeCandidate::new(next)));
            }
        }
    }
    accumulator.into_parts()
}

/// By-value frontier copy queued by the vertex-driven Prim. Field order
/// matters: the derived ordering compares distance first, then vertex id.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
struct FrontierSnapshot {
    distance: i64,
    vertex: usize,
    edge: Option<usize>,
    parent: Option<usize>,
}

/// Prim over a queue of frontier snapshots.
///
/// The queue cannot reposition an interior element, so an improved distance
/// pushes a fresh snapshot instead of mutating the queued one; the canonical
/// record's `seen` flag decides staleness when a copy is popped.
pub(crate) fn prim_vertex_queue(
    graph: &Graph,
    states: &mut VertexStates,
    source: usize,
) -> (i64, Vec<Edge>) {
    states.reset();
    let mut accumulator = TreeAccumulator::new(graph.vertex_count());
    let mut frontier: BinaryHeap<Reverse<FrontierSnapshot>> = BinaryHeap::new();

    states[source].distance = 0;
    frontier.push(Reverse(FrontierSnapshot {
        distance: 0,
        vertex: source,
        edge: None,
        parent: None,
    }));

    while let Some(Reverse(snapshot)) = frontier.pop() {
        if accumulator.complete() {
            break;
        }
        if states[snapshot.vertex].seen {
            continue;
        }

        {
            let record = &mut states[snapshot.vertex];
            record.seen = true;
            record.distance = snapshot.distance;
            record.parent = snapshot.parent;
            record.incident_edge = snapshot.edge;
        }
        trace!(
            vertex = snapshot.vertex,
            parent = ?states[snapshot.vertex].parent,
            distance = snapshot.distance,
            "vertex settled"
        );
        if let Some(edge_id) = snapshot.edge {
            accumulator.attach(graph.edge(edge_id));
        }

        for &edge_id in graph.incident_edges(snapshot.vertex) {
            let edge = graph.edge(edge_id);
            let next = edge.other_end(snapshot.vertex);
            if !states[next].seen && edge.weight() < states[next].distance {
                let record = &mut states[next];
                record.distance = edge.weight();
                record.parent = Some(snapshot.vertex);
                record.incident_edge = Some(edge_id);
                frontier.push(Reverse(FrontierSnapshot {
                    distance: edge.weight(),
                    vertex: next,
                    edge: Some(edge_id),
                    parent: Some(snapshot.vertex),
                }));
            }
        }
    }
    accumulator.into_parts()
}

/// Prim over the indexed decrease-key heap.
///
/// Every canonical record enters the heap exactly once, keyed by distance;
/// improvements lower the key in place and sift up through the back-pointer.
/// No duplicates, no stale entries. Extracting an undiscovered vertex means
/// nothing left in the heap is reachable from the source, so the loop stops
/// there with a partial forest.
pub(crate) fn prim_indexed_heap(
    graph: &Graph,
    states: &mut VertexStates,
    source: usize,
) -> Result<(i64, Vec<Edge>), HeapError> {
    states.reset();
    let mut accumulator = TreeAccumulator::new(graph.vertex_count());
    let mut heap = IndexedHeap::with_capacity(graph.vertex_count());

    states[source].distance = 0;
    for vertex in graph.vertices() {
        heap.insert(states.as_mut_slice(), vertex)?;
    }

    while !heap.is_empty() {
        if accumulator.complete() {
            break;
        }
        let vertex = heap.extract_min(states.as_mut_slice())?;
        if states[vertex].distance == UNDISCOVERED {
            break;
        }
        states[vertex].seen = true;
        trace!(
            vertex,
            parent = ?states[vertex].parent,
            distance = states[vertex].distance,
            "vertex settled"
        );
        if let Some(edge_id) = states[vertex].incident_edge {
            accumulator.attach(graph.edge(edge_id));
        }

        for &edge_id in graph.incident_edges(vertex) {
            let edge = graph.edge(edge_id);
            let next = edge.other_end(vertex);
            if !states[next].seen && edge.weight() < states[next].distance {
                let record = &mut states[next];
                record.distance = edge.weight();
                record.parent = Some(vertex);
                record.incident_edge = Some(edge_id);
                heap.decrease_key(states.as_mut_slice(), next);
            }
        }
    }
    Ok(accumulator.into_parts())
}

#[cfg(test)]
mod property;
