//! Run orchestration for the spanner core.
//!
//! Provides the [`Spanner`] entry point that validates a run request,
//! allocates the per-run vertex-state table, and dispatches to the selected
//! algorithm body.

use tracing::{info, instrument, warn};

use crate::{
    Result,
    error::SpannerError,
    graph::Graph,
    mst::{self, Algorithm, MstResult, VertexStates},
};

/// Entry point for computing minimum spanning trees.
///
/// # Examples
/// ```
/// use spanner_core::{Algorithm, Graph, SpannerBuilder};
///
/// let graph = Graph::new(4, [
///     (0, 1, 1),
///     (1, 2, 2),
///     (2, 3, 1),
///     (0, 3, 4),
///     (0, 2, 5),
/// ]).expect("endpoints are in range");
///
/// let spanner = SpannerBuilder::new()
///     .with_algorithm(Algorithm::PrimIndexedHeap)
///     .with_source(0)
///     .build();
/// let result = spanner.run(&graph).expect("graph is non-empty");
/// assert_eq!(result.total_weight(), 4);
/// assert_eq!(result.edges().len(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Spanner {
    algorithm: Algorithm,
    source: usize,
}

impl Spanner {
    pub(crate) fn new(algorithm: Algorithm, source: usize) -> Self {
        Self { algorithm, source }
    }

    /// Returns the algorithm this instance will execute.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the zero-based source vertex used by the Prim variants.
    ///
    /// Kruskal ignores the source; it is validated regardless so the choice
    /// of algorithm never changes which inputs are accepted.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Computes a spanning tree of `graph`.
    ///
    /// Runs are independent: each allocates and exclusively owns a fresh
    /// vertex-state table, so one `Spanner` may be reused across graphs and
    /// calls. On disconnected input the result is a partial forest with
    /// fewer than `vertex_count - 1` edges and no error is raised; use
    /// [`MstResult::is_spanning`] to detect it.
    ///
    /// # Errors
    /// Returns [`SpannerError::EmptyGraph`] when `graph` has no vertices,
    /// [`SpannerError::SourceOutOfBounds`] when the configured source does
    /// not name a vertex, and [`SpannerError::Heap`] when the indexed heap
    /// reports an overflow or underflow.
    pub fn run(&self, graph: &Graph) -> Result<MstResult> {
        self.run_checked(graph)
    }

    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            algorithm = self.algorithm.name(),
            source = self.source,
            vertices = graph.vertex_count(),
            edges = graph.edges().len(),
        ),
    )]
    fn run_checked(&self, graph: &Graph) -> Result<MstResult> {
        let vertex_count = graph.vertex_count();
        if vertex_count == 0 {
            warn!("graph has no vertices, returning error");
            return Err(SpannerError::EmptyGraph);
        }
        if self.source >= vertex_count {
            return Err(SpannerError::SourceOutOfBounds {
                source: self.source,
                vertex_count,
            });
        }

        let mut states = VertexStates::new(vertex_count);
        let (total_weight, edges) = match self.algorithm {
            Algorithm::Kruskal => mst::kruskal(graph, &mut states),
            Algorithm::PrimEdgeQueue => mst::prim_edge_queue(graph, &mut states, self.source),
            Algorithm::PrimVertexQueue => mst::prim_vertex_queue(graph, &mut states, self.source),
            Algorithm::PrimIndexedHeap => mst::prim_indexed_heap(graph, &mut states, self.source)
                .map_err(|error| SpannerError::Heap {
                    algorithm: self.algorithm.name(),
                    error,
                })?,
        };

        let result = MstResult::new(self.algorithm, total_weight, edges);
        if !result.is_spanning(vertex_count) {
            warn!(
                tree_edges = result.edges().len(),
                "graph is disconnected; returning a partial forest"
            );
        }
        info!(
            total_weight = result.total_weight(),
            tree_edges = result.edges().len(),
            "spanning tree computed"
        );
        Ok(result)
    }
}
