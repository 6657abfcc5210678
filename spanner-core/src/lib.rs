//! Spanner core library.
//!
//! Computes minimum spanning trees of weighted, undirected graphs using four
//! interchangeable strategies: Kruskal over a union-find, Prim driven by an
//! edge priority queue, Prim driven by a vertex queue of frontier snapshots,
//! and Prim driven by an indexed decrease-key heap. All strategies share one
//! graph substrate and one per-vertex state table, so a caller can switch
//! between them without rebuilding the graph.

mod builder;
mod error;
mod graph;
mod heap;
mod mst;
mod spanner;

pub use crate::{
    builder::SpannerBuilder,
    error::{GraphError, GraphErrorCode, Result, SpannerError, SpannerErrorCode},
    graph::{Edge, Graph},
    heap::{HeapError, HeapErrorCode, IndexedHeap, IndexedItem},
    mst::{Algorithm, MstResult},
    spanner::Spanner,
};
