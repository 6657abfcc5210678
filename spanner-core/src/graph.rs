//! Graph substrate consumed by the MST engine.
//!
//! Vertices are dense zero-based ids. Edges are immutable once constructed,
//! keep the endpoint orientation they were read with, and are identified by
//! their input ordinal. The text reader understands the format of a
//! `vertex_count edge_count` header followed by one-based
//! `source target weight` triples, optionally terminated early by a `0 0`
//! sentinel.

use std::io::BufRead;

use crate::error::GraphError;

/// A weighted, undirected edge between two vertices.
///
/// `source` and `target` preserve the orientation of the input triple; the
/// engine treats the edge as undirected and recovers direction on demand via
/// [`Edge::other_end`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: i64,
    id: usize,
}

impl Edge {
    /// Returns the endpoint the edge was read from.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the endpoint the edge was read towards.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> i64 { self.weight }

    /// Returns the edge's dense id, its ordinal in the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> usize { self.id }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// `vertex` must be one of the edge's endpoints; passing any other id
    /// silently returns `source`.
    #[must_use]
    pub fn other_end(&self, vertex: usize) -> usize {
        if self.source == vertex {
            self.target
        } else {
            self.source
        }
    }
}

/// An immutable, undirected, weighted graph with per-vertex adjacency lists.
///
/// # Examples
/// ```
/// use spanner_core::Graph;
///
/// let graph = Graph::new(3, [(0, 1, 4), (1, 2, 2)]).expect("endpoints are in range");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.incident_edges(1).len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from `(source, target, weight)` triples with zero-based
    /// endpoints. Edge ids are assigned in iteration order.
    ///
    /// # Errors
    /// Returns [`GraphError::EndpointOutOfRange`] when a triple references a
    /// vertex id at or beyond `vertex_count`.
    pub fn new(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, i64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        };
        for (source, target, weight) in edges {
            graph.push_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Reads a graph from the plain-text format consumed by the CLI.
    ///
    /// The header declares `vertex_count edge_count`; each following triple
    /// is `source target weight` with one-based endpoints. A `0 0` pair in
    /// endpoint position terminates the edge list before `edge_count` edges
    /// have been read. Tokens may be split across lines arbitrarily.
    ///
    /// # Errors
    /// Returns [`GraphError::Io`] when the reader fails,
    /// [`GraphError::UnexpectedEof`] when the input ends mid-header or
    /// mid-triple, [`GraphError::InvalidToken`] for malformed numbers or a
    /// lone zero endpoint, and [`GraphError::EndpointOutOfRange`] when a
    /// triple references an undeclared vertex.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GraphError> {
        let mut tokens = TokenReader::new(reader);
        let vertex_count = tokens.next_usize("vertex count")?;
        let edge_count = tokens.next_usize("edge count")?;

        let mut triples = Vec::with_capacity(edge_count);
        for _ in 0..edge_count {
            let source = tokens.next_usize("edge source")?;
            let target = tokens.next_usize("edge target")?;
            if source == 0 && target == 0 {
                break;
            }
            let weight = tokens.next_i64("edge weight")?;
            let (Some(source), Some(target)) = (source.checked_sub(1), target.checked_sub(1))
            else {
                return Err(GraphError::InvalidToken {
                    line: tokens.line(),
                    token: "0".to_owned(),
                    expected: "one-based edge endpoint",
                });
            };
            triples.push((source, target, weight));
        }
        Self::new(vertex_count, triples)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Iterates vertex ids in ascending order.
    ///
    /// This order is the tie-break authority wherever the engine compares
    /// equal weights.
    #[must_use]
    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.vertex_count
    }

    /// Returns every edge in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the edge with the given dense id.
    ///
    /// # Panics
    /// Panics if `id` is not a valid edge id.
    #[must_use]
    pub fn edge(&self, id: usize) -> Edge {
        self.edges[id]
    }

    /// Returns the ids of the edges incident to `vertex`, in input order.
    ///
    /// # Panics
    /// Panics if `vertex` is not a valid vertex id.
    #[must_use]
    pub fn incident_edges(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    fn push_edge(&mut self, source: usize, target: usize, weight: i64) -> Result<(), GraphError> {
        for vertex in [source, target] {
            if vertex >= self.vertex_count {
                return Err(GraphError::EndpointOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        let id = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
            id,
        });
        self.adjacency[source].push(id);
        if target != source {
            self.adjacency[target].push(id);
        }
        Ok(())
    }
}

/// Whitespace-token reader tracking line numbers for error reporting.
struct TokenReader<R: BufRead> {
    lines: std::io::Lines<R>,
    pending: std::vec::IntoIter<String>,
    line: usize,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
            line: 0,
        }
    }

    #[rustfmt::skip]
    fn line(&self) -> usize { self.line }

    fn next_token(&mut self, expected: &'static str) -> Result<String, GraphError> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(token);
            }
            match self.lines.next() {
                Some(Ok(text)) => {
                    self.line += 1;
                    self.pending = text
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                Some(Err(err)) => {
                    return Err(GraphError::Io {
                        message: err.to_string(),
                    });
                }
                None => return Err(GraphError::UnexpectedEof { expected }),
            }
        }
    }

    fn next_usize(&mut self, expected: &'static str) -> Result<usize, GraphError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| GraphError::InvalidToken {
            line: self.line,
            token,
            expected,
        })
    }

    fn next_i64(&mut self, expected: &'static str) -> Result<i64, GraphError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| GraphError::InvalidToken {
            line: self.line,
            token,
            expected,
        })
    }
}
