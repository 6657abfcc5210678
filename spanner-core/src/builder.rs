//! Builder utilities for configuring spanner runs.
//!
//! Exposes the algorithm and source-vertex selection surface used before
//! constructing [`Spanner`] instances.

use crate::{mst::Algorithm, spanner::Spanner};

/// Configures and constructs [`Spanner`] instances.
///
/// Source vertices are zero-based and validated against the graph at run
/// time, not here, so one configured instance can serve graphs of any size.
///
/// # Examples
/// ```
/// use spanner_core::{Algorithm, SpannerBuilder};
///
/// let spanner = SpannerBuilder::new()
///     .with_algorithm(Algorithm::PrimVertexQueue)
///     .with_source(2)
///     .build();
/// assert_eq!(spanner.algorithm(), Algorithm::PrimVertexQueue);
/// assert_eq!(spanner.source(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SpannerBuilder {
    algorithm: Algorithm,
    source: usize,
}

impl Default for SpannerBuilder {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Kruskal,
            source: 0,
        }
    }
}

impl SpannerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use spanner_core::{Algorithm, SpannerBuilder};
    ///
    /// let builder = SpannerBuilder::new();
    /// assert_eq!(builder.algorithm(), Algorithm::Kruskal);
    /// assert_eq!(builder.source(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the algorithm to execute.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the currently configured algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Overrides the zero-based source vertex for the Prim variants.
    #[must_use]
    pub fn with_source(mut self, source: usize) -> Self {
        self.source = source;
        self
    }

    /// Returns the currently configured source vertex.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Constructs a [`Spanner`] instance from the configuration.
    #[must_use]
    pub fn build(self) -> Spanner {
        Spanner::new(self.algorithm, self.source)
    }
}
