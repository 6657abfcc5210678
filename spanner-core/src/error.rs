//! Error types for the spanner core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::heap::HeapError;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing or parsing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The underlying reader failed while graph text was being consumed.
    #[error("failed to read graph input: {message}")]
    Io {
        /// Rendered description of the I/O failure.
        message: String,
    },
    /// The input ended before the expected token was found.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// Description of the token the reader was looking for.
        expected: &'static str,
    },
    /// A token could not be parsed as the expected value.
    #[error("line {line}: invalid token `{token}` for {expected}")]
    InvalidToken {
        /// One-based line number the token was read from.
        line: usize,
        /// The raw token as it appeared in the input.
        token: String,
        /// Description of the value the token should have encoded.
        expected: &'static str,
    },
    /// An edge referenced a vertex id outside the declared range.
    #[error("edge endpoint {vertex} does not name one of the {vertex_count} vertices")]
    EndpointOutOfRange {
        /// The offending zero-based vertex id.
        vertex: usize,
        /// The number of vertices declared for the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The underlying reader failed while graph text was being consumed.
        Io => Io { .. } => "GRAPH_IO",
        /// The input ended before the expected token was found.
        UnexpectedEof => UnexpectedEof { .. } => "GRAPH_UNEXPECTED_EOF",
        /// A token could not be parsed as the expected value.
        InvalidToken => InvalidToken { .. } => "GRAPH_INVALID_TOKEN",
        /// An edge referenced a vertex id outside the declared range.
        EndpointOutOfRange => EndpointOutOfRange { .. } => "GRAPH_ENDPOINT_OUT_OF_RANGE",
    }
}

/// Error type produced when configuring or running [`crate::Spanner`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SpannerError {
    /// The caller requested a spanning tree of an empty graph.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// The configured source vertex does not exist in the graph.
    #[error("source vertex {source} is out of range for a graph with {vertex_count} vertices")]
    SourceOutOfBounds {
        /// The configured zero-based source vertex.
        source: usize,
        /// The number of vertices in the graph being run against.
        vertex_count: usize,
    },
    /// A priority-queue operation failed while an algorithm was running.
    #[error("priority queue failure while running {algorithm}: {error}")]
    Heap {
        /// Display name of the algorithm that was running.
        algorithm: &'static str,
        /// Underlying heap error bubbled up by the algorithm.
        #[source]
        error: HeapError,
    },
}

define_error_codes! {
    /// Stable codes describing [`SpannerError`] variants.
    enum SpannerErrorCode for SpannerError {
        /// The caller requested a spanning tree of an empty graph.
        EmptyGraph => EmptyGraph => "SPANNER_EMPTY_GRAPH",
        /// The configured source vertex does not exist in the graph.
        SourceOutOfBounds => SourceOutOfBounds { .. } => "SPANNER_SOURCE_OUT_OF_BOUNDS",
        /// A priority-queue operation failed while an algorithm was running.
        HeapFailure => Heap { .. } => "SPANNER_HEAP_FAILURE",
    }
}

impl SpannerError {
    /// Retrieve the inner [`HeapErrorCode`] when the error originated in the
    /// indexed heap.
    pub const fn heap_code(&self) -> Option<crate::heap::HeapErrorCode> {
        match self {
            Self::Heap { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SpannerError>;
