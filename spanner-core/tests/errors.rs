//! Tests for the error surface: display text and stable codes.

use spanner_core::{
    Graph, GraphError, GraphErrorCode, HeapError, HeapErrorCode, SpannerError, SpannerErrorCode,
};

#[test]
fn graph_error_codes_round_trip_through_as_str() {
    let cases: [(GraphError, GraphErrorCode, &str); 4] = [
        (
            GraphError::Io {
                message: "broken pipe".to_owned(),
            },
            GraphErrorCode::Io,
            "GRAPH_IO",
        ),
        (
            GraphError::UnexpectedEof {
                expected: "edge weight",
            },
            GraphErrorCode::UnexpectedEof,
            "GRAPH_UNEXPECTED_EOF",
        ),
        (
            GraphError::InvalidToken {
                line: 3,
                token: "x".to_owned(),
                expected: "edge source",
            },
            GraphErrorCode::InvalidToken,
            "GRAPH_INVALID_TOKEN",
        ),
        (
            GraphError::EndpointOutOfRange {
                vertex: 9,
                vertex_count: 4,
            },
            GraphErrorCode::EndpointOutOfRange,
            "GRAPH_ENDPOINT_OUT_OF_RANGE",
        ),
    ];

    for (error, code, text) in cases {
        assert_eq!(error.code(), code);
        assert_eq!(code.as_str(), text);
        assert_eq!(code.to_string(), text);
    }
}

#[test]
fn spanner_error_messages_name_the_failing_pieces() {
    let err = SpannerError::SourceOutOfBounds {
        source: 7,
        vertex_count: 3,
    };
    assert_eq!(
        err.to_string(),
        "source vertex 7 is out of range for a graph with 3 vertices"
    );
    assert_eq!(err.code(), SpannerErrorCode::SourceOutOfBounds);
    assert_eq!(err.heap_code(), None);
}

#[test]
fn heap_failures_carry_their_inner_code() {
    let err = SpannerError::Heap {
        algorithm: "prim (indexed heap)",
        error: HeapError::QueueFull { capacity: 8 },
    };
    assert_eq!(err.code(), SpannerErrorCode::HeapFailure);
    assert_eq!(err.code().as_str(), "SPANNER_HEAP_FAILURE");
    assert_eq!(err.heap_code(), Some(HeapErrorCode::QueueFull));
    assert!(err.to_string().contains("capacity 8"));
}

#[test]
fn invalid_token_errors_render_their_position() {
    let err = Graph::from_reader("2 1\n1 2 oops\n".as_bytes())
        .expect_err("weight token is malformed");
    assert_eq!(err.to_string(), "line 2: invalid token `oops` for edge weight");
}
