//! Unit tests for CLI parsing, execution, and rendering.

use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rstest::rstest;
use spanner_core::SpannerError;
use tempfile::NamedTempFile;

use super::{AlgorithmChoice, Cli, CliError, Command, ExecutionSummary, render_summary, run_cli};

const DIAMOND: &str = "4 5\n1 2 1\n2 3 2\n3 4 1\n1 4 4\n1 3 5\n";

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments must parse")
}

fn graph_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file must be created");
    file.write_all(contents.as_bytes())
        .expect("temp file must accept writes");
    file
}

#[test]
fn run_defaults_to_kruskal_from_stdin_with_source_one() {
    let cli = parse(&["spanner", "run"]);
    let Command::Run(command) = cli.command;
    assert_eq!(command.input, None);
    assert_eq!(command.algorithm, AlgorithmChoice::Kruskal);
    assert_eq!(command.source, 1);
}

#[rstest]
#[case("kruskal", AlgorithmChoice::Kruskal)]
#[case("prim-edge-queue", AlgorithmChoice::PrimEdgeQueue)]
#[case("prim-vertex-queue", AlgorithmChoice::PrimVertexQueue)]
#[case("prim-indexed-heap", AlgorithmChoice::PrimIndexedHeap)]
fn algorithm_flag_accepts_every_strategy(#[case] flag: &str, #[case] expected: AlgorithmChoice) {
    let cli = parse(&["spanner", "run", "graph.txt", "--algorithm", flag]);
    let Command::Run(command) = cli.command;
    assert_eq!(command.algorithm, expected);
    assert_eq!(command.input, Some(PathBuf::from("graph.txt")));
}

#[test]
fn unknown_algorithm_is_rejected_at_parse_time() {
    let result = Cli::try_parse_from(["spanner", "run", "--algorithm", "boruvka"]);
    assert!(result.is_err());
}

#[rstest]
#[case::kruskal("kruskal")]
#[case::prim_edge_queue("prim-edge-queue")]
#[case::prim_vertex_queue("prim-vertex-queue")]
#[case::prim_indexed_heap("prim-indexed-heap")]
fn run_cli_computes_the_diamond_tree(#[case] flag: &str) {
    let file = graph_file(DIAMOND);
    let path = file.path().to_str().expect("temp path is valid UTF-8");

    let summary = run_cli(parse(&["spanner", "run", path, "--algorithm", flag]))
        .expect("run must succeed");

    assert_eq!(summary.total_weight, 4);
    assert_eq!(summary.tree_edges, 3);
    assert_eq!(summary.vertex_count, 4);
}

#[test]
fn run_cli_honours_the_one_based_source_flag() {
    let file = graph_file(DIAMOND);
    let path = file.path().to_str().expect("temp path is valid UTF-8");

    let summary = run_cli(parse(&[
        "spanner",
        "run",
        path,
        "--algorithm",
        "prim-indexed-heap",
        "--source",
        "3",
    ]))
    .expect("run must succeed");

    assert_eq!(summary.total_weight, 4);
}

#[test]
fn zero_source_is_rejected_before_the_core_runs() {
    let file = graph_file(DIAMOND);
    let path = file.path().to_str().expect("temp path is valid UTF-8");

    let err = run_cli(parse(&["spanner", "run", path, "--source", "0"]))
        .expect_err("source 0 is not a vertex");
    assert!(matches!(err, CliError::ZeroSource));
}

#[test]
fn out_of_range_source_surfaces_the_core_error() {
    let file = graph_file(DIAMOND);
    let path = file.path().to_str().expect("temp path is valid UTF-8");

    let err = run_cli(parse(&["spanner", "run", path, "--source", "9"]))
        .expect_err("source 9 does not exist");
    assert!(matches!(
        err,
        CliError::Core(SpannerError::SourceOutOfBounds {
            source: 8,
            vertex_count: 4
        })
    ));
}

#[test]
fn missing_input_file_reports_the_path() {
    let err = run_cli(parse(&["spanner", "run", "/no/such/graph.txt"]))
        .expect_err("file does not exist");
    match err {
        CliError::Input { path, .. } => assert_eq!(path, "/no/such/graph.txt"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_graph_text_surfaces_the_parse_error() {
    let file = graph_file("2 1\n1 two 3\n");
    let path = file.path().to_str().expect("temp path is valid UTF-8");

    let err = run_cli(parse(&["spanner", "run", path])).expect_err("graph text is malformed");
    assert!(matches!(err, CliError::Graph(_)));
}

#[test]
fn render_summary_prints_algorithm_weight_and_timing() {
    let summary = ExecutionSummary {
        algorithm: "prim (indexed heap)",
        total_weight: 42,
        tree_edges: 6,
        vertex_count: 7,
        elapsed: Duration::from_millis(5),
    };

    let mut rendered = Vec::new();
    render_summary(&summary, &mut rendered).expect("vec writer cannot fail");

    let text = String::from_utf8(rendered).expect("summary is UTF-8");
    assert_eq!(
        text,
        "algorithm: prim (indexed heap)\ntotal weight: 42\ntree edges: 6 of 7 vertices\nelapsed: 5ms\n"
    );
}
