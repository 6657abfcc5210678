//! Command implementations and argument parsing for the spanner CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanner_core::{Algorithm, Graph, GraphError, SpannerBuilder, SpannerError};
use thiserror::Error;
use tracing::{info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "spanner", about = "Compute minimum spanning trees.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Read a graph and compute its minimum spanning tree.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph input file in `vertex_count edge_count` / `source target weight`
    /// format; `-` or absent reads stdin.
    pub input: Option<PathBuf>,

    /// MST strategy to execute.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Kruskal)]
    pub algorithm: AlgorithmChoice,

    /// One-based id of the source vertex for the Prim variants.
    #[arg(long, default_value_t = 1)]
    pub source: usize,
}

/// Strategy selector exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Kruskal's algorithm with union-find.
    Kruskal,
    /// Prim's algorithm over an edge priority queue.
    PrimEdgeQueue,
    /// Prim's algorithm over a vertex priority queue.
    PrimVertexQueue,
    /// Prim's algorithm over an indexed decrease-key heap.
    PrimIndexedHeap,
}

impl From<AlgorithmChoice> for Algorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Kruskal => Self::Kruskal,
            AlgorithmChoice::PrimEdgeQueue => Self::PrimEdgeQueue,
            AlgorithmChoice::PrimVertexQueue => Self::PrimVertexQueue,
            AlgorithmChoice::PrimIndexedHeap => Self::PrimIndexedHeap,
        }
    }
}

/// Errors surfaced by CLI command execution.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open graph input `{path}`")]
    Input {
        /// Rendered path of the file that could not be opened.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The graph text was malformed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The core rejected or failed the run.
    #[error(transparent)]
    Core(#[from] SpannerError),
    /// A zero source id was supplied; input ids are one-based.
    #[error("source vertex ids are one-based; 0 does not name a vertex")]
    ZeroSource,
}

/// Facts rendered after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Display name of the executed algorithm.
    pub algorithm: &'static str,
    /// Summed weight of the chosen edges.
    pub total_weight: i64,
    /// Number of chosen edges.
    pub tree_edges: usize,
    /// Number of vertices in the input graph.
    pub vertex_count: usize,
    /// Wall time of the core run, excluding input parsing.
    pub elapsed: Duration,
}

/// Executes the parsed command.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or the core rejects
/// the run.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(command) => run_command(&command),
    }
}

#[instrument(
    name = "cli.run",
    err,
    skip(command),
    fields(algorithm = ?command.algorithm, source = command.source),
)]
fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let graph = load_graph(command.input.as_deref())?;
    let source = command.source.checked_sub(1).ok_or(CliError::ZeroSource)?;

    let spanner = SpannerBuilder::new()
        .with_algorithm(command.algorithm.into())
        .with_source(source)
        .build();

    let started = Instant::now();
    let result = spanner.run(&graph)?;
    let elapsed = started.elapsed();

    info!(
        total_weight = result.total_weight(),
        tree_edges = result.edges().len(),
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "run finished"
    );

    Ok(ExecutionSummary {
        algorithm: result.algorithm().name(),
        total_weight: result.total_weight(),
        tree_edges: result.edges().len(),
        vertex_count: graph.vertex_count(),
        elapsed,
    })
}

fn load_graph(path: Option<&Path>) -> Result<Graph, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).map_err(|source| CliError::Input {
                path: path.display().to_string(),
                source,
            })?;
            Ok(Graph::from_reader(BufReader::new(file))?)
        }
        _ => {
            let stdin = io::stdin();
            Ok(Graph::from_reader(stdin.lock())?)
        }
    }
}

/// Renders the summary in the order the original tool printed it: algorithm,
/// weight, then timing.
///
/// # Errors
/// Propagates failures of the underlying writer.
pub fn render_summary(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "algorithm: {}", summary.algorithm)?;
    writeln!(writer, "total weight: {}", summary.total_weight)?;
    writeln!(
        writer,
        "tree edges: {} of {} vertices",
        summary.tree_edges, summary.vertex_count
    )?;
    writeln!(writer, "elapsed: {:?}", summary.elapsed)
}
