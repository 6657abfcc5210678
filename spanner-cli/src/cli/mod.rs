//! Command-line interface orchestration for the spanner CLI.
//!
//! The CLI offers a `run` command that reads a graph from a file or stdin,
//! executes the selected MST strategy, and renders a short summary.

mod commands;

pub use commands::{
    AlgorithmChoice, Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary,
    run_cli,
};

#[cfg(test)]
mod tests;
