//! CLI entry point for the spanner MST toolkit.
//!
//! Parses command-line arguments with clap, runs the selected MST strategy,
//! renders the summary to stdout, and maps errors to exit codes. Logging is
//! initialised eagerly so subsequent operations can emit structured
//! diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spanner_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the summary, and flush
/// the output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, heap_code) = err
            .downcast_ref::<CliError>()
            .map(|cli_error| match cli_error {
                CliError::Core(core) => (
                    Some(core.code().as_str()),
                    core.heap_code().map(|heap| heap.as_str()),
                ),
                CliError::Graph(graph) => (Some(graph.code().as_str()), None),
                _ => (None, None),
            })
            .unwrap_or((None, None));

        let code_field = code.map(field::display);
        let heap_code_field = heap_code.map(field::display);

        error!(
            error = %err,
            code = code_field,
            heap_code = heap_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
