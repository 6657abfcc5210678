//! Library surface for the spanner CLI.
//!
//! Split from the binary so argument parsing, command execution, and summary
//! rendering stay testable without spawning a process.

pub mod cli;
pub mod logging;
