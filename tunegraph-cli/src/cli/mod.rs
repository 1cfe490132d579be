//! Command-line interface for running catalogue scripts.
//!
//! The `run` command reads a script of `insert`, `remove` and `print` lines,
//! applies it to a fresh catalogue, and renders the outcomes.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, render_outcome, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
