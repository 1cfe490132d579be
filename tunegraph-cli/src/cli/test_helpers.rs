//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_script(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_command_for(script: PathBuf) -> RunCommand {
    RunCommand {
        script,
        initial_capacity: 10,
        strict_edges: false,
    }
}

pub(super) fn cli_for(script: PathBuf) -> Cli {
    Cli {
        command: Command::Run(run_command_for(script)),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

/// Renders `summary` into a `String` the way stdout would receive it.
pub(super) fn rendered(summary: &ExecutionSummary) -> io::Result<String> {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
