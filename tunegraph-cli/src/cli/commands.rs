//! Argument parsing, script execution and rendering for the tunegraph CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use tunegraph_core::{
    Catalogue, CommandParseError, DEFAULT_INITIAL_CAPACITY, EntityKind, GraphBuilder, GraphError,
    Outcome, SEPARATOR, parse_script,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "tunegraph", about = "Run artist/song catalogue scripts.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Apply a command script to an empty catalogue.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Script with one `insert`, `remove` or `print` command per line.
    pub script: PathBuf,

    /// Number of vertex slots allocated before the first growth.
    #[arg(
        long = "initial-capacity",
        default_value_t = DEFAULT_INITIAL_CAPACITY,
        value_parser = clap::value_parser!(usize),
    )]
    pub initial_capacity: usize,

    /// Reject edges whose endpoints were never added as nodes.
    #[arg(long = "strict-edges")]
    pub strict_edges: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The script could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The script contained a malformed line.
    #[error(transparent)]
    Parse(#[from] CommandParseError),
    /// The graph rejected an operation.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Stable code of the wrapped library error, when there is one.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Parse(error) => Some(error.code().as_str()),
            Self::Core(error) => Some(error.code().as_str()),
        }
    }
}

/// Outcomes produced by running one script.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Number of commands executed.
    pub commands: usize,
    /// Every outcome in execution order.
    pub outcomes: Vec<Outcome>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the script cannot be read or parsed, or when the
/// graph rejects an operation.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tunegraph_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "insert A<SEP>S\nprint graph\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         script: file.path().to_path_buf(),
///         initial_capacity: 10,
///         strict_edges: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.commands, 2);
/// assert_eq!(summary.outcomes.len(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        initial_capacity = command.initial_capacity,
        strict_edges = command.strict_edges,
        commands = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let builder = GraphBuilder::new()
        .with_initial_capacity(command.initial_capacity)
        .with_auto_materialise(!command.strict_edges);
    let mut catalogue = Catalogue::with_builder(builder)?;

    let script = read_script(&command.script)?;
    let commands = parse_script(&script)?;
    Span::current().record("commands", commands.len());

    let mut outcomes = Vec::new();
    for script_command in &commands {
        outcomes.extend(catalogue.execute(script_command)?);
    }

    info!(
        commands = commands.len(),
        outcomes = outcomes.len(),
        artists = catalogue.registry().count(EntityKind::Artist),
        songs = catalogue.registry().count(EntityKind::Song),
        "script completed"
    );
    Ok(ExecutionSummary {
        commands: commands.len(),
        outcomes,
    })
}

#[instrument(name = "cli.read_script", err, fields(path = field::Empty))]
pub(super) fn read_script(path: &Path) -> Result<String, CliError> {
    Span::current().record("path", field::display(path.display()));
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders one outcome as the lines a user sees.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use tunegraph_cli::cli::render_outcome;
/// # use tunegraph_core::{EntityKind, Outcome};
/// let mut buffer = Vec::new();
/// let outcome = Outcome::Added { kind: EntityKind::Song, name: Arc::from("Song1") };
/// render_outcome(&outcome, &mut buffer).expect("writing to a Vec succeeds");
/// assert_eq!(buffer, b"|Song1| is added to the Song database.\n");
/// ```
pub fn render_outcome(outcome: &Outcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Added { kind, name } => {
            writeln!(writer, "|{name}| is added to the {kind} database.")
        }
        Outcome::Duplicate { artist, song } => writeln!(
            writer,
            "|{artist}{SEPARATOR}{song}| duplicates a record already in the database."
        ),
        Outcome::Removed { kind, name } => {
            writeln!(writer, "|{name}| is removed from the {kind} database.")
        }
        Outcome::Missing { kind, name } => {
            writeln!(writer, "|{name}| does not exist in the {kind} database.")
        }
        Outcome::Listing { kind, names } => {
            for (ordinal, name) in names.iter().enumerate() {
                writeln!(writer, "{ordinal}: |{name}|")?;
            }
            writeln!(writer, "total {}: {}", kind.plural(), names.len())
        }
        Outcome::Components(summary) => {
            writeln!(
                writer,
                "There are {} connected components",
                summary.component_count()
            )?;
            writeln!(
                writer,
                "The largest connected component has {} elements",
                summary.largest_size()
            )
        }
    }
}

/// Renders every outcome of `summary` in execution order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for outcome in &summary.outcomes {
        render_outcome(outcome, &mut writer)?;
    }
    Ok(())
}
