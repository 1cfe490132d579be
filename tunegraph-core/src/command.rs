//! Line-oriented command scripts.
//!
//! A script holds one command per line:
//!
//! ```text
//! insert Nina Simone<SEP>Feeling Good
//! remove artist Nina Simone
//! print song
//! print graph
//! ```
//!
//! Surrounding whitespace is ignored and blank lines are skipped. Names may
//! contain inner spaces.

use crate::{error::CommandParseError, registry::EntityKind};

/// Marker splitting the artist from the song in an `insert` line.
pub const SEPARATOR: &str = "<SEP>";

/// What a `print` command lists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrintTarget {
    /// Every registered name of one kind.
    Names(EntityKind),
    /// The connected-component summary.
    Graph,
}

/// A parsed script command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Records an artist performing a song.
    Insert {
        /// Artist name.
        artist: String,
        /// Song name.
        song: String,
    },
    /// Drops one artist or song.
    Remove {
        /// Kind of record to drop.
        kind: EntityKind,
        /// Name of the record.
        name: String,
    },
    /// Lists names or reports components.
    Print(PrintTarget),
}

/// Parses a whole script, stopping at the first malformed line.
///
/// # Errors
/// Returns the [`CommandParseError`] of the first line that fails to parse.
///
/// # Examples
/// ```
/// use tunegraph_core::{Command, EntityKind, PrintTarget, parse_script};
///
/// let commands = parse_script("insert A<SEP>B\n\nprint artist\n")
///     .expect("script is well formed");
/// assert_eq!(
///     commands,
///     vec![
///         Command::Insert { artist: "A".into(), song: "B".into() },
///         Command::Print(PrintTarget::Names(EntityKind::Artist)),
///     ]
/// );
/// ```
pub fn parse_script(script: &str) -> Result<Vec<Command>, CommandParseError> {
    script
        .lines()
        .enumerate()
        .filter_map(|(offset, text)| parse_line(offset + 1, text).transpose())
        .collect()
}

/// Parses a single line; blank lines yield `Ok(None)`.
///
/// # Errors
/// Returns a [`CommandParseError`] tagged with `line` when the text is not a
/// valid command.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, CommandParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = split_word(text);
    let command = match keyword {
        "insert" => parse_insert(line, rest)?,
        "remove" => {
            let (kind, name) = split_word(rest);
            let kind = parse_kind(kind).ok_or_else(|| CommandParseError::UnknownKind {
                line,
                kind: kind.to_owned(),
            })?;
            Command::Remove {
                kind,
                name: required_name(line, name)?,
            }
        }
        "print" => Command::Print(parse_print_target(line, rest)?),
        other => {
            return Err(CommandParseError::UnknownCommand {
                line,
                command: other.to_owned(),
            });
        }
    };
    Ok(Some(command))
}

fn parse_insert(line: usize, rest: &str) -> Result<Command, CommandParseError> {
    let (artist, song) = rest
        .split_once(SEPARATOR)
        .ok_or(CommandParseError::MissingSeparator { line })?;
    Ok(Command::Insert {
        artist: required_name(line, artist)?,
        song: required_name(line, song)?,
    })
}

fn parse_print_target(line: usize, rest: &str) -> Result<PrintTarget, CommandParseError> {
    if rest == "graph" {
        return Ok(PrintTarget::Graph);
    }
    parse_kind(rest)
        .map(PrintTarget::Names)
        .ok_or_else(|| CommandParseError::UnknownPrintTarget {
            line,
            target: rest.to_owned(),
        })
}

fn parse_kind(word: &str) -> Option<EntityKind> {
    match word {
        "artist" => Some(EntityKind::Artist),
        "song" => Some(EntityKind::Song),
        _ => None,
    }
}

fn required_name(line: usize, name: &str) -> Result<String, CommandParseError> {
    let name = name.trim();
    if name.is_empty() {
        Err(CommandParseError::MissingName { line })
    } else {
        Ok(name.to_owned())
    }
}

fn split_word(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(word, rest)| (word, rest.trim_start()))
}
