//! Error types for the tunegraph core library.
//!
//! Defines the errors raised by the graph engine and the command parser, their
//! stable error codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by [`crate::Graph`] and [`crate::GraphBuilder`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex or union-find slot outside `[0, capacity)` was addressed.
    #[error("index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Capacity of the graph when the access was attempted.
        capacity: usize,
    },
    /// A node was added at an index that is already live.
    #[error("node {index} already exists")]
    DuplicateNode {
        /// Index of the live node.
        index: usize,
    },
    /// An edge endpoint was absent and auto-materialisation is disabled.
    #[error("edge endpoint {index} is not a registered node")]
    MissingEndpoint {
        /// Index of the absent endpoint.
        index: usize,
    },
    /// The initial capacity must be greater than zero.
    #[error("initial capacity must be at least 1 (got {got})")]
    InvalidCapacity {
        /// The capacity supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A slot outside the graph capacity was addressed.
        IndexOutOfRange => IndexOutOfRange { .. } => "GRAPH_INDEX_OUT_OF_RANGE",
        /// A node was added twice at the same index.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// An edge endpoint was absent while auto-materialisation was disabled.
        MissingEndpoint => MissingEndpoint { .. } => "GRAPH_MISSING_ENDPOINT",
        /// The builder received a zero capacity.
        InvalidCapacity => InvalidCapacity { .. } => "GRAPH_INVALID_CAPACITY",
    }
}

/// Error returned when a command script line cannot be parsed.
///
/// Every variant carries the 1-based line number of the offending line.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CommandParseError {
    /// The first word of the line is not a known command.
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand {
        /// Line number of the command.
        line: usize,
        /// The unrecognised keyword.
        command: String,
    },
    /// An `insert` line lacks the `<SEP>` marker between artist and song.
    #[error("line {line}: insert expects `<artist><SEP><song>`")]
    MissingSeparator {
        /// Line number of the command.
        line: usize,
    },
    /// A `remove` line names something other than `artist` or `song`.
    #[error("line {line}: unknown record kind `{kind}`")]
    UnknownKind {
        /// Line number of the command.
        line: usize,
        /// The unrecognised kind.
        kind: String,
    },
    /// A name required by the command is empty.
    #[error("line {line}: missing name")]
    MissingName {
        /// Line number of the command.
        line: usize,
    },
    /// A `print` line names something other than `artist`, `song` or `graph`.
    #[error("line {line}: unknown print target `{target}`")]
    UnknownPrintTarget {
        /// Line number of the command.
        line: usize,
        /// The unrecognised target.
        target: String,
    },
}

impl CommandParseError {
    /// Line number the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownCommand { line, .. }
            | Self::MissingSeparator { line }
            | Self::UnknownKind { line, .. }
            | Self::MissingName { line }
            | Self::UnknownPrintTarget { line, .. } => *line,
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`CommandParseError`] variants.
    enum CommandParseErrorCode for CommandParseError {
        /// The command keyword was not recognised.
        UnknownCommand => UnknownCommand { .. } => "COMMAND_UNKNOWN",
        /// The insert separator was missing.
        MissingSeparator => MissingSeparator { .. } => "COMMAND_MISSING_SEPARATOR",
        /// The record kind was not recognised.
        UnknownKind => UnknownKind { .. } => "COMMAND_UNKNOWN_KIND",
        /// A required name was empty.
        MissingName => MissingName { .. } => "COMMAND_MISSING_NAME",
        /// The print target was not recognised.
        UnknownPrintTarget => UnknownPrintTarget { .. } => "COMMAND_UNKNOWN_PRINT_TARGET",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
