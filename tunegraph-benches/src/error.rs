//! Benchmark setup error type.
//!
//! Setup code propagates failures with `?` so benchmark bodies never need
//! `.expect()`.

use tunegraph_core::{CommandParseError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The graph rejected a node or edge.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// A generated script failed to parse.
    #[error("generated script failed to parse: {0}")]
    Script(#[from] CommandParseError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// More distinct songs per artist were requested than songs exist.
    #[error("cannot pick {per_artist} distinct songs from {songs}")]
    TooManySongsPerArtist {
        /// Requested songs per artist.
        per_artist: usize,
        /// Songs available.
        songs: usize,
    },
}
