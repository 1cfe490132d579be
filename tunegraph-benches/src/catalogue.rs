//! Seeded synthetic artist/song catalogues.
//!
//! Artist `a` maps to vertex `a`; song `s` maps to vertex `artists + s`. Each
//! artist is linked to a fixed number of distinct songs drawn uniformly, so
//! the component structure depends on the ratio of artists to songs.

use rand::{SeedableRng, rngs::SmallRng, seq::index};
use tunegraph_core::{Command, Graph, GraphBuilder, SEPARATOR, parse_script};

use crate::error::BenchSetupError;

/// Shape of a synthetic catalogue.
#[derive(Clone, Debug)]
pub struct CatalogueConfig {
    /// Number of artists.
    pub artists: usize,
    /// Number of songs.
    pub songs: usize,
    /// Distinct songs linked to each artist.
    pub songs_per_artist: usize,
    /// Seed for the pairing generator.
    pub seed: u64,
}

/// Generated artist/song pairings.
#[derive(Clone, Debug)]
pub struct SyntheticCatalogue {
    artists: usize,
    songs: usize,
    pairings: Vec<(usize, usize)>,
}

impl SyntheticCatalogue {
    /// Draws the pairings described by `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when any count is zero and
    /// [`BenchSetupError::TooManySongsPerArtist`] when an artist would need
    /// more distinct songs than exist.
    pub fn generate(config: &CatalogueConfig) -> Result<Self, BenchSetupError> {
        for (value, context) in [
            (config.artists, "artists"),
            (config.songs, "songs"),
            (config.songs_per_artist, "songs_per_artist"),
        ] {
            if value == 0 {
                return Err(BenchSetupError::ZeroValue { context });
            }
        }
        if config.songs_per_artist > config.songs {
            return Err(BenchSetupError::TooManySongsPerArtist {
                per_artist: config.songs_per_artist,
                songs: config.songs,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let pairings = (0..config.artists)
            .flat_map(|artist| {
                index::sample(&mut rng, config.songs, config.songs_per_artist)
                    .into_iter()
                    .map(move |song| (artist, song))
            })
            .collect();
        Ok(Self {
            artists: config.artists,
            songs: config.songs,
            pairings,
        })
    }

    /// `(artist, song)` pairs in generation order.
    #[must_use]
    pub fn pairings(&self) -> &[(usize, usize)] {
        &self.pairings
    }

    /// Total number of artist and song vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.artists.saturating_add(self.songs)
    }

    /// Builds a graph holding every vertex and pairing.
    ///
    /// # Errors
    /// Propagates [`tunegraph_core::GraphError`] from the builder or graph.
    pub fn build_graph(&self, initial_capacity: usize) -> Result<Graph, BenchSetupError> {
        let mut graph = GraphBuilder::new()
            .with_initial_capacity(initial_capacity)
            .build()?;
        for vertex in 0..self.vertex_count() {
            graph.add_node(vertex)?;
        }
        for &(artist, song) in &self.pairings {
            graph.add_edge(artist, self.artists.saturating_add(song))?;
        }
        Ok(graph)
    }

    /// Renders the pairings as an `insert` script.
    #[must_use]
    pub fn script(&self) -> String {
        self.pairings
            .iter()
            .map(|(artist, song)| format!("insert Artist{artist}{SEPARATOR}Song{song}\n"))
            .collect()
    }

    /// Parses [`Self::script`] into catalogue commands.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Script`] if the rendered script is rejected.
    pub fn commands(&self) -> Result<Vec<Command>, BenchSetupError> {
        Ok(parse_script(&self.script())?)
    }
}
