//! Benchmark parameter types rendered into Criterion benchmark IDs.

use std::fmt;

/// Parameters for a component recomputation run.
#[derive(Clone, Debug)]
pub struct CatalogueBenchParams {
    /// Number of artists in the catalogue.
    pub artists: usize,
    /// Distinct songs linked to each artist.
    pub songs_per_artist: usize,
}

impl fmt::Display for CatalogueBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artists={},k={}", self.artists, self.songs_per_artist)
    }
}

/// Parameters for a graph growth run.
#[derive(Clone, Debug)]
pub struct GrowthBenchParams {
    /// Vertices added to the graph.
    pub vertices: usize,
    /// Capacity allocated before the first node.
    pub initial_capacity: usize,
}

impl fmt::Display for GrowthBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},cap={}", self.vertices, self.initial_capacity)
    }
}
