//! Type definitions for graph property-based tests.

use test_strategy::Arbitrary;

/// Shape of the generated edge set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Topology {
    /// Every artist/song pair is linked with a sampled probability.
    #[weight(3)]
    Random,
    /// Roughly one edge per two vertices, leaving many singletons.
    #[weight(2)]
    Sparse,
    /// Vertices split into groups with edges only inside a group.
    #[weight(2)]
    Clustered,
    /// One hub artist linked to every song.
    #[weight(1)]
    Star,
}

/// Fixture for graph property tests.
///
/// Even indices play artists and odd indices play songs, so every generated
/// edge links an artist with a song.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Capacity handed to the builder, kept small to force growth.
    pub initial_capacity: usize,
    /// Nodes `0..node_count` are added in ascending order.
    pub node_count: usize,
    /// Undirected edges applied after all nodes exist.
    pub edges: Vec<(usize, usize)>,
    /// Nodes removed after all edges were applied.
    pub removals: Vec<usize>,
    /// Topology used during generation.
    pub topology: Topology,
}

impl GraphFixture {
    /// Returns `true` when `index` survives the removals.
    pub fn is_live(&self, index: usize) -> bool {
        index < self.node_count && !self.removals.contains(&index)
    }
}
