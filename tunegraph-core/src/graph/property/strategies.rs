//! Strategy builders for graph property-based tests.
//!
//! Each generator adds nodes `0..n`, links even (artist) indices with odd
//! (song) indices according to a topology, and picks a handful of nodes to
//! remove afterwards.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, Topology};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for generated graphs.
const MAX_NODES: usize = 48;
/// Largest initial capacity; small values make every fixture grow.
const MAX_INITIAL_CAPACITY: usize = 4;

/// Generates fixtures across every topology.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for a specific topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edges = match topology {
        Topology::Random => random_edges(rng, node_count),
        Topology::Sparse => sparse_edges(rng, node_count),
        Topology::Clustered => clustered_edges(rng, node_count),
        Topology::Star => star_edges(node_count),
    };
    let removals = pick_removals(rng, node_count);
    GraphFixture {
        initial_capacity: rng.gen_range(1..=MAX_INITIAL_CAPACITY),
        node_count,
        edges,
        removals,
        topology,
    }
}

fn artists(node_count: usize) -> impl Iterator<Item = usize> {
    (0..node_count).step_by(2)
}

fn songs(node_count: usize) -> impl Iterator<Item = usize> {
    (1..node_count).step_by(2)
}

fn random_edges(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let probability: f64 = rng.gen_range(0.02..=0.3);
    let mut edges = Vec::new();
    for artist in artists(node_count) {
        for song in songs(node_count) {
            if rng.gen_bool(probability) {
                edges.push((artist, song));
            }
        }
    }
    edges
}

fn sparse_edges(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let artists: Vec<_> = artists(node_count).collect();
    let songs: Vec<_> = songs(node_count).collect();
    (0..node_count / 2)
        .filter_map(|_| Some((*artists.choose(rng)?, *songs.choose(rng)?)))
        .collect()
}

fn clustered_edges(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let groups = rng.gen_range(1..=4_usize);
    let mut edges = Vec::new();
    for artist in artists(node_count) {
        for song in songs(node_count) {
            if (artist / 2) % groups == (song / 2) % groups && rng.gen_bool(0.5) {
                edges.push((artist, song));
            }
        }
    }
    edges
}

fn star_edges(node_count: usize) -> Vec<(usize, usize)> {
    songs(node_count).map(|song| (0, song)).collect()
}

fn pick_removals(rng: &mut SmallRng, node_count: usize) -> Vec<usize> {
    let mut nodes: Vec<usize> = (0..node_count).collect();
    nodes.shuffle(rng);
    let count = rng.gen_range(0..=node_count / 4);
    nodes.truncate(count);
    nodes
}
