//! Property 1: Equivalence with the breadth-first search oracle.
//!
//! For any generated graph, two live vertices share a union-find root after
//! [`Graph::compute_components`] exactly when the oracle places them in the
//! same component, and the reported summary matches the oracle's counts.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, GraphBuilder};

use super::oracle::bfs_components;
use super::types::GraphFixture;

/// Builds the fixture's graph, applying nodes, edges and removals in order.
pub(super) fn build_graph(fixture: &GraphFixture) -> Result<Graph, TestCaseError> {
    let context = |error: crate::GraphError| {
        TestCaseError::fail(format!(
            "graph construction failed: {error} (topology={:?}, nodes={}, edges={})",
            fixture.topology,
            fixture.node_count,
            fixture.edges.len(),
        ))
    };

    let mut graph = GraphBuilder::new()
        .with_initial_capacity(fixture.initial_capacity)
        .build()
        .map_err(context)?;
    for node in 0..fixture.node_count {
        graph.add_node(node).map_err(context)?;
    }
    for &(source, target) in &fixture.edges {
        graph.add_edge(source, target).map_err(context)?;
    }
    for &node in &fixture.removals {
        graph.remove_node(node);
    }
    Ok(graph)
}

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = build_graph(fixture)?;
    let summary = graph.compute_components();
    let oracle = bfs_components(fixture);

    if summary.component_count() != oracle.component_count
        || summary.largest_size() != oracle.largest_size
    {
        return Err(TestCaseError::fail(format!(
            "summary mismatch: graph={summary:?}, oracle=({}, {}) (topology={:?}, nodes={})",
            oracle.component_count, oracle.largest_size, fixture.topology, fixture.node_count,
        )));
    }

    let live: Vec<usize> = (0..fixture.node_count)
        .filter(|&node| fixture.is_live(node))
        .collect();
    for (position, &left) in live.iter().enumerate() {
        for &right in &live[position + 1..] {
            let connected = graph
                .connected(left, right)
                .map_err(|error| TestCaseError::fail(error.to_string()))?;
            let expected = oracle.labels[left] == oracle.labels[right];
            if connected != expected {
                return Err(TestCaseError::fail(format!(
                    "connectivity mismatch for ({left}, {right}): graph={connected}, \
                     oracle={expected} (topology={:?})",
                    fixture.topology,
                )));
            }
        }
    }
    Ok(())
}
