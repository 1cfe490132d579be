//! Property 2: Structural invariant verification.
//!
//! For any generated graph, verifies:
//!
//! - **Symmetry**: every live edge is recorded in both endpoint lists.
//! - **Severance**: removed nodes have no edges in either direction.
//! - **Root weights**: after recomputation each root's weight equals the
//!   number of present vertices resolving to it.
//! - **Idempotence**: re-adding every edge leaves all degrees unchanged.
//! - **Live count**: the live vertex count equals the surviving nodes.

use proptest::{prop_assert, prop_assert_eq};
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::Graph;

use super::equivalence::build_graph;
use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = build_graph(fixture)?;

    validate_symmetry(fixture, &graph)?;
    validate_severance(fixture, &graph)?;
    validate_root_weights(&mut graph)?;
    validate_idempotence(fixture, &mut graph)?;

    let survivors = (0..fixture.node_count)
        .filter(|&node| fixture.is_live(node))
        .count();
    prop_assert_eq!(graph.live_vertex_count(), survivors);
    Ok(())
}

fn validate_symmetry(fixture: &GraphFixture, graph: &Graph) -> TestCaseResult {
    for &(source, target) in &fixture.edges {
        if fixture.is_live(source) && fixture.is_live(target) {
            prop_assert!(graph.has_edge(source, target));
            prop_assert!(graph.has_edge(target, source));
        }
    }
    Ok(())
}

fn validate_severance(fixture: &GraphFixture, graph: &Graph) -> TestCaseResult {
    for &removed in &fixture.removals {
        if graph.is_present(removed) {
            return Err(TestCaseError::fail(format!(
                "removed node {removed} is still present"
            )));
        }
        for other in 0..fixture.node_count {
            if graph.has_edge(removed, other) || graph.has_edge(other, removed) {
                return Err(TestCaseError::fail(format!(
                    "edge between removed node {removed} and {other} survived"
                )));
            }
        }
    }
    Ok(())
}

fn validate_root_weights(graph: &mut Graph) -> TestCaseResult {
    graph.compute_components();
    let present: Vec<usize> = graph.nodes().collect();
    for &candidate in &present {
        if graph.parent(candidate).map_err(fail)?.is_some() {
            continue;
        }
        let mut members = 0;
        for &node in &present {
            if graph.find(node).map_err(fail)? == candidate {
                members += 1;
            }
        }
        prop_assert_eq!(graph.weight(candidate).map_err(fail)?, members);
    }
    Ok(())
}

fn validate_idempotence(fixture: &GraphFixture, graph: &mut Graph) -> TestCaseResult {
    let before: Vec<_> = graph.nodes().map(|node| graph.degree(node)).collect();
    for &(source, target) in &fixture.edges {
        if fixture.is_live(source) && fixture.is_live(target) {
            graph.add_edge(source, target).map_err(fail)?;
        }
    }
    let after: Vec<_> = graph.nodes().map(|node| graph.degree(node)).collect();
    prop_assert_eq!(before, after);
    Ok(())
}

fn fail(error: crate::GraphError) -> TestCaseError {
    TestCaseError::fail(error.to_string())
}
