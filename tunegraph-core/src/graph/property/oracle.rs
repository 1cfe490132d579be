//! Breadth-first search oracle for component verification.
//!
//! Labels components straight from the fixture's edge list, sharing no code
//! with the adjacency store or the union-find under test.

use std::collections::VecDeque;

use super::types::GraphFixture;

/// Components discovered by the oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleComponents {
    /// Component label per index; `None` for removed nodes.
    pub labels: Vec<Option<usize>>,
    /// Number of components among live nodes.
    pub component_count: usize,
    /// Size of the largest component.
    pub largest_size: usize,
}

/// Labels the components of the fixture's final graph.
pub(super) fn bfs_components(fixture: &GraphFixture) -> OracleComponents {
    let mut adjacency = vec![Vec::new(); fixture.node_count];
    for &(source, target) in &fixture.edges {
        if fixture.is_live(source) && fixture.is_live(target) {
            adjacency[source].push(target);
            adjacency[target].push(source);
        }
    }

    let mut labels = vec![None; fixture.node_count];
    let mut component_count = 0;
    let mut largest_size = 0;
    for start in (0..fixture.node_count).filter(|&node| fixture.is_live(node)) {
        if labels[start].is_some() {
            continue;
        }
        let label = component_count;
        component_count += 1;
        labels[start] = Some(label);
        let mut size = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            size += 1;
            for &next in &adjacency[node] {
                if labels[next].is_none() {
                    labels[next] = Some(label);
                    queue.push_back(next);
                }
            }
        }
        largest_size = largest_size.max(size);
    }

    OracleComponents {
        labels,
        component_count,
        largest_size,
    }
}
