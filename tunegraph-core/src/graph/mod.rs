//! Artist/song connectivity graph.
//!
//! [`Graph`] combines the adjacency store with a weighted union-find over the
//! same index space. Nodes and edges can be added and removed freely; the
//! union-find only reflects the adjacency after [`Graph::compute_components`]
//! runs, and any later mutation leaves it stale until the next recomputation.
//! The graph never interprets names: callers hand it indices and keep their
//! own mapping.

use tracing::{debug, instrument, trace, warn};

use crate::{
    adjacency::AdjacencyStore,
    error::{GraphError, Result},
    neighbours::Cursor,
    union_find::WeightedUnionFind,
};

/// Connectivity statistics produced by [`Graph::compute_components`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ComponentSummary {
    component_count: usize,
    largest_size: usize,
}

impl ComponentSummary {
    /// Creates a summary from raw counts.
    #[must_use]
    pub const fn new(component_count: usize, largest_size: usize) -> Self {
        Self {
            component_count,
            largest_size,
        }
    }

    /// Number of connected components among present vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Vertex count of the largest component.
    #[must_use]
    #[rustfmt::skip]
    pub const fn largest_size(&self) -> usize { self.largest_size }
}

/// Undirected graph over index-addressed vertex slots.
///
/// # Examples
/// ```
/// use tunegraph_core::GraphBuilder;
///
/// let mut graph = GraphBuilder::new().build().expect("default builder is valid");
/// for index in 0..5 {
///     graph.add_node(index).expect("slot is free");
/// }
/// graph.add_edge(0, 1).expect("indices are in range");
/// graph.add_edge(1, 2).expect("indices are in range");
/// graph.add_edge(3, 4).expect("indices are in range");
///
/// let summary = graph.compute_components();
/// assert_eq!(summary.component_count(), 2);
/// assert_eq!(summary.largest_size(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    adjacency: AdjacencyStore,
    union_find: WeightedUnionFind,
    live_vertices: usize,
    auto_materialise: bool,
    last_summary: Option<ComponentSummary>,
}

impl Graph {
    pub(crate) fn from_parts(capacity: usize, auto_materialise: bool) -> Self {
        Self {
            adjacency: AdjacencyStore::with_capacity(capacity),
            union_find: WeightedUnionFind::new(capacity),
            live_vertices: 0,
            auto_materialise,
            last_summary: None,
        }
    }

    /// Current number of vertex slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.adjacency.capacity()
    }

    /// Number of vertices created through [`Graph::add_node`] and not yet
    /// removed. Slots materialised by [`Graph::add_edge`] are not counted.
    #[must_use]
    pub fn live_vertex_count(&self) -> usize {
        self.live_vertices
    }

    /// Whether [`Graph::add_edge`] materialises absent endpoints.
    #[must_use]
    pub fn auto_materialise(&self) -> bool {
        self.auto_materialise
    }

    /// Returns `true` when the slot at `index` holds a neighbour list.
    #[must_use]
    pub fn is_present(&self, index: usize) -> bool {
        self.adjacency.is_present(index)
    }

    /// Iterates over the indices of present slots in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.present().map(|(index, _)| index)
    }

    /// Returns a cursor over the neighbours of `index`, or `None` when the
    /// slot is absent.
    #[must_use]
    pub fn neighbours(&self, index: usize) -> Option<Cursor<'_>> {
        self.adjacency.list(index).map(|list| list.cursor())
    }

    /// Number of neighbours recorded for `index`.
    #[must_use]
    pub fn degree(&self, index: usize) -> Option<usize> {
        self.adjacency.list(index).map(|list| list.len())
    }

    /// Creates a vertex at `index`.
    ///
    /// The capacity doubles first when at least half of it is occupied by
    /// live vertices.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::DuplicateNode`] when the slot is already
    /// present and [`crate::GraphError::IndexOutOfRange`] when `index` lies
    /// beyond the capacity after growth.
    pub fn add_node(&mut self, index: usize) -> Result<()> {
        if self.adjacency.is_present(index) {
            return Err(GraphError::DuplicateNode { index });
        }
        if self.live_vertices >= self.capacity() / 2 {
            self.grow();
        }
        self.adjacency.create_vertex(index)?;
        self.live_vertices += 1;
        trace!(index, live = self.live_vertices, "node added");
        Ok(())
    }

    /// Records the undirected edge `(source, target)`.
    ///
    /// Adding an existing edge is a no-op. A self-loop is accepted and stored
    /// once.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::IndexOutOfRange`] when an endpoint lies
    /// beyond the capacity, or [`crate::GraphError::MissingEndpoint`] when an
    /// endpoint is absent and auto-materialisation is disabled.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<()> {
        self.adjacency.add_edge(source, target, self.auto_materialise)
    }

    /// Removes `target` from the neighbour list of `source`.
    ///
    /// Only the `source` side is touched; nothing happens when either endpoint
    /// is absent or out of range.
    pub fn remove_edge(&mut self, source: usize, target: usize) {
        self.adjacency.remove_edge(source, target);
    }

    /// Returns `true` when `target` is a direct neighbour of `source`.
    #[must_use]
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.adjacency.has_edge(source, target)
    }

    /// Removes the vertex at `index` together with all of its edges.
    ///
    /// Absent and out-of-range indices are ignored. Returns whether a vertex
    /// was removed. The union-find and the cached summary are left untouched.
    pub fn remove_node(&mut self, index: usize) -> bool {
        if !self.adjacency.remove_vertex(index) {
            return false;
        }
        self.live_vertices = self.live_vertices.saturating_sub(1);
        debug!(index, live = self.live_vertices, "node removed");
        true
    }

    /// Returns the union-find root of `index`, compressing the path walked.
    ///
    /// The answer reflects the most recent [`Graph::compute_components`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::IndexOutOfRange`] when `index` lies
    /// beyond the capacity.
    pub fn find(&mut self, index: usize) -> Result<usize> {
        self.union_find.find(index)
    }

    /// Returns `true` when both indices share a union-find root.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::IndexOutOfRange`] when either index lies
    /// beyond the capacity.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Union-find parent of `index`; `None` marks a root.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::IndexOutOfRange`] when `index` lies
    /// beyond the capacity.
    pub fn parent(&self, index: usize) -> Result<Option<usize>> {
        self.union_find.parent(index)
    }

    /// Union-find weight stored at `index`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::IndexOutOfRange`] when `index` lies
    /// beyond the capacity.
    pub fn weight(&self, index: usize) -> Result<usize> {
        self.union_find.weight(index)
    }

    /// Rebuilds the union-find from the adjacency lists and reports the
    /// resulting components.
    ///
    /// Every slot becomes its own root, then each present vertex is unioned
    /// with each of its neighbours. The summary is cached for
    /// [`Graph::report`].
    #[instrument(
        name = "graph.compute_components",
        level = "debug",
        skip(self),
        fields(capacity = self.capacity(), live = self.live_vertices),
    )]
    pub fn compute_components(&mut self) -> ComponentSummary {
        let adjacency = &self.adjacency;
        self.union_find.reset(|index| adjacency.is_present(index));

        for (vertex, list) in adjacency.present() {
            for neighbour in list.cursor() {
                if let Err(error) = self.union_find.union(vertex, neighbour) {
                    warn!(%error, vertex, neighbour, "skipping edge outside union-find range");
                }
            }
        }

        let mut summary = ComponentSummary::default();
        for (root, weight) in self.union_find.roots() {
            if adjacency.is_present(root) {
                summary.component_count += 1;
                summary.largest_size = summary.largest_size.max(weight);
            }
        }

        debug!(
            components = summary.component_count,
            largest = summary.largest_size,
            "components recomputed"
        );
        record_recomputation();
        self.last_summary = Some(summary);
        summary
    }

    /// Returns the summary cached by the last [`Graph::compute_components`].
    ///
    /// Never recomputes; mutations made since then are not reflected.
    #[must_use]
    pub fn report(&self) -> Option<ComponentSummary> {
        self.last_summary
    }

    fn grow(&mut self) {
        let from = self.capacity();
        let to = from.saturating_mul(2).max(1);
        let adjacency = self.adjacency.grown(to);
        let union_find = self.union_find.grown(to);
        self.adjacency = adjacency;
        self.union_find = union_find;
        debug!(from, to, live = self.live_vertices, "graph capacity doubled");
        record_growth();
    }
}

#[cfg(feature = "metrics")]
fn record_recomputation() {
    metrics::counter!("graph_component_recomputations").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_recomputation() {}

#[cfg(feature = "metrics")]
fn record_growth() {
    metrics::counter!("graph_capacity_growths").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_growth() {}


#[cfg(test)]
mod property;
