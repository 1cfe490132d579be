//! Builder utilities for configuring [`Graph`] instances.
//!
//! Exposes the initial capacity and the edge endpoint policy, and validates
//! them before the graph is allocated.

use crate::{
    Result,
    error::GraphError,
    graph::Graph,
};

/// Capacity used when the caller does not pick one.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use tunegraph_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_initial_capacity(4)
///     .with_auto_materialise(false)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(graph.capacity(), 4);
/// assert!(!graph.auto_materialise());
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    initial_capacity: usize,
    auto_materialise: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            auto_materialise: true,
        }
    }
}

impl GraphBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use tunegraph_core::{DEFAULT_INITIAL_CAPACITY, GraphBuilder};
    ///
    /// let builder = GraphBuilder::new();
    /// assert_eq!(builder.initial_capacity(), DEFAULT_INITIAL_CAPACITY);
    /// assert!(builder.auto_materialise());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertex slots allocated up front.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the configured initial capacity.
    #[must_use]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Chooses whether [`Graph::add_edge`] may create absent endpoint slots.
    ///
    /// Materialised slots hold an empty neighbour list but are not counted by
    /// [`Graph::live_vertex_count`]. When disabled, an absent endpoint fails
    /// with [`GraphError::MissingEndpoint`].
    #[must_use]
    pub fn with_auto_materialise(mut self, enabled: bool) -> Self {
        self.auto_materialise = enabled;
        self
    }

    /// Returns whether absent edge endpoints are materialised.
    #[must_use]
    pub fn auto_materialise(&self) -> bool {
        self.auto_materialise
    }

    /// Validates the configuration and allocates a [`Graph`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidCapacity`] when the initial capacity is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use tunegraph_core::{GraphBuilder, GraphError};
    ///
    /// let err = GraphBuilder::new()
    ///     .with_initial_capacity(0)
    ///     .build()
    ///     .expect_err("zero capacity must fail");
    /// assert!(matches!(err, GraphError::InvalidCapacity { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Graph> {
        if self.initial_capacity == 0 {
            return Err(GraphError::InvalidCapacity {
                got: self.initial_capacity,
            });
        }
        Ok(Graph::from_parts(self.initial_capacity, self.auto_materialise))
    }
}
