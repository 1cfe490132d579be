//! Artist/song catalogue backed by the connectivity graph.
//!
//! Every artist and every song is a vertex; inserting a pairing adds an edge
//! between them. The catalogue never prints: each operation returns
//! [`Outcome`] values that front ends render however they like.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    builder::GraphBuilder,
    command::{Command, PrintTarget},
    error::Result,
    graph::{ComponentSummary, Graph},
    registry::{EntityKind, NameRegistry},
};

/// Observable result of a catalogue operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A new name was registered.
    Added {
        /// Kind of the new record.
        kind: EntityKind,
        /// Its name.
        name: Arc<str>,
    },
    /// The artist/song pairing was already recorded.
    Duplicate {
        /// Artist of the pairing.
        artist: Arc<str>,
        /// Song of the pairing.
        song: Arc<str>,
    },
    /// A record and its vertex were dropped.
    Removed {
        /// Kind of the dropped record.
        kind: EntityKind,
        /// Its name.
        name: Arc<str>,
    },
    /// A removal named an unknown record.
    Missing {
        /// Kind that was searched.
        kind: EntityKind,
        /// The name that was not found.
        name: Arc<str>,
    },
    /// Every registered name of one kind, in index order.
    Listing {
        /// Kind being listed.
        kind: EntityKind,
        /// The names.
        names: Vec<Arc<str>>,
    },
    /// Freshly computed connectivity statistics.
    Components(ComponentSummary),
}

/// Registry of artists and songs plus the graph linking them.
///
/// # Examples
/// ```
/// use tunegraph_core::{Catalogue, ComponentSummary, Outcome};
///
/// let mut catalogue = Catalogue::new().expect("default graph is valid");
/// catalogue.insert("Artist1", "Song1").expect("insert succeeds");
/// catalogue.insert("Artist2", "Song2").expect("insert succeeds");
/// assert_eq!(
///     catalogue.components(),
///     Outcome::Components(ComponentSummary::new(2, 2))
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Catalogue {
    registry: NameRegistry,
    graph: Graph,
}

impl Catalogue {
    /// Creates an empty catalogue over a default [`GraphBuilder`] graph.
    ///
    /// # Errors
    /// Propagates [`crate::GraphError`] from [`GraphBuilder::build`].
    pub fn new() -> Result<Self> {
        Self::with_builder(GraphBuilder::new())
    }

    /// Creates an empty catalogue over a graph configured by `builder`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidCapacity`] when the builder's
    /// initial capacity is zero.
    pub fn with_builder(builder: GraphBuilder) -> Result<Self> {
        Ok(Self {
            registry: NameRegistry::new(),
            graph: builder.build()?,
        })
    }

    #[must_use]
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Records that `artist` performs `song`.
    ///
    /// Yields an [`Outcome::Added`] for each name seen for the first time,
    /// then an [`Outcome::Duplicate`] when the pairing already existed.
    ///
    /// # Errors
    /// Propagates [`crate::GraphError`] if the graph rejects the new vertex or
    /// edge. A name whose vertex could not be created is unregistered again.
    #[instrument(name = "catalogue.insert", level = "debug", skip(self))]
    pub fn insert(&mut self, artist: &str, song: &str) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        let (artist_index, artist_name) = self.resolve(EntityKind::Artist, artist, &mut outcomes)?;
        let (song_index, song_name) = self.resolve(EntityKind::Song, song, &mut outcomes)?;

        if self.graph.has_edge(artist_index, song_index) {
            outcomes.push(Outcome::Duplicate {
                artist: artist_name,
                song: song_name,
            });
        } else {
            self.graph.add_edge(artist_index, song_index)?;
            debug!(artist_index, song_index, "pairing recorded");
        }
        Ok(outcomes)
    }

    /// Drops `name` of `kind` together with its vertex and edges.
    #[instrument(name = "catalogue.remove", level = "debug", skip(self))]
    pub fn remove(&mut self, kind: EntityKind, name: &str) -> Outcome {
        match self.registry.remove(kind, name) {
            Some(index) => {
                self.graph.remove_node(index);
                Outcome::Removed {
                    kind,
                    name: Arc::from(name),
                }
            }
            None => Outcome::Missing {
                kind,
                name: Arc::from(name),
            },
        }
    }

    /// Lists the names of `kind` in index order.
    #[must_use]
    pub fn list(&self, kind: EntityKind) -> Outcome {
        let names = self
            .registry
            .entries(kind)
            .map(|(_, name)| Arc::clone(name))
            .collect();
        Outcome::Listing { kind, names }
    }

    /// Recomputes connected components over the whole catalogue.
    #[instrument(name = "catalogue.components", level = "debug", skip(self))]
    pub fn components(&mut self) -> Outcome {
        Outcome::Components(self.graph.compute_components())
    }

    /// Applies a parsed [`Command`].
    ///
    /// # Errors
    /// Propagates [`crate::GraphError`] from [`Catalogue::insert`].
    pub fn execute(&mut self, command: &Command) -> Result<Vec<Outcome>> {
        let outcome = match command {
            Command::Insert { artist, song } => return self.insert(artist, song),
            Command::Remove { kind, name } => self.remove(*kind, name),
            Command::Print(PrintTarget::Names(kind)) => self.list(*kind),
            Command::Print(PrintTarget::Graph) => self.components(),
        };
        Ok(vec![outcome])
    }

    fn resolve(
        &mut self,
        kind: EntityKind,
        name: &str,
        outcomes: &mut Vec<Outcome>,
    ) -> Result<(usize, Arc<str>)> {
        let (index, created) = self.registry.lookup_or_create(kind, name);
        let stored = self
            .registry
            .name_of(index)
            .map_or_else(|| Arc::from(name), |(_, stored)| Arc::clone(stored));
        if created {
            if let Err(error) = self.graph.add_node(index) {
                self.registry.remove(kind, name);
                return Err(error);
            }
            outcomes.push(Outcome::Added {
                kind,
                name: Arc::clone(&stored),
            });
        }
        Ok((index, stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::{fixture, rstest};

    #[fixture]
    fn catalogue() -> Catalogue {
        Catalogue::with_builder(GraphBuilder::new().with_initial_capacity(2))
            .expect("capacity is non-zero")
    }

    fn added(kind: EntityKind, name: &str) -> Outcome {
        Outcome::Added {
            kind,
            name: Arc::from(name),
        }
    }

    #[rstest]
    fn insert_reports_new_names(mut catalogue: Catalogue) {
        let outcomes = catalogue.insert("A", "S").expect("insert succeeds");
        assert_eq!(
            outcomes,
            vec![added(EntityKind::Artist, "A"), added(EntityKind::Song, "S")]
        );
        assert_eq!(catalogue.graph().live_vertex_count(), 2);
        assert!(catalogue.graph().has_edge(0, 1));
    }

    #[rstest]
    fn repeated_pairing_is_a_duplicate(mut catalogue: Catalogue) {
        catalogue.insert("A", "S").expect("insert succeeds");
        let outcomes = catalogue.insert("A", "S").expect("insert succeeds");
        assert_eq!(
            outcomes,
            vec![Outcome::Duplicate {
                artist: Arc::from("A"),
                song: Arc::from("S"),
            }]
        );
    }

    #[rstest]
    fn removing_a_song_detaches_its_artists(mut catalogue: Catalogue) {
        catalogue.insert("A", "S").expect("insert succeeds");
        catalogue.insert("B", "S").expect("insert succeeds");
        assert_eq!(
            catalogue.components(),
            Outcome::Components(ComponentSummary::new(1, 3))
        );

        let outcome = catalogue.remove(EntityKind::Song, "S");
        assert!(matches!(outcome, Outcome::Removed { kind: EntityKind::Song, .. }));
        assert_eq!(
            catalogue.components(),
            Outcome::Components(ComponentSummary::new(2, 1))
        );
    }

    #[rstest]
    fn removed_index_is_reused(mut catalogue: Catalogue) {
        catalogue.insert("A", "S").expect("insert succeeds");
        catalogue.remove(EntityKind::Artist, "A");
        catalogue.insert("B", "T").expect("insert succeeds");
        assert_eq!(catalogue.registry().index_of(EntityKind::Artist, "B"), Some(0));
        assert_eq!(catalogue.registry().index_of(EntityKind::Song, "T"), Some(2));
        assert!(catalogue.graph().has_edge(0, 2));
        assert!(!catalogue.graph().has_edge(0, 1));
    }

    #[rstest]
    fn removing_unknown_name_is_missing(mut catalogue: Catalogue) {
        assert_eq!(
            catalogue.remove(EntityKind::Artist, "ghost"),
            Outcome::Missing {
                kind: EntityKind::Artist,
                name: Arc::from("ghost"),
            }
        );
    }

    #[rstest]
    fn listing_follows_index_order(mut catalogue: Catalogue) {
        catalogue.insert("A1", "S1").expect("insert succeeds");
        catalogue.insert("A2", "S2").expect("insert succeeds");
        assert_eq!(
            catalogue.list(EntityKind::Song),
            Outcome::Listing {
                kind: EntityKind::Song,
                names: vec![Arc::from("S1"), Arc::from("S2")],
            }
        );
    }

    #[rstest]
    fn execute_dispatches_each_command(mut catalogue: Catalogue) {
        let insert = Command::Insert {
            artist: "A".into(),
            song: "S".into(),
        };
        assert_eq!(catalogue.execute(&insert).expect("insert succeeds").len(), 2);
        let print = Command::Print(PrintTarget::Graph);
        assert_eq!(
            catalogue.execute(&print).expect("print succeeds"),
            vec![Outcome::Components(ComponentSummary::new(1, 2))]
        );
        let remove = Command::Remove {
            kind: EntityKind::Song,
            name: "S".into(),
        };
        assert!(matches!(
            catalogue.execute(&remove).expect("remove succeeds").as_slice(),
            [Outcome::Removed { .. }]
        ));
    }
}
