//! Name-to-index registry for artists and songs.
//!
//! Artists and songs share one index space because both become vertices of
//! the same graph. Released indices are handed out again lowest-first, so the
//! space stays dense and the graph never has to grow past twice the number of
//! live records.

use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    sync::Arc,
};

/// The two kinds of record held by the catalogue.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityKind {
    /// A performing artist.
    Artist,
    /// A song title.
    Song,
}

impl EntityKind {
    /// Both kinds, in listing order.
    pub const ALL: [Self; 2] = [Self::Artist, Self::Song];

    /// Capitalised singular label, e.g. `Artist`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Artist => "Artist",
            Self::Song => "Song",
        }
    }

    /// Lower-case plural label, e.g. `artists`.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Artist => "artists",
            Self::Song => "songs",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug)]
struct Entry {
    kind: EntityKind,
    name: Arc<str>,
}

/// Maps artist and song names onto graph vertex indices.
///
/// # Examples
/// ```
/// use tunegraph_core::{EntityKind, NameRegistry};
///
/// let mut registry = NameRegistry::new();
/// assert_eq!(registry.lookup_or_create(EntityKind::Artist, "Nina"), (0, true));
/// assert_eq!(registry.lookup_or_create(EntityKind::Song, "Nina"), (1, true));
/// assert_eq!(registry.lookup_or_create(EntityKind::Artist, "Nina"), (0, false));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NameRegistry {
    artists: HashMap<Arc<str>, usize>,
    songs: HashMap<Arc<str>, usize>,
    slots: Vec<Option<Entry>>,
    free: BTreeSet<usize>,
}

impl NameRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for `name`, allocating one when the name is new.
    ///
    /// The boolean is `true` when a fresh entry was created.
    pub fn lookup_or_create(&mut self, kind: EntityKind, name: &str) -> (usize, bool) {
        if let Some(index) = self.index_of(kind, name) {
            return (index, false);
        }

        let name: Arc<str> = Arc::from(name);
        let index = self.allocate();
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(Entry {
                kind,
                name: Arc::clone(&name),
            });
        }
        self.names_mut(kind).insert(name, index);
        (index, true)
    }

    /// Drops `name` and frees its index for reuse.
    ///
    /// Returns the released index, or `None` when the name was unknown.
    pub fn remove(&mut self, kind: EntityKind, name: &str) -> Option<usize> {
        let index = self.names_mut(kind).remove(name)?;
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
        self.free.insert(index);
        Some(index)
    }

    /// Reports whether `name` is registered under `kind`.
    #[must_use]
    pub fn exists(&self, kind: EntityKind, name: &str) -> bool {
        self.names(kind).contains_key(name)
    }

    #[must_use]
    pub fn index_of(&self, kind: EntityKind, name: &str) -> Option<usize> {
        self.names(kind).get(name).copied()
    }

    /// Returns the kind and name stored at `index`.
    #[must_use]
    pub fn name_of(&self, index: usize) -> Option<(EntityKind, &Arc<str>)> {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .map(|entry| (entry.kind, &entry.name))
    }

    /// Iterates over `(index, name)` pairs of `kind` in ascending index order.
    pub fn entries(&self, kind: EntityKind) -> impl Iterator<Item = (usize, &Arc<str>)> + '_ {
        self.slots.iter().enumerate().filter_map(move |(index, slot)| {
            slot.as_ref()
                .filter(|entry| entry.kind == kind)
                .map(|entry| (index, &entry.name))
        })
    }

    /// Number of names registered under `kind`.
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        self.names(kind).len()
    }

    /// Total number of registered names across both kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artists.len() + self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn allocate(&mut self) -> usize {
        if let Some(index) = self.free.pop_first() {
            return index;
        }
        self.slots.push(None);
        self.slots.len() - 1
    }

    fn names(&self, kind: EntityKind) -> &HashMap<Arc<str>, usize> {
        match kind {
            EntityKind::Artist => &self.artists,
            EntityKind::Song => &self.songs,
        }
    }

    fn names_mut(&mut self, kind: EntityKind) -> &mut HashMap<Arc<str>, usize> {
        match kind {
            EntityKind::Artist => &mut self.artists,
            EntityKind::Song => &mut self.songs,
        }
    }
}
