//! Index-addressed adjacency storage.
//!
//! The store is a flat array of optional [`NeighbourList`]s. A `None` slot is
//! an absent vertex. Edges are recorded by index in both endpoint lists, so no
//! list ever owns another and the symmetric back-references form no ownership
//! cycle.

use crate::{
    error::{GraphError, Result},
    neighbours::NeighbourList,
};

#[derive(Clone, Debug)]
pub(crate) struct AdjacencyStore {
    slots: Vec<Option<NeighbourList>>,
}

impl AdjacencyStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn list(&self, index: usize) -> Option<&NeighbourList> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn is_present(&self, index: usize) -> bool {
        self.list(index).is_some()
    }

    /// Iterates over present slots along with their neighbour lists.
    pub(crate) fn present(&self) -> impl Iterator<Item = (usize, &NeighbourList)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|list| (index, list)))
    }

    /// Installs an empty list at `index`.
    pub(crate) fn create_vertex(&mut self, index: usize) -> Result<()> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(GraphError::IndexOutOfRange { index, capacity })?;
        if slot.is_some() {
            return Err(GraphError::DuplicateNode { index });
        }
        *slot = Some(NeighbourList::new());
        Ok(())
    }

    pub(crate) fn has_edge(&self, source: usize, target: usize) -> bool {
        self.list(source).is_some_and(|list| list.contains(target))
    }

    /// Records the undirected edge `(source, target)`.
    ///
    /// Absent endpoints are materialised as empty lists when `materialise` is
    /// set; otherwise they are rejected with [`GraphError::MissingEndpoint`].
    /// A self-loop stores the vertex once in its own list.
    pub(crate) fn add_edge(&mut self, source: usize, target: usize, materialise: bool) -> Result<()> {
        self.check_range(source)?;
        self.check_range(target)?;
        for endpoint in [source, target] {
            if !self.is_present(endpoint) && !materialise {
                return Err(GraphError::MissingEndpoint { index: endpoint });
            }
        }
        for endpoint in [source, target] {
            self.materialise(endpoint);
        }

        if self.has_edge(source, target) {
            return Ok(());
        }
        if let Some(list) = self.list_mut(source) {
            list.insert(target);
        }
        if source != target {
            if let Some(list) = self.list_mut(target) {
                list.insert(source);
            }
        }
        Ok(())
    }

    /// Removes `target` from `source`'s list only.
    ///
    /// Nothing happens unless both endpoints are present.
    pub(crate) fn remove_edge(&mut self, source: usize, target: usize) {
        if !self.is_present(target) {
            return;
        }
        if let Some(list) = self.list_mut(source) {
            list.remove(target);
        }
    }

    /// Severs every edge of `index` and marks the slot absent.
    ///
    /// Returns `false` when the slot was already absent or out of range.
    pub(crate) fn remove_vertex(&mut self, index: usize) -> bool {
        let Some(list) = self.slots.get_mut(index).and_then(Option::take) else {
            return false;
        };
        for neighbour in list.cursor().filter(|&neighbour| neighbour != index) {
            if let Some(back) = self.list_mut(neighbour) {
                back.remove(index);
            }
        }
        true
    }

    /// Returns a copy of the store with `capacity` slots.
    ///
    /// Existing lists keep their positions; the new slots are absent.
    pub(crate) fn grown(&self, capacity: usize) -> Self {
        let capacity = capacity.max(self.capacity());
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(self.slots.iter().cloned());
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    fn materialise(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.get_or_insert_with(NeighbourList::new);
        }
    }

    fn list_mut(&mut self, index: usize) -> Option<&mut NeighbourList> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    fn check_range(&self, index: usize) -> Result<()> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            })
        }
    }
}
