//! Weighted union-find over the graph's vertex index space.
//!
//! Parents use `None` as the root sentinel. Weights are only meaningful at
//! roots, where they count the present vertices in the tree. The structure is
//! rebuilt from scratch before every component pass, so removals never have to
//! be reflected incrementally.

use crate::error::{GraphError, Result};

#[derive(Clone, Debug)]
pub(crate) struct WeightedUnionFind {
    parent: Vec<Option<usize>>,
    weight: Vec<usize>,
}

impl WeightedUnionFind {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            parent: vec![None; capacity],
            weight: vec![0; capacity],
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Makes every index its own root, weighted 1 when `present` says so and
    /// 0 otherwise.
    pub(crate) fn reset(&mut self, present: impl Fn(usize) -> bool) {
        for (index, (parent, weight)) in self.parent.iter_mut().zip(&mut self.weight).enumerate() {
            *parent = None;
            *weight = usize::from(present(index));
        }
    }

    /// Returns the root of `node`, re-parenting every visited index directly
    /// onto it.
    pub(crate) fn find(&mut self, node: usize) -> Result<usize> {
        let mut root = self.check_range(node)?;
        while let Some(parent) = self.parent_of(root) {
            root = parent;
        }

        let mut current = node;
        while let Some(parent) = self.parent_of(current) {
            if let Some(slot) = self.parent.get_mut(current) {
                *slot = Some(root);
            }
            current = parent;
        }
        Ok(root)
    }

    /// Merges the trees holding `left` and `right`.
    ///
    /// The lighter root is attached under the heavier one; on equal weights
    /// `right`'s root goes under `left`'s. Returns `false` when both already
    /// shared a root.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_weight = self.weight.get(left_root).copied().unwrap_or_default();
        let right_weight = self.weight.get(right_root).copied().unwrap_or_default();
        let (parent, child) = if right_weight > left_weight {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        if let Some(slot) = self.parent.get_mut(child) {
            *slot = Some(parent);
        }
        if let Some(slot) = self.weight.get_mut(parent) {
            *slot = left_weight + right_weight;
        }
        Ok(true)
    }

    /// Parent pointer of `node`; `None` marks a root.
    pub(crate) fn parent(&self, node: usize) -> Result<Option<usize>> {
        self.check_range(node)?;
        Ok(self.parent_of(node))
    }

    pub(crate) fn weight(&self, node: usize) -> Result<usize> {
        let index = self.check_range(node)?;
        Ok(self.weight.get(index).copied().unwrap_or_default())
    }

    /// Iterates over `(root, weight)` pairs.
    pub(crate) fn roots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parent
            .iter()
            .zip(&self.weight)
            .enumerate()
            .filter(|(_, (parent, _))| parent.is_none())
            .map(|(index, (_, weight))| (index, *weight))
    }

    /// Returns a copy sized to `capacity`; new entries are weightless roots.
    pub(crate) fn grown(&self, capacity: usize) -> Self {
        let capacity = capacity.max(self.capacity());
        let mut parent = Vec::with_capacity(capacity);
        parent.extend_from_slice(&self.parent);
        parent.resize(capacity, None);
        let mut weight = Vec::with_capacity(capacity);
        weight.extend_from_slice(&self.weight);
        weight.resize(capacity, 0);
        Self { parent, weight }
    }

    fn parent_of(&self, node: usize) -> Option<usize> {
        self.parent.get(node).copied().flatten()
    }

    fn check_range(&self, index: usize) -> Result<usize> {
        if index < self.capacity() {
            Ok(index)
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            })
        }
    }
}
