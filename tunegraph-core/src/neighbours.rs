//! Doubly-linked neighbour lists for the adjacency store.
//!
//! Each list keeps its link cells in a private slab so neighbours can be
//! unlinked in place without shifting the remaining entries. Freed cells are
//! recycled by later insertions. Traversal goes through a [`Cursor`], which
//! always starts at the head, so a traversal can be restarted simply by asking
//! for a new cursor.

#[derive(Clone, Copy, Debug)]
struct Link {
    value: usize,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered list of neighbour indices for one vertex.
///
/// Values are kept in insertion order. The list does not deduplicate; the
/// adjacency store checks membership before inserting.
///
/// # Examples
/// ```
/// use tunegraph_core::NeighbourList;
///
/// let mut list = NeighbourList::new();
/// list.insert(3);
/// list.insert(7);
/// assert!(list.remove(3));
/// assert_eq!(list.cursor().collect::<Vec<_>>(), vec![7]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NeighbourList {
    links: Vec<Option<Link>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl NeighbourList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of neighbours currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the list holds no neighbours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` at the tail of the list.
    pub fn insert(&mut self, value: usize) {
        let link = Link {
            value,
            prev: self.tail,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                if let Some(cell) = self.links.get_mut(slot) {
                    *cell = Some(link);
                }
                slot
            }
            None => {
                self.links.push(Some(link));
                self.links.len() - 1
            }
        };

        match self.tail.and_then(|tail| self.link_mut(tail)) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Removes the first occurrence of `value`.
    ///
    /// Returns `true` when a neighbour was unlinked and `false` when the value
    /// was not present.
    pub fn remove(&mut self, value: usize) -> bool {
        match self.find_slot(value) {
            Some(slot) => self.unlink(slot).is_some(),
            None => false,
        }
    }

    /// Returns `true` when `value` is present in the list.
    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        self.find_slot(value).is_some()
    }

    /// Returns a cursor positioned at the head of the list.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    fn link(&self, slot: usize) -> Option<&Link> {
        self.links.get(slot).and_then(Option::as_ref)
    }

    fn link_mut(&mut self, slot: usize) -> Option<&mut Link> {
        self.links.get_mut(slot).and_then(Option::as_mut)
    }

    fn find_slot(&self, value: usize) -> Option<usize> {
        let mut current = self.head;
        while let Some(slot) = current {
            let link = self.link(slot)?;
            if link.value == value {
                return Some(slot);
            }
            current = link.next;
        }
        None
    }

    fn unlink(&mut self, slot: usize) -> Option<Link> {
        let link = self.links.get_mut(slot)?.take()?;

        match link.prev.and_then(|prev| self.link_mut(prev)) {
            Some(prev) => prev.next = link.next,
            None => self.head = link.next,
        }
        match link.next.and_then(|next| self.link_mut(next)) {
            Some(next) => next.prev = link.prev,
            None => self.tail = link.prev,
        }

        self.free.push(slot);
        self.len -= 1;
        Some(link)
    }
}

impl<'a> IntoIterator for &'a NeighbourList {
    type Item = usize;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// Forward traversal over a [`NeighbourList`], head to tail.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    list: &'a NeighbourList,
    next: Option<usize>,
    remaining: usize,
}

impl Iterator for Cursor<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.list.link(self.next?)?;
        self.next = link.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}
