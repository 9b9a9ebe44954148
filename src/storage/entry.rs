/// A handle to an [`Entry`] inside an [`EntryList`](super::EntryList).
///
/// Handles are only meaningful for the list that created them.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryId(usize);

impl EntryId {
    #[inline]
    pub(crate) const fn new(slot: usize) -> Self {
        Self(slot)
    }

    #[inline]
    pub const fn slot(self) -> usize {
        self.0
    }
}

/// One explicitly stored `(index, value)` pair.
///
/// Contains the neighbouring entries in index order, `prev` having the next
/// smaller index and `next` the next greater one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub(crate) index: usize,
    pub(crate) value: i64,
    pub(crate) prev: Option<EntryId>,
    pub(crate) next: Option<EntryId>,
}

impl Entry {
    /// Returns the logical `index` of the entry.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the stored `value`.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }
}
