use std::cmp::Ordering;

use super::{Entry, EntryId};

/// Result of [`EntryList::search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// An entry with the searched index exists.
    Found(EntryId),
    /// No entry has the searched index, contains the entry it would be
    /// inserted after, `None` meaning the front of the list.
    Vacant(Option<EntryId>),
}

/// A doubly linked list of [`Entry`]s ordered by ascending index.
///
/// Entries are stored in an arena and refer to each other by [`EntryId`].
/// Entries are never unlinked, so every slot of the arena is part of the
/// list.
#[derive(Clone, Debug, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
}

impl EntryList {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry with the greatest index.
    #[inline]
    pub const fn tail(&self) -> Option<EntryId> {
        self.tail
    }

    #[inline]
    pub fn get(&self, id: EntryId) -> &Entry {
        &self.entries[id.slot()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntryId) -> &mut Entry {
        &mut self.entries[id.slot()]
    }

    /// Searches for `index` from the front of the list.
    #[inline]
    pub fn search(&self, index: usize) -> Search {
        self.search_after(None, index)
    }

    /// Searches for `index`, starting right after `after`.
    ///
    /// `after` must have an index smaller than `index`, or be `None` to start
    /// at the front. The scan stops at the first entry whose index is not
    /// smaller than `index`.
    pub fn search_after(&self, after: Option<EntryId>, index: usize) -> Search {
        debug_assert!(after.map_or(true, |id| self.get(id).index < index));

        let mut prev = after;
        let mut current = match after {
            Some(id) => self.get(id).next,
            None => self.head,
        };

        while let Some(id) = current {
            let entry = self.get(id);

            match entry.index.cmp(&index) {
                Ordering::Less => {
                    prev = Some(id);
                    current = entry.next;
                }
                Ordering::Equal => return Search::Found(id),
                Ordering::Greater => break,
            }
        }

        Search::Vacant(prev)
    }

    /// Links a new entry right after `prev`, or at the front if `prev` is
    /// `None`.
    ///
    /// The caller must pick `prev` so that ascending order is preserved,
    /// which is exactly what [`Search::Vacant`] reports.
    pub fn insert_after(&mut self, prev: Option<EntryId>, index: usize, value: i64) -> EntryId {
        let id = EntryId::new(self.entries.len());
        let next = match prev {
            Some(prev) => self.get(prev).next,
            None => self.head,
        };

        debug_assert!(prev.map_or(true, |prev| self.get(prev).index < index));
        debug_assert!(next.map_or(true, |next| self.get(next).index > index));

        self.entries.push(Entry {
            index,
            value,
            prev,
            next,
        });

        match prev {
            Some(prev) => self.get_mut(prev).next = Some(id),
            None => self.head = Some(id),
        }

        match next {
            Some(next) => self.get_mut(next).prev = Some(id),
            None => self.tail = Some(id),
        }

        id
    }

    /// Returns an iterator over the entries in ascending index order.
    #[inline]
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

/// Iterator over the [`Entry`]s of an [`EntryList`] in index order.
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    list: &'a EntryList,
    front: Option<EntryId>,
    back: Option<EntryId>,
    remaining: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let entry = self.list.get(self.front?);
        self.front = entry.next;
        self.remaining -= 1;

        Some(entry)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Entries<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let entry = self.list.get(self.back?);
        self.back = entry.prev;
        self.remaining -= 1;

        Some(entry)
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl std::iter::FusedIterator for Entries<'_> {}
