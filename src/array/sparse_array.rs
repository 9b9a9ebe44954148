use crate::{
    error::{Result, SparseArrayError},
    storage::{EntryId, EntryList, Search},
};

use super::{Dense, Iter, Values};

/// A fixed-length integer array where only explicitly set indices take up
/// storage.
///
/// Unset indices read as `0`. Stored entries are kept in a linked list
/// ordered by index, so lookups and inserts scan from the lowest index.
#[derive(Clone, Debug, Default)]
pub struct SparseArray {
    len: usize,
    entries: EntryList,
}

impl SparseArray {
    /// Creates an empty [`SparseArray`] with logical length `len`.
    #[inline]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            entries: EntryList::new(),
        }
    }

    /// Creates a [`SparseArray`] from `(index, value)` pairs given in any
    /// order.
    ///
    /// Fails if an index is out of range or appears more than once.
    pub fn from_entries(
        len: usize,
        entries: impl IntoIterator<Item = (usize, i64)>,
    ) -> Result<Self> {
        let mut array = Self::new(len);

        for (index, value) in entries {
            array.check_index(index)?;

            match array.entries.search(index) {
                Search::Found(_) => {
                    return Err(SparseArrayError::InvalidArgument(format!(
                        "index {} appears more than once",
                        index
                    )));
                }
                Search::Vacant(prev) => {
                    array.entries.insert_after(prev, index, value);
                }
            }
        }

        Ok(array)
    }

    /// Returns the logical length, fixed at construction.
    #[inline]
    pub const fn logical_len(&self) -> usize {
        self.len
    }

    /// Returns the number of explicitly stored entries.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.entries.search(index), Search::Found(_))
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, len = self.len, "index out of range");

            Err(SparseArrayError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Sets the value at `index`, overwriting any value already stored there.
    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        self.check_index(index)?;

        match self.entries.search(index) {
            Search::Found(id) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, value, "updated entry");

                self.entries.get_mut(id).value = value;
            }
            Search::Vacant(prev) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, value, "inserted entry");

                self.entries.insert_after(prev, index, value);
            }
        }

        Ok(())
    }

    /// Returns the value at `index`, `0` if nothing is stored there.
    pub fn get(&self, index: usize) -> Result<i64> {
        self.check_index(index)?;

        Ok(match self.entries.search(index) {
            Search::Found(id) => self.entries.get(id).value(),
            Search::Vacant(_) => 0,
        })
    }

    /// Returns an iterator over the stored `(index, value)` pairs in
    /// ascending index order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.entries.iter(),
        }
    }

    /// Returns an iterator over the stored values in ascending index order.
    #[inline]
    pub fn values(&self) -> Values<'_> {
        Values { iter: self.iter() }
    }

    /// Returns an iterator over all [`logical_len`](Self::logical_len)
    /// positions, yielding `0` for unset ones.
    #[inline]
    pub fn dense(&self) -> Dense<'_> {
        Dense {
            iter: self.iter().peekable(),
            position: 0,
            len: self.len,
        }
    }

    #[inline]
    pub fn to_dense_vec(&self) -> Vec<i64> {
        self.dense().collect()
    }

    /// Adds every entry of `other` into `self`.
    ///
    /// Values at indices stored in both arrays are summed, entries only in
    /// `other` are copied over. Both arrays must have the same logical
    /// length. On error `self` is left unchanged.
    pub fn add(&mut self, other: &SparseArray) -> Result<()> {
        if self.len != other.len {
            #[cfg(feature = "tracing")]
            tracing::debug!(left = self.len, right = other.len, "length mismatch");

            return Err(SparseArrayError::LengthMismatch {
                left: self.len,
                right: other.len,
            });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "add",
            len = self.len,
            entries = self.entry_count(),
            other_entries = other.entry_count()
        )
        .entered();

        self.check_add(other)?;

        // both lists are ordered, so each search resumes where the last ended
        let mut cursor = None;
        for (index, value) in other.iter() {
            cursor = Some(match self.entries.search_after(cursor, index) {
                Search::Found(id) => {
                    let entry = self.entries.get_mut(id);
                    entry.value += value;
                    id
                }
                Search::Vacant(prev) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(index, value, "inserted entry");

                    self.entries.insert_after(prev, index, value)
                }
            });
        }

        Ok(())
    }

    /// Verifies that no sum produced by [`add`](Self::add) overflows.
    fn check_add(&self, other: &SparseArray) -> Result<()> {
        let mut cursor: Option<EntryId> = None;

        for (index, value) in other.iter() {
            match self.entries.search_after(cursor, index) {
                Search::Found(id) => {
                    if self.entries.get(id).value().checked_add(value).is_none() {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(index, "sum overflows");

                        return Err(SparseArrayError::Overflow { index });
                    }

                    cursor = Some(id);
                }
                Search::Vacant(prev) => cursor = prev,
            }
        }

        Ok(())
    }
}

impl PartialEq for SparseArray {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SparseArray {}

/// Collects a dense sequence, one value per logical position.
///
/// The logical length is the number of values and only nonzero values are
/// stored.
impl FromIterator<i64> for SparseArray {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut array = Self::new(0);

        for value in iter {
            if value != 0 {
                let tail = array.entries.tail();
                array.entries.insert_after(tail, array.len, value);
            }

            array.len += 1;
        }

        array
    }
}

impl<'a> IntoIterator for &'a SparseArray {
    type Item = (usize, i64);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod property_tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use super::*;

    const LEN: usize = 64;

    fn writes() -> impl Strategy<Value = Vec<(usize, i64)>> {
        prop::collection::vec((0..LEN, -1000i64..1000), 0..48)
    }

    fn build(writes: &[(usize, i64)]) -> SparseArray {
        let mut array = SparseArray::new(LEN);
        for &(index, value) in writes {
            array.set(index, value).unwrap();
        }
        array
    }

    proptest! {
        #[test]
        fn last_set_wins(writes in writes()) {
            let array = build(&writes);
            let expected: BTreeMap<_, _> = writes.iter().copied().collect();

            for index in 0..LEN {
                prop_assert_eq!(array.get(index).unwrap(), expected.get(&index).copied().unwrap_or(0));
            }

            prop_assert_eq!(array.entry_count(), expected.len());
            prop_assert_eq!(array.iter().collect::<Vec<_>>(), expected.into_iter().collect::<Vec<_>>());
        }

        #[test]
        fn dense_matches_get(writes in writes()) {
            let array = build(&writes);
            let dense = array.to_dense_vec();

            prop_assert_eq!(dense.len(), LEN);
            for (index, value) in dense.into_iter().enumerate() {
                prop_assert_eq!(array.get(index).unwrap(), value);
            }
        }

        #[test]
        fn set_is_idempotent(writes in writes(), index in 0..LEN, value in any::<i64>()) {
            let mut once = build(&writes);
            once.set(index, value).unwrap();

            let mut twice = once.clone();
            twice.set(index, value).unwrap();

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn reverse_iteration_mirrors_forward(writes in writes()) {
            let array = build(&writes);

            let mut backward = array.iter().rev().collect::<Vec<_>>();
            backward.reverse();

            prop_assert_eq!(array.iter().collect::<Vec<_>>(), backward);
        }

        #[test]
        fn add_matches_pointwise_sum(a in writes(), b in writes()) {
            let mut left = build(&a);
            let right = build(&b);
            let expected: Vec<i64> = left
                .dense()
                .zip(right.dense())
                .map(|(l, r)| l + r)
                .collect();

            left.add(&right).unwrap();

            prop_assert_eq!(left.to_dense_vec(), expected);
            let mut stored: Vec<_> = a.iter().chain(&b).map(|&(index, _)| index).collect();
            stored.sort_unstable();
            stored.dedup();
            prop_assert_eq!(left.iter().map(|(index, _)| index).collect::<Vec<_>>(), stored);
        }

        #[test]
        fn add_commutes_on_disjoint_indices(writes in writes()) {
            let (even, odd): (Vec<_>, Vec<_>) = writes.into_iter().partition(|&(index, _)| index % 2 == 0);
            let a = build(&even);
            let b = build(&odd);

            let mut ab = a.clone();
            ab.add(&b).unwrap();
            let mut ba = b.clone();
            ba.add(&a).unwrap();

            prop_assert_eq!(ab, ba);
        }
    }
}
