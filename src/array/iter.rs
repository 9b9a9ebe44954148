use std::iter::{FusedIterator, Peekable};

use crate::storage::Entries;

/// Iterator over the stored `(index, value)` pairs of a
/// [`SparseArray`](super::SparseArray), in ascending index order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    pub(crate) entries: Entries<'a>,
}

impl Iterator for Iter<'_> {
    type Item = (usize, i64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some((entry.index(), entry.value()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next_back()?;
        Some((entry.index(), entry.value()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the stored values only.
#[derive(Clone, Debug)]
pub struct Values<'a> {
    pub(crate) iter: Iter<'a>,
}

impl Iterator for Values<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, value)| value)
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

/// Iterator over every logical position, yielding 0 where nothing is stored.
#[derive(Clone, Debug)]
pub struct Dense<'a> {
    pub(crate) iter: Peekable<Iter<'a>>,
    pub(crate) position: usize,
    pub(crate) len: usize,
}

impl Iterator for Dense<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.len {
            return None;
        }

        let position = self.position;
        self.position += 1;

        Some(
            self.iter
                .next_if(|&(index, _)| index == position)
                .map_or(0, |(_, value)| value),
        )
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dense<'_> {}

impl FusedIterator for Dense<'_> {}
