#![forbid(unsafe_code)]

//! A fixed-length sparse integer array backed by an index-ordered linked list.
//!
//! Only explicitly set indices take up storage, every other index reads as
//! `0`.
//!
//! ```
//! use linked_sparse::prelude::*;
//!
//! let mut array = SparseArray::new(5);
//! array.set(2, 7)?;
//! array.set(0, 3)?;
//! array.set(4, 9)?;
//!
//! assert_eq!(array.to_dense_vec(), vec![3, 0, 7, 0, 9]);
//! assert_eq!(array.values().collect::<Vec<_>>(), vec![3, 7, 9]);
//! # Ok::<(), SparseArrayError>(())
//! ```
//!
//! The entry list behind a [`SparseArray`] is internal, entries can only be
//! reached through the array itself.
//!
//! ```compile_fail
//! use linked_sparse::storage::EntryList;
//!
//! let mut list = EntryList::new();
//! list.insert_after(None, 5, 1);
//! list.insert_after(None, 9, 1);
//! ```

pub mod array;
pub mod error;
pub(crate) mod storage;

pub use array::SparseArray;
pub use error::{Result, SparseArrayError};

pub mod prelude {
    //! `use linked_sparse::prelude::*;` imports the most commonly used types.

    pub use crate::array::{Dense, Iter, SparseArray, Values};
    pub use crate::error::{Result, SparseArrayError};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn disjoint_add_commutes() {
        let mut a = SparseArray::new(6);
        a.set(0, 1).unwrap();
        a.set(4, 2).unwrap();

        let mut b = SparseArray::new(6);
        b.set(1, 3).unwrap();
        b.set(5, 4).unwrap();

        let mut ab = a.clone();
        ab.add(&b).unwrap();

        let mut ba = b.clone();
        ba.add(&a).unwrap();

        assert_eq!(ab, ba);
        assert_eq!(ab.to_dense_vec(), vec![1, 3, 0, 0, 2, 4]);
    }

    #[test]
    fn failed_set_then_valid_set() {
        let mut array = SparseArray::new(3);

        assert!(array.set(3, 1).is_err());
        array.set(2, 1).unwrap();

        assert_eq!(array.entry_count(), 1);
        assert_eq!(array.to_dense_vec(), array.dense().collect::<Vec<_>>());
    }

    #[test]
    fn error_messages() {
        let error = SparseArray::new(2).get(2).unwrap_err();

        assert_eq!(
            error.to_string(),
            "index 2 is out of range for a sparse array of length 2"
        );
    }
}
