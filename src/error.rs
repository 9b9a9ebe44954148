/// Errors returned by [`SparseArray`](crate::array::SparseArray) operations.
///
/// Every operation checks its input before touching the entry list, so an
/// error always leaves the array as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SparseArrayError {
    #[error("index {index} is out of range for a sparse array of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("cannot add a sparse array of length {right} to one of length {left}")]
    LengthMismatch { left: usize, right: usize },
    #[error("sum at index {index} overflows")]
    Overflow { index: usize },
}

pub type Result<T, E = SparseArrayError> = std::result::Result<T, E>;
