mod iter;
mod sparse_array;

pub use iter::*;
pub use sparse_array::*;
