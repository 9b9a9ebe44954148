mod entry;
mod list;

pub use entry::*;
pub use list::*;
