use std::io;

use linked_sparse::prelude::*;
use linked_sparse_render::{write_dense, write_sparse};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("linked_sparse=trace")
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut array = SparseArray::new(10);
    array.set(5, 50)?;
    array.set(1, 10)?;
    array.set(9, 90)?;
    array.set(5, 55)?;

    write_dense(&mut out, &array)?;
    write_sparse(&mut out, &array)?;

    let mut other = SparseArray::new(10);
    other.set(1, 1)?;
    other.set(2, 2)?;
    other.set(9, -90)?;

    array.add(&other)?;

    write_dense(&mut out, &array)?;
    write_sparse(&mut out, &array)?;

    if let Err(error) = array.get(10) {
        eprintln!("{}", error);
    }

    Ok(())
}
