//! Text rendering for [`SparseArray`]s.
//!
//! Values are separated by single spaces. The dense form has one value per
//! logical position, the sparse form only the stored values.

use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use linked_sparse::SparseArray;

/// Renders every logical position of a [`SparseArray`], `0` where nothing is
/// stored.
#[derive(Clone, Copy, Debug)]
pub struct DenseLine<'a>(pub &'a SparseArray);

/// Renders only the stored values of a [`SparseArray`].
#[derive(Clone, Copy, Debug)]
pub struct SparseLine<'a>(pub &'a SparseArray);

fn write_joined(f: &mut fmt::Formatter<'_>, values: impl Iterator<Item = i64>) -> fmt::Result {
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }

        write!(f, "{}", value)?;
    }

    Ok(())
}

impl Display for DenseLine<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.0.dense())
    }
}

impl Display for SparseLine<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.0.values())
    }
}

/// Writes the dense line of `array` followed by a newline.
#[inline]
pub fn write_dense(mut writer: impl Write, array: &SparseArray) -> io::Result<()> {
    writeln!(writer, "{}", DenseLine(array))
}

/// Writes the sparse line of `array` followed by a newline.
#[inline]
pub fn write_sparse(mut writer: impl Write, array: &SparseArray) -> io::Result<()> {
    writeln!(writer, "{}", SparseLine(array))
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid value `{token}` at position {position}")]
    InvalidValue { position: usize, token: String },
}

/// Parses a dense line back into a [`SparseArray`].
///
/// The logical length is the number of values on the line and only nonzero
/// values are stored.
pub fn parse_dense(line: &str) -> Result<SparseArray, ParseError> {
    line.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidValue {
                position,
                token: token.to_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> SparseArray {
        SparseArray::from_entries(5, [(2, 7), (0, 3), (4, 9)]).unwrap()
    }

    #[test]
    fn dense_line() {
        assert_eq!(DenseLine(&scenario()).to_string(), "3 0 7 0 9");
    }

    #[test]
    fn sparse_line() {
        assert_eq!(SparseLine(&scenario()).to_string(), "3 7 9");
    }

    #[test]
    fn empty_lines() {
        let array = SparseArray::new(3);

        assert_eq!(DenseLine(&array).to_string(), "0 0 0");
        assert_eq!(SparseLine(&array).to_string(), "");
    }

    #[test]
    fn writers_end_with_newline() {
        let array = scenario();
        let mut out = Vec::new();

        write_dense(&mut out, &array).unwrap();
        write_sparse(&mut out, &array).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "3 0 7 0 9\n3 7 9\n");
    }

    #[test]
    fn parse_dense_line() {
        let array = parse_dense("3 0 7 0 9\n").unwrap();

        assert_eq!(array, scenario());
        assert_eq!(array.entry_count(), 3);
    }

    #[test]
    fn parse_invalid_value() {
        assert_eq!(
            parse_dense("1 2 x 4").unwrap_err(),
            ParseError::InvalidValue {
                position: 2,
                token: "x".to_owned(),
            }
        );
    }
}
