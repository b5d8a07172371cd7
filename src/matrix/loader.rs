//! Connectivity-file loader
//!
//! Parses a line-oriented digit encoding of a square adjacency matrix: each
//! of the first `dim` lines holds at least `dim` decimal digits, one per
//! column, with no delimiters. The dimension is implicit in the length of the
//! first line, so the loader reads it, rewinds, and then parses the full
//! matrix in a second pass.
//!
//! Lines are read into a growable `String`, so there is no fixed line-length
//! cap. Both `\n` and `\r\n` terminators are accepted.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Result, WebRankError};
use crate::matrix::dense::DenseMatrix;

/// Strip exactly one trailing line terminator, if present.
fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

/// Infer the matrix dimension from the first line of `source`, then rewind
/// the source to the start so a full parse sees every row.
///
/// The dimension is the character count of line 1 after stripping its
/// terminator. An unreadable source fails with [`WebRankError::Io`]; an
/// empty source or an empty first line fails with
/// [`WebRankError::MalformedInput`].
pub fn read_dimension<R: BufRead + Seek>(source: &mut R) -> Result<usize> {
    let mut line = String::new();
    let bytes = source.read_line(&mut line)?;
    if bytes == 0 {
        return Err(WebRankError::malformed(1, "empty input, no rows to read"));
    }

    let dim = strip_terminator(&line).len();
    source.seek(SeekFrom::Start(0))?;

    if dim == 0 {
        return Err(WebRankError::malformed(1, "first line is empty"));
    }
    Ok(dim)
}

/// Parse `dim` rows of digits from `source` into a dense matrix.
///
/// Row `r`, column `c` is the digit value of character `c` on line `r`.
/// Rows beyond the first `dim` lines are ignored. A missing row, a row
/// shorter than `dim` characters, or a non-digit entry fails with
/// [`WebRankError::MalformedInput`] carrying the 1-based line number.
pub fn parse_matrix<R: BufRead>(source: &mut R, dim: usize) -> Result<DenseMatrix> {
    if dim == 0 {
        return Err(WebRankError::InvalidDimension(0));
    }

    let mut matrix = DenseMatrix::zeros(dim);
    let mut line = String::new();

    for row in 0..dim {
        line.clear();
        let bytes = source.read_line(&mut line)?;
        if bytes == 0 {
            return Err(WebRankError::malformed(
                row + 1,
                format!("expected {dim} rows, input ended after {row}"),
            ));
        }

        let entries = strip_terminator(&line).as_bytes();
        if entries.len() < dim {
            return Err(WebRankError::malformed(
                row + 1,
                format!("row has {} entries, expected {dim}", entries.len()),
            ));
        }

        for col in 0..dim {
            let byte = entries[col];
            if !byte.is_ascii_digit() {
                return Err(WebRankError::malformed(
                    row + 1,
                    format!("entry {:?} at column {} is not a digit", byte as char, col + 1),
                ));
            }
            matrix.set(row, col, f64::from(byte - b'0'));
        }
    }

    Ok(matrix)
}

/// Load a full adjacency matrix: infer the dimension from line 1, rewind,
/// and parse every row (including line 1 again).
pub fn load_adjacency<R: BufRead + Seek>(source: &mut R) -> Result<DenseMatrix> {
    let dim = read_dimension(source)?;
    parse_matrix(source, dim)
}

/// Load an adjacency matrix from a file on disk.
pub fn load_adjacency_path(path: impl AsRef<Path>) -> Result<DenseMatrix> {
    let mut reader = BufReader::new(File::open(path)?);
    load_adjacency(&mut reader)
}
