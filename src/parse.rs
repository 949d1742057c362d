//!
//! Reading matrices written by `format::write_matrix`
//!
use crate::error::{Error, Result};
use crate::matrix::SquareMatrix;
use std::path::Path;
use std::str::FromStr;

///
/// Parse a grid of whitespace separated cells.
///
/// Blank lines are skipped. Every row must have as many cells as there are
/// rows. For `Distance` cells the token `i` reads as `Infinite`.
///
pub fn parse_matrix<T: FromStr + Clone>(text: &str) -> Result<SquareMatrix<T>> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<T>().map_err(|_| Error::Parse {
                    line: index + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<T>>>()?;
        rows.push(row);
    }
    SquareMatrix::from_rows(rows)
}

///
/// Read and parse a matrix file.
///
pub fn read_matrix<T: FromStr + Clone, P: AsRef<Path>>(path: P) -> Result<SquareMatrix<T>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_matrix(&text)
}

//
// tests
//
