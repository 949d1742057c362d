//!
//! Error type of the crate
//!
use std::path::PathBuf;
use thiserror::Error;

///
/// Errors raised while generating, solving, reading or writing matrices.
///
#[derive(Error, Debug)]
pub enum Error {
    /// Graph size must be positive
    #[error("invalid graph size {0}: the number of vertices must be at least 1")]
    InvalidSize(usize),

    /// Generator parameters that cannot produce a valid instance
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sum of two finite path costs does not fit in `Cost`
    #[error("path cost overflow: {lhs} + {rhs} does not fit in a finite cost")]
    CostOverflow { lhs: u64, rhs: u64 },

    /// Distance matrix violates a shortest-path invariant
    #[error("inconsistent distance matrix: {0}")]
    Inconsistent(String),

    /// Rows of a matrix do not form an n x n grid
    #[error("matrix is not square: {rows} rows but row {row} has {len} cells")]
    NotSquare { rows: usize, row: usize, len: usize },

    /// Unreadable cell in a matrix grid
    #[error("parse error at line {line}: invalid cell {token:?}")]
    Parse { line: usize, token: String },

    /// I/O failure on a specific file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an `io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a consistency error.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Error::Inconsistent(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
