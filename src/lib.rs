//!
//! Random graph instances and their all-pairs shortest paths
//!
//! Generates a random weighted directed graph as a dense adjacency matrix,
//! solves all-pairs shortest paths with Floyd-Warshall, and writes both as
//! text grids for shortest path benchmarks.
//!
//! # Algorithms
//!
//! * floyd: Floyd-Warshall on a dense distance matrix
//! * verify: consistency checks of a distance matrix
//!
//! # Data
//!
//! * generator, transform: raw adjacency matrix and its distance form
//! * format, parse: text grid with `i` for infinite distances
//! * output, pipeline: files of a run
//!
pub mod common;
pub mod error;
pub mod floyd;
pub mod format;
pub mod generator;
pub mod iterators;
pub mod matrix;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod transform;
pub mod verify;

pub use error::{Error, Result};
