//!
//! Conversion of a raw adjacency matrix into distance form
//!
use crate::common::Distance;
use crate::matrix::{DistanceMatrix, RawMatrix};

///
/// Replace every absent edge (off-diagonal 0) with `Distance::Infinite`.
///
/// Diagonal and nonzero entries become the corresponding finite distance.
///
pub fn transform(raw: &RawMatrix) -> DistanceMatrix {
    raw.map(|(i, j), &w| {
        if w == 0 && i != j {
            Distance::Infinite
        } else {
            Distance::from(w)
        }
    })
}

//
// tests
//
