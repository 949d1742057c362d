//!
//! Step-by-step iterator of the Floyd-Warshall relaxation
//!
//! * floyd_steps()
//!
use crate::error::Result;
use crate::floyd::relax_through;
use crate::matrix::DistanceMatrix;

///
/// Iterator struct for `floyd_steps()`
///
/// implements Iterator whose item is
/// `(k: usize, dist: DistanceMatrix)`
/// where `dist` is the distance matrix using only the vertices `0..k`
/// as intermediates.
///
/// It yields `n + 1` matrices: the input itself (`k = 0`), then the matrix
/// after each pivot. The last one equals `floyd_warshall(input)`.
/// After an error, the iterator is exhausted.
///
pub struct FloydSteps {
    dist: DistanceMatrix,
    k: usize,
    done: bool,
}

impl FloydSteps {
    ///
    /// Create FloydSteps from an adjacency matrix in distance form
    ///
    pub fn new(adjacency: &DistanceMatrix) -> Self {
        FloydSteps {
            dist: adjacency.clone(),
            k: 0,
            done: false,
        }
    }
}

impl Iterator for FloydSteps {
    type Item = Result<(usize, DistanceMatrix)>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.k == 0 {
            // the unrelaxed matrix
            self.k = 1;
            if self.dist.is_empty() {
                self.done = true;
            }
            return Some(Ok((0, self.dist.clone())));
        }
        let pivot = self.k - 1;
        if let Err(e) = relax_through(&mut self.dist, pivot) {
            self.done = true;
            return Some(Err(e));
        }
        if self.k == self.dist.size() {
            self.done = true;
        }
        self.k += 1;
        Some(Ok((pivot + 1, self.dist.clone())))
    }
}

///
/// Intermediate matrices `D^0, D^1, ..., D^n` of Floyd-Warshall
///
pub fn floyd_steps(adjacency: &DistanceMatrix) -> FloydSteps {
    FloydSteps::new(adjacency)
}

//
// tests
//
