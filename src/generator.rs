//!
//! Random adjacency matrix generation
//!
//! Most off-diagonal entries are 0 (no edge); about one in `edge_one_in`
//! entries is a random weight.
//!
use crate::common::Weight;
use crate::error::{Error, Result};
use crate::matrix::{DistanceMatrix, RawMatrix};
use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

///
/// Parameters of the random graph
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// an off-diagonal entry is an edge with probability `1 / edge_one_in`
    pub edge_one_in: u32,
    /// edge weights are drawn from `[0, max_weight]`
    pub max_weight: Weight,
    /// if false, edge weights are drawn from `[1, max_weight]` instead
    pub allow_zero_weight: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            edge_one_in: 31,
            max_weight: 100,
            allow_zero_weight: true,
        }
    }
}

impl GeneratorConfig {
    ///
    /// Check that a graph of `n` vertices can be generated.
    ///
    /// `n` must be positive and its distance matrix must fit in memory.
    /// Then `n < 2^32` on 64-bit targets, so the longest simple path cost
    /// `(n - 1) * max_weight` always fits in `Cost`.
    ///
    pub fn validate(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidSize(n));
        }
        DistanceMatrix::cell_count(n)?;
        if self.edge_one_in == 0 {
            return Err(Error::InvalidConfig(
                "edge_one_in must be at least 1".to_string(),
            ));
        }
        if !self.allow_zero_weight && self.max_weight == 0 {
            return Err(Error::InvalidConfig(
                "max_weight must be positive when zero weights are excluded".to_string(),
            ));
        }
        Ok(())
    }
}

///
/// Rng for the generator, from the seed if any or from OS entropy.
///
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

///
/// Generate a random n x n adjacency matrix.
///
/// * `M[i][i] = 0`
/// * `M[i][j]` (i != j) is 0 except with probability `1 / edge_one_in`,
///   where it is a uniform weight in `[0, max_weight]`
///   (or `[1, max_weight]` when `allow_zero_weight` is false).
///
pub fn generate<R: Rng>(n: usize, config: &GeneratorConfig, rng: &mut R) -> Result<RawMatrix> {
    config.validate(n)?;
    let min_weight = if config.allow_zero_weight { 0 } else { 1 };

    let mut n_edges = 0;
    let matrix = RawMatrix::from_fn(n, |i, j| {
        if i == j || rng.gen_range(0..config.edge_one_in) != 0 {
            0
        } else {
            let w = rng.gen_range(min_weight..=config.max_weight);
            trace!("edge {} -> {} w={}", i, j, w);
            n_edges += 1;
            w
        }
    })?;

    debug!("generated {} random edges", n_edges);
    info!("generated {0}x{0} adjacency matrix", n);
    Ok(matrix)
}

//
// tests
//
