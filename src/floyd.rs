//!
//! Floyd-Warshall algorithm
//! to find shortest path distances of all pairs of nodes
//!
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use log::{debug, info};

///
/// Relax all pairs through the intermediate vertex `k`.
///
/// `d[i,j] = min(d[i,j], d[i,k] + d[k,j])` for all i, j, in place.
/// Returns the number of cells that got shorter.
///
/// Row k and column k are not changed by this sweep (`d[k,k]` is 0), so the
/// update can safely read and write the same matrix.
///
pub fn relax_through(dist: &mut DistanceMatrix, k: usize) -> Result<usize> {
    let n = dist.size();
    let mut n_improved = 0;
    for i in 0..n {
        let d_ik = *dist.get(i, k);
        if d_ik.is_infinite() {
            // no path i -> k, nothing to route through
            continue;
        }
        for j in 0..n {
            let via_k = d_ik.checked_add(*dist.get(k, j))?;
            if via_k < *dist.get(i, j) {
                dist.set(i, j, via_k);
                n_improved += 1;
            }
        }
    }
    Ok(n_improved)
}

///
/// All-pairs shortest path distances of the graph given by an adjacency
/// matrix in distance form (diagonal 0, `Infinite` for no edge).
///
/// After the k-th sweep, `d[i,j]` is the shortest path using only the
/// vertices `0..=k` as intermediates; after all n sweeps it is the true
/// shortest distance, or `Infinite` if j is unreachable from i.
///
pub fn floyd_warshall(adjacency: &DistanceMatrix) -> Result<DistanceMatrix> {
    let n = adjacency.size();
    let mut dist = adjacency.clone();
    for k in 0..n {
        let n_improved = relax_through(&mut dist, k)?;
        debug!("k={} improved={}", k, n_improved);
    }
    info!("computed all-pairs shortest paths of {} vertices", n);
    Ok(dist)
}

//
// tests
//
