//!
//! Consistency checks of a shortest path distance matrix
//!
//! * zero diagonal
//! * no entry longer than the direct edge
//! * triangle inequality
//! * `Infinite` iff unreachable (checked on a petgraph DiGraph)
//!
use crate::common::{Cost, Distance};
use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use fnv::FnvHashSet as HashSet;
use itertools::iproduct;
use log::info;
use petgraph::prelude::*;

///
/// Convert the finite off-diagonal entries of an adjacency matrix into a
/// DiGraph. Node `i` of the graph is vertex `i` of the matrix.
///
pub fn to_digraph(adjacency: &DistanceMatrix) -> DiGraph<(), Cost> {
    let n = adjacency.size();
    let mut graph: DiGraph<(), Cost> = DiGraph::with_capacity(n, 0);
    for _ in 0..n {
        graph.add_node(());
    }
    for ((i, j), d) in adjacency.iter_cells() {
        match d.cost() {
            Some(c) if i != j => {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), c);
            }
            _ => {}
        }
    }
    graph
}

///
/// Set of vertices reachable from `source` (including itself)
///
pub fn reachable_from<N, E>(graph: &DiGraph<N, E>, source: NodeIndex) -> HashSet<NodeIndex> {
    let mut reached = HashSet::default();
    let mut dfs = Dfs::new(graph, source);
    while let Some(node) = dfs.next(graph) {
        reached.insert(node);
    }
    reached
}

///
/// Check that `dist` is a valid all-pairs shortest path matrix of `adjacency`.
///
/// Returns `Error::Inconsistent` describing the first violation found.
///
pub fn check_distances(adjacency: &DistanceMatrix, dist: &DistanceMatrix) -> Result<()> {
    let n = adjacency.size();
    if dist.size() != n {
        return Err(Error::inconsistent(format!(
            "distance matrix has size {} but the graph has {} vertices",
            dist.size(),
            n
        )));
    }

    // (1) diagonal and direct edges
    for ((i, j), &d) in dist.iter_cells() {
        if i == j && d != Distance::ZERO {
            return Err(Error::inconsistent(format!("d[{},{}] = {} is not 0", i, i, d)));
        }
        if d > *adjacency.get(i, j) {
            return Err(Error::inconsistent(format!(
                "d[{},{}] = {} is longer than the edge {}",
                i,
                j,
                d,
                adjacency.get(i, j)
            )));
        }
    }

    // (2) triangle inequality
    for (k, i, j) in iproduct!(0..n, 0..n, 0..n) {
        let via_k = dist.get(i, k).checked_add(*dist.get(k, j))?;
        if *dist.get(i, j) > via_k {
            return Err(Error::inconsistent(format!(
                "d[{},{}] = {} > d[{},{}] + d[{},{}] = {}",
                i,
                j,
                dist.get(i, j),
                i,
                k,
                k,
                j,
                via_k
            )));
        }
    }

    // (3) reachability
    let graph = to_digraph(adjacency);
    for source in graph.node_indices() {
        let reached = reachable_from(&graph, source);
        for target in graph.node_indices() {
            let d = dist.get(source.index(), target.index());
            if d.is_finite() != reached.contains(&target) {
                return Err(Error::inconsistent(format!(
                    "d[{},{}] = {} but the vertex is {}reachable",
                    source.index(),
                    target.index(),
                    d,
                    if d.is_finite() { "not " } else { "" }
                )));
            }
        }
    }

    info!("verified distance matrix of {} vertices", n);
    Ok(())
}

//
// tests
//
