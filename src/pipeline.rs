//!
//! One run: generate, solve and persist a graph instance
//!
use crate::error::Result;
use crate::floyd::floyd_warshall;
use crate::generator::{generate, seeded_rng, GeneratorConfig};
use crate::output::{write_outputs, OutputPaths};
use crate::transform::transform;
use crate::verify::check_distances;
use log::info;
use std::path::PathBuf;

///
/// Settings of a run
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// number of vertices
    pub size: usize,
    /// directory receiving `mat_<n>` and `result_<n>`
    pub out_dir: PathBuf,
    /// rng seed; random if None
    pub seed: Option<u64>,
    pub generator: GeneratorConfig,
    /// check the distance matrix before writing it
    pub verify: bool,
}

impl RunConfig {
    pub fn new(size: usize) -> Self {
        RunConfig {
            size,
            out_dir: PathBuf::from("data"),
            seed: None,
            generator: GeneratorConfig::default(),
            verify: false,
        }
    }
}

///
/// Generate a random graph of `config.size` vertices, compute its
/// all-pairs shortest paths, and write both matrices into `config.out_dir`.
///
/// The size is validated before anything is created on disk.
///
pub fn run(config: &RunConfig) -> Result<OutputPaths> {
    config.generator.validate(config.size)?;
    info!(
        "run n={} seed={:?} out_dir={}",
        config.size,
        config.seed,
        config.out_dir.display()
    );

    let mut rng = seeded_rng(config.seed);
    let raw = generate(config.size, &config.generator, &mut rng)?;
    let adjacency = transform(&raw);
    let dist = floyd_warshall(&adjacency)?;
    if config.verify {
        check_distances(&adjacency, &dist)?;
    }
    write_outputs(&config.out_dir, &raw, &dist)
}

//
// tests
//
