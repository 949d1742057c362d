//! Generate a random graph of SIZE vertices and its shortest path matrix.
//!
//! ```bash
//! cargo run --release -- 500 --out-dir data --seed 1
//! ```
use apsp_datagen::common::Weight;
use apsp_datagen::generator::GeneratorConfig;
use apsp_datagen::pipeline::{run, RunConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "apsp_datagen")]
#[command(about = "Random graph and all-pairs shortest path data generation", long_about = None)]
struct Cli {
    /// Number of vertices
    size: usize,

    /// Directory receiving mat_<SIZE> and result_<SIZE>
    #[arg(short, long, default_value = "data", env = "APSP_OUT_DIR")]
    out_dir: PathBuf,

    /// Rng seed (random if not set)
    #[arg(short, long, env = "APSP_SEED")]
    seed: Option<u64>,

    /// Largest random edge weight
    #[arg(long, default_value_t = 100)]
    max_weight: Weight,

    /// An off-diagonal cell is an edge with probability 1/K
    #[arg(long, value_name = "K", default_value_t = 31)]
    edge_one_in: u32,

    /// Draw edge weights from [1, max_weight] so that no edge gets weight 0
    #[arg(long, default_value_t = false)]
    no_zero_weights: bool,

    /// Check the distance matrix before writing it
    #[arg(long, default_value_t = false)]
    verify: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            size: cli.size,
            out_dir: cli.out_dir,
            seed: cli.seed,
            generator: GeneratorConfig {
                edge_one_in: cli.edge_one_in,
                max_weight: cli.max_weight,
                allow_zero_weight: !cli.no_zero_weights,
            },
            verify: cli.verify,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::from(Cli::parse());
    match run(&config) {
        Ok(_) => println!("done"),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

//
// tests
//
