use std::path::PathBuf;

use algolab::constants::workload;
use algolab::{
    load_matrix_pair, parse_range, AvlTree, BenchReport, BigMulStrategy, LabConfig, Runner,
    Strategy, Workload,
};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "algolab - time and cross-check matrix, long-integer, stack/queue and AVL algorithms"
)]
struct Cli {
    /// Print results as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Seed for random workloads
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time matrix multiplication strategies
    Matrix {
        /// Square sizes to sweep (format: start:end, end exclusive)
        #[arg(long, default_value = "2:9")]
        sizes: String,

        /// Strategy to include; repeat for several (default: all)
        #[arg(long = "strategy")]
        strategies: Vec<String>,

        /// Multiply the pair stored in this file instead of random matrices
        #[arg(long)]
        file: Option<PathBuf>,

        /// Run sizes in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Time long-integer multiplication
    Bigmul {
        /// Operand lengths in digits (format: start:end)
        #[arg(long, default_value = "10:200")]
        digits: String,

        /// Stride through the digit range
        #[arg(long, default_value_t = 10)]
        step: usize,

        /// Algorithm to include; repeat for several (default: all)
        #[arg(long = "algorithm")]
        algorithms: Vec<String>,
    },
    /// Time stacks and queues across backends
    Linear {
        /// Elements pushed through each structure
        #[arg(long, default_value_t = workload::STRUCTURE_COUNT)]
        count: usize,

        /// Ring queue capacity
        #[arg(long, default_value_t = workload::RING_CAPACITY)]
        capacity: usize,
    },
    /// Build an AVL tree, apply edits and print it
    Avl {
        /// Keys to insert after seeding
        #[arg(long, num_args = 1.., allow_negative_numbers = true)]
        insert: Vec<String>,

        /// Keys to delete after inserting
        #[arg(long, num_args = 1.., allow_negative_numbers = true)]
        delete: Vec<String>,

        /// Random keys to seed the tree with
        #[arg(long, default_value_t = workload::AVL_SEED_KEYS)]
        seed_keys: usize,
    },
    /// Run every sweep from a JSON configuration file
    Run {
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let start_time = std::time::Instant::now();
    let mut config = LabConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    match cli.command {
        Commands::Matrix {
            sizes,
            strategies,
            file,
            parallel,
        } => {
            config = config.with_parallel(parallel);
            if !strategies.is_empty() {
                let strategies = strategies
                    .iter()
                    .map(|s| s.parse::<Strategy>())
                    .collect::<Result<Vec<_>, _>>()?;
                config = config.with_strategies(strategies);
            }
            let runner = Runner::new(config.with_matrix_sizes(parse_range(&sizes)?));

            let mut report = BenchReport::new(runner.config().seed);
            match file {
                Some(path) => {
                    let (a, b) = load_matrix_pair(&path)?;
                    info!(path = %path.display(), "multiplying pair from file");
                    report.extend(runner.run_matrix_pair(&a, &b)?);
                }
                None => {
                    runner.config().validate()?;
                    report.extend(runner.run_matrix()?);
                }
            }
            emit(&report, cli.json)?;
        }
        Commands::Bigmul {
            digits,
            step,
            algorithms,
        } => {
            if !algorithms.is_empty() {
                let algorithms = algorithms
                    .iter()
                    .map(|s| s.parse::<BigMulStrategy>())
                    .collect::<Result<Vec<_>, _>>()?;
                config = config.with_bigmul_strategies(algorithms);
            }
            let runner = Runner::new(config.with_digit_lengths(parse_range(&digits)?, step));
            runner.config().validate()?;

            let mut report = BenchReport::new(runner.config().seed);
            report.extend(runner.run_bigmul());
            emit(&report, cli.json)?;
        }
        Commands::Linear { count, capacity } => {
            let runner = Runner::new(
                config
                    .with_structure_count(count)
                    .with_ring_capacity(capacity),
            );
            let mut report = BenchReport::new(runner.config().seed);
            report.extend(runner.run_linear());
            emit(&report, cli.json)?;
        }
        Commands::Avl {
            insert,
            delete,
            seed_keys,
        } => {
            let config = config.with_avl_seed_keys(seed_keys);
            let mut tree = Workload::new(config.seed).avl_tree(config.avl_seed_keys);
            apply_edits(&mut tree, &insert, &delete);
            print_tree(&tree, cli.json)?;
        }
        Commands::Run { config: path } => {
            let mut file_config = LabConfig::from_json_file(&path)?;
            if let Some(seed) = cli.seed {
                file_config = file_config.with_seed(seed);
            }
            let report = Runner::new(file_config).run_all()?;
            emit(&report, cli.json)?;
        }
    }

    info!(elapsed = ?start_time.elapsed(), "done");
    Ok(())
}

fn emit(report: &BenchReport, json: bool) -> algolab::Result<()> {
    if !report.all_verified() {
        warn!("some results did not match their reference");
    }
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Malformed keys are reported and skipped; the tree is left as it was
fn apply_edits(tree: &mut AvlTree<i64>, insert: &[String], delete: &[String]) {
    for key in insert {
        match tree.insert_parsed(key) {
            Ok(false) => info!(key = %key, "already present"),
            Ok(true) => {}
            Err(err) => warn!(key = %key, category = ?err.category(), %err, "skipping insert"),
        }
    }
    for key in delete {
        match tree.delete_parsed(key) {
            Ok(false) => info!(key = %key, "not present"),
            Ok(true) => {}
            Err(err) => warn!(key = %key, category = ?err.category(), %err, "skipping delete"),
        }
    }
}

fn print_tree(tree: &AvlTree<i64>, json: bool) -> algolab::Result<()> {
    if json {
        let summary = serde_json::json!({
            "keys": tree.in_order(),
            "len": tree.len(),
            "height": tree.height(),
            "root": tree.root().map(|node| *node.key()),
            "rotations": tree.rotation_count(),
            "balanced": tree.check_invariants(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{tree}");
        println!(
            "keys={} height={} rotations={}",
            tree.len(),
            tree.height(),
            tree.rotation_count()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avl_edits_accept_negative_keys() {
        let args = ["algolab", "avl", "--insert", "5", "-7", "--delete", "3"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Avl { insert, delete, .. } => {
                assert_eq!(insert, vec!["5", "-7"]);
                assert_eq!(delete, vec!["3"]);
            }
            _ => panic!("expected avl subcommand"),
        }
    }

    #[test]
    fn test_avl_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["algolab", "avl", "--insert", "5", "--bogus"]).is_err());
    }
}
