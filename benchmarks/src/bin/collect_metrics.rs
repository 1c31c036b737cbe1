//! Collect performance-goal training metrics
//!
//! For each target accuracy, trains a fresh unit once per seed and records:
//! - Iterations needed to reach the target
//! - Wall-clock training time
//! - Held-out accuracy of the trained unit
//!
//! Results are written to `benchmarks/results/perceptron_metrics.json`.

use benchmarks::oracles::{half_plane, is_bright};
use benchmarks::utils::{time_fn, BenchmarkStats};
use log::info;
use perceptron_rs::metrics::Accuracy;
use perceptron_rs::sampling::UniformSampler;
use perceptron_rs::{InMemoryDataset, LinearUnit, PerformanceGoalTrainer, Vector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;

const SEEDS: u64 = 20;
const TARGETS: [f64; 4] = [80.0, 90.0, 95.0, 98.0];
const HOLDOUT_SIZE: usize = 5_000;
const MAX_ITERATIONS: usize = 20_000_000;
const OUTPUT_PATH: &str = "benchmarks/results/perceptron_metrics.json";

/// Runs every seed for one oracle and target.
fn collect<const S: usize>(
    name: &str,
    oracle: fn(&Vector<S>) -> bool,
    target: f64,
    trainer: &PerformanceGoalTrainer,
) -> serde_json::Value {
    let sampler = UniformSampler::new();
    let holdout = InMemoryDataset::<S>::generate(
        HOLDOUT_SIZE,
        oracle,
        &sampler,
        &mut StdRng::seed_from_u64(u64::MAX),
    );

    let mut iterations = Vec::new();
    let mut times_ms = Vec::new();
    let mut accuracies = Vec::new();
    let mut failures = 0usize;

    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut unit = LinearUnit::<S>::new();
        let (result, elapsed) = time_fn(|| trainer.train(oracle, target, &mut rng, &mut unit));
        match result {
            Ok(report) => {
                iterations.push(report.iterations as f64);
                times_ms.push(elapsed.as_secs_f64() * 1000.0);
                accuracies.push(Accuracy::evaluate(&unit, &holdout).percentage());
            }
            Err(e) => {
                info!("{} target {} seed {}: {}", name, target, seed, e);
                failures += 1;
            }
        }
    }

    json!({
        "oracle": name,
        "dimension": S,
        "target": target,
        "runs": SEEDS,
        "failures": failures,
        "iterations": BenchmarkStats::from_values(iterations).to_json(),
        "train_time_ms": BenchmarkStats::from_values(times_ms).to_json(),
        "holdout_accuracy": BenchmarkStats::from_values(accuracies).to_json(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let trainer = PerformanceGoalTrainer::builder()
        .max_iterations(MAX_ITERATIONS)
        .build()?;

    let mut results = Vec::new();
    for target in TARGETS {
        info!("Collecting metrics for target {}%...", target);
        results.push(collect::<4>("is_bright", is_bright, target, &trainer));
        results.push(collect::<2>("half_plane_1d", half_plane::<2>, target, &trainer));
        results.push(collect::<6>("half_plane_5d", half_plane::<6>, target, &trainer));
    }

    let output = json!({
        "config": serde_json::to_value(trainer.config())?,
        "results": results,
    });

    if let Some(dir) = std::path::Path::new(OUTPUT_PATH).parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(OUTPUT_PATH, serde_json::to_string_pretty(&output)?)?;

    info!("Metrics collected and saved to {}", OUTPUT_PATH);
    Ok(())
}
