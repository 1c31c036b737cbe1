//! Colour brightness classification
//!
//! Trains a perceptron to decide whether an RGB colour is bright, first with a
//! fixed training set and then with performance-goal training, and reports
//! the held-out accuracy of each. Exits with a failure status if either
//! accuracy is below 98%.
//!
//! Run with:
//! ```text
//! cargo run --package benchmarks --bin color_brightness [seed]
//! ```

use benchmarks::oracles::is_bright;
use perceptron_rs::metrics::Accuracy;
use perceptron_rs::sampling::UniformSampler;
use perceptron_rs::trainer::{train_with_finite_set, PerformanceGoalTrainer};
use perceptron_rs::{InMemoryDataset, LinearUnit};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

const REQUIRED_ACCURACY: f64 = 98.0;
const TRAINING_SET_SIZE: usize = 20_000;
const VALIDATION_SET_SIZE: usize = 10_000;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(2024);
    let mut rng = StdRng::seed_from_u64(seed);
    let sampler = UniformSampler::new();

    let validation_set =
        InMemoryDataset::<4>::generate(VALIDATION_SET_SIZE, is_bright, &sampler, &mut rng);

    // === Fixed set ===
    let training_set =
        InMemoryDataset::<4>::generate(TRAINING_SET_SIZE, is_bright, &sampler, &mut rng);
    println!(
        "Training set: {} colors, {} bright",
        training_set.len(),
        training_set.positives()
    );
    let mut fixed_unit = LinearUnit::<4>::new();
    train_with_finite_set(&training_set, &mut fixed_unit);
    let fixed_accuracy = Accuracy::evaluate(&fixed_unit, &validation_set).percentage();
    println!(
        "Color brightness accuracy with fixed set training : {:.2}",
        fixed_accuracy
    );
    println!(
        "  bias {:.4}, weights: {:?}",
        fixed_unit.bias(),
        fixed_unit.weights()
    );

    println!();

    // === Performance goal ===
    let trainer = PerformanceGoalTrainer::builder()
        .verbose(true)
        .log_interval(10_000)
        .max_iterations(10_000_000)
        .build()?;
    let mut dynamic_unit = LinearUnit::<4>::new();
    let report = trainer.train(is_bright, REQUIRED_ACCURACY, &mut rng, &mut dynamic_unit)?;
    let dynamic_accuracy = Accuracy::evaluate(&dynamic_unit, &validation_set).percentage();
    println!(
        "Color brightness accuracy with dynamic training : {:.2}",
        dynamic_accuracy
    );
    println!(
        "  {} iterations, rolling score {:.2}",
        report.iterations, report.final_score
    );
    println!(
        "  bias {:.4}, weights: {:?}",
        dynamic_unit.bias(),
        dynamic_unit.weights()
    );

    if fixed_accuracy < REQUIRED_ACCURACY || dynamic_accuracy < REQUIRED_ACCURACY {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
