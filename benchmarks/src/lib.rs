//! Benchmark utilities and common modules for perceptron-rs benchmarks.
//!
//! - Reference oracles used by the benches and the metrics binary
//! - Timing and summary statistics

pub mod oracles;
pub mod utils;

pub use oracles::{half_plane, is_bright, Color};
pub use utils::{time_fn, BenchmarkStats};
