//! # perceptron-rs
//!
//! A single linear threshold unit (perceptron) over a fixed-dimension input,
//! with two ways to train it.
//!
//! ## Core Design Principles
//!
//! - **Compile-time dimensionality**: a [`LinearUnit<S>`] holds `[f64; S]`;
//!   inputs of the wrong length do not type-check, and `S >= 2` is asserted
//!   at compile time (weight 0 is the bias).
//! - **Training/Inference Separation**: trainers work through the
//!   [`model::OnlineLearner`] trait and own none of the model state.
//! - **Caller-owned randomness**: every sampling entry point borrows a
//!   `rand::Rng`; the crate never seeds or stores one.
//!
//! ## Quick Start
//!
//! ```rust
//! use perceptron_rs::model::{Classifier, Label, LinearUnit};
//! use perceptron_rs::trainer::train_with_performance_goal;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // [bias, x]: positive when x > 0.5
//! let oracle = |v: &[f64; 2]| v[1] > 0.5;
//!
//! let mut unit = LinearUnit::<2>::new();
//! let mut rng = StdRng::seed_from_u64(42);
//! let iterations = train_with_performance_goal(oracle, 85.0, &mut rng, &mut unit);
//!
//! assert!(iterations > 0);
//! assert_eq!(unit.classify(&[1.0, 0.99]), Label::Positive);
//! ```
//!
//! ## Module Structure
//!
//! - `model`: [`Label`], the classifier traits and [`LinearUnit`]
//! - `dataset`: labeled samples and in-memory training sets
//! - `sampling`: uniform input vectors for online training
//! - `trainer`: fixed-set and performance-goal training
//! - `metrics`: accuracy evaluation
//! - `error`: [`PerceptronError`]
//!
//! ## Logging
//!
//! Training progress goes through the `log` facade. Nothing is printed unless
//! the application installs a logger.

/// Labeled samples and in-memory datasets.
pub mod dataset;

/// Error type shared by the crate.
pub mod error;

/// Accuracy evaluation.
pub mod metrics;

/// Classifier traits and the linear threshold unit.
pub mod model;

/// Random input construction for online training.
pub mod sampling;

/// Fixed-set and performance-goal training loops.
pub mod trainer;

pub use dataset::{InMemoryDataset, LabeledSample};
pub use error::PerceptronError;
pub use model::{Classifier, Label, LinearUnit, OnlineLearner, Perceptron, Vector};
pub use trainer::{
    train_with_finite_set, train_with_performance_goal, PerformanceGoalConfig,
    PerformanceGoalTrainer, TrainingReport,
};
