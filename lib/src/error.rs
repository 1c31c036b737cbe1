//! Error types for dataset construction and training configuration.

use std::fmt;

/// Error type for everything in the crate that can fail.
///
/// The perceptron itself is total over its input domain; errors only arise
/// when runtime data is converted into fixed-size samples, when trainer
/// settings are out of range, or when an optional iteration cap runs out.
#[derive(Debug, Clone, PartialEq)]
pub enum PerceptronError {
    /// Invalid hyperparameter or target value.
    InvalidParameter(String),
    /// Shape mismatch between two inputs that must line up.
    InvalidShape { expected: String, got: String },
    /// A row does not have the unit's dimensionality.
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// A label other than 0 or 1.
    InvalidLabel(u8),
    /// The iteration cap was exhausted before the accuracy target was met.
    GoalNotReached { iterations: usize, score: f64 },
}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptronError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            PerceptronError::InvalidShape { expected, got } => {
                write!(f, "Invalid shape: expected {}, got {}", expected, got)
            }
            PerceptronError::FeatureMismatch {
                expected_features,
                got_features,
            } => {
                write!(
                    f,
                    "Feature mismatch: expected {} features, got {}",
                    expected_features, got_features
                )
            }
            PerceptronError::InvalidLabel(label) => {
                write!(f, "Invalid label: expected 0 or 1, got {}", label)
            }
            PerceptronError::GoalNotReached { iterations, score } => {
                write!(
                    f,
                    "Goal not reached: stopped after {} iterations at {:.2}%",
                    iterations, score
                )
            }
        }
    }
}

impl std::error::Error for PerceptronError {}
