//! Models and the traits trainers drive them through.
//!
//! Inference and learning are split the same way training and inference
//! logic are split elsewhere in the crate:
//! - [`Classifier`]: maps a fixed-size input to a binary [`Label`].
//! - [`OnlineLearner`]: a classifier that updates itself from one labeled
//!   example at a time.
//!
//! Trainers in [`crate::trainer`] are generic over [`OnlineLearner`], so any
//! implementor (including instrumented test doubles) can be trained.

pub mod perceptron;
pub use perceptron::{LinearUnit, Perceptron};

use crate::error::PerceptronError;

/// A fixed-size input vector. Index 0 is the bias feature and is expected to be `1.0`.
pub type Vector<const S: usize> = [f64; S];

/// Binary class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    Negative = 0,
    Positive = 1,
}

impl Label {
    /// Numeric value of the label (0 or 1).
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl From<Label> for bool {
    fn from(label: Label) -> Self {
        label == Label::Positive
    }
}

impl TryFrom<u8> for Label {
    type Error = PerceptronError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(PerceptronError::InvalidLabel(other)),
        }
    }
}

/// A binary classifier over `S`-dimensional inputs.
pub trait Classifier<const S: usize> {
    fn classify(&self, input: &Vector<S>) -> Label;
}

/// A classifier that learns online, one labeled example per call.
pub trait OnlineLearner<const S: usize>: Classifier<S> {
    /// Updates the model from a single example.
    ///
    /// Returns the label predicted *before* the update, so callers can track
    /// accuracy without a second `classify` call.
    fn learn(&mut self, input: &Vector<S>, label: Label, learning_rate: f64) -> Label;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_values() {
        assert_eq!(Label::Negative.value(), 0);
        assert_eq!(Label::Positive.value(), 1);
    }

    #[test]
    fn test_label_from_bool() {
        assert_eq!(Label::from(true), Label::Positive);
        assert_eq!(Label::from(false), Label::Negative);
        assert!(bool::from(Label::Positive));
        assert!(!bool::from(Label::Negative));
    }

    #[test]
    fn test_label_try_from_u8() {
        assert_eq!(Label::try_from(0u8), Ok(Label::Negative));
        assert_eq!(Label::try_from(1u8), Ok(Label::Positive));
        assert_eq!(Label::try_from(2u8), Err(PerceptronError::InvalidLabel(2)));
    }
}
