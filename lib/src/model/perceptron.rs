//! A single linear threshold unit.
//!
//! [`LinearUnit<S>`] keeps `S` weights in a fixed-size array. Weight 0 is the
//! bias and is paired with an input feature the caller fixes at `1.0`; weights
//! `1..S` belong to the real features. The dimensionality is a const generic,
//! so mismatched input lengths are rejected by the compiler rather than at
//! runtime.
//!
//! ```rust
//! use perceptron_rs::model::{Classifier, Label, LinearUnit, OnlineLearner};
//!
//! let mut unit = LinearUnit::<3>::new();
//! let x = [1.0, 0.5, 0.25];
//!
//! // Zero weights never fire.
//! assert_eq!(unit.classify(&x), Label::Negative);
//!
//! // One update towards the positive class.
//! let before = unit.learn(&x, Label::Positive, 0.1);
//! assert_eq!(before, Label::Negative);
//! assert_eq!(unit.classify(&x), Label::Positive);
//! ```

use super::{Classifier, Label, OnlineLearner, Vector};

/// Perceptron with `S` weights, the first of which is the bias.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearUnit<const S: usize> {
    weights: Vector<S>,
}

/// Alias kept for callers that think in terms of "perceptron".
pub type Perceptron<const S: usize> = LinearUnit<S>;

impl<const S: usize> LinearUnit<S> {
    const HAS_BIAS_SLOT: () = assert!(S >= 2, "a linear unit stores the bias as its first weight");

    /// Creates a unit with every weight set to zero.
    pub fn new() -> Self {
        let () = Self::HAS_BIAS_SLOT;
        Self { weights: [0.0; S] }
    }

    /// Creates a unit whose bias weight is `bias` and whose feature weights are zero.
    pub fn with_bias(bias: f64) -> Self {
        let mut unit = Self::new();
        unit.weights[0] = bias;
        unit
    }

    /// Current weights, bias first.
    pub fn weights(&self) -> &Vector<S> {
        &self.weights
    }

    /// The bias weight.
    pub fn bias(&self) -> f64 {
        self.weights[0]
    }

    /// Raw activation `Σ weights[i] * input[i]`.
    pub fn activation(&self, input: &Vector<S>) -> f64 {
        self.weights
            .iter()
            .zip(input.iter())
            .map(|(w, x)| w * x)
            .sum()
    }
}

impl<const S: usize> Default for LinearUnit<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize> Classifier<S> for LinearUnit<S> {
    /// Fires (returns [`Label::Positive`]) only for a strictly positive activation.
    fn classify(&self, input: &Vector<S>) -> Label {
        Label::from(self.activation(input) > 0.0)
    }
}

impl<const S: usize> OnlineLearner<S> for LinearUnit<S> {
    /// Perceptron rule: `w[i] += learning_rate * (label - predicted) * input[i]`.
    fn learn(&mut self, input: &Vector<S>, label: Label, learning_rate: f64) -> Label {
        let predicted = self.classify(input);
        let error = label.value() - predicted.value();
        if error == 0 {
            return predicted;
        }

        let step = learning_rate * f64::from(error);
        for (w, x) in self.weights.iter_mut().zip(input.iter()) {
            *w += step * x;
        }
        predicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_initialized() {
        let unit = LinearUnit::<4>::new();
        assert_eq!(unit.weights(), &[0.0; 4]);
        assert_eq!(unit, LinearUnit::<4>::default());
    }

    #[test]
    fn test_with_bias_sets_only_first_weight() {
        let unit = LinearUnit::<3>::with_bias(-0.75);
        assert_eq!(unit.weights(), &[-0.75, 0.0, 0.0]);
        assert_eq!(unit.bias(), -0.75);
    }

    #[test]
    fn test_classify_zero_activation_is_negative() {
        let unit = LinearUnit::<2>::new();
        assert_eq!(unit.classify(&[1.0, 0.9]), Label::Negative);
    }

    #[test]
    fn test_classify_positive_bias_fires() {
        let unit = LinearUnit::<2>::with_bias(0.5);
        assert_eq!(unit.classify(&[1.0, 0.0]), Label::Positive);

        let unit = LinearUnit::<2>::with_bias(-0.5);
        assert_eq!(unit.classify(&[1.0, 0.0]), Label::Negative);
    }

    #[test]
    fn test_classify_is_pure() {
        let unit = LinearUnit::<3>::with_bias(0.2);
        let x = [1.0, 0.3, -0.9];
        let first = unit.classify(&x);
        let snapshot = unit.clone();
        assert_eq!(unit.classify(&x), first);
        assert_eq!(unit, snapshot);
    }

    #[test]
    fn test_activation_is_dot_product() {
        let mut unit = LinearUnit::<3>::with_bias(1.0);
        unit.learn(&[1.0, 2.0, 4.0], Label::Negative, 0.5);
        // weights: [1.0 - 0.5, -1.0, -2.0]
        assert_eq!(unit.weights(), &[0.5, -1.0, -2.0]);
        assert_eq!(unit.activation(&[1.0, 1.0, 1.0]), -2.5);
    }

    #[test]
    fn test_learn_correct_prediction_leaves_weights_unchanged() {
        let mut unit = LinearUnit::<3>::with_bias(0.3);
        let before = unit.clone();

        let predicted = unit.learn(&[1.0, 0.4, 0.6], Label::Positive, 0.1);

        assert_eq!(predicted, Label::Positive);
        assert_eq!(unit, before);
    }

    #[test]
    fn test_learn_false_negative_moves_towards_input() {
        let mut unit = LinearUnit::<3>::new();
        let x = [1.0, 0.5, 0.25];

        let predicted = unit.learn(&x, Label::Positive, 0.1);

        assert_eq!(predicted, Label::Negative);
        assert_eq!(unit.weights(), &[0.1 * 1.0, 0.1 * 0.5, 0.1 * 0.25]);
        assert_eq!(unit.classify(&x), Label::Positive);
    }

    #[test]
    fn test_learn_false_positive_moves_away_from_input() {
        let mut unit = LinearUnit::<2>::with_bias(1.0);

        let predicted = unit.learn(&[1.0, 2.0], Label::Negative, 0.25);

        assert_eq!(predicted, Label::Positive);
        assert_eq!(unit.weights(), &[0.75, -0.5]);
    }

    #[test]
    fn test_learn_returns_prediction_before_update() {
        let mut unit = LinearUnit::<2>::new();
        let x = [1.0, 1.0];
        assert_eq!(unit.learn(&x, Label::Positive, 1.0), Label::Negative);
        assert_eq!(unit.learn(&x, Label::Positive, 1.0), Label::Positive);
    }

    #[test]
    fn test_learn_with_zero_rate_never_moves() {
        let mut unit = LinearUnit::<2>::new();
        unit.learn(&[1.0, 0.7], Label::Positive, 0.0);
        assert_eq!(unit.weights(), &[0.0, 0.0]);
    }

    #[test]
    fn test_learn_hand_traced_sequence() {
        // Oracle: x > 0.5, rate 0.1, starting from zero weights.
        let mut unit = LinearUnit::<2>::new();

        assert_eq!(unit.learn(&[1.0, 0.2], Label::Negative, 0.1), Label::Negative);
        assert_eq!(unit.weights(), &[0.0, 0.0]);

        assert_eq!(unit.learn(&[1.0, 0.8], Label::Positive, 0.1), Label::Negative);
        assert_eq!(unit.weights(), &[0.1, 0.1 * 0.8]);

        assert_eq!(unit.learn(&[1.0, 0.9], Label::Positive, 0.1), Label::Positive);
        assert_eq!(unit.weights(), &[0.1, 0.1 * 0.8]);

        assert_eq!(unit.learn(&[1.0, 0.1], Label::Negative, 0.1), Label::Positive);
        assert_eq!(unit.weights(), &[0.1 - 0.1, 0.1 * 0.8 - 0.1 * 0.1]);
    }
}
