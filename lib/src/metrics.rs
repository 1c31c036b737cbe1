//! Classification accuracy over labeled samples.

use crate::dataset::LabeledSample;
use crate::model::Classifier;

/// Count of correct predictions out of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accuracy {
    pub correct: usize,
    pub total: usize,
}

impl Accuracy {
    /// Classifies every sample and counts matches with its label.
    pub fn evaluate<'a, const S: usize, C, I>(classifier: &C, samples: I) -> Self
    where
        C: Classifier<S> + ?Sized,
        I: IntoIterator<Item = &'a LabeledSample<S>>,
    {
        samples
            .into_iter()
            .fold(Self::default(), |mut acc, sample| {
                acc.record(classifier.classify(&sample.input) == sample.label);
                acc
            })
    }

    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Accuracy in percent. An empty evaluation scores 0.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.correct as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Label, LinearUnit};

    #[test]
    fn test_empty_is_zero() {
        let unit = LinearUnit::<2>::new();
        let samples: Vec<LabeledSample<2>> = Vec::new();
        let accuracy = Accuracy::evaluate(&unit, &samples);
        assert_eq!(accuracy, Accuracy::default());
        assert_eq!(accuracy.percentage(), 0.0);
    }

    #[test]
    fn test_counts_matches() {
        // bias 0.5, feature weight 0 -> always positive
        let unit = LinearUnit::<2>::with_bias(0.5);
        let samples = vec![
            LabeledSample::new([1.0, 0.1], Label::Positive),
            LabeledSample::new([1.0, 0.2], Label::Negative),
            LabeledSample::new([1.0, 0.3], Label::Positive),
            LabeledSample::new([1.0, 0.4], Label::Positive),
        ];
        let accuracy = Accuracy::evaluate(&unit, &samples);
        assert_eq!(accuracy.correct, 3);
        assert_eq!(accuracy.total, 4);
        assert_eq!(accuracy.percentage(), 75.0);
    }

    #[test]
    fn test_record() {
        let mut accuracy = Accuracy::default();
        accuracy.record(true);
        accuracy.record(false);
        assert_eq!(accuracy.percentage(), 50.0);
    }
}
