//! Labeled samples and in-memory training sets.
//!
//! Samples are fixed-size: a [`LabeledSample<S>`] always carries exactly `S`
//! input values. [`InMemoryDataset`] is the bridge from runtime data
//! (`Vec<Vec<f64>>` rows, `u8` labels) into that fixed-size world and is the
//! only place shape errors are reported.
//!
//! # Example
//!
//! ```rust
//! use perceptron_rs::dataset::InMemoryDataset;
//! use perceptron_rs::model::Label;
//!
//! let rows = vec![vec![1.0, 0.2], vec![1.0, 0.8]];
//! let labels = vec![0, 1];
//! let dataset = InMemoryDataset::<2>::from_rows(rows, labels).unwrap();
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.samples()[1].label, Label::Positive);
//! ```

use crate::error::PerceptronError;
use crate::model::{Label, Vector};
use crate::sampling::UniformSampler;
use rand::Rng;

/// One input vector together with its ground-truth label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledSample<const S: usize> {
    pub input: Vector<S>,
    pub label: Label,
}

impl<const S: usize> LabeledSample<S> {
    pub fn new(input: Vector<S>, label: Label) -> Self {
        Self { input, label }
    }
}

impl<const S: usize> From<(Vector<S>, Label)> for LabeledSample<S> {
    fn from((input, label): (Vector<S>, Label)) -> Self {
        Self { input, label }
    }
}

/// An ordered, fully materialised set of labeled samples.
///
/// Order is preserved exactly as given; nothing is shuffled or deduplicated.
/// An empty dataset is valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InMemoryDataset<const S: usize> {
    samples: Vec<LabeledSample<S>>,
}

impl<const S: usize> InMemoryDataset<S> {
    /// Wraps already fixed-size samples.
    pub fn from_samples(samples: Vec<LabeledSample<S>>) -> Self {
        Self { samples }
    }

    /// Builds a dataset from runtime rows and 0/1 labels.
    ///
    /// # Errors
    /// - [`PerceptronError::InvalidShape`] if `rows` and `labels` differ in length
    /// - [`PerceptronError::FeatureMismatch`] if a row does not have `S` values
    /// - [`PerceptronError::InvalidLabel`] if a label is neither 0 nor 1
    pub fn from_rows(rows: Vec<Vec<f64>>, labels: Vec<u8>) -> Result<Self, PerceptronError> {
        if rows.len() != labels.len() {
            return Err(PerceptronError::InvalidShape {
                expected: format!("{} labels", rows.len()),
                got: format!("{} labels", labels.len()),
            });
        }

        let samples = rows
            .into_iter()
            .zip(labels)
            .map(|(row, label)| -> Result<LabeledSample<S>, PerceptronError> {
                let input: Vector<S> = row.as_slice().try_into().map_err(|_| {
                    PerceptronError::FeatureMismatch {
                        expected_features: S,
                        got_features: row.len(),
                    }
                })?;
                Ok(LabeledSample::new(input, Label::try_from(label)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { samples })
    }

    /// Samples `n` fresh inputs and labels each with `oracle`.
    pub fn generate<F, R>(n: usize, oracle: F, sampler: &UniformSampler, rng: &mut R) -> Self
    where
        F: Fn(&Vector<S>) -> bool,
        R: Rng + ?Sized,
    {
        let samples = (0..n)
            .map(|_| {
                let input = sampler.sample::<S, R>(rng);
                let label = Label::from(oracle(&input));
                LabeledSample::new(input, label)
            })
            .collect();
        Self { samples }
    }

    pub fn samples(&self) -> &[LabeledSample<S>] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledSample<S>> {
        self.samples.iter()
    }

    /// Number of positive samples.
    pub fn positives(&self) -> usize {
        self.samples
            .iter()
            .filter(|s| s.label == Label::Positive)
            .count()
    }
}

impl<'a, const S: usize> IntoIterator for &'a InMemoryDataset<S> {
    type Item = &'a LabeledSample<S>;
    type IntoIter = std::slice::Iter<'a, LabeledSample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<const S: usize> FromIterator<LabeledSample<S>> for InMemoryDataset<S> {
    fn from_iter<I: IntoIterator<Item = LabeledSample<S>>>(iter: I) -> Self {
        Self::from_samples(iter.into_iter().collect())
    }
}
