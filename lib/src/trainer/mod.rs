// trainer/mod.rs
//! Training strategies for [`OnlineLearner`]s.
//!
//! Two independent strategies are provided:
//!
//! - [`train_with_finite_set`]: one deterministic pass over a caller-supplied
//!   labeled set at a fixed learning rate of `0.1`.
//! - [`PerformanceGoalTrainer`] (and the shorthand
//!   [`train_with_performance_goal`]): online training on freshly sampled
//!   inputs until a rolling accuracy estimate reaches a target percentage.
//!
//! # Termination
//!
//! The performance-goal loop has no built-in bound. If the target is not
//! reachable for the oracle and the unit's capacity, it runs forever. Callers
//! that need a guarantee set [`PerformanceGoalTrainerBuilder::max_iterations`],
//! which turns exhaustion into [`PerceptronError::GoalNotReached`].

pub mod window;
pub use window::SlidingAccuracyWindow;

use crate::dataset::LabeledSample;
use crate::error::PerceptronError;
use crate::model::{Label, OnlineLearner, Vector};
use crate::sampling::UniformSampler;
use log::{debug, info, trace, warn};
use rand::Rng;

/// Learning rate used by [`train_with_finite_set`].
pub const FINITE_SET_LEARNING_RATE: f64 = 0.1;

/// Default number of recent predictions the accuracy estimate covers.
pub const DEFAULT_WINDOW_SIZE: usize = 1000;

/// Default learning rate of the performance-goal trainer.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Runs one pass over `training_set`, calling `learn` once per sample in order.
///
/// The learning rate is fixed at [`FINITE_SET_LEARNING_RATE`]. Predictions are
/// discarded. An empty set is a no-op.
///
/// ```rust
/// use perceptron_rs::dataset::LabeledSample;
/// use perceptron_rs::model::{Classifier, Label, LinearUnit};
/// use perceptron_rs::trainer::train_with_finite_set;
///
/// let set = [
///     LabeledSample::new([1.0, 0.9], Label::Positive),
///     LabeledSample::new([1.0, 0.1], Label::Negative),
/// ];
/// let mut unit = LinearUnit::<2>::new();
/// train_with_finite_set(&set, &mut unit);
/// assert_eq!(unit.classify(&[1.0, 0.9]), Label::Positive);
/// ```
pub fn train_with_finite_set<'a, const S: usize, I, L>(training_set: I, learner: &mut L)
where
    I: IntoIterator<Item = &'a LabeledSample<S>>,
    L: OnlineLearner<S> + ?Sized,
{
    let mut seen = 0usize;
    for sample in training_set {
        learner.learn(&sample.input, sample.label, FINITE_SET_LEARNING_RATE);
        seen += 1;
    }
    trace!("finite-set pass over {} samples", seen);
}

/// Trains with the default settings (window of 1000, rate 0.1, no cap) until
/// the rolling accuracy reaches `target_percentage`.
///
/// Returns the number of sampled examples. `target_percentage` is expected to
/// lie in `[0, 100]`; a target the unit cannot reach makes this loop forever.
/// Use [`PerformanceGoalTrainer`] for validation and an iteration cap.
pub fn train_with_performance_goal<const S: usize, F, R, L>(
    target_relation: F,
    target_percentage: f64,
    rng: &mut R,
    learner: &mut L,
) -> usize
where
    F: Fn(&Vector<S>) -> bool,
    R: Rng + ?Sized,
    L: OnlineLearner<S> + ?Sized,
{
    debug_assert!(
        (0.0..=100.0).contains(&target_percentage),
        "target percentage must lie in [0, 100]"
    );
    match PerformanceGoalTrainer::default().run(&target_relation, target_percentage, rng, learner) {
        RunOutcome::Reached(report) | RunOutcome::Exhausted(report) => report.iterations,
    }
}

/// Settings of a [`PerformanceGoalTrainer`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceGoalConfig {
    /// Number of recent predictions the accuracy estimate covers.
    pub window_size: usize,
    pub learning_rate: f64,
    /// Optional bound on sampled examples. `None` reproduces the unbounded loop.
    pub max_iterations: Option<usize>,
    /// Log progress at `info` level every `log_interval` iterations.
    pub verbose: bool,
    pub log_interval: usize,
}

impl Default for PerformanceGoalConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            learning_rate: DEFAULT_LEARNING_RATE,
            max_iterations: None,
            verbose: false,
            log_interval: 1000,
        }
    }
}

impl PerformanceGoalConfig {
    /// Checks every setting, returning the first problem found.
    pub fn validate(&self) -> Result<(), PerceptronError> {
        if self.window_size == 0 {
            return Err(PerceptronError::InvalidParameter(
                "window_size must be positive".into(),
            ));
        }
        if !self.learning_rate.is_finite() {
            return Err(PerceptronError::InvalidParameter(format!(
                "learning_rate must be finite, got {}",
                self.learning_rate
            )));
        }
        if self.log_interval == 0 {
            return Err(PerceptronError::InvalidParameter(
                "log_interval must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Summary of a successful performance-goal run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingReport {
    /// Number of sampled examples fed to the learner.
    pub iterations: usize,
    /// Rolling accuracy estimate (percent) when training stopped.
    pub final_score: f64,
    /// Number of flags in the window when training stopped.
    pub window_len: usize,
}

enum RunOutcome {
    Reached(TrainingReport),
    Exhausted(TrainingReport),
}

/// Online trainer that stops once a rolling accuracy estimate meets a target.
///
/// Every iteration samples `[1.0, u1, …]` with `ui ~ U[0, 1)`, labels it with
/// the oracle, lets the learner learn from it, and records whether the
/// learner's (pre-update) prediction was right. The loop has two phases:
///
/// 1. **fill**: while the score is below target and the window is not full,
///    sample and append;
/// 2. **slide**: while the score is below target, evict the oldest flag and
///    sample again.
///
/// Because the fill phase tests the score first, a partially filled window
/// whose partial sum already reaches the target ends training early. A
/// target of `0` returns immediately with zero iterations.
///
/// ```rust
/// use perceptron_rs::model::LinearUnit;
/// use perceptron_rs::trainer::PerformanceGoalTrainer;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let trainer = PerformanceGoalTrainer::builder()
///     .window_size(200)
///     .max_iterations(1_000_000)
///     .build()
///     .unwrap();
///
/// let mut unit = LinearUnit::<2>::new();
/// let mut rng = StdRng::seed_from_u64(1);
/// let report = trainer
///     .train(|x: &[f64; 2]| x[1] > 0.5, 80.0, &mut rng, &mut unit)
///     .unwrap();
/// assert!(report.final_score >= 80.0);
/// ```
#[derive(Debug, Clone)]
pub struct PerformanceGoalTrainer {
    config: PerformanceGoalConfig,
    sampler: UniformSampler,
}

/// Fluent builder for [`PerformanceGoalTrainer`].
///
/// Defaults:
/// - `window_size`: 1000
/// - `learning_rate`: 0.1
/// - `max_iterations`: none
/// - `verbose`: false
/// - `log_interval`: 1000
#[derive(Debug, Clone, Default)]
pub struct PerformanceGoalTrainerBuilder {
    config: PerformanceGoalConfig,
}

impl PerformanceGoalTrainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_size(mut self, size: usize) -> Self {
        self.config.window_size = size;
        self
    }

    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.config.learning_rate = rate;
        self
    }

    /// Bounds the number of sampled examples; exhausting it yields
    /// [`PerceptronError::GoalNotReached`].
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.config.max_iterations = Some(iterations);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn log_interval(mut self, interval: usize) -> Self {
        self.config.log_interval = interval;
        self
    }

    pub fn build(self) -> Result<PerformanceGoalTrainer, PerceptronError> {
        PerformanceGoalTrainer::from_config(self.config)
    }
}

impl Default for PerformanceGoalTrainer {
    fn default() -> Self {
        Self {
            config: PerformanceGoalConfig::default(),
            sampler: UniformSampler::new(),
        }
    }
}

impl PerformanceGoalTrainer {
    pub fn builder() -> PerformanceGoalTrainerBuilder {
        PerformanceGoalTrainerBuilder::new()
    }

    /// Creates a trainer from explicit settings, validating them first.
    pub fn from_config(config: PerformanceGoalConfig) -> Result<Self, PerceptronError> {
        config.validate()?;
        Ok(Self {
            config,
            sampler: UniformSampler::new(),
        })
    }

    pub fn config(&self) -> &PerformanceGoalConfig {
        &self.config
    }

    /// Trains `learner` until the rolling accuracy reaches `target_percentage`.
    ///
    /// # Errors
    /// - [`PerceptronError::InvalidParameter`] if the target is NaN or outside `[0, 100]`
    /// - [`PerceptronError::GoalNotReached`] if `max_iterations` ran out first
    pub fn train<const S: usize, F, R, L>(
        &self,
        target_relation: F,
        target_percentage: f64,
        rng: &mut R,
        learner: &mut L,
    ) -> Result<TrainingReport, PerceptronError>
    where
        F: Fn(&Vector<S>) -> bool,
        R: Rng + ?Sized,
        L: OnlineLearner<S> + ?Sized,
    {
        if !(0.0..=100.0).contains(&target_percentage) {
            return Err(PerceptronError::InvalidParameter(format!(
                "target_percentage must lie in [0, 100], got {}",
                target_percentage
            )));
        }

        match self.run(&target_relation, target_percentage, rng, learner) {
            RunOutcome::Reached(report) => Ok(report),
            RunOutcome::Exhausted(report) => Err(PerceptronError::GoalNotReached {
                iterations: report.iterations,
                score: report.final_score,
            }),
        }
    }

    fn run<const S: usize, F, R, L>(
        &self,
        target_relation: &F,
        target_percentage: f64,
        rng: &mut R,
        learner: &mut L,
    ) -> RunOutcome
    where
        F: Fn(&Vector<S>) -> bool,
        R: Rng + ?Sized,
        L: OnlineLearner<S> + ?Sized,
    {
        let budget = self.config.max_iterations.unwrap_or(usize::MAX);
        let mut window = SlidingAccuracyWindow::new(self.config.window_size);
        let mut iterations = 0usize;

        while window.running_score() < target_percentage && !window.is_full() {
            if iterations >= budget {
                return self.exhausted(iterations, &window);
            }
            self.sample_and_learn(target_relation, rng, learner, &mut window);
            iterations += 1;
            self.log_progress(iterations, &window);
        }
        debug!(
            "fill phase done after {} iterations: window {}/{} ({} correct), score {:.3}%",
            iterations,
            window.len(),
            window.capacity(),
            window.correct(),
            window.running_score()
        );

        while window.running_score() < target_percentage {
            if iterations >= budget {
                return self.exhausted(iterations, &window);
            }
            window.evict();
            self.sample_and_learn(target_relation, rng, learner, &mut window);
            iterations += 1;
            self.log_progress(iterations, &window);
        }

        info!(
            "reached {:.3}% (target {}%) after {} iterations",
            window.running_score(),
            target_percentage,
            iterations
        );
        RunOutcome::Reached(Self::report(iterations, &window))
    }

    fn sample_and_learn<const S: usize, F, R, L>(
        &self,
        target_relation: &F,
        rng: &mut R,
        learner: &mut L,
        window: &mut SlidingAccuracyWindow,
    ) where
        F: Fn(&Vector<S>) -> bool,
        R: Rng + ?Sized,
        L: OnlineLearner<S> + ?Sized,
    {
        let input = self.sampler.sample::<S, R>(rng);
        let actual = Label::from(target_relation(&input));
        let predicted = learner.learn(&input, actual, self.config.learning_rate);
        window.push(predicted == actual);
    }

    fn log_progress(&self, iterations: usize, window: &SlidingAccuracyWindow) {
        if self.config.verbose && iterations % self.config.log_interval == 0 {
            info!(
                "iteration {}: score {:.3}% over {} samples",
                iterations,
                window.running_score(),
                window.len()
            );
        }
    }

    fn exhausted(&self, iterations: usize, window: &SlidingAccuracyWindow) -> RunOutcome {
        warn!(
            "iteration cap of {} reached at {:.3}%",
            iterations,
            window.running_score()
        );
        RunOutcome::Exhausted(Self::report(iterations, window))
    }

    fn report(iterations: usize, window: &SlidingAccuracyWindow) -> TrainingReport {
        TrainingReport {
            iterations,
            final_score: window.running_score(),
            window_len: window.len(),
        }
    }
}
