//! Rolling accuracy estimate over the most recent predictions.

use std::collections::VecDeque;

/// Bounded FIFO of correctness flags with an incrementally maintained score.
///
/// Every flag contributes `flag / (capacity / 100.0)` percentage points, so a
/// full window of ones scores (approximately) 100. The score is never
/// recomputed from the queue; pushes add and evictions subtract. Before the
/// window is full the score is a partial sum and therefore a lower bound on
/// the accuracy of the flags seen so far.
#[derive(Debug, Clone)]
pub struct SlidingAccuracyWindow {
    flags: VecDeque<u8>,
    capacity: usize,
    running_score: f64,
}

impl SlidingAccuracyWindow {
    /// `capacity` must be non-zero; the trainer builder enforces this.
    ///
    /// Storage grows with the pushed flags, so a huge capacity costs nothing
    /// up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            flags: VecDeque::new(),
            capacity,
            running_score: 0.0,
        }
    }

    fn weight(&self, flag: u8) -> f64 {
        f64::from(flag) / (self.capacity as f64 / 100.0)
    }

    /// Appends a flag without evicting. Callers evict first once the window is full.
    pub fn push(&mut self, correct: bool) {
        debug_assert!(self.flags.len() < self.capacity, "push into a full window");
        let flag = u8::from(correct);
        self.flags.push_back(flag);
        self.running_score += self.weight(flag);
    }

    /// Removes the oldest flag and its contribution. Returns `None` on an empty window.
    pub fn evict(&mut self) -> Option<bool> {
        let flag = self.flags.pop_front()?;
        self.running_score -= self.weight(flag);
        Some(flag == 1)
    }

    pub fn running_score(&self) -> f64 {
        self.running_score
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.flags.len() == self.capacity
    }

    /// Number of correct predictions currently held.
    pub fn correct(&self) -> usize {
        self.flags.iter().filter(|&&f| f == 1).count()
    }
}
