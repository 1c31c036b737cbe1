use std::time::{Duration, Instant};

/// Run a function and measure its execution time.
///
/// # Returns
///
/// A tuple of (result, elapsed_time)
pub fn time_fn<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Summary statistics over a list of measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub p95: f64,
}

impl BenchmarkStats {
    /// Calculate statistics from a list of measurements. Empty input gives all zeros.
    pub fn from_values(mut values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                median: 0.0,
                p95: 0.0,
            };
        }
        values.sort_by(|a, b| a.total_cmp(b));

        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|&t| (t - mean).powi(2)).sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (values[n / 2 - 1] + values[n / 2]) / 2.0
        } else {
            values[n / 2]
        };
        let p95_idx = ((n as f64 * 0.95) as usize).min(n - 1);

        Self {
            mean,
            std_dev: variance.sqrt(),
            min: values[0],
            max: values[n - 1],
            median,
            p95: values[p95_idx],
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "mean": self.mean,
            "std_dev": self.std_dev,
            "min": self.min,
            "max": self.max,
            "median": self.median,
            "p95": self.p95,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_fn_returns_result() {
        let (value, elapsed) = time_fn(|| {
            std::thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_benchmark_stats() {
        let stats = BenchmarkStats::from_values(vec![5.0, 1.0, 4.0, 2.0, 3.0]);

        assert!((stats.mean - 3.0).abs() < 1e-6);
        assert!((stats.median - 3.0).abs() < 1e-6);
        assert!((stats.min - 1.0).abs() < 1e-6);
        assert!((stats.max - 5.0).abs() < 1e-6);
        assert_eq!(stats.p95, 5.0);
    }

    #[test]
    fn test_benchmark_stats_empty() {
        let stats = BenchmarkStats::from_values(Vec::new());
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.max, 0.0);
    }
}
