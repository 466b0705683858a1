use std::fmt;

use rand::Rng;
use serde_json::Value;

use crate::descriptive;
use crate::error::{PercolationError, Result};
use crate::percolation::Percolation;

// z-score for a two-sided 95% interval
const CONFIDENCE_95: f64 = 1.96;

/// Opens uniformly random sites on a fresh n-by-n grid until it percolates
/// and returns the fraction of sites open at that point.
///
/// Each call owns its own grid, so trials only share the random source.
pub fn run_trial<R: Rng>(n: isize, rng: &mut R) -> Result<f64> {
	let mut percolation = Percolation::new(n)?;
	while !percolation.percolates() {
		let row = rng.gen_range(1..=n);
		let col = rng.gen_range(1..=n);
		percolation.open(row, col)?;
	}
	let cells = percolation.size() * percolation.size();
	Ok(percolation.number_of_open_sites() as f64 / cells as f64)
}

/// Percolation threshold estimates over independent trials.
///
/// Every trial runs during construction; afterwards the summary values are
/// read-only.
#[derive(Debug, Clone)]
pub struct PercolationStats {
	n: usize,
	results: Vec<f64>,
	mean: f64,
	stddev: f64,
}

impl PercolationStats {
	/// Runs `trials` experiments on n-by-n grids with the thread-local RNG.
	pub fn new(n: isize, trials: isize) -> Result<PercolationStats> {
		PercolationStats::with_rng(n, trials, &mut rand::thread_rng())
	}

	pub fn with_rng<R: Rng>(n: isize, trials: isize, rng: &mut R) -> Result<PercolationStats> {
		if n <= 0 {
			return Err(PercolationError::invalid("n", "greater than 0", n));
		}
		if trials <= 0 {
			return Err(PercolationError::invalid("trials", "greater than 0", trials));
		}

		let mut results = Vec::with_capacity(trials as usize);
		for t in 0..trials {
			let threshold = run_trial(n, rng)?;
			debug!("trial {}: percolated at {} open", t, threshold);
			results.push(threshold);
		}

		let mean = descriptive::mean(&results);
		let stddev = descriptive::stddev(&results);
		info!("{} trials on {}x{} grid: mean {}, stddev {}", trials, n, n, mean, stddev);

		Ok(PercolationStats {
			n: n as usize,
			results,
			mean,
			stddev,
		})
	}

	pub fn size(&self) -> usize {
		self.n
	}

	pub fn trials(&self) -> usize {
		self.results.len()
	}

	/// Per-trial thresholds, in the order the trials ran.
	pub fn results(&self) -> &[f64] {
		&self.results
	}

	pub fn mean(&self) -> f64 {
		self.mean
	}

	/// Sample standard deviation; NaN for a single trial.
	pub fn stddev(&self) -> f64 {
		self.stddev
	}

	pub fn confidence_lo(&self) -> f64 {
		self.mean - self.half_width()
	}

	pub fn confidence_hi(&self) -> f64 {
		self.mean + self.half_width()
	}

	// non-finite values (single-trial stddev) serialize as null
	pub fn to_json(&self) -> Value {
		json!({
			"n": self.n,
			"trials": self.trials(),
			"mean": self.mean(),
			"stddev": self.stddev(),
			"confidence_lo": self.confidence_lo(),
			"confidence_hi": self.confidence_hi(),
		})
	}

	fn half_width(&self) -> f64 {
		CONFIDENCE_95 * self.stddev / (self.trials() as f64).sqrt()
	}
}

impl fmt::Display for PercolationStats {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "mean                    = {}", self.mean())?;
		writeln!(f, "stddev                  = {}", self.stddev())?;
		write!(f, "95% confidence interval = [{}, {}]", self.confidence_lo(), self.confidence_hi())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	#[test]
	fn rejects_bad_parameters() {
		assert!(PercolationStats::new(0, 10).is_err());
		assert!(PercolationStats::new(-2, 10).is_err());
		assert!(PercolationStats::new(5, 0).is_err());
		assert!(PercolationStats::new(5, -1).is_err());
		assert!(PercolationStats::new(isize::MAX, 1).is_err());
	}

	#[test]
	fn single_site_always_percolates_at_one() {
		let stats = PercolationStats::new(1, 5).unwrap();
		assert_eq!(stats.results(), &[1.0; 5]);
		assert_eq!(stats.mean(), 1.0);
		assert_eq!(stats.stddev(), 0.0);
		assert_eq!(stats.confidence_lo(), 1.0);
		assert_eq!(stats.confidence_hi(), 1.0);
	}

	#[test]
	fn trial_fraction_is_in_unit_interval() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..50 {
			let p = run_trial(5, &mut rng).unwrap();
			assert!(p > 0.0 && p <= 1.0, "threshold {}", p);
		}
	}

	#[test]
	fn single_trial_stddev_is_nan() {
		let stats = PercolationStats::new(3, 1).unwrap();
		assert_eq!(stats.trials(), 1);
		assert!(stats.stddev().is_nan());
		assert!(stats.confidence_lo().is_nan());
		assert!(stats.to_json()["stddev"].is_null());
	}

	#[test]
	fn seeded_runs_repeat() {
		let a = PercolationStats::with_rng(6, 20, &mut StdRng::seed_from_u64(42)).unwrap();
		let b = PercolationStats::with_rng(6, 20, &mut StdRng::seed_from_u64(42)).unwrap();
		assert_eq!(a.results(), b.results());
	}

	#[test]
	fn renders_three_lines() {
		let stats = PercolationStats::new(1, 3).unwrap();
		let text = stats.to_string();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines, vec![
			"mean                    = 1",
			"stddev                  = 0",
			"95% confidence interval = [1, 1]",
		]);
	}

	#[test]
	fn json_summary_fields() {
		let stats = PercolationStats::new(1, 2).unwrap();
		let v = stats.to_json();
		assert_eq!(v["n"], 1);
		assert_eq!(v["trials"], 2);
		assert_eq!(v["mean"], 1.0);
		assert_eq!(v["confidence_hi"], 1.0);
	}
}
