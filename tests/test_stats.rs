//! Monte Carlo behaviour of the threshold estimator.

use rand::rngs::StdRng;
use rand::SeedableRng;

use percolation::{PercolationError, PercolationStats};

#[test]
fn construction_validation() {
	for &(n, trials) in &[(0, 10), (-1, 10), (10, 0), (10, -5), (0, 0)] {
		match PercolationStats::new(n, trials) {
			Err(PercolationError::InvalidArgument { .. }) => {},
			other => panic!("({}, {}) should be rejected, got {:?}", n, trials, other),
		}
	}
}

#[test]
fn two_by_two_threshold() {
	let stats = PercolationStats::new(2, 10_000).unwrap();
	assert!(stats.mean() > 0.45 && stats.mean() < 0.75, "mean {}", stats.mean());
	assert!(stats.confidence_lo() <= stats.mean());
	assert!(stats.mean() <= stats.confidence_hi());
	// a 2x2 grid needs at least two sites open
	assert!(stats.results().iter().all(|&r| r >= 0.5));
}

#[test]
fn larger_grid_threshold_near_known_value() {
	// site percolation on the square lattice is ~0.5927
	let mut rng = StdRng::seed_from_u64(2021);
	let stats = PercolationStats::with_rng(50, 200, &mut rng).unwrap();
	assert!((stats.mean() - 0.5927).abs() < 0.05, "mean {}", stats.mean());
	assert!(stats.stddev() > 0.0);
	assert!(stats.confidence_lo() < stats.confidence_hi());
}

#[test]
fn accessors_are_stable() {
	let stats = PercolationStats::new(10, 30).unwrap();
	let first = (stats.mean(), stats.stddev(), stats.confidence_lo(), stats.confidence_hi());
	let second = (stats.mean(), stats.stddev(), stats.confidence_lo(), stats.confidence_hi());
	assert_eq!(first, second);
	assert_eq!(stats.trials(), 30);
	assert_eq!(stats.size(), 10);
}

#[test]
fn single_trial_is_not_a_crash() {
	let stats = PercolationStats::new(4, 1).unwrap();
	assert!(stats.stddev().is_nan());
	assert!(stats.mean() > 0.0 && stats.mean() <= 1.0);
}
