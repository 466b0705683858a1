use statrs::statistics::Statistics;

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
	xs.iter().mean()
}

/// Sample standard deviation (n - 1 in the denominator); NaN for fewer
/// than two values.
pub fn stddev(xs: &[f64]) -> f64 {
	if xs.len() < 2 {
		return f64::NAN;
	}
	xs.iter().std_dev()
}
