use thiserror::Error;

pub type Result<T> = std::result::Result<T, PercolationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
	#[error("{param} must be {constraint}, provided: {value}")]
	InvalidArgument {
		param: &'static str,
		constraint: String,
		value: String,
	},
}

impl PercolationError {
	pub fn invalid(param: &'static str, constraint: impl Into<String>, value: impl ToString) -> Self {
		PercolationError::InvalidArgument {
			param,
			constraint: constraint.into(),
			value: value.to_string(),
		}
	}
}
