use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::{PercolationError, Result};

pub const LOG_ENV_VAR: &str = "PERCOLATION_LOG";

const USAGE_FLAGS: &str = "one of --seed, --json, --log";

/// Command-line settings for one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub n: isize,
	pub trials: isize,
	pub seed: Option<u64>,
	pub json: bool,
	pub log_file: Option<PathBuf>,
	pub log_level: LevelFilter,
}

impl Config {
	pub fn from_env() -> Result<Config> {
		let level = std::env::var(LOG_ENV_VAR).ok();
		Config::parse(std::env::args().skip(1), level.as_deref())
	}

	/// Parses `<n> <trials> [--seed S] [--json] [--log PATH]` (program name
	/// already stripped) plus the optional log level override.
	pub fn parse<I: Iterator<Item = String>>(mut args: I, log_level: Option<&str>) -> Result<Config> {
		let n = parse_int("n", args.next())?;
		let trials = parse_int("trials", args.next())?;

		let mut seed = None;
		let mut json = false;
		let mut log_file = None;
		while let Some(flag) = args.next() {
			match flag.as_str() {
				"--seed" => {
					let raw = args.next().ok_or_else(|| missing("seed"))?;
					let value = raw.parse::<u64>()
						.map_err(|_| PercolationError::invalid("seed", "an unsigned integer", &raw))?;
					seed = Some(value);
				},
				"--json" => json = true,
				"--log" => {
					let path = args.next().ok_or_else(|| missing("log"))?;
					log_file = Some(PathBuf::from(path));
				},
				_ => return Err(PercolationError::invalid("argument", USAGE_FLAGS, flag)),
			}
		}

		let log_level = match log_level {
			Some(raw) => LevelFilter::from_str(raw.trim())
				.map_err(|_| PercolationError::invalid(LOG_ENV_VAR, "a log level (off, error, warn, info, debug, trace)", raw))?,
			None => LevelFilter::Warn,
		};

		Ok(Config { n, trials, seed, json, log_file, log_level })
	}
}

fn parse_int(param: &'static str, raw: Option<String>) -> Result<isize> {
	let raw = raw.ok_or_else(|| missing(param))?;
	raw.trim().parse::<isize>()
		.map_err(|_| PercolationError::invalid(param, "an integer", raw))
}

fn missing(param: &'static str) -> PercolationError {
	PercolationError::invalid(param, "provided", "nothing")
}
