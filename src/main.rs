#[macro_use] extern crate log;

use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::*;
use std::fs::File;
use std::process;

use percolation::{Config, PercolationStats};

// argument errors exit with the conventional usage status
const EXIT_USAGE: i32 = 2;

fn init_logging(config: &Config) -> std::io::Result<()> {
	let log_config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
	let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
	loggers.push(TermLogger::new(config.log_level, log_config.clone(), TerminalMode::Stderr, ColorChoice::Auto));
	if let Some(path) = &config.log_file {
		loggers.push(WriteLogger::new(LevelFilter::Info, log_config, File::create(path)?));
	}
	let _ = CombinedLogger::init(loggers);
	Ok(())
}

fn main() {
	let config = match Config::from_env() {
		Ok(config) => config,
		Err(e) => {
			eprintln!("error: {}", e);
			eprintln!("usage: percolation <n> <trials> [--seed <u64>] [--json] [--log <path>]");
			process::exit(EXIT_USAGE);
		}
	};

	if let Err(e) = init_logging(&config) {
		eprintln!("error: cannot open log file: {}", e);
		process::exit(EXIT_USAGE);
	}
	info!("n: {}, trials: {}, seed: {:?}", config.n, config.trials, config.seed);

	let result = match config.seed {
		Some(seed) => PercolationStats::with_rng(config.n, config.trials, &mut StdRng::seed_from_u64(seed)),
		None => PercolationStats::new(config.n, config.trials),
	};
	let stats = match result {
		Ok(stats) => stats,
		Err(e) => {
			eprintln!("error: {}", e);
			process::exit(EXIT_USAGE);
		}
	};

	if config.json {
		println!("{}", stats.to_json());
	} else {
		println!("{}", stats);
	}
}
