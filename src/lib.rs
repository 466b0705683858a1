#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;

mod descriptive;
mod disjoint_set;
mod error;
mod percolation;
mod stats;
pub mod config;

pub use config::Config;
pub use descriptive::{mean, stddev};
pub use disjoint_set::{DisjointSet, UnionFind};
pub use error::{PercolationError, Result};
pub use percolation::Percolation;
pub use stats::{PercolationStats, run_trial};
