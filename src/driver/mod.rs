//! Per-row batch driver.
//!
//! Rows only multiply the number of independent runs: every row searches
//! the same box with a fresh state and its own generator, so a batch is a
//! set of independent, reproducible, fixed-budget optimizations. After the
//! last row the curves are padded to equal length, averaged (failed rows
//! excluded) and passed once through the convergence detector.

mod config;
mod runner;
mod types;

pub use config::OptimizerConfig;
pub use runner::{run_row, BatchRunner};
pub use types::{BatchResult, RunResult};
