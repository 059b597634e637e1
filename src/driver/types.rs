//! Per-row and per-batch results.

use crate::space::{Candidate, Dimension};
use crate::strategy::StrategyKind;
use std::io::{self, Write};

/// Outcome of one row's run. Immutable once the row completes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Position of the row in the batch.
    pub row_index: usize,

    /// Best design found.
    pub best: Candidate,

    /// Power output of `best`; `f64::NEG_INFINITY` when the row failed.
    pub best_fitness: f64,

    /// Best-so-far fitness after every step, then after every local-phase
    /// try for strategies that refine.
    pub curve: Vec<f64>,

    /// No finite power output was ever observed.
    pub failed: bool,

    /// Coordinates clipped by projection during the run.
    pub clip_events: usize,

    /// Where the strategy's own stagnation test fired (PSO only).
    pub stagnation_iteration: Option<usize>,
}

/// All completed rows plus the across-row diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchResult {
    pub kind: StrategyKind,

    /// Base seed the per-row generators were derived from.
    pub seed: u64,

    /// Completed rows, in row order.
    pub runs: Vec<RunResult>,

    /// Element-wise mean of the non-failed curves, padded to equal length.
    pub average_curve: Vec<f64>,

    /// Convergence index detected on `average_curve`.
    pub convergence_iteration: usize,

    /// Some rows were interrupted and are absent from `runs`.
    pub cancelled: bool,
}

impl BatchResult {
    /// Mean best fitness over the rows that did not fail.
    pub fn mean_best_fitness(&self) -> Option<f64> {
        let (sum, n) = self
            .runs
            .iter()
            .filter(|r| !r.failed)
            .fold((0.0, 0usize), |(sum, n), r| (sum + r.best_fitness, n + 1));
        (n > 0).then(|| sum / n as f64)
    }

    /// The row with the highest best fitness. Earlier rows win ties.
    pub fn best_run(&self) -> Option<&RunResult> {
        self.runs
            .iter()
            .filter(|r| !r.failed)
            .fold(None, |best: Option<&RunResult>, r| match best {
                Some(b) if b.best_fitness >= r.best_fitness => Some(b),
                _ => Some(r),
            })
    }

    /// Indices of rows that produced no valid design.
    pub fn failed_rows(&self) -> Vec<usize> {
        self.runs
            .iter()
            .filter(|r| r.failed)
            .map(|r| r.row_index)
            .collect()
    }

    /// Writes one comma-separated line per row:
    /// `row,V_oc,I_sc,G_theta,T,v,H,D,L,best_fitness,failed`.
    pub fn write_table<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "row")?;
        for dim in Dimension::ALL {
            write!(out, ",{}", dim.label())?;
        }
        writeln!(out, ",best_fitness,failed")?;

        for run in &self.runs {
            write!(out, "{}", run.row_index)?;
            for value in run.best.values() {
                write!(out, ",{value}")?;
            }
            writeln!(out, ",{},{}", run.best_fitness, run.failed)?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::DIM;

    fn run(row_index: usize, best_fitness: f64) -> RunResult {
        RunResult {
            row_index,
            best: Candidate::new([1.0; DIM]),
            best_fitness,
            curve: vec![best_fitness],
            failed: !best_fitness.is_finite(),
            clip_events: 0,
            stagnation_iteration: None,
        }
    }

    fn batch(runs: Vec<RunResult>) -> BatchResult {
        BatchResult {
            kind: StrategyKind::Ga,
            seed: 0,
            runs,
            average_curve: Vec::new(),
            convergence_iteration: 0,
            cancelled: false,
        }
    }

    #[test]
    fn test_summary_skips_failed_rows() {
        let result = batch(vec![run(0, 10.0), run(1, f64::NEG_INFINITY), run(2, 30.0)]);
        assert_eq!(result.mean_best_fitness(), Some(20.0));
        assert_eq!(result.best_run().map(|r| r.row_index), Some(2));
        assert_eq!(result.failed_rows(), vec![1]);
    }

    #[test]
    fn test_best_run_prefers_earlier_row_on_tie() {
        let result = batch(vec![run(0, 5.0), run(1, 5.0)]);
        assert_eq!(result.best_run().map(|r| r.row_index), Some(0));
    }

    #[test]
    fn test_empty_batch_summary() {
        let result = batch(Vec::new());
        assert_eq!(result.mean_best_fitness(), None);
        assert!(result.best_run().is_none());
    }

    #[test]
    fn test_write_table() {
        let result = batch(vec![run(0, 2.5), run(1, f64::NEG_INFINITY)]);
        let mut buf = Vec::new();
        result.write_table(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "row,V_oc,I_sc,G_theta,T,v,H,D,L,best_fitness,failed");
        assert_eq!(lines[1], "0,1,1,1,1,1,1,1,1,2.5,false");
        assert_eq!(lines[2], "1,1,1,1,1,1,1,1,1,-inf,true");
        assert_eq!(lines.len(), 3);
    }
}
