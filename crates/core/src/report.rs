//! Run outcome reporting
//!
//! The report echoes the configuration and carries the two totals the
//! conservation oracle compares, plus wall-clock timing. Per-account
//! final balances are deliberately absent: they depend on interleaving
//! and are not part of any correctness claim.

use crate::config::RunConfig;
use serde::Serialize;

/// Outcome of a completed benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Configuration the run executed with.
    pub config: RunConfig,
    /// Sum of all balances recorded at seeding time.
    pub initial_total: i64,
    /// Sum of all balances after every worker joined.
    pub final_total: i64,
    /// Wall-clock duration of the concurrent phase, in seconds.
    pub elapsed_secs: f64,
    /// Completed operations per second of wall-clock time.
    pub throughput: f64,
}

impl RunReport {
    /// True when every transferred unit is accounted for.
    pub fn conserved(&self) -> bool {
        self.final_total == self.initial_total
    }

    /// Signed difference `final - initial`; zero exactly when conserved.
    pub fn discrepancy(&self) -> i64 {
        self.final_total - self.initial_total
    }
}
