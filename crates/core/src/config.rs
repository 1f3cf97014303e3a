//! Run configuration
//!
//! A [`RunConfig`] is validated once, before any worker thread exists,
//! and never mutated afterwards. Construction is either a plain struct
//! literal (tests) or the builder (callers that want defaults).

use crate::error::{ConfigError, Result};
use crate::lock::LockKind;
use serde::{Deserialize, Serialize};

/// Immutable configuration for one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of ledger accounts. At least 2: a transfer needs two
    /// distinct endpoints.
    pub num_accounts: usize,
    /// Number of worker threads spawned for the run.
    pub num_threads: usize,
    /// Operations each worker performs before terminating.
    pub transactions_per_thread: u32,
    /// Probability in [0, 1] that a given operation is a query rather
    /// than a transfer.
    pub query_ratio: f64,
    /// Synchronization discipline under test.
    pub lock: LockKind,
    /// Busy-wait inside query critical sections to amplify contention
    /// effects. Affects throughput only, never correctness.
    pub simulated_work: bool,
    /// RNG seed for balance seeding and worker streams. `None` derives
    /// one from the system clock, so repeated runs differ.
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Start building a configuration from defaults.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Check every field against its contract.
    ///
    /// Called by the driver before any thread is spawned; a failure here
    /// aborts the run with no partial work done.
    pub fn validate(&self) -> Result<()> {
        if self.num_accounts < 2 {
            return Err(ConfigError::TooFewAccounts(self.num_accounts));
        }
        if self.num_threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        if self.transactions_per_thread == 0 {
            return Err(ConfigError::NoTransactions);
        }
        if !(0.0..=1.0).contains(&self.query_ratio) || self.query_ratio.is_nan() {
            return Err(ConfigError::QueryRatioOutOfRange(self.query_ratio));
        }
        Ok(())
    }

    /// Total operations the run will issue across all workers.
    pub fn total_transactions(&self) -> u64 {
        self.num_threads as u64 * u64::from(self.transactions_per_thread)
    }
}

/// Builder for [`RunConfig`].
///
/// Defaults mirror a typical interactive invocation: 100 accounts,
/// 4 threads, 1000 transactions per thread, 20% queries, coarse mutex,
/// no simulated work, clock-derived seed.
#[derive(Debug, Clone)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self {
            config: RunConfig {
                num_accounts: 100,
                num_threads: 4,
                transactions_per_thread: 1_000,
                query_ratio: 0.2,
                lock: LockKind::CoarseMutex,
                simulated_work: false,
                seed: None,
            },
        }
    }
}

impl RunConfigBuilder {
    /// Set the number of accounts.
    pub fn num_accounts(mut self, num_accounts: usize) -> Self {
        self.config.num_accounts = num_accounts;
        self
    }

    /// Set the number of worker threads.
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.config.num_threads = num_threads;
        self
    }

    /// Set the per-worker operation quota.
    pub fn transactions_per_thread(mut self, transactions: u32) -> Self {
        self.config.transactions_per_thread = transactions;
        self
    }

    /// Set the query probability, in [0, 1].
    pub fn query_ratio(mut self, ratio: f64) -> Self {
        self.config.query_ratio = ratio;
        self
    }

    /// Set the locking discipline.
    pub fn lock(mut self, lock: LockKind) -> Self {
        self.config.lock = lock;
        self
    }

    /// Enable or disable the busy-wait inside query critical sections.
    pub fn simulated_work(mut self, enabled: bool) -> Self {
        self.config.simulated_work = enabled;
        self
    }

    /// Fix the RNG seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and return the finished configuration.
    pub fn build(self) -> Result<RunConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
