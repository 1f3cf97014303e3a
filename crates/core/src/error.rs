//! Error types for ledgerbench
//!
//! Only configuration problems are errors here. Operation-level
//! precondition violations (self-transfer, bad index, insufficient
//! funds) are expected workload noise and stay silent no-ops at the
//! ledger layer, so they have no representation in this hierarchy.

use thiserror::Error;

/// Result type alias for ledgerbench operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors, all fatal and all detected before any worker
/// thread is spawned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The transfer workload needs two distinct endpoints
    #[error("account count must be at least 2, got {0}")]
    TooFewAccounts(usize),

    /// A run with no workers would measure nothing
    #[error("thread count must be positive")]
    NoThreads,

    /// Each worker needs a positive operation quota
    #[error("transactions per thread must be positive")]
    NoTransactions,

    /// Query ratio is a probability
    #[error("query ratio must be within [0, 1], got {0}")]
    QueryRatioOutOfRange(f64),

    /// Lock-type selector outside the 1..=4 contract
    #[error("unknown lock type selector {0}, expected 1-4")]
    UnknownLockType(u8),

    /// Delay flag outside the 0/1 contract
    #[error("delay flag must be 0 or 1, got {0}")]
    InvalidDelayFlag(u8),

    /// Caller-provided balances disagree with the configured account count
    #[error("balance vector has {actual} entries, config expects {expected}")]
    BalanceCountMismatch {
        /// Account count the configuration declares
        expected: usize,
        /// Entries actually supplied
        actual: usize,
    },
}
