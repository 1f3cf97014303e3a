//! ledgerbench - lock-strategy comparison over a shared account ledger
//!
//! Four interchangeable synchronization disciplines guard the same
//! in-memory balance array; a configurable mix of transfers and
//! queries hammers them from N threads; conservation of the total is
//! the correctness oracle.
//!
//! This facade re-exports the public surface of the member crates:
//! - `ledgerbench-core`: configuration, lock selection, reporting
//! - `ledgerbench-concurrency`: the ledger and its four strategies
//! - `ledgerbench-engine`: workers, the run driver, the oracle
//!
//! ```
//! use ledgerbench::{LockKind, RunConfig};
//!
//! let config = RunConfig::builder()
//!     .num_accounts(16)
//!     .num_threads(2)
//!     .transactions_per_thread(200)
//!     .lock(LockKind::FineMutex)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let report = ledgerbench::execute(&config).unwrap();
//! assert!(report.conserved());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use ledgerbench_concurrency::{
    build_ledger, seed_balances, CoarseMutexLedger, CoarseRwLedger, FineMutexLedger,
    FineRwLedger, Ledger, SimulatedWork, DEFAULT_BUSY_ITERS,
};
pub use ledgerbench_core::{
    ConfigError, LockKind, Result, RunConfig, RunConfigBuilder, RunReport,
};
pub use ledgerbench_engine::{execute, execute_with_balances, ConservationCheck};
