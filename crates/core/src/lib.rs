//! Core types for ledgerbench
//!
//! This crate defines the types shared by every layer of the benchmark:
//! - LockKind: which synchronization discipline guards the ledger
//! - RunConfig: validated, immutable per-run configuration
//! - RunReport: totals, timing and throughput for a completed run
//! - ConfigError: the configuration error hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod lock;
pub mod report;

pub use config::{RunConfig, RunConfigBuilder};
pub use error::{ConfigError, Result};
pub use lock::LockKind;
pub use report::RunReport;
