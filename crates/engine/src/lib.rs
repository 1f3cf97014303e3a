//! Workload engine for ledgerbench
//!
//! This crate drives a benchmark run end to end:
//! - Worker: one thread's operation loop over the shared ledger
//! - driver: seed, spawn, join, time, report
//! - ConservationCheck: the sole correctness oracle
//!
//! The engine never touches balances directly; every operation goes
//! through the strategy the driver built.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod driver;
mod invariant;
mod worker;

pub use driver::{execute, execute_with_balances};
pub use invariant::ConservationCheck;
