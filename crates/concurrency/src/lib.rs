//! Locking disciplines over the shared account ledger
//!
//! This crate implements the benchmark's four interchangeable
//! synchronization strategies:
//! - [`CoarseMutexLedger`]: one mutex for the whole ledger
//! - [`FineMutexLedger`]: one mutex per account
//! - [`CoarseRwLedger`]: one reader-writer lock for the whole ledger
//! - [`FineRwLedger`]: one reader-writer lock per account
//!
//! All balances live behind the active strategy's lock graph; there is
//! no unsynchronized path to the data. Workers talk to whichever
//! strategy the driver built, through the [`Ledger`] trait.
//!
//! The fine-grained variants share one lock-ordering helper so the
//! deadlock-avoidance invariant (acquire ascending by account index)
//! is enforced in a single place.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod coarse;
mod fine;
pub mod seed;
mod strategy;
mod work;

pub use coarse::{CoarseMutexLedger, CoarseRwLedger};
pub use fine::{FineMutexLedger, FineRwLedger};
pub use seed::seed_balances;
pub use strategy::{build_ledger, Ledger};
pub use work::{SimulatedWork, DEFAULT_BUSY_ITERS};
