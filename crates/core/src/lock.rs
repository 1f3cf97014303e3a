//! Lock discipline selector
//!
//! The four disciplines differ along two axes: granularity (one lock for
//! the whole ledger vs. one lock per account) and mode (mutual exclusion
//! vs. reader-writer). Selection happens once at configuration time; no
//! per-operation dispatch on a selector value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Synchronization discipline guarding the shared ledger.
///
/// ## Selector values
///
/// These are part of the CLI contract and must not change:
/// - CoarseMutex = 1
/// - FineMutex = 2
/// - CoarseRwLock = 3
/// - FineRwLock = 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LockKind {
    /// One mutex over the whole ledger; even queries exclude each other.
    /// Strongest serialization, weakest concurrency - the contention
    /// baseline the other disciplines are measured against.
    CoarseMutex = 1,
    /// One mutex per account; two-account transfers acquire both locks
    /// in ascending index order.
    FineMutex = 2,
    /// One reader-writer lock over the whole ledger; queries share,
    /// transfers exclude.
    CoarseRwLock = 3,
    /// One reader-writer lock per account; transfers take both write
    /// locks in ascending index order, queries take one read lock.
    FineRwLock = 4,
}

impl LockKind {
    /// Every discipline, in selector order. Used by tests and benches to
    /// sweep the full matrix.
    pub const ALL: [LockKind; 4] = [
        LockKind::CoarseMutex,
        LockKind::FineMutex,
        LockKind::CoarseRwLock,
        LockKind::FineRwLock,
    ];

    /// Resolve a numeric selector (the CLI's fourth positional argument).
    pub fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(LockKind::CoarseMutex),
            2 => Some(LockKind::FineMutex),
            3 => Some(LockKind::CoarseRwLock),
            4 => Some(LockKind::FineRwLock),
            _ => None,
        }
    }

    /// Numeric selector for this discipline.
    pub fn as_selector(&self) -> u8 {
        *self as u8
    }

    /// True for the reader-writer variants.
    pub fn is_read_write(&self) -> bool {
        matches!(self, LockKind::CoarseRwLock | LockKind::FineRwLock)
    }

    /// True for the per-account variants.
    pub fn is_fine_grained(&self) -> bool {
        matches!(self, LockKind::FineMutex | LockKind::FineRwLock)
    }

    /// Short identifier for benchmark IDs and log fields.
    pub fn short_name(&self) -> &'static str {
        match self {
            LockKind::CoarseMutex => "coarse-mutex",
            LockKind::FineMutex => "fine-mutex",
            LockKind::CoarseRwLock => "coarse-rwlock",
            LockKind::FineRwLock => "fine-rwlock",
        }
    }
}

impl fmt::Display for LockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LockKind::CoarseMutex => "Coarse-grained Mutex",
            LockKind::FineMutex => "Fine-grained Mutex",
            LockKind::CoarseRwLock => "Coarse-grained RWLock",
            LockKind::FineRwLock => "Fine-grained RWLock",
        };
        write!(f, "{}", name)
    }
}
