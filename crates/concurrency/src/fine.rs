//! Fine-grained strategies: one lock per account
//!
//! Transfers touch two accounts and therefore hold two locks at once.
//! Acquisition always follows ascending account index, so concurrent
//! transfers with swapped endpoints cannot circular-wait; release goes
//! in the opposite (descending) order. The ordering lives in one
//! helper, [`ordered_pair`], used identically by both variants.

use parking_lot::{Mutex, RwLock};

use ledgerbench_core::LockKind;

use crate::strategy::{transfer_args_ok, Ledger};
use crate::work::SimulatedWork;

/// Acquisition plan for a two-account critical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OrderedPair {
    /// Lower account index; its lock is taken first and released last.
    pub lo: usize,
    /// Higher account index; taken second, released first.
    pub hi: usize,
    /// True when the debit side (`from`) holds the higher index.
    pub swapped: bool,
}

/// Compute the ascending acquisition order for `(from, to)`.
///
/// Callers must have rejected `from == to` already; a self-pair has no
/// meaningful order.
#[inline]
pub(crate) fn ordered_pair(from: usize, to: usize) -> OrderedPair {
    debug_assert_ne!(from, to);
    if from < to {
        OrderedPair {
            lo: from,
            hi: to,
            swapped: false,
        }
    } else {
        OrderedPair {
            lo: to,
            hi: from,
            swapped: true,
        }
    }
}

/// One mutex per account.
///
/// Transfers on disjoint account pairs proceed in parallel; only
/// operations sharing an account contend.
pub struct FineMutexLedger {
    slots: Vec<Mutex<i64>>,
    work: SimulatedWork,
}

impl FineMutexLedger {
    /// Wrap each seeded balance in its own mutex.
    pub fn new(balances: Vec<i64>, work: SimulatedWork) -> Self {
        Self {
            slots: balances.into_iter().map(Mutex::new).collect(),
            work,
        }
    }
}

impl Ledger for FineMutexLedger {
    fn transfer(&self, from: usize, to: usize, amount: i64) {
        if !transfer_args_ok(self.slots.len(), from, to, amount) {
            return;
        }
        let pair = ordered_pair(from, to);
        let mut lo = self.slots[pair.lo].lock();
        let mut hi = self.slots[pair.hi].lock();
        {
            let (debit, credit) = if pair.swapped {
                (&mut *hi, &mut *lo)
            } else {
                (&mut *lo, &mut *hi)
            };
            if *debit >= amount {
                *debit -= amount;
                *credit += amount;
            }
        }
        drop(hi);
        drop(lo);
    }

    fn query(&self, account: usize) -> i64 {
        match self.slots.get(account) {
            Some(slot) => {
                let guard = slot.lock();
                let balance = *guard;
                self.work.perform();
                balance
            }
            None => 0,
        }
    }

    fn total(&self) -> i64 {
        // Ascending walk, each slot read under its own lock. Exact only
        // while no transfer is in flight.
        self.slots.iter().map(|slot| *slot.lock()).sum()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn kind(&self) -> LockKind {
        LockKind::FineMutex
    }
}

/// One reader-writer lock per account.
///
/// Queries on the same account share its lock; transfers take both
/// write locks in ascending order. parking_lot's RwLock blocks new
/// readers once a writer is waiting, so a stream of queries cannot
/// starve transfers.
pub struct FineRwLedger {
    slots: Vec<RwLock<i64>>,
    work: SimulatedWork,
}

impl FineRwLedger {
    /// Wrap each seeded balance in its own reader-writer lock.
    pub fn new(balances: Vec<i64>, work: SimulatedWork) -> Self {
        Self {
            slots: balances.into_iter().map(RwLock::new).collect(),
            work,
        }
    }
}

impl Ledger for FineRwLedger {
    fn transfer(&self, from: usize, to: usize, amount: i64) {
        if !transfer_args_ok(self.slots.len(), from, to, amount) {
            return;
        }
        let pair = ordered_pair(from, to);
        let mut lo = self.slots[pair.lo].write();
        let mut hi = self.slots[pair.hi].write();
        {
            let (debit, credit) = if pair.swapped {
                (&mut *hi, &mut *lo)
            } else {
                (&mut *lo, &mut *hi)
            };
            if *debit >= amount {
                *debit -= amount;
                *credit += amount;
            }
        }
        drop(hi);
        drop(lo);
    }

    fn query(&self, account: usize) -> i64 {
        match self.slots.get(account) {
            Some(slot) => {
                let guard = slot.read();
                let balance = *guard;
                self.work.perform();
                balance
            }
            None => 0,
        }
    }

    fn total(&self) -> i64 {
        self.slots.iter().map(|slot| *slot.read()).sum()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn kind(&self) -> LockKind {
        LockKind::FineRwLock
    }
}
