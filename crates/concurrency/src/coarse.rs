//! Coarse-grained strategies: one lock guards the entire ledger
//!
//! Both variants serialize transfers against everything else; they
//! differ only in whether queries may run alongside each other.
//! parking_lot primitives throughout - no poisoning, so a panicking
//! worker cannot wedge the other workers' locks.

use parking_lot::{Mutex, RwLock};

use ledgerbench_core::LockKind;

use crate::strategy::{transfer_args_ok, Ledger};
use crate::work::SimulatedWork;

/// One mutex over the whole balance array.
///
/// Transfers and queries all contend for the same lock; even two
/// queries exclude each other.
pub struct CoarseMutexLedger {
    accounts: Mutex<Vec<i64>>,
    num_accounts: usize,
    work: SimulatedWork,
}

impl CoarseMutexLedger {
    /// Wrap seeded balances in a single mutex.
    pub fn new(balances: Vec<i64>, work: SimulatedWork) -> Self {
        Self {
            num_accounts: balances.len(),
            accounts: Mutex::new(balances),
            work,
        }
    }
}

impl Ledger for CoarseMutexLedger {
    fn transfer(&self, from: usize, to: usize, amount: i64) {
        if !transfer_args_ok(self.num_accounts, from, to, amount) {
            return;
        }
        let mut accounts = self.accounts.lock();
        if accounts[from] >= amount {
            accounts[from] -= amount;
            accounts[to] += amount;
        }
    }

    fn query(&self, account: usize) -> i64 {
        if account >= self.num_accounts {
            return 0;
        }
        let accounts = self.accounts.lock();
        let balance = accounts[account];
        self.work.perform();
        balance
    }

    fn total(&self) -> i64 {
        self.accounts.lock().iter().sum()
    }

    fn len(&self) -> usize {
        self.num_accounts
    }

    fn kind(&self) -> LockKind {
        LockKind::CoarseMutex
    }
}

/// One reader-writer lock over the whole balance array.
///
/// Queries take the shared mode and may proceed together; transfers
/// take the exclusive mode and run alone.
pub struct CoarseRwLedger {
    accounts: RwLock<Vec<i64>>,
    num_accounts: usize,
    work: SimulatedWork,
}

impl CoarseRwLedger {
    /// Wrap seeded balances in a single reader-writer lock.
    pub fn new(balances: Vec<i64>, work: SimulatedWork) -> Self {
        Self {
            num_accounts: balances.len(),
            accounts: RwLock::new(balances),
            work,
        }
    }
}

impl Ledger for CoarseRwLedger {
    fn transfer(&self, from: usize, to: usize, amount: i64) {
        if !transfer_args_ok(self.num_accounts, from, to, amount) {
            return;
        }
        let mut accounts = self.accounts.write();
        if accounts[from] >= amount {
            accounts[from] -= amount;
            accounts[to] += amount;
        }
    }

    fn query(&self, account: usize) -> i64 {
        if account >= self.num_accounts {
            return 0;
        }
        let accounts = self.accounts.read();
        let balance = accounts[account];
        self.work.perform();
        balance
    }

    fn total(&self) -> i64 {
        self.accounts.read().iter().sum()
    }

    fn len(&self) -> usize {
        self.num_accounts
    }

    fn kind(&self) -> LockKind {
        LockKind::CoarseRwLock
    }
}
