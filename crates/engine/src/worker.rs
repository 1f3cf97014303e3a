//! A single workload thread
//!
//! Each worker owns a private RNG stream, so the only thing workers
//! ever contend on is the ledger itself - never the randomness source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ledgerbench_concurrency::Ledger;

/// Exclusive upper bound for random transfer amounts. Zero draws fall
/// through to the ledger's silent no-op path.
pub(crate) const MAX_TRANSFER_AMOUNT: i64 = 1_000;

/// Odd multiplier mixing the worker index into the run seed
/// (splitmix64's golden-gamma constant).
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// One workload thread: an operation quota, a query/transfer mix, and
/// a private RNG stream.
pub(crate) struct Worker {
    id: usize,
    quota: u32,
    query_ratio: f64,
    rng: StdRng,
}

impl Worker {
    /// Build worker `id`, deriving its RNG stream from the run seed.
    pub(crate) fn new(id: usize, quota: u32, query_ratio: f64, base_seed: u64) -> Self {
        let seed = base_seed.wrapping_add((id as u64 + 1).wrapping_mul(SEED_MIX));
        Self {
            id,
            quota,
            query_ratio,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run the quota to exhaustion against `ledger`, then terminate.
    ///
    /// Each iteration draws query-vs-transfer from `query_ratio`, then
    /// uniform random operands: one account for a query; two distinct
    /// accounts and an amount in `[0, MAX_TRANSFER_AMOUNT)` for a
    /// transfer.
    pub(crate) fn run(mut self, ledger: &dyn Ledger) {
        let num_accounts = ledger.len();
        for _ in 0..self.quota {
            if self.rng.gen_bool(self.query_ratio) {
                let account = self.rng.gen_range(0..num_accounts);
                let balance = ledger.query(account);
                tracing::trace!(worker = self.id, account, balance, "query");
            } else {
                let from = self.rng.gen_range(0..num_accounts);
                let mut to = self.rng.gen_range(0..num_accounts);
                // Config validation guarantees at least two accounts,
                // so this redraw terminates.
                while to == from {
                    to = self.rng.gen_range(0..num_accounts);
                }
                let amount = self.rng.gen_range(0..MAX_TRANSFER_AMOUNT);
                ledger.transfer(from, to, amount);
                tracing::trace!(worker = self.id, from, to, amount, "transfer");
            }
        }
    }
}
