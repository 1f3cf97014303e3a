//! Balance seeding
//!
//! The ledger starts from independent pseudo-random non-negative
//! balances. Seeding is the one place balances exist outside a lock
//! graph: the vector produced here is handed to a strategy constructor,
//! which takes ownership and becomes the only path to the data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound for seeded balances.
pub const MAX_SEED_BALANCE: i64 = 10_000;

/// Fill `num_accounts` balances with pseudo-random values in
/// `[0, MAX_SEED_BALANCE)`.
///
/// Deterministic for a given `seed`. The driver records the sum of the
/// returned vector as the run's initial total before any worker exists.
pub fn seed_balances(num_accounts: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_accounts)
        .map(|_| rng.gen_range(0..MAX_SEED_BALANCE))
        .collect()
}
