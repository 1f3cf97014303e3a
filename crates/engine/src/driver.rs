//! Run orchestration: seed, spawn, join, report
//!
//! The driver is the only component that sees the whole run: it
//! validates configuration before any thread exists, records the
//! initial total before any worker can move funds, and reads the final
//! total only after every worker has joined - the two points where the
//! conservation oracle is exact.

use std::sync::Arc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use ledgerbench_concurrency::{build_ledger, seed_balances, SimulatedWork};
use ledgerbench_core::{ConfigError, Result, RunConfig, RunReport};

use crate::invariant::ConservationCheck;
use crate::worker::Worker;

/// Resolve the run seed: the configured one, else clock-derived so
/// repeated unseeded runs exercise different workloads.
fn derive_seed(config: &RunConfig) -> u64 {
    config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    })
}

/// Validate `config`, seed a fresh ledger, and run the workload.
pub fn execute(config: &RunConfig) -> Result<RunReport> {
    config.validate()?;
    let seed = derive_seed(config);
    let balances = seed_balances(config.num_accounts, seed);
    run_workload(config, balances, seed)
}

/// Run the workload over caller-provided balances instead of random
/// seeding. Used by scenarios that need a known initial total.
pub fn execute_with_balances(config: &RunConfig, balances: Vec<i64>) -> Result<RunReport> {
    config.validate()?;
    if balances.len() != config.num_accounts {
        return Err(ConfigError::BalanceCountMismatch {
            expected: config.num_accounts,
            actual: balances.len(),
        });
    }
    run_workload(config, balances, derive_seed(config))
}

fn run_workload(config: &RunConfig, balances: Vec<i64>, seed: u64) -> Result<RunReport> {
    let initial_total: i64 = balances.iter().sum();
    let ledger = build_ledger(
        config.lock,
        balances,
        SimulatedWork::from_flag(config.simulated_work),
    );

    tracing::info!(
        lock = config.lock.short_name(),
        accounts = config.num_accounts,
        threads = config.num_threads,
        quota = config.transactions_per_thread,
        initial_total,
        seed,
        "starting run"
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..config.num_threads)
        .map(|id| {
            let ledger = Arc::clone(&ledger);
            let worker = Worker::new(id, config.transactions_per_thread, config.query_ratio, seed);
            thread::spawn(move || worker.run(ledger.as_ref()))
        })
        .collect();

    for handle in handles {
        if let Err(payload) = handle.join() {
            // A panicking worker voids the oracle; surface it instead
            // of reporting a half-run.
            std::panic::resume_unwind(payload);
        }
    }
    let elapsed = start.elapsed();

    let final_total = ledger.total();
    let check = ConservationCheck::new(initial_total, final_total);
    if check.holds() {
        tracing::debug!(final_total, "totals conserved");
    } else {
        tracing::warn!(
            discrepancy = check.discrepancy(),
            "conservation violated - synchronization bug"
        );
    }

    let elapsed_secs = elapsed.as_secs_f64();
    let throughput = if elapsed_secs > 0.0 {
        config.total_transactions() as f64 / elapsed_secs
    } else {
        0.0
    };
    tracing::info!(elapsed_secs, throughput, "run complete");

    Ok(RunReport {
        config: config.clone(),
        initial_total,
        final_total,
        elapsed_secs,
        throughput,
    })
}
