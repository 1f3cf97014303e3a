//! Argument-to-configuration translation
//!
//! clap guarantees presence and numeric shape; this module owns the
//! range rules (percentage 0-100, selector 1-4, delay flag 0/1) and
//! produces a validated `RunConfig`. Everything fails before a single
//! worker thread exists.

use clap::ArgMatches;

use ledgerbench_core::{ConfigError, LockKind, Result, RunConfig};

/// Translate parsed arguments into a validated run configuration.
pub fn matches_to_config(matches: &ArgMatches) -> Result<RunConfig> {
    let num_accounts = *matches
        .get_one::<usize>("accounts")
        .expect("accounts is required");
    let transactions_per_thread = *matches
        .get_one::<u32>("transactions")
        .expect("transactions is required");
    let query_percentage = *matches
        .get_one::<f64>("query-percentage")
        .expect("query-percentage is required");
    let selector = *matches
        .get_one::<u8>("lock-type")
        .expect("lock-type is required");
    let num_threads = *matches
        .get_one::<usize>("threads")
        .expect("threads is required");

    let lock =
        LockKind::from_selector(selector).ok_or(ConfigError::UnknownLockType(selector))?;

    let simulated_work = match matches.get_one::<u8>("use-delay").copied() {
        None | Some(0) => false,
        Some(1) => true,
        Some(other) => return Err(ConfigError::InvalidDelayFlag(other)),
    };

    let config = RunConfig {
        num_accounts,
        num_threads,
        transactions_per_thread,
        query_ratio: query_percentage / 100.0,
        lock,
        simulated_work,
        seed: matches.get_one::<u64>("seed").copied(),
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli;

    fn parse(args: &[&str]) -> Result<RunConfig> {
        let mut argv = vec!["ledgerbench"];
        argv.extend_from_slice(args);
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        matches_to_config(&matches)
    }

    #[test]
    fn test_happy_path() {
        let config = parse(&["100", "1000", "20", "1", "4"]).unwrap();
        assert_eq!(config.num_accounts, 100);
        assert_eq!(config.transactions_per_thread, 1_000);
        assert_eq!(config.query_ratio, 0.2);
        assert_eq!(config.lock, LockKind::CoarseMutex);
        assert_eq!(config.num_threads, 4);
        assert!(!config.simulated_work);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_each_lock_selector() {
        for kind in LockKind::ALL {
            let selector = kind.as_selector().to_string();
            let config = parse(&["10", "100", "0", &selector, "2"]).unwrap();
            assert_eq!(config.lock, kind);
        }
    }

    #[test]
    fn test_unknown_lock_selector() {
        assert_eq!(
            parse(&["10", "100", "0", "5", "2"]),
            Err(ConfigError::UnknownLockType(5))
        );
    }

    #[test]
    fn test_delay_flag_values() {
        assert!(!parse(&["10", "100", "0", "1", "2", "0"]).unwrap().simulated_work);
        assert!(parse(&["10", "100", "0", "1", "2", "1"]).unwrap().simulated_work);
        assert_eq!(
            parse(&["10", "100", "0", "1", "2", "3"]),
            Err(ConfigError::InvalidDelayFlag(3))
        );
    }

    #[test]
    fn test_percentage_out_of_range() {
        assert!(matches!(
            parse(&["10", "100", "150", "1", "2"]),
            Err(ConfigError::QueryRatioOutOfRange(_))
        ));
        assert!(matches!(
            parse(&["10", "100", "-5", "1", "2"]),
            Err(ConfigError::QueryRatioOutOfRange(_))
        ));
    }

    #[test]
    fn test_percentage_bounds_inclusive() {
        assert_eq!(parse(&["10", "100", "0", "1", "2"]).unwrap().query_ratio, 0.0);
        assert_eq!(
            parse(&["10", "100", "100", "1", "2"]).unwrap().query_ratio,
            1.0
        );
    }

    #[test]
    fn test_config_validation_applies() {
        assert_eq!(
            parse(&["1", "100", "0", "1", "2"]),
            Err(ConfigError::TooFewAccounts(1))
        );
        assert_eq!(
            parse(&["10", "0", "0", "1", "2"]),
            Err(ConfigError::NoTransactions)
        );
        assert_eq!(
            parse(&["10", "100", "0", "1", "0"]),
            Err(ConfigError::NoThreads)
        );
    }

    #[test]
    fn test_seed_passthrough() {
        let config = parse(&["10", "100", "0", "1", "2", "--seed", "99"]).unwrap();
        assert_eq!(config.seed, Some(99));
    }
}
