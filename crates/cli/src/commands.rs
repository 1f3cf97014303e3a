//! Clap command tree definition
//!
//! Positional arguments follow the benchmark's long-standing order:
//! accounts, transactions per thread, query percentage, lock-type
//! selector, threads, optional delay flag. Range checks beyond what
//! clap's value parsers cover live in `parse`.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("ledgerbench")
        .about("Compare locking disciplines over a shared in-memory account ledger")
        // A negative query percentage must reach the range check in
        // `parse`, not die in clap as an unknown flag.
        .allow_negative_numbers(true)
        .arg(
            Arg::new("accounts")
                .required(true)
                .value_parser(value_parser!(usize))
                .help("Number of ledger accounts (at least 2)"),
        )
        .arg(
            Arg::new("transactions")
                .required(true)
                .value_parser(value_parser!(u32))
                .help("Operations each worker thread performs"),
        )
        .arg(
            Arg::new("query-percentage")
                .required(true)
                .value_parser(value_parser!(f64))
                .help("Share of operations that are queries, 0-100"),
        )
        .arg(
            Arg::new("lock-type")
                .required(true)
                .value_parser(value_parser!(u8))
                .help("1=coarse mutex, 2=fine mutex, 3=coarse rwlock, 4=fine rwlock"),
        )
        .arg(
            Arg::new("threads")
                .required(true)
                .value_parser(value_parser!(usize))
                .help("Number of worker threads"),
        )
        .arg(
            Arg::new("use-delay")
                .value_parser(value_parser!(u8))
                .help("1 adds a busy-wait inside query critical sections (default 0)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit the run report as JSON instead of the human summary"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Fix the RNG seed for reproducible runs"),
        )
}
