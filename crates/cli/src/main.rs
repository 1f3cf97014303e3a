//! ledgerbench binary - drives one benchmark run from the command line
//!
//! Exit codes: 0 for a completed run (the conservation verdict is part
//! of the printed report, not the exit status), 1 for configuration
//! errors. Validation happens before any worker thread is spawned; no
//! partial run is attempted.

mod commands;
mod format;
mod parse;

use std::process;

use format::OutputMode;

fn main() {
    init_tracing();

    let matches = commands::build_cli().get_matches();

    let config = match parse::matches_to_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    tracing::debug!(?config, "parsed configuration");

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    if mode == OutputMode::Human {
        println!("{}", format::render_config(&config));
    }

    match ledgerbench_engine::execute(&config) {
        Ok(report) => {
            println!("{}", format::render_report(&report, mode));
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Route diagnostics to stderr so stdout stays machine-parseable.
/// `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
