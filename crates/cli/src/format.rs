//! Report rendering
//!
//! Two modes: the human summary (configuration echo, totals, verdict,
//! timing) and `--json`, which serializes the whole report for
//! scripted comparison across runs.

use ledgerbench_core::{RunConfig, RunReport};

/// How the run report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Multi-line human-readable summary.
    Human,
    /// Single JSON document.
    Json,
}

/// Render the configuration echo printed before the run starts.
pub fn render_config(config: &RunConfig) -> String {
    let mut out = String::new();
    out.push_str("---- ledgerbench ----\n");
    out.push_str(&format!("Accounts: {}\n", config.num_accounts));
    out.push_str(&format!(
        "Transactions per thread: {}\n",
        config.transactions_per_thread
    ));
    out.push_str(&format!(
        "Query percentage: {:.1} %\n",
        config.query_ratio * 100.0
    ));
    out.push_str(&format!("Lock type: {}\n", config.lock));
    out.push_str(&format!("Threads: {}\n", config.num_threads));
    out.push_str(&format!(
        "Simulated work: {}",
        if config.simulated_work { "Yes" } else { "No" }
    ));
    out
}

/// Render a completed run's report in the requested mode.
pub fn render_report(report: &RunReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
        }
        OutputMode::Human => {
            let mut out = String::new();
            out.push_str("--- Results ---\n");
            out.push_str(&format!("> Initial total: {}\n", report.initial_total));
            out.push_str(&format!("> Final total: {}\n", report.final_total));
            if report.conserved() {
                out.push_str("> Status: SUCCESS - total funds conserved\n");
            } else {
                out.push_str(&format!(
                    "> Status: ERROR - discrepancy: {:+}\n",
                    report.discrepancy()
                ));
            }
            out.push_str(&format!(
                "> Execution time: {:.6} seconds\n",
                report.elapsed_secs
            ));
            out.push_str(&format!(
                "> Throughput: {:.2} transactions/second",
                report.throughput
            ));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerbench_core::LockKind;

    fn sample_report(final_total: i64) -> RunReport {
        RunReport {
            config: RunConfig {
                num_accounts: 10,
                num_threads: 4,
                transactions_per_thread: 1_000,
                query_ratio: 0.2,
                lock: LockKind::FineMutex,
                simulated_work: false,
                seed: Some(1),
            },
            initial_total: 5_000,
            final_total,
            elapsed_secs: 0.123456,
            throughput: 32_400.5,
        }
    }

    #[test]
    fn test_config_echo_lines() {
        let rendered = render_config(&sample_report(5_000).config);
        assert!(rendered.contains("Accounts: 10"));
        assert!(rendered.contains("Query percentage: 20.0 %"));
        assert!(rendered.contains("Lock type: Fine-grained Mutex"));
        assert!(rendered.contains("Threads: 4"));
        assert!(rendered.contains("Simulated work: No"));
    }

    #[test]
    fn test_human_success_verdict() {
        let rendered = render_report(&sample_report(5_000), OutputMode::Human);
        assert!(rendered.contains("> Initial total: 5000"));
        assert!(rendered.contains("> Final total: 5000"));
        assert!(rendered.contains("SUCCESS"));
        assert!(rendered.contains("0.123456 seconds"));
        assert!(rendered.contains("32400.50 transactions/second"));
    }

    #[test]
    fn test_human_failure_verdict_signed() {
        let rendered = render_report(&sample_report(4_990), OutputMode::Human);
        assert!(rendered.contains("ERROR"));
        assert!(rendered.contains("-10"));

        let rendered = render_report(&sample_report(5_010), OutputMode::Human);
        assert!(rendered.contains("+10"));
    }

    #[test]
    fn test_json_mode_round_trips() {
        let rendered = render_report(&sample_report(5_000), OutputMode::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["initial_total"], 5_000);
        assert_eq!(value["final_total"], 5_000);
        assert_eq!(value["config"]["num_accounts"], 10);
    }
}
