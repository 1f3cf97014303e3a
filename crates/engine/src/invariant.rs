//! The conservation oracle
//!
//! Transfers move funds, they never create or destroy them, so the sum
//! of all balances after a run must equal the sum before it - whatever
//! the interleaving, discipline, thread count, or injected delay.
//! Individual final balances are workload-order-dependent and carry no
//! correctness signal; only the global sum does.

/// Compares the ledger total before and after a run.
///
/// A violation is reported, never auto-corrected: it means a
/// synchronization bug (broken lock ordering, a mutation outside the
/// locks), which is exactly what the benchmark exists to detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConservationCheck {
    /// Total recorded at seeding time, before any worker existed.
    pub initial_total: i64,
    /// Total recorded after every worker joined.
    pub final_total: i64,
}

impl ConservationCheck {
    /// Capture the two totals to compare.
    pub fn new(initial_total: i64, final_total: i64) -> Self {
        Self {
            initial_total,
            final_total,
        }
    }

    /// True when every transferred unit is accounted for.
    pub fn holds(&self) -> bool {
        self.final_total == self.initial_total
    }

    /// Signed difference `final - initial`; zero exactly when `holds`.
    pub fn discrepancy(&self) -> i64 {
        self.final_total - self.initial_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_when_equal() {
        let check = ConservationCheck::new(5_000, 5_000);
        assert!(check.holds());
        assert_eq!(check.discrepancy(), 0);
    }

    #[test]
    fn test_detects_loss() {
        let check = ConservationCheck::new(5_000, 4_993);
        assert!(!check.holds());
        assert_eq!(check.discrepancy(), -7);
    }

    #[test]
    fn test_detects_creation() {
        let check = ConservationCheck::new(5_000, 5_100);
        assert!(!check.holds());
        assert_eq!(check.discrepancy(), 100);
    }

    #[test]
    fn test_negative_totals_compare() {
        // The oracle compares sums, it does not judge their sign.
        let check = ConservationCheck::new(-10, -10);
        assert!(check.holds());
    }
}
