//! Synthetic critical-section work
//!
//! Queries can be made to dwell under their lock(s) to widen the
//! critical section, amplifying contention differences between the
//! disciplines. The hook affects throughput only, never correctness.

/// Busy iterations used when simulated work is enabled via a flag.
pub const DEFAULT_BUSY_ITERS: u32 = 100_000;

/// Optional work performed while a query holds its lock(s).
///
/// The busy loop stands in for real work done under the lock; a port to
/// a different scheduler can substitute a sleep or yield here without
/// touching any strategy contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatedWork {
    /// No extra time spent under the lock.
    #[default]
    None,
    /// Spin for the given number of iterations.
    Busy(u32),
}

impl SimulatedWork {
    /// Map the CLI's delay flag onto the hook.
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            SimulatedWork::Busy(DEFAULT_BUSY_ITERS)
        } else {
            SimulatedWork::None
        }
    }

    /// Run the configured work. Callers invoke this with their lock(s)
    /// held; the dwell must happen inside the critical section to have
    /// any effect on contention.
    #[inline]
    pub fn perform(&self) {
        if let SimulatedWork::Busy(iters) = self {
            for _ in 0..*iters {
                std::hint::spin_loop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(SimulatedWork::from_flag(false), SimulatedWork::None);
        assert_eq!(
            SimulatedWork::from_flag(true),
            SimulatedWork::Busy(DEFAULT_BUSY_ITERS)
        );
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(SimulatedWork::default(), SimulatedWork::None);
    }

    #[test]
    fn test_perform_completes() {
        SimulatedWork::None.perform();
        SimulatedWork::Busy(10).perform();
        SimulatedWork::Busy(0).perform();
    }
}
