/*!
 * Sleeping Idle Strategy
 *
 * Parks the calling thread for a fixed duration. Best when idle CPU burn
 * matters more than wake-up latency.
 */

use super::traits::IdleStrategy;
use crate::core::limits::DEFAULT_IDLE_SLEEP;
use std::thread;
use std::time::Duration;

/// Idle by sleeping for a configured period
///
/// # Performance
///
/// - Near-zero CPU while idle
/// - Latency bounded below by `duration` plus scheduler slack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepingIdle {
    duration: Duration,
}

impl SleepingIdle {
    /// Create a sleeping strategy pausing for `duration` on each idle
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Configured pause
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for SleepingIdle {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_SLEEP)
    }
}

impl IdleStrategy for SleepingIdle {
    #[inline]
    fn idle(&self) {
        thread::sleep(self.duration);
    }

    fn name(&self) -> &'static str {
        "sleeping"
    }
}
