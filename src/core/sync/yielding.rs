/*!
 * Yielding Idle Strategy
 *
 * Gives the rest of the time slice back to the scheduler without a timed sleep.
 */

use super::traits::IdleStrategy;
use std::thread;

/// Idle by yielding the processor
///
/// Lower latency than [`super::SleepingIdle`], at the cost of keeping the
/// core busy when no other thread is runnable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YieldingIdle;

impl YieldingIdle {
    /// Create a yielding strategy
    pub const fn new() -> Self {
        Self
    }
}

impl IdleStrategy for YieldingIdle {
    #[inline]
    fn idle(&self) {
        thread::yield_now();
    }

    fn name(&self) -> &'static str {
        "yielding"
    }
}
