/*!
 * Idler
 *
 * Enum dispatch over the built-in strategies. Config-driven callers get a
 * concrete type without boxing; custom strategies still go through the trait.
 */

use super::config::StrategyType;
use super::sleeping::SleepingIdle;
use super::traits::IdleStrategy;
use super::yielding::YieldingIdle;

/// One of the built-in idle strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idler {
    Sleeping(SleepingIdle),
    Yielding(YieldingIdle),
}

impl Idler {
    /// Strategy type this idler was built from
    pub fn strategy_type(&self) -> StrategyType {
        match self {
            Idler::Sleeping(_) => StrategyType::Sleeping,
            Idler::Yielding(_) => StrategyType::Yielding,
        }
    }
}

impl Default for Idler {
    fn default() -> Self {
        Idler::Sleeping(SleepingIdle::default())
    }
}

impl From<SleepingIdle> for Idler {
    fn from(s: SleepingIdle) -> Self {
        Idler::Sleeping(s)
    }
}

impl From<YieldingIdle> for Idler {
    fn from(y: YieldingIdle) -> Self {
        Idler::Yielding(y)
    }
}

impl IdleStrategy for Idler {
    #[inline]
    fn idle(&self) {
        match self {
            Idler::Sleeping(s) => s.idle(),
            Idler::Yielding(y) => y.idle(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Idler::Sleeping(s) => s.name(),
            Idler::Yielding(y) => y.name(),
        }
    }
}
