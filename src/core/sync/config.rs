/*!
 * Idle Configuration
 *
 * Runtime configuration for idle strategy selection
 */

use super::idler::Idler;
use super::sleeping::SleepingIdle;
use super::yielding::YieldingIdle;
use crate::core::limits::{DEFAULT_IDLE_SLEEP, DEFAULT_SPIN_LIMIT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Strategy type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Fixed-duration sleep (low CPU, higher latency)
    Sleeping,
    /// Cooperative yield (low latency, higher CPU)
    Yielding,
}

/// Idle configuration
///
/// Deserializable so a host application can carry it in its own config file;
/// missing fields fall back to [`IdleConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleConfig {
    /// Preferred strategy
    pub strategy: StrategyType,
    /// Pause per idle (for Sleeping)
    pub sleep_duration: Duration,
    /// Empty polls spent spinning before idling
    pub spin_limit: u32,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::Sleeping,
            sleep_duration: DEFAULT_IDLE_SLEEP,
            spin_limit: DEFAULT_SPIN_LIMIT,
        }
    }
}

impl IdleConfig {
    /// Configuration optimized for low latency (yield, spin longer)
    pub const fn low_latency() -> Self {
        Self {
            strategy: StrategyType::Yielding,
            sleep_duration: DEFAULT_IDLE_SLEEP,
            spin_limit: 1_000,
        }
    }

    /// Configuration optimized for low CPU burn (sleep, barely spin)
    pub const fn low_cpu() -> Self {
        Self {
            strategy: StrategyType::Sleeping,
            sleep_duration: Duration::from_millis(10),
            spin_limit: 10,
        }
    }

    /// Build the configured strategy
    pub fn build(&self) -> Idler {
        match self.strategy {
            StrategyType::Sleeping => Idler::Sleeping(SleepingIdle::new(self.sleep_duration)),
            StrategyType::Yielding => Idler::Yielding(YieldingIdle::new()),
        }
    }
}
