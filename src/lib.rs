/*!
 * Concurrent Collections Library
 * Lock-guarded list, set, map, and ring queue plus idle strategies for pollers
 */

pub mod collections;
pub mod core;
pub mod monitoring;

// Re-exports
pub use collections::{
    RingQueueStats, SynchronizedList, SynchronizedMap, SynchronizedRingQueue, SynchronizedSet,
};
pub use crate::core::errors::{CollectionError, CollectionResult};
pub use crate::core::sync::{
    poll_until, IdleConfig, IdleStrategy, Idler, SleepingIdle, StrategyType, YieldingIdle,
};
pub use crate::core::traits::{Collection, Queue};
pub use monitoring::init_tracing;
