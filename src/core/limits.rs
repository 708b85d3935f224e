/*!
 * Collection Limits and Constants
 *
 * Centralized location for capacity and idle-loop tuning values.
 */

use std::time::Duration;

// =============================================================================
// CAPACITY
// =============================================================================

/// Smallest ring queue capacity
/// Ring capacities must also be powers of two so wraparound is a mask
pub const MIN_RING_CAPACITY: usize = 2;

/// Capacity hint used by the `Default` impls (16 elements)
/// [PERF] Power of two, so it is also a valid ring capacity
pub const DEFAULT_CAPACITY: usize = 16;

// =============================================================================
// IDLE LOOP
// =============================================================================

/// Pause used by the sleeping idle strategy when none is configured (1ms)
pub const DEFAULT_IDLE_SLEEP: Duration = Duration::from_millis(1);

/// Empty polls spent spinning before a consumer starts idling
/// [PERF] Short enough that a busy producer is caught without a syscall
pub const DEFAULT_SPIN_LIMIT: u32 = 100;
