/*!
 * Idle Strategies
 *
 * Policies for a consumer thread that polled a container and found no work:
 * - Sleeping: fixed-duration park, minimal CPU burn, added latency
 * - Yielding: give up the rest of the time slice, low latency, busier CPU
 *
 * # Architecture
 *
 * Containers never block. A consumer that wants to wait runs its own
 * spin-then-idle loop ([`poll_until`]) and picks a strategy through
 * [`IdleConfig`], which resolves to the enum-dispatched [`Idler`].
 */

mod config;
mod idler;
mod poll;
mod sleeping;
mod traits;
mod yielding;

pub use config::{IdleConfig, StrategyType};
pub use idler::Idler;
pub use poll::poll_until;
pub use sleeping::SleepingIdle;
pub use traits::IdleStrategy;
pub use yielding::YieldingIdle;
