/*!
 * Core Module
 * Shared contract, errors, limits, and idle strategies
 */

pub mod errors;
pub mod limits;
pub mod sync;
pub mod traits;

// Re-export for convenience
pub use errors::*;
pub use traits::*;
