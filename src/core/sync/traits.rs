/*!
 * Idle Strategy Trait
 *
 * Single-operation abstraction invoked by a caller that found nothing to do.
 */

/// Strategy for idling when no work is available
///
/// Implementations must be:
/// - **Thread-safe**: one strategy may be shared by many consumer threads
/// - **Infallible**: `idle` has no result and no failure mode
/// - **Stateless per call**: configuration is fixed at construction
pub trait IdleStrategy: Send + Sync {
    /// Perform one idle action
    fn idle(&self);

    /// Get strategy name for debugging
    fn name(&self) -> &'static str;
}

impl<S: IdleStrategy + ?Sized> IdleStrategy for Box<S> {
    #[inline]
    fn idle(&self) {
        (**self).idle()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
