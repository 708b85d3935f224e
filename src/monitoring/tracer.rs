/*!
 * Tracing Setup
 * Structured logging for the collections using the tracing crate
 *
 * The library itself only emits events (ring growth at debug, clears at
 * trace, rejected preconditions at warn). Installing a subscriber is left to
 * the host; this helper is the default one.
 */

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - COLLECTIONS_TRACE_JSON: Enable JSON output (default: false)
///
/// The collections emit events only, never spans, so the layers carry no
/// span context. Safe to call more than once: later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = json_requested(std::env::var("COLLECTIONS_TRACE_JSON").ok().as_deref());

    // Events come from producer and consumer threads alike; tag them by thread
    let events = fmt::layer().with_thread_ids(true);
    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry.with(events.json().flatten_event(true)).try_init()
    } else {
        registry.with(events.compact()).try_init()
    }
    .is_ok();

    if installed {
        info!(json, "collections tracing installed");
    }
}

fn json_requested(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}
