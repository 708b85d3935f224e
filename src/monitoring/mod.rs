/*!
 * Monitoring
 * Structured logging setup for hosts, tests, and benches
 */

mod tracer;

pub use tracer::init_tracing;
