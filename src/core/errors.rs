/*!
 * Error Types
 * Precondition errors for the collections, with thiserror, miette, and serde support
 *
 * Absence (empty queue, missing key) is never an error here: it is `None`.
 * Only caller mistakes that the containers refuse to coerce end up in
 * `CollectionError`.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Precondition violations raised by container constructors and indexed access
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CollectionError {
    #[error("Invalid ring capacity {requested}: must be a power of two >= {minimum}")]
    #[diagnostic(
        code(collections::invalid_capacity),
        help("Round the capacity up with usize::next_power_of_two() before constructing the queue.")
    )]
    InvalidCapacity { requested: usize, minimum: usize },

    #[error("Index {index} out of bounds for list of length {len}")]
    #[diagnostic(
        code(collections::index_out_of_bounds),
        help("Indices shift on removal. Re-read size() or use range() for a consistent view.")
    )]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result alias for fallible collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;
