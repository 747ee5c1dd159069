//! Error types for the collection-control facade.

use thiserror::Error;

/// Errors that can occur when driving the native collector.
///
/// The facade has exactly one failure mode: the native collection-run
/// primitive reported that it could not perform a pass. Flag accessors
/// (`stress`, `set_stress`, `enable`, `disable`) are total and never
/// produce an error.
///
/// # Examples
///
/// ```
/// use gcctl::error::{GcError, GcResult};
///
/// let failure: GcResult<()> = Err(GcError::PrimitiveFailure("collector not started"));
/// assert!(failure.is_err());
/// assert_eq!(
///     failure.unwrap_err().to_string(),
///     "collection-run primitive failed: collector not started",
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GcError {
    /// The native `collect_now` primitive reported failure.
    #[error("collection-run primitive failed: {0}")]
    PrimitiveFailure(&'static str),
}

/// Result type for collection-control operations.
pub type GcResult<T> = Result<T, GcError>;
