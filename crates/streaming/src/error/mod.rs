//! Error handling for transform sessions
//!
//! Sessions use the unified API error system and add conversions from the
//! primitive-level error type.

// Re-export the primary API error system
pub use scytale_api::{Error, Result, ResultExt};

use scytale_primitives::error::Error as PrimitiveError;

/// Converts a primitive-level error into an API error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    err.into()
}

/// Extension trait converting primitive results into session results
pub trait StreamingResultExt<T> {
    /// Maps the primitive error type to the API error type
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> StreamingResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }
}

/// Validates a session lifecycle condition
pub fn validate_session_state(
    condition: bool,
    operation: &'static str,
    details: &'static str,
) -> Result<()> {
    if condition {
        return Ok(());
    }
    Err(Error::InvalidParameter {
        context: operation,
        message: details.into(),
    })
}
