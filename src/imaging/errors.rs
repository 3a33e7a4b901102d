//! # Imaging Errors

use thiserror::Error;

/// Result type for imaging operations
pub type ImagingResult<T> = Result<T, ImagingError>;

/// Errors raised while preparing an image job
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImagingError {
    #[error("Empty {0} payload")]
    EmptyPayload(&'static str),

    #[error("Invalid base64 in {field}: {reason}")]
    InvalidBase64 { field: &'static str, reason: String },

    #[error("Option {key} is not a valid boolean: {value}")]
    InvalidFlag { key: String, value: String },
}
