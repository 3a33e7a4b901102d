//! # Layout Errors

use thiserror::Error;

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Layout tree shape errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("First page is not an object")]
    InvalidPage,

    #[error("Page children is not an array")]
    InvalidChildren,

    #[error("Element {0} is not an object")]
    InvalidElement(usize),
}
