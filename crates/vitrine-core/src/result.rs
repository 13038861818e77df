//! Result type alias for Vitrine operations.

use crate::error::VitrineError;

/// Result type used throughout the Vitrine codebase.
pub type VitrineResult<T> = Result<T, VitrineError>;
