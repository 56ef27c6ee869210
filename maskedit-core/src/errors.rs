// maskedit-core/src/errors.rs
//! Custom error types for the maskedit-core library.
//!
//! Compiling a mask, masking, unmasking and caret edits never fail; a typed
//! character that does not fit a slot is ordinary control flow and is reported
//! through [`crate::transducer::CharOutcome`]. The errors below only cover
//! preset loading and lookup.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `maskedit-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaskEditError {
    #[error("Preset '{0}': mask length ({1}) exceeds maximum allowed ({2})")]
    MaskLengthExceeded(String, usize, usize),

    #[error("Mask preset '{0}' not found.")]
    PresetNotFound(String),

    #[error("Failed to serialize compiled mask: {0}")]
    SerializationError(String),
}
