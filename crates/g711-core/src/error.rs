//! Error type for the G.711 library
//!
//! Companding itself is total and never fails. The only failure is a
//! caller-supplied destination that is too short for the output, in which
//! case nothing has been written.

use thiserror::Error;

/// Shorthand for results carrying a [`CodecError`]
pub type Result<T> = std::result::Result<T, CodecError>;

/// Failures reported by buffer-filling operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Destination slice shorter than the output
    #[error("destination holds {actual} elements but {needed} are needed")]
    BufferTooSmall {
        /// Elements the operation would write
        needed: usize,
        /// Length of the destination
        actual: usize,
    },
}

impl CodecError {
    /// [`CodecError::BufferTooSmall`] for a destination of `actual` elements
    pub fn buffer_too_small(needed: usize, actual: usize) -> Self {
        Self::BufferTooSmall { needed, actual }
    }
}
