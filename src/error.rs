//! Errors returned by [`GrowableArray`](crate::array::GrowableArray) operations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The broad category an [`Error`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor or bulk operation was handed an unusable argument.
    InvalidArgument,
    /// A positional operation was given an index outside `0..=len`.
    OutOfRange,
    /// An index landed outside the physical backing store.
    IndexOutOfRange,
}

/// Errors returned by the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("capacity cannot be negative, got {0}")]
    NegativeCapacity(isize),

    #[error("cannot append an empty sequence")]
    EmptySequence,

    /// `insert` was called past the end of the logical sequence.
    #[error("index {index} is outside the array bounds 0..={len}")]
    OutOfRange { index: usize, len: usize },

    /// Indexed access beyond the backing store.
    #[error("index {index} is outside the backing store of capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NegativeCapacity(_) | Error::EmptySequence => ErrorKind::InvalidArgument,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}
