//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`std::string::FromUtf8Error`]
    #[error(transparent)]
    UTF8Error(#[from] std::string::FromUtf8Error),

    /// Transparent wrapper for [`std::string::FromUtf16Error`]
    #[error(transparent)]
    UTF16Error(#[from] std::string::FromUtf16Error),

    /// Transparent wrapper for [`std::collections::TryReserveError`]
    #[error(transparent)]
    AllocError(#[from] std::collections::TryReserveError),

    /// Input ended before a read could be satisfied
    #[error("unexpected end of input at offset {offset}: wanted {wanted} bytes, {remaining} remain")]
    UnexpectedEnd {
        /// Read position when the shortfall was detected
        offset: u64,
        /// Bytes the caller asked for
        wanted: usize,
        /// Bytes actually left in the buffer
        remaining: usize,
    },

    /// UTF-16 data must span an even number of bytes
    #[error("utf-16 data has odd byte length {length}")]
    OddLength {
        /// Length of the offending byte sequence
        length: usize,
    },

    /// Access past the end of an entry store
    #[error("index {index} out of range, store holds {count} entries")]
    OutOfRange {
        /// Requested index
        index: u32,
        /// Current number of entries
        count: u32,
    },

    /// Fixed-size field handed a slice of the wrong length
    #[error("{field} takes exactly {expected} bytes, got {actual}")]
    BlockSize {
        /// Name of the field being assigned
        field: &'static str,
        /// Declared block size
        expected: usize,
        /// Length of the supplied slice
        actual: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
