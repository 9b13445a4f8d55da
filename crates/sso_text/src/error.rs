//! Error types that can be emitted from this library
//!

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

    /// Transparent wrapper for the shared codec error type
    #[error(transparent)]
    CodecError(#[from] sso_io::error::Error),

    /// Header entry count cannot fit in the bytes that follow it
    #[error("entry count {declared} does not fit in the {remaining} bytes after the header")]
    InvalidEntryCount {
        /// Count declared by the header
        declared: u32,
        /// Bytes left after the header
        remaining: usize,
    },

    /// Stored value length must cover the 2-byte terminator
    #[error("entry {index}: stored value length {length} is shorter than the terminator")]
    InvalidValueLength {
        /// Entry being decoded when the length was read
        index: u32,
        /// Raw length taken from the stream
        length: u32,
    },

    /// The key length field is a single byte on disk
    #[error("key of {length} bytes does not fit the one-byte length field")]
    KeyTooLong {
        /// Byte length of the rejected key
        length: usize,
    },

    /// The value length field is four bytes on disk
    #[error("value of {length} bytes overflows the length field")]
    ValueTooLong {
        /// Byte length of the rejected value
        length: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
