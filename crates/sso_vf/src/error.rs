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

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// Transparent wrapper for [`std::string::FromUtf8Error`]
    #[error(transparent)]
    UTF8Error(#[from] std::string::FromUtf8Error),

    /// Transparent wrapper for the shared codec error type
    #[error(transparent)]
    CodecError(#[from] sso_io::error::Error),

    /// File does not start with a readable VF header
    #[error("file is not a vf manifest")]
    InvalidManifest(#[source] binrw::Error),

    /// Header entry count cannot fit in the bytes that follow it
    #[error("entry count {declared} does not fit in the {remaining} bytes after the header")]
    InvalidEntryCount {
        /// Count declared by the header
        declared: u32,
        /// Bytes left after the header
        remaining: usize,
    },

    /// String length prefixes are four bytes on disk
    #[error("{field} of {length} bytes overflows the length prefix")]
    StringTooLong {
        /// Name of the string field being encoded
        field: &'static str,
        /// Byte length of the rejected string
        length: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
