//! # Text Format Documentation
//!
//! This crate provides utilities to read, modify and write the **Text** format used by
//! the game *Star Stable Online*. A Text file is a custom binary container holding an
//! ordered list of localization entries: a UTF-8 key, a UTF-16LE value, and several
//! byte regions whose purpose has not been established.
//!
//! ## File Structure
//!
//! A Text file consists of a fixed header followed by a list of entries.
//!
//! | Offset (bytes) | Field                  | Description                                               |
//! |----------------|------------------------|-----------------------------------------------------------|
//! | 0x0000         | Unknown                | 4 bytes: Purpose not established, preserved verbatim      |
//! | 0x0004         | Unknown 2              | 4 bytes: Purpose not established, preserved verbatim      |
//! | 0x0008         | Unknown 3              | 4 bytes: Purpose not established, preserved verbatim      |
//! | 0x000C         | Entry Count            | 4 bytes: The number of entries in this file               |
//!
//! ### Entry List
//!
//! Entries are stored back to back, each with the following structure:
//!
//! | Field                  | Size              | Description                                            |
//! |------------------------|-------------------|--------------------------------------------------------|
//! | Key Length             | 1 byte            | Byte length of the stored key                          |
//! | Unknown                | 2 bytes           | Preserved verbatim                                     |
//! | Key Offset             | 1 byte            | Additive byte shift applied to the stored key          |
//! | Key                    | Key Length bytes  | UTF-8, stored shifted down by Key Offset               |
//! | Unknown 2              | 4 bytes           | Preserved verbatim                                     |
//! | Unknown 3              | 4 bytes           | Preserved verbatim                                     |
//! | Raw Value Length       | 4 bytes           | Byte length of the value plus its 2-byte terminator    |
//! | Unknown 4, 5, 6        | 1 byte each       | Preserved verbatim                                     |
//! | Value                  | Raw Value Length − 2 | UTF-16LE, stored shifted down by the value offset   |
//! | Terminator             | 2 bytes           | UTF-16 NUL under the same shift, discarded on read     |
//!
//! The value's shift is not stored: readers derive it from the second stored
//! value byte (the high byte of the first UTF-16 code unit, which the format
//! forces back to zero). Both shifts are exposed on [`TextEntry`] and written
//! back exactly, so any decodable file survives a read-modify-write cycle
//! bit for bit.
//!
//! ## Additional Information
//!
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;
#[cfg(feature = "serde")]
mod serde;
pub mod types;
pub mod write;

pub use types::{TextEntry, TextFile, TextHeader};
