//! This library handles reading from and creating **VF** manifests used by *Star Stable Online*.
//!
//! # VF Manifest Format Documentation
//!
//! This crate provides utilities to read and modify the **VF** manifest format used by
//! the game *Star Stable Online*. A VF file lists the assets packaged into the game's
//! multi-volume archive set: for every asset it records a name, a path, two CRC32
//! digests, the file size and the index of the source volume, along with several
//! byte regions whose purpose has not been established.
//!
//! ## File Structure
//!
//! A VF file consists of a header followed by the entry records.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: "SSVF"                                            |
//! | 0x0004         | Manifest Version       | 4 bytes: Version of the manifest, passed through verbatim  |
//! | 0x0008         | Entry Count            | 4 bytes: The number of entries in this file                |
//!
//! ### Entry Records
//!
//! Entries are stored back to back. Each starts and ends with a length-prefixed
//! UTF-8 string and carries a fixed 40-byte metadata block in between:
//!
//! | Field                  | Size               | Description                                           |
//! |------------------------|--------------------|-------------------------------------------------------|
//! | Name Length            | 4 bytes            | Byte length of the file name                          |
//! | File Name              | Name Length bytes  | UTF-8                                                 |
//! | Unknown 1              | 8 bytes            | Preserved verbatim                                    |
//! | Original CRC           | 4 bytes            | CRC32 digest, stored as raw bytes                     |
//! | Exported CRC           | 4 bytes            | CRC32 digest, stored as raw bytes                     |
//! | Unknown 2              | 4 bytes            | Preserved verbatim                                    |
//! | File Size              | 4 bytes            | Size of the asset in bytes                            |
//! | Unknown 4              | 8 bytes            | Preserved verbatim                                    |
//! | Source File Number     | 4 bytes            | Index into the external volume set                    |
//! | Unknown 5              | 4 bytes            | Preserved verbatim                                    |
//! | Path Length            | 4 bytes            | Byte length of the file path                          |
//! | File Path              | Path Length bytes  | UTF-8                                                 |
//!
//! The CRC digests are carried as opaque 4-byte blocks: the manifest neither
//! computes nor verifies them, and their byte order is not asserted.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.vf`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;
pub mod types;
pub mod write;

pub use types::{VfEntry, VfFile, VfHeader};
