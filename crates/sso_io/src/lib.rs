//! Shared binary plumbing for the SSO container formats.
//!
//! The format crates (`sso_text`, `sso_vf`) are built from three small pieces
//! kept here so both file families parse and serialize the same way:
//!
//! - [`ByteCursor`] and [`ByteWriter`]: bounds-checked little-endian access to
//!   in-memory buffers. Every read states how much input was missing instead
//!   of zero-filling, and both types implement the standard IO traits so
//!   fixed-layout structs can be parsed straight off them.
//! - [`utf16`]: conversion between host strings and the UTF-16LE value
//!   encoding used by Text string tables.
//! - [`EntryStore`]: the ordered, index-addressed record arena both file
//!   models share. Removal compacts, growth default-fills, and indices stay
//!   valid until the next structural mutation.

pub mod cursor;
pub mod error;
pub mod store;
pub mod utf16;

pub use cursor::{ByteCursor, ByteWriter};
pub use store::EntryStore;
