//! Decoding Text string tables.
//!

use std::path::Path;

use sso_io::{ByteCursor, EntryStore};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::{shift_bytes, TextEntry, TextFile, TextHeader};

impl TextHeader {
    pub(crate) fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        Ok(Self {
            unknown: cursor.read_array()?,
            unknown2: cursor.read_array()?,
            unknown3: cursor.read_array()?,
            entry_count: cursor.read_u32()?,
        })
    }
}

impl TextEntry {
    pub(crate) fn read(cursor: &mut ByteCursor<'_>, index: u32) -> Result<Self> {
        let key_length = cursor.read_u8()?;
        let unknown = cursor.read_array()?;
        let key_offset = cursor.read_u8()?;

        let mut key_raw = cursor.read_vec(key_length as usize)?;
        shift_bytes(&mut key_raw, key_offset);
        let key = String::from_utf8(key_raw)?;

        let unknown2 = cursor.read_array()?;
        let unknown3 = cursor.read_array()?;

        // The stored length counts the 2-byte terminator along with the value.
        let raw_value_length = cursor.read_u32()?;
        if raw_value_length < 2 {
            return Err(Error::InvalidValueLength {
                index,
                length: raw_value_length,
            });
        }

        let unknown4 = cursor.read_u8()?;
        let unknown5 = cursor.read_u8()?;
        let unknown6 = cursor.read_u8()?;

        let mut value = cursor.read_vec(raw_value_length as usize - 2)?;
        let _terminator: [u8; 2] = cursor.read_array()?;

        // The shift is whatever maps the first code unit's high byte back to
        // zero; a value shorter than two bytes is stored unshifted.
        let value_offset = if value.len() > 1 {
            value[1].wrapping_neg()
        } else {
            0
        };
        shift_bytes(&mut value, value_offset);

        Ok(Self {
            unknown,
            key_offset,
            key,
            unknown2,
            unknown3,
            unknown4,
            unknown5,
            unknown6,
            value_offset,
            value,
        })
    }
}

impl TextFile {
    /// Parse a Text file from its encoded bytes.
    ///
    /// ```no_run
    /// fn dump(data: &[u8]) -> sso_text::error::Result<()> {
    ///     let table = sso_text::TextFile::decode(data)?;
    ///
    ///     for index in 0..table.entry_count() {
    ///         let entry = table.entry(index)?;
    ///         println!("{}: {}", entry.key(), entry.value()?);
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(data), err)]
    pub fn decode(data: &[u8]) -> Result<TextFile> {
        let mut cursor = ByteCursor::new(data);
        let header = TextHeader::read(&mut cursor)?;

        let wanted = header.entry_count as u64 * TextEntry::MIN_ENCODED_SIZE as u64;
        if wanted > cursor.remaining() as u64 {
            return Err(Error::InvalidEntryCount {
                declared: header.entry_count,
                remaining: cursor.remaining(),
            });
        }

        let mut entries = EntryStore::with_capacity(header.entry_count as usize)?;
        for index in 0..header.entry_count {
            entries.push(TextEntry::read(&mut cursor, index)?)?;
        }

        Ok(TextFile { header, entries })
    }

    /// Read and parse a Text file from disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()), err)]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TextFile> {
        Self::decode(&std::fs::read(path)?)
    }
}
