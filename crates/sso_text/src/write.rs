//! Encoding Text string tables.
//!

use std::path::Path;

use sso_io::ByteWriter;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::{shift_bytes, TextEntry, TextFile, TextHeader};

impl TextHeader {
    pub(crate) fn write(&self, writer: &mut ByteWriter) -> Result<()> {
        writer.write_bytes(&self.unknown)?;
        writer.write_bytes(&self.unknown2)?;
        writer.write_bytes(&self.unknown3)?;
        writer.write_u32(self.entry_count)?;
        Ok(())
    }
}

impl TextEntry {
    pub(crate) fn write(&self, writer: &mut ByteWriter) -> Result<()> {
        // Both length fields are recomputed from the live strings; stored
        // counts are never trusted across a mutation.
        let key = self.key.as_bytes();
        let key_length = u8::try_from(key.len()).map_err(|_| Error::KeyTooLong {
            length: key.len(),
        })?;
        let raw_value_length = u32::try_from(self.value.len())
            .ok()
            .and_then(|length| length.checked_add(2))
            .ok_or(Error::ValueTooLong {
                length: self.value.len(),
            })?;

        writer.write_u8(key_length)?;
        writer.write_bytes(&self.unknown)?;
        writer.write_u8(self.key_offset)?;

        let mut key_raw = key.to_vec();
        shift_bytes(&mut key_raw, self.key_offset.wrapping_neg());
        writer.write_bytes(&key_raw)?;

        writer.write_bytes(&self.unknown2)?;
        writer.write_bytes(&self.unknown3)?;

        writer.write_u32(raw_value_length)?;
        writer.write_u8(self.unknown4)?;
        writer.write_u8(self.unknown5)?;
        writer.write_u8(self.unknown6)?;

        let mut value_raw = self.value.clone();
        shift_bytes(&mut value_raw, self.value_offset.wrapping_neg());
        writer.write_bytes(&value_raw)?;

        // Terminator: the UTF-16 NUL under the entry's shift.
        let terminator = 0u8.wrapping_sub(self.value_offset);
        writer.write_bytes(&[terminator, terminator])?;

        Ok(())
    }

    fn encoded_len(&self) -> usize {
        Self::MIN_ENCODED_SIZE + self.key.len() + self.value.len()
    }
}

impl TextFile {
    /// Serialize the table back to bytes.
    ///
    /// The header entry count and every per-entry length are recomputed
    /// from the live data; unknown regions are written back verbatim.
    #[instrument(skip(self), err)]
    pub fn encode(&self) -> Result<Vec<u8>> {
        let capacity = TextHeader::SIZE
            + self
                .entries
                .iter()
                .map(TextEntry::encoded_len)
                .sum::<usize>();
        let mut writer = ByteWriter::with_capacity(capacity)?;

        let header = TextHeader {
            entry_count: self.entries.count(),
            ..self.header
        };
        header.write(&mut writer)?;

        for entry in self.entries.iter() {
            entry.write(&mut writer)?;
        }

        Ok(writer.into_vec())
    }

    /// Encode and write the table to disk.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()), err)]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.encode()?)?;
        Ok(())
    }
}
