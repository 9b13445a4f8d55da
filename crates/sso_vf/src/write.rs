//! Encoding VF manifests.
//!

use std::path::Path;

use binrw::BinWrite;
use sso_io::ByteWriter;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::{VfEntry, VfFile, VfHeader};

fn string_len(field: &'static str, bytes: &[u8]) -> Result<u32> {
    u32::try_from(bytes.len()).map_err(|_| Error::StringTooLong {
        field,
        length: bytes.len(),
    })
}

impl VfEntry {
    pub(crate) fn write(&self, writer: &mut ByteWriter) -> Result<()> {
        let name = self.file_name.as_bytes();
        writer.write_u32(string_len("file_name", name)?)?;
        writer.write_bytes(name)?;

        self.record.write(writer)?;

        let path = self.file_path.as_bytes();
        writer.write_u32(string_len("file_path", path)?)?;
        writer.write_bytes(path)?;

        Ok(())
    }

    fn encoded_len(&self) -> usize {
        Self::MIN_ENCODED_SIZE + self.file_name.len() + self.file_path.len()
    }
}

impl VfFile {
    /// Serialize the manifest back to bytes.
    ///
    /// The header entry count is recomputed from the live entry list; CRC
    /// and unknown blocks are written back as raw bytes.
    #[instrument(skip(self), err)]
    pub fn encode(&self) -> Result<Vec<u8>> {
        let capacity = VfHeader::SIZE
            + self
                .entries
                .iter()
                .map(VfEntry::encoded_len)
                .sum::<usize>();
        let mut writer = ByteWriter::with_capacity(capacity)?;

        let header = VfHeader {
            entry_count: self.entries.count(),
            ..self.header
        };
        header.write(&mut writer)?;

        for entry in self.entries.iter() {
            entry.write(&mut writer)?;
        }

        Ok(writer.into_vec())
    }

    /// Encode and write the manifest to disk.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()), err)]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.encode()?)?;
        Ok(())
    }
}
