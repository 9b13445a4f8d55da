//! Decoding VF manifests.
//!

use std::path::Path;

use binrw::BinRead;
use sso_io::{ByteCursor, EntryStore};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::{VfEntry, VfFile, VfHeader, VfRecord};

impl VfEntry {
    pub(crate) fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let name_len = cursor.read_u32()?;
        let file_name = String::from_utf8(cursor.read_vec(name_len as usize)?)?;

        let record = VfRecord::read(cursor)?;

        let path_len = cursor.read_u32()?;
        let file_path = String::from_utf8(cursor.read_vec(path_len as usize)?)?;

        Ok(Self {
            file_name,
            record,
            file_path,
        })
    }
}

impl VfFile {
    /// Parse a VF manifest from its encoded bytes.
    ///
    /// Fails without producing a file when the magic does not match or the
    /// declared entry count cannot fit in the input.
    ///
    /// ```no_run
    /// fn list_assets(data: &[u8]) -> sso_vf::error::Result<()> {
    ///     let manifest = sso_vf::VfFile::decode(data)?;
    ///
    ///     for index in 0..manifest.entry_count() {
    ///         let entry = manifest.entry(index)?;
    ///         println!("{} ({} bytes)", entry.file_path(), entry.file_size());
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(data), err)]
    pub fn decode(data: &[u8]) -> Result<VfFile> {
        let mut cursor = ByteCursor::new(data);
        let header = VfHeader::read(&mut cursor).map_err(Error::InvalidManifest)?;

        let wanted = header.entry_count as u64 * VfEntry::MIN_ENCODED_SIZE as u64;
        if wanted > cursor.remaining() as u64 {
            return Err(Error::InvalidEntryCount {
                declared: header.entry_count,
                remaining: cursor.remaining(),
            });
        }

        let mut entries = EntryStore::with_capacity(header.entry_count as usize)?;
        for _ in 0..header.entry_count {
            entries.push(VfEntry::read(&mut cursor)?)?;
        }

        Ok(VfFile { header, entries })
    }

    /// Read and parse a VF manifest from disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()), err)]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<VfFile> {
        Self::decode(&std::fs::read(path)?)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use crate::error::{Error, Result};
    use crate::types::VfFile;

    #[test]
    fn read_invalid_magic() {
        #[rustfmt::skip]
        let input = [
            0x56, 0x46, 0x53, 0x4F,
            0x01, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ];

        let manifest = VfFile::decode(&input);
        assert!(matches!(manifest, Err(Error::InvalidManifest(_))));
    }

    #[test]
    fn read_truncated_header() {
        let input = [0x53, 0x53, 0x56, 0x46, 0x01];

        assert!(matches!(
            VfFile::decode(&input),
            Err(Error::InvalidManifest(_))
        ));
    }

    #[traced_test]
    #[test]
    fn read_empty_manifest() -> Result<()> {
        #[rustfmt::skip]
        let input = [
            0x53, 0x53, 0x56, 0x46,
            0x01, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ];

        let manifest = VfFile::decode(&input)?;
        assert!(manifest.is_empty());
        assert_eq!(manifest.manifest_version(), 1);

        Ok(())
    }

    #[test]
    fn read_count_larger_than_input() {
        #[rustfmt::skip]
        let input = [
            0x53, 0x53, 0x56, 0x46,
            0x01, 0x00, 0x00, 0x00,
            0x10, 0x00, 0x00, 0x00,
        ];

        assert!(matches!(
            VfFile::decode(&input),
            Err(Error::InvalidEntryCount {
                declared: 0x10,
                remaining: 0
            })
        ));
    }

    #[traced_test]
    #[test]
    fn read_manifest_with_entry() -> Result<()> {
        #[rustfmt::skip]
        let input = [
            // Header
            0x53, 0x53, 0x56, 0x46,
            0x01, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x00, 0x00,
            // Entry: name "horse.dds"
            0x09, 0x00, 0x00, 0x00,
            0x68, 0x6F, 0x72, 0x73, 0x65, 0x2E, 0x64, 0x64, 0x73,
            // Fixed block
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,     // unknown 1
            0xAA, 0xBB, 0xCC, 0xDD,                             // original crc
            0x11, 0x22, 0x33, 0x44,                             // exported crc
            0x31, 0x32, 0x33, 0x34,                             // unknown 2
            0x00, 0x04, 0x00, 0x00,                             // file size
            0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48,     // unknown 4
            0x03, 0x00, 0x00, 0x00,                             // source file number
            0x51, 0x52, 0x53, 0x54,                             // unknown 5
            // Path "art/horse.dds"
            0x0D, 0x00, 0x00, 0x00,
            0x61, 0x72, 0x74, 0x2F, 0x68, 0x6F, 0x72, 0x73, 0x65, 0x2E, 0x64, 0x64, 0x73,
        ];

        let manifest = VfFile::decode(&input)?;
        assert_eq!(manifest.entry_count(), 1);

        let entry = manifest.entry(0)?;
        assert_eq!(entry.file_name(), "horse.dds");
        assert_eq!(entry.file_path(), "art/horse.dds");
        assert_eq!(entry.file_size(), 1024);
        assert_eq!(entry.source_file_number(), 3);
        assert_eq!(entry.original_crc(), [0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(entry.exported_crc(), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(entry.unknown1(), [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        assert_eq!(entry.unknown2(), [0x31, 0x32, 0x33, 0x34]);
        assert_eq!(entry.unknown4(), [0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48]);
        assert_eq!(entry.unknown5(), [0x51, 0x52, 0x53, 0x54]);

        Ok(())
    }

    #[test]
    fn read_entry_name_past_end() {
        #[rustfmt::skip]
        let input = [
            // Header
            0x53, 0x53, 0x56, 0x46,
            0x01, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x00, 0x00,
            // Entry whose name length runs past the buffer
            0xFF, 0x00, 0x00, 0x00,
            0x68, 0x6F, 0x72, 0x73, 0x65,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ];

        assert!(matches!(
            VfFile::decode(&input),
            Err(Error::CodecError(
                sso_io::error::Error::UnexpectedEnd { .. }
            ))
        ));
    }
}
