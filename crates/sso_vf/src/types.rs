//! Base types for the structure of a VF manifest.

use binrw::{BinRead, BinWrite};
use sso_io::EntryStore;

use crate::error::Result;

/// VF manifest header
///
/// Every manifest starts with the magic "SSVF". All data is stored in
/// little endian format.
#[derive(BinRead, BinWrite, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[brw(magic = b"SSVF", little)]
pub struct VfHeader {
    /// The version of the manifest, passed through without interpretation
    pub manifest_version: u32,

    /// The number of entries stored in the file
    pub entry_count: u32,
}

impl VfHeader {
    /// Encoded size of the header, magic included.
    pub const SIZE: usize = 12;
}

/// Fixed-layout metadata block stored between an entry's name and path.
///
/// The CRC digests stay raw bytes end to end; the unknown regions have no
/// established meaning and are carried through untouched.
#[derive(BinRead, BinWrite, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[brw(little)]
pub(crate) struct VfRecord {
    pub unknown1: [u8; 8],
    pub original_crc: [u8; 4],
    pub exported_crc: [u8; 4],
    pub unknown2: [u8; 4],
    pub file_size: u32,
    pub unknown4: [u8; 8],
    pub source_file_number: u32,
    pub unknown5: [u8; 4],
}

impl VfRecord {
    /// Encoded size of the block.
    pub(crate) const SIZE: usize = 40;
}

fn fixed_block<const N: usize>(field: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| {
        sso_io::error::Error::BlockSize {
            field,
            expected: N,
            actual: bytes.len(),
        }
        .into()
    })
}

/// One asset record of a VF manifest.
///
/// Cloning produces a fully independent copy; nothing is shared with the
/// source entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VfEntry {
    pub(crate) file_name: String,
    pub(crate) record: VfRecord,
    pub(crate) file_path: String,
}

impl VfEntry {
    /// Smallest possible encoded entry: two empty strings around the block.
    pub(crate) const MIN_ENCODED_SIZE: usize = VfRecord::SIZE + 8;

    /// Create an entry with empty strings and zeroed metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the packaged asset.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Replace the asset name.
    pub fn set_file_name(&mut self, name: &str) {
        self.file_name = name.to_owned();
    }

    /// Path of the packaged asset.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Replace the asset path.
    pub fn set_file_path(&mut self, path: &str) {
        self.file_path = path.to_owned();
    }

    /// Size of the asset in bytes.
    pub fn file_size(&self) -> u32 {
        self.record.file_size
    }

    /// Replace the asset size.
    pub fn set_file_size(&mut self, size: u32) {
        self.record.file_size = size;
    }

    /// Index of the volume holding the asset's data.
    pub fn source_file_number(&self) -> u32 {
        self.record.source_file_number
    }

    /// Replace the source volume index.
    pub fn set_source_file_number(&mut self, number: u32) {
        self.record.source_file_number = number;
    }

    /// CRC digest of the original asset, as raw bytes.
    pub fn original_crc(&self) -> [u8; 4] {
        self.record.original_crc
    }

    /// Replace the original CRC block. `bytes` must be exactly 4 bytes;
    /// anything else is rejected and the field is left unchanged.
    pub fn set_original_crc(&mut self, bytes: &[u8]) -> Result<()> {
        self.record.original_crc = fixed_block("original_crc", bytes)?;
        Ok(())
    }

    /// CRC digest of the exported asset, as raw bytes.
    pub fn exported_crc(&self) -> [u8; 4] {
        self.record.exported_crc
    }

    /// Replace the exported CRC block. `bytes` must be exactly 4 bytes.
    pub fn set_exported_crc(&mut self, bytes: &[u8]) -> Result<()> {
        self.record.exported_crc = fixed_block("exported_crc", bytes)?;
        Ok(())
    }

    /// First unknown region.
    pub fn unknown1(&self) -> [u8; 8] {
        self.record.unknown1
    }

    /// Replace the first unknown region. `bytes` must be exactly 8 bytes.
    pub fn set_unknown1(&mut self, bytes: &[u8]) -> Result<()> {
        self.record.unknown1 = fixed_block("unknown1", bytes)?;
        Ok(())
    }

    /// Second unknown region.
    pub fn unknown2(&self) -> [u8; 4] {
        self.record.unknown2
    }

    /// Replace the second unknown region. `bytes` must be exactly 4 bytes.
    pub fn set_unknown2(&mut self, bytes: &[u8]) -> Result<()> {
        self.record.unknown2 = fixed_block("unknown2", bytes)?;
        Ok(())
    }

    /// Third unknown region.
    pub fn unknown4(&self) -> [u8; 8] {
        self.record.unknown4
    }

    /// Replace the third unknown region. `bytes` must be exactly 8 bytes.
    pub fn set_unknown4(&mut self, bytes: &[u8]) -> Result<()> {
        self.record.unknown4 = fixed_block("unknown4", bytes)?;
        Ok(())
    }

    /// Fourth unknown region.
    pub fn unknown5(&self) -> [u8; 4] {
        self.record.unknown5
    }

    /// Replace the fourth unknown region. `bytes` must be exactly 4 bytes.
    pub fn set_unknown5(&mut self, bytes: &[u8]) -> Result<()> {
        self.record.unknown5 = fixed_block("unknown5", bytes)?;
        Ok(())
    }
}

/// A decoded VF manifest: header plus ordered entries.
///
/// Entries are owned by the manifest; indices handed out by
/// [`VfFile::entry`] stay valid only until the next structural mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VfFile {
    pub(crate) header: VfHeader,
    pub(crate) entries: EntryStore<VfEntry>,
}

impl VfFile {
    /// Create an empty manifest with the given version.
    pub fn new(manifest_version: u32) -> Self {
        Self {
            header: VfHeader {
                manifest_version,
                entry_count: 0,
            },
            entries: EntryStore::new(),
        }
    }

    /// Borrow the header.
    pub fn header(&self) -> &VfHeader {
        &self.header
    }

    /// Version recorded in the header.
    pub fn manifest_version(&self) -> u32 {
        self.header.manifest_version
    }

    /// Replace the manifest version.
    pub fn set_manifest_version(&mut self, version: u32) {
        self.header.manifest_version = version;
    }

    /// Number of entries in the manifest.
    pub fn entry_count(&self) -> u32 {
        self.entries.count()
    }

    /// Whether the manifest lists no assets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the entry at `index`.
    pub fn entry(&self, index: u32) -> Result<&VfEntry> {
        Ok(self.entries.get(index)?)
    }

    /// Mutably borrow the entry at `index`.
    pub fn entry_mut(&mut self, index: u32) -> Result<&mut VfEntry> {
        Ok(self.entries.get_mut(index)?)
    }

    /// Borrow the whole entry list.
    pub fn entries(&self) -> &EntryStore<VfEntry> {
        &self.entries
    }

    /// Append an entry, keeping the header count in sync.
    pub fn add_entry(&mut self, entry: VfEntry) -> Result<()> {
        self.entries.push(entry)?;
        self.header.entry_count = self.entries.count();
        Ok(())
    }

    /// Remove and return the entry at `index`; later entries shift down.
    pub fn remove_entry(&mut self, index: u32) -> Result<VfEntry> {
        let removed = self.entries.remove(index)?;
        self.header.entry_count = self.entries.count();
        Ok(removed)
    }

    /// Grow with empty entries or truncate, discarding the excess.
    pub fn resize(&mut self, new_count: u32) -> Result<()> {
        self.entries.resize(new_count)?;
        self.header.entry_count = self.entries.count();
        Ok(())
    }
}
