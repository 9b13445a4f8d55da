//! In-memory model of a Text string table.
//!

use sso_io::{utf16, EntryStore};

use crate::error::{Error, Result};

/// Add `shift` to every byte, wrapping. The stored form of keys and values
/// subtracts the entry's offset; reading adds it back.
pub(crate) fn shift_bytes(bytes: &mut [u8], shift: u8) {
    for byte in bytes.iter_mut() {
        *byte = byte.wrapping_add(shift);
    }
}

/// Fixed 16-byte header at the start of every Text file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextHeader {
    pub(crate) unknown: [u8; 4],
    pub(crate) unknown2: [u8; 4],
    pub(crate) unknown3: [u8; 4],
    pub(crate) entry_count: u32,
}

impl TextHeader {
    /// Encoded size of the header.
    pub const SIZE: usize = 16;

    /// Entry count as recorded in the header. Kept in sync with the live
    /// entry list by every structural mutation on [`TextFile`].
    pub fn entry_count(&self) -> u32 {
        self.entry_count
    }

    /// First unknown header block.
    pub fn unknown(&self) -> [u8; 4] {
        self.unknown
    }

    /// Replace the first unknown header block.
    pub fn set_unknown(&mut self, block: [u8; 4]) {
        self.unknown = block;
    }

    /// Second unknown header block.
    pub fn unknown2(&self) -> [u8; 4] {
        self.unknown2
    }

    /// Replace the second unknown header block.
    pub fn set_unknown2(&mut self, block: [u8; 4]) {
        self.unknown2 = block;
    }

    /// Third unknown header block.
    pub fn unknown3(&self) -> [u8; 4] {
        self.unknown3
    }

    /// Replace the third unknown header block.
    pub fn set_unknown3(&mut self, block: [u8; 4]) {
        self.unknown3 = block;
    }
}

/// One key/value record of a Text file.
///
/// The unknown regions and both shift offsets are carried through a
/// read-modify-write cycle untouched; new entries start with all of them
/// zeroed. Key and value lengths are always derived from the live strings,
/// never from stored counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEntry {
    pub(crate) unknown: [u8; 2],
    pub(crate) key_offset: u8,
    pub(crate) key: String,
    pub(crate) unknown2: [u8; 4],
    pub(crate) unknown3: [u8; 4],
    pub(crate) unknown4: u8,
    pub(crate) unknown5: u8,
    pub(crate) unknown6: u8,
    pub(crate) value_offset: u8,
    pub(crate) value: Vec<u8>,
}

impl TextEntry {
    /// Smallest possible encoded entry: empty key, empty value.
    pub(crate) const MIN_ENCODED_SIZE: usize = 21;

    /// Create an entry with empty strings and zeroed metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// UTF-8 key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the key.
    ///
    /// Fails when the key does not fit the wire format's one-byte length
    /// field, leaving the entry unchanged.
    pub fn set_key(&mut self, key: &str) -> Result<()> {
        if key.len() > u8::MAX as usize {
            return Err(Error::KeyTooLong { length: key.len() });
        }
        self.key = key.to_owned();
        Ok(())
    }

    /// Decode the stored value from UTF-16LE.
    ///
    /// An absent value and a present-but-empty value both come back as `""`.
    pub fn value(&self) -> Result<String> {
        Ok(utf16::decode_utf16le(&self.value)?)
    }

    /// Replace the value from a host string, re-encoding to UTF-16LE.
    ///
    /// The stored byte length always follows from the encoded form. Note
    /// that the on-disk obfuscation can only represent values whose first
    /// code unit is below U+0100.
    pub fn set_value(&mut self, value: &str) {
        self.value = utf16::encode_utf16le(value);
    }

    /// Raw UTF-16LE bytes of the value, after deobfuscation.
    pub fn value_raw(&self) -> &[u8] {
        &self.value
    }

    /// Byte length of the encoded value. This counts bytes, not characters.
    pub fn value_length(&self) -> u32 {
        self.value.len() as u32
    }

    /// Byte shift applied to the stored key.
    pub fn key_offset(&self) -> u8 {
        self.key_offset
    }

    /// Replace the key shift.
    pub fn set_key_offset(&mut self, offset: u8) {
        self.key_offset = offset;
    }

    /// Byte shift applied to the stored value, as derived when the entry
    /// was read.
    pub fn value_offset(&self) -> u8 {
        self.value_offset
    }

    /// Replace the value shift.
    pub fn set_value_offset(&mut self, offset: u8) {
        self.value_offset = offset;
    }

    /// Two-byte unknown region preceding the key offset.
    pub fn unknown(&self) -> [u8; 2] {
        self.unknown
    }

    /// Replace the two-byte unknown region.
    pub fn set_unknown(&mut self, block: [u8; 2]) {
        self.unknown = block;
    }

    /// First four-byte unknown region after the key.
    pub fn unknown2(&self) -> [u8; 4] {
        self.unknown2
    }

    /// Replace the first four-byte unknown region.
    pub fn set_unknown2(&mut self, block: [u8; 4]) {
        self.unknown2 = block;
    }

    /// Second four-byte unknown region after the key.
    pub fn unknown3(&self) -> [u8; 4] {
        self.unknown3
    }

    /// Replace the second four-byte unknown region.
    pub fn set_unknown3(&mut self, block: [u8; 4]) {
        self.unknown3 = block;
    }

    /// First unknown byte of the value metadata.
    pub fn unknown4(&self) -> u8 {
        self.unknown4
    }

    /// Replace the first unknown metadata byte.
    pub fn set_unknown4(&mut self, value: u8) {
        self.unknown4 = value;
    }

    /// Second unknown byte of the value metadata.
    pub fn unknown5(&self) -> u8 {
        self.unknown5
    }

    /// Replace the second unknown metadata byte.
    pub fn set_unknown5(&mut self, value: u8) {
        self.unknown5 = value;
    }

    /// Third unknown byte of the value metadata.
    pub fn unknown6(&self) -> u8 {
        self.unknown6
    }

    /// Replace the third unknown metadata byte.
    pub fn set_unknown6(&mut self, value: u8) {
        self.unknown6 = value;
    }
}

/// A decoded Text file: header plus ordered entries.
///
/// Entries are owned by the file; [`TextFile::entry`] hands out borrows
/// whose indices stay valid only until the next structural mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFile {
    pub(crate) header: TextHeader,
    pub(crate) entries: EntryStore<TextEntry>,
}

impl TextFile {
    /// Create an empty table with a zeroed header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the header.
    pub fn header(&self) -> &TextHeader {
        &self.header
    }

    /// Mutably borrow the header. The entry count field is not exposed for
    /// writing; it tracks the entry list.
    pub fn header_mut(&mut self) -> &mut TextHeader {
        &mut self.header
    }

    /// Number of entries in the table.
    pub fn entry_count(&self) -> u32 {
        self.entries.count()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the entry at `index`.
    pub fn entry(&self, index: u32) -> Result<&TextEntry> {
        Ok(self.entries.get(index)?)
    }

    /// Mutably borrow the entry at `index`.
    pub fn entry_mut(&mut self, index: u32) -> Result<&mut TextEntry> {
        Ok(self.entries.get_mut(index)?)
    }

    /// Borrow the whole entry list.
    pub fn entries(&self) -> &EntryStore<TextEntry> {
        &self.entries
    }

    /// Append an entry, keeping the header count in sync.
    pub fn add_entry(&mut self, entry: TextEntry) -> Result<()> {
        self.entries.push(entry)?;
        self.header.entry_count = self.entries.count();
        Ok(())
    }

    /// Remove and return the entry at `index`; later entries shift down.
    pub fn remove_entry(&mut self, index: u32) -> Result<TextEntry> {
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

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{TextEntry, TextFile};
    use crate::error::{Error, Result};

    #[test]
    fn set_value_recomputes_length() -> Result<()> {
        let mut entry = TextEntry::new();
        assert_eq!(entry.value_length(), 0);
        assert_eq!(entry.value()?, "");

        entry.set_value("Hello");
        assert_eq!(entry.value_length(), 10);
        assert_eq!(entry.value()?, "Hello");

        entry.set_value("");
        assert_eq!(entry.value_length(), 0);
        assert_eq!(entry.value()?, "");

        Ok(())
    }

    #[test]
    fn set_key_rejects_oversize_keys() {
        let mut entry = TextEntry::new();
        entry.set_key("fits").unwrap();

        let long = "x".repeat(300);
        assert!(matches!(
            entry.set_key(&long),
            Err(Error::KeyTooLong { length: 300 })
        ));

        // Rejection must leave the previous key in place.
        assert_eq!(entry.key(), "fits");
    }

    #[test]
    fn mutations_keep_header_count_in_sync() -> Result<()> {
        let mut file = TextFile::new();
        assert_eq!(file.header().entry_count(), 0);

        file.add_entry(TextEntry::new())?;
        file.add_entry(TextEntry::new())?;
        assert_eq!(file.header().entry_count(), 2);

        file.remove_entry(0)?;
        assert_eq!(file.header().entry_count(), 1);

        file.resize(5)?;
        assert_eq!(file.header().entry_count(), 5);
        assert_eq!(file.entry_count(), 5);

        Ok(())
    }

    #[test]
    fn removed_entries_shift_down() -> Result<()> {
        let mut file = TextFile::new();
        for key in ["a", "b", "c"] {
            let mut entry = TextEntry::new();
            entry.set_key(key)?;
            file.add_entry(entry)?;
        }

        file.remove_entry(1)?;
        assert_eq!(file.entry_count(), 2);
        assert_eq!(file.entry(0)?.key(), "a");
        assert_eq!(file.entry(1)?.key(), "c");

        assert!(matches!(
            file.entry(2),
            Err(Error::CodecError(sso_io::error::Error::OutOfRange {
                index: 2,
                count: 2
            }))
        ));

        Ok(())
    }

    #[test]
    fn cloned_entries_share_no_storage() -> Result<()> {
        let mut original = TextEntry::new();
        original.set_key("stable.name")?;
        original.set_value("Star");

        let mut copy = original.clone();
        copy.set_key("stable.other")?;
        copy.set_value("Moon");

        assert_eq!(original.key(), "stable.name");
        assert_eq!(original.value()?, "Star");

        Ok(())
    }
}
