use std::fmt;

use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Serialize,
};
use sso_io::utf16;

use crate::types::{TextEntry, TextFile};

/// Serializes as a key→value map. Values are decoded lossily, the same way
/// the table is usually exported for translators.
impl Serialize for TextFile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entry_count() as usize))?;
        for entry in self.entries().iter() {
            map.serialize_entry(entry.key(), &utf16::decode_utf16le_lossy(entry.value_raw()))?;
        }
        map.end()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = TextFile;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string/string map")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut file = TextFile::new();

        while let Some((key, value)) = access.next_entry::<String, String>()? {
            let mut entry = TextEntry::new();
            entry.set_key(&key).map_err(de::Error::custom)?;
            entry.set_value(&value);
            file.add_entry(entry).map_err(de::Error::custom)?;
        }

        Ok(file)
    }
}

impl<'de> Deserialize<'de> for TextFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(TableVisitor)
    }
}
