//! Conversion between host strings and the on-disk UTF-16LE value encoding.
//!

use byteorder::{ByteOrder, LittleEndian};
use widestring::U16String;

use crate::error::{Error, Result};

/// Encode a host string as UTF-16LE bytes.
///
/// The empty string encodes to an empty buffer.
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    let wide = U16String::from_str(text);
    let mut bytes = vec![0u8; wide.len() * 2];
    LittleEndian::write_u16_into(wide.as_slice(), &mut bytes);
    bytes
}

/// Decode a UTF-16LE byte sequence into a host string.
///
/// Zero bytes decode to `""`. Fails on an odd byte count or an unpaired
/// surrogate.
pub fn decode_utf16le(bytes: &[u8]) -> Result<String> {
    let units = units_of(bytes)?;
    Ok(String::from_utf16(&units)?)
}

/// Decode a UTF-16LE byte sequence, replacing unpaired surrogates with
/// U+FFFD. A trailing odd byte is dropped.
pub fn decode_utf16le_lossy(bytes: &[u8]) -> String {
    let even = bytes.len() & !1;
    let mut units = vec![0u16; even / 2];
    LittleEndian::read_u16_into(&bytes[..even], &mut units);
    String::from_utf16_lossy(&units)
}

fn units_of(bytes: &[u8]) -> Result<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        return Err(Error::OddLength {
            length: bytes.len(),
        });
    }

    let mut units = vec![0u16; bytes.len() / 2];
    LittleEndian::read_u16_into(bytes, &mut units);
    Ok(units)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{decode_utf16le, decode_utf16le_lossy, encode_utf16le};
    use crate::error::{Error, Result};

    #[test]
    fn encode_ascii() {
        assert_eq!(encode_utf16le("Hi"), vec![0x48, 0x00, 0x69, 0x00]);
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode_utf16le(""), Vec::<u8>::new());
    }

    #[test]
    fn decode_empty_is_empty_string() -> Result<()> {
        assert_eq!(decode_utf16le(&[])?, "");
        Ok(())
    }

    #[test]
    fn round_trip_non_ascii() -> Result<()> {
        // Mixes a two-byte code unit and a surrogate pair.
        let text = "häst 🐎";
        assert_eq!(decode_utf16le(&encode_utf16le(text))?, text);
        Ok(())
    }

    #[test]
    fn odd_length_is_rejected() {
        assert!(matches!(
            decode_utf16le(&[0x48, 0x00, 0x69]),
            Err(Error::OddLength { length: 3 })
        ));
    }

    #[test]
    fn unpaired_surrogate_is_rejected() {
        // Lone high surrogate D800.
        assert!(matches!(
            decode_utf16le(&[0x00, 0xD8]),
            Err(Error::UTF16Error(_))
        ));
    }

    #[test]
    fn lossy_replaces_instead_of_failing() {
        assert_eq!(decode_utf16le_lossy(&[0x00, 0xD8]), "\u{FFFD}");
        assert_eq!(
            decode_utf16le_lossy(&[0x48, 0x00, 0x69, 0x00]),
            "Hi".to_string()
        );
    }
}
