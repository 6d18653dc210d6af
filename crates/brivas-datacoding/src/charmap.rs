//! Fixed single-byte codecs
//!
//! One octet per character. ASCII and Latin-1 map code points straight
//! to octets; Cyrillic and Hebrew use the static single-byte tables
//! shipped with `encoding_rs`.

use encoding_rs::{EncoderResult, Encoding, ISO_8859_5_INIT, ISO_8859_8_INIT};

use crate::coding::{DataCoding, EncDec};
use crate::errors::{CodingError, Result};

/// IA5 / 7-bit ASCII
pub static ASCII: SingleByte = SingleByte::new(DataCoding::ASCII, Repertoire::Ascii);

/// Latin-1 (ISO-8859-1)
pub static LATIN1: SingleByte = SingleByte::new(DataCoding::LATIN1, Repertoire::Latin1);

/// Cyrillic (ISO-8859-5)
pub static CYRILLIC: SingleByte =
    SingleByte::new(DataCoding::CYRILLIC, Repertoire::Table(&ISO_8859_5_INIT));

/// Latin/Hebrew (ISO-8859-8)
pub static HEBREW: SingleByte =
    SingleByte::new(DataCoding::HEBREW, Repertoire::Table(&ISO_8859_8_INIT));

/// Character repertoire of a single-byte codec
#[derive(Debug, Clone, Copy)]
pub enum Repertoire {
    /// Code points 0x00-0x7F map to themselves
    Ascii,
    /// Code points 0x00-0xFF map to themselves
    Latin1,
    /// Single-byte table from `encoding_rs`
    Table(&'static Encoding),
}

/// Table-driven single-byte codec
#[derive(Debug, Clone, Copy)]
pub struct SingleByte {
    coding: DataCoding,
    repertoire: Repertoire,
}

impl SingleByte {
    pub const fn new(coding: DataCoding, repertoire: Repertoire) -> Self {
        Self { coding, repertoire }
    }

    pub fn repertoire(&self) -> Repertoire {
        self.repertoire
    }
}

impl EncDec for SingleByte {
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self.repertoire {
            Repertoire::Ascii => encode_identity(text, 0x7F),
            Repertoire::Latin1 => encode_identity(text, 0xFF),
            Repertoire::Table(encoding) => encode_table(encoding, text),
        }
    }

    fn decode(&self, data: &[u8]) -> Result<String> {
        match self.repertoire {
            Repertoire::Ascii => decode_ascii(data),
            Repertoire::Latin1 => Ok(data.iter().map(|&b| char::from(b)).collect()),
            Repertoire::Table(encoding) => decode_table(encoding, data),
        }
    }

    fn data_coding(&self) -> DataCoding {
        self.coding
    }
}

fn encode_identity(text: &str, max: u8) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| match u8::try_from(ch) {
            Ok(byte) if byte <= max => Ok(byte),
            _ => Err(CodingError::unencodable(ch, position)),
        })
        .collect()
}

fn decode_ascii(data: &[u8]) -> Result<String> {
    if let Some(offset) = data.iter().position(|b| !b.is_ascii()) {
        return Err(CodingError::malformed(offset, "byte outside 7-bit range"));
    }
    Ok(data.iter().map(|&b| b as char).collect())
}

fn encode_table(encoding: &'static Encoding, text: &str) -> Result<Vec<u8>> {
    let mut encoder = encoding.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut consumed = 0;

    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(&text[consumed..], &mut out, true);
        consumed += read;

        match result {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::OutputFull => out.reserve(text.len() - consumed + 1),
            EncoderResult::Unmappable(ch) => {
                // The unmappable character counts as read
                let position = text[..consumed].chars().count().saturating_sub(1);
                return Err(CodingError::unencodable(ch, position));
            }
        }
    }
}

fn decode_table(encoding: &'static Encoding, data: &[u8]) -> Result<String> {
    match encoding.decode_without_bom_handling_and_without_replacement(data) {
        Some(text) => Ok(text.into_owned()),
        None => {
            let offset = data
                .iter()
                .position(|b| {
                    encoding
                        .decode_without_bom_handling_and_without_replacement(std::slice::from_ref(b))
                        .is_none()
                })
                .unwrap_or(0);
            Err(CodingError::malformed(offset, "byte unmapped in character table"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        assert_eq!(ASCII.data_coding(), DataCoding::ASCII);
        let encoded = ASCII.encode("agjwklgjkwP").unwrap();
        assert_eq!(hex::encode(&encoded), "61676a776b6c676a6b7750");
        assert_eq!(ASCII.decode(&encoded).unwrap(), "agjwklgjkwP");
    }

    #[test]
    fn test_ascii_rejects_non_ascii() {
        assert_eq!(ASCII.encode("aé").unwrap_err(), CodingError::unencodable('é', 1));
        assert!(matches!(
            ASCII.decode(&[0x61, 0xE9]).unwrap_err(),
            CodingError::MalformedInput { offset: 1, .. }
        ));
    }

    #[test]
    fn test_latin1() {
        let encoded = LATIN1.encode("agjwklgjkwPÓ").unwrap();
        assert_eq!(hex::encode(&encoded), "61676a776b6c676a6b7750d3");
        assert_eq!(LATIN1.decode(&encoded).unwrap(), "agjwklgjkwPÓ");
    }

    #[test]
    fn test_latin1_c1_range_is_identity() {
        let bytes: Vec<u8> = (0x80..=0x9F).collect();
        let decoded = LATIN1.decode(&bytes).unwrap();
        assert_eq!(decoded.chars().next(), Some('\u{80}'));
        assert!(decoded.chars().all(|ch| ch.is_control()));
        assert_eq!(LATIN1.encode(&decoded).unwrap(), bytes);

        let all: Vec<u8> = (0x00..=0xFF).collect();
        assert_eq!(LATIN1.encode(&LATIN1.decode(&all).unwrap()).unwrap(), all);
    }

    #[test]
    fn test_latin1_rejects_above_ff() {
        assert_eq!(LATIN1.encode("a€").unwrap_err(), CodingError::unencodable('€', 1));
        assert_eq!(LATIN1.encode("ÿĀ").unwrap_err(), CodingError::unencodable('Ā', 1));
    }

    #[test]
    fn test_cyrillic() {
        let encoded = CYRILLIC.encode("agjwklgjkwPф").unwrap();
        assert_eq!(hex::encode(&encoded), "61676a776b6c676a6b7750e4");
        assert_eq!(CYRILLIC.decode(&encoded).unwrap(), "agjwklgjkwPф");
    }

    #[test]
    fn test_hebrew() {
        let encoded = HEBREW.encode("agjwklgjkwPץ").unwrap();
        assert_eq!(hex::encode(&encoded), "61676a776b6c676a6b7750f5");
        assert_eq!(HEBREW.decode(&encoded).unwrap(), "agjwklgjkwPץ");
    }

    #[test]
    fn test_unencodable_position() {
        let err = CYRILLIC.encode("abж世c").unwrap_err();
        assert_eq!(err, CodingError::unencodable('世', 3));
    }

    #[test]
    fn test_hebrew_unmapped_byte() {
        // 0xBF has no assignment in ISO-8859-8
        let err = HEBREW.decode(&[0x61, 0xBF]).unwrap_err();
        assert!(matches!(err, CodingError::MalformedInput { offset: 1, .. }));
    }
}
