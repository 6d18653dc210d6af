//! GSM 03.38 default alphabet and extension table

use crate::errors::{CodingError, Result};

/// Escape to the extension table
pub const ESCAPE: u8 = 0x1B;

/// Carriage return septet, used as segment padding filler
pub const CARRIAGE_RETURN: u8 = 0x0D;

/// GSM 7-bit default alphabet, indexed by septet value.
///
/// Slot 0x1B is the escape marker and never produced from text.
const GSM7_BASIC: [char; 128] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', '\x1b', 'Æ', 'æ', 'ß', 'É',
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
];

/// GSM 7-bit extension table (after ESC)
const GSM7_EXTENSION: [(u8, char); 10] = [
    (0x0A, '\x0C'), // Form feed
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x65, '€'),
];

/// Septet form of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Septets {
    /// One septet from the default alphabet
    Basic(u8),
    /// Escape followed by an extension code
    Extension(u8),
}

impl Septets {
    /// Look up a character in both tables
    pub fn of(ch: char) -> Option<Self> {
        if let Some(pos) = GSM7_BASIC
            .iter()
            .position(|&c| c == ch)
            .filter(|&pos| pos != ESCAPE as usize)
        {
            return Some(Self::Basic(pos as u8));
        }

        GSM7_EXTENSION
            .iter()
            .find(|&&(_, c)| c == ch)
            .map(|&(code, _)| Self::Extension(code))
    }

    /// Number of septets this character occupies
    pub fn count(&self) -> usize {
        match self {
            Self::Basic(_) => 1,
            Self::Extension(_) => 2,
        }
    }

    pub(crate) fn push_to(self, out: &mut Vec<u8>) {
        match self {
            Self::Basic(code) => out.push(code),
            Self::Extension(code) => {
                out.push(ESCAPE);
                out.push(code);
            }
        }
    }
}

/// Whether the character is representable in GSM 7-bit
pub fn is_gsm7_char(ch: char) -> bool {
    Septets::of(ch).is_some()
}

/// Septets the text occupies; unencodable characters count as one
pub fn septet_count(text: &str) -> usize {
    text.chars()
        .map(|ch| Septets::of(ch).map_or(1, |s| s.count()))
        .sum()
}

/// Map text to septet values, one byte per septet
pub fn to_septets(text: &str) -> Result<Vec<u8>> {
    let mut septets = Vec::with_capacity(text.len());

    for (position, ch) in text.chars().enumerate() {
        Septets::of(ch)
            .ok_or(CodingError::unencodable(ch, position))?
            .push_to(&mut septets);
    }

    Ok(septets)
}

/// Interpret septet values as text.
///
/// Error offsets are septet indexes.
pub fn from_septets(septets: &[u8]) -> Result<String> {
    let mut result = String::with_capacity(septets.len());
    let mut iter = septets.iter().copied().enumerate();

    while let Some((offset, septet)) = iter.next() {
        if septet > 0x7F {
            return Err(CodingError::malformed(offset, "septet value above 0x7F"));
        }

        if septet != ESCAPE {
            result.push(GSM7_BASIC[septet as usize]);
            continue;
        }

        let (_, code) = iter
            .next()
            .ok_or(CodingError::malformed(offset, "escape without following septet"))?;

        result.push(decode_extension(code).ok_or(CodingError::malformed(
            offset + 1,
            "septet value above 0x7F",
        ))?);
    }

    Ok(result)
}

/// Resolve the septet after an escape.
///
/// Codes missing from the extension table fall back to the default
/// alphabet; a second escape reads as a space.
fn decode_extension(code: u8) -> Option<char> {
    if code > 0x7F {
        return None;
    }
    if code == ESCAPE {
        return Some(' ');
    }

    let ch = GSM7_EXTENSION
        .iter()
        .find(|&&(c, _)| c == code)
        .map_or(GSM7_BASIC[code as usize], |&(_, ch)| ch);
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Septets::of('@'), Some(Septets::Basic(0x00)));
        assert_eq!(Septets::of('a'), Some(Septets::Basic(0x61)));
        assert_eq!(Septets::of('€'), Some(Septets::Extension(0x65)));
        assert_eq!(Septets::of('\x1b'), None);
        assert_eq!(Septets::of('ж'), None);
    }

    #[test]
    fn test_septet_count() {
        assert_eq!(septet_count(""), 0);
        assert_eq!(septet_count("abc"), 3);
        assert_eq!(septet_count("a{b}"), 6);
        assert_eq!(septet_count("aж"), 2);
    }

    #[test]
    fn test_to_septets_unencodable() {
        let err = to_septets("ab世").unwrap_err();
        assert_eq!(err, CodingError::unencodable('世', 2));
    }

    #[test]
    fn test_every_char_roundtrips() {
        let text: String = GSM7_BASIC
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != ESCAPE as usize)
            .map(|(_, &c)| c)
            .chain(GSM7_EXTENSION.iter().map(|&(_, c)| c))
            .collect();

        let septets = to_septets(&text).unwrap();
        assert_eq!(septets.len(), 127 + 2 * GSM7_EXTENSION.len());
        assert_eq!(from_septets(&septets).unwrap(), text);
    }

    #[test]
    fn test_orphan_escape() {
        let err = from_septets(&[0x61, ESCAPE]).unwrap_err();
        assert_eq!(
            err,
            CodingError::malformed(1, "escape without following septet")
        );
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(from_septets(&[ESCAPE, 0x61]).unwrap(), "a");
        assert_eq!(from_septets(&[ESCAPE, ESCAPE]).unwrap(), " ");
    }
}
