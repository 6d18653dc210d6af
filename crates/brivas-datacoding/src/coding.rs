//! Codec capability interfaces and the data coding identifier

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;

/// SMPP `data_coding` value carried alongside a message body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DataCoding(pub u8);

impl DataCoding {
    /// GSM 7-bit default alphabet (packed and unpacked share this value)
    pub const GSM7BIT: Self = Self(0x00);
    /// IA5 / ASCII
    pub const ASCII: Self = Self(0x01);
    /// Latin-1
    pub const LATIN1: Self = Self(0x03);
    /// Cyrillic (ISO-8859-5)
    pub const CYRILLIC: Self = Self(0x06);
    /// Latin/Hebrew (ISO-8859-8)
    pub const HEBREW: Self = Self(0x07);
    /// UCS2
    pub const UCS2: Self = Self(0x08);

    /// Get raw value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for DataCoding {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl From<DataCoding> for u8 {
    fn from(v: DataCoding) -> Self {
        v.0
    }
}

impl fmt::Display for DataCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// Text codec for a message body.
///
/// Implementations are stateless and shared process-wide, so every method
/// takes `&self` and the trait requires `Send + Sync`.
pub trait EncDec: Send + Sync {
    /// Encode text into the coding's byte form
    fn encode(&self, text: &str) -> Result<Vec<u8>>;

    /// Decode bytes of this coding back into text
    fn decode(&self, data: &[u8]) -> Result<String>;

    /// Identifier this codec reports on the wire
    fn data_coding(&self) -> DataCoding;

    /// Segmentation capability, if the codec has one.
    ///
    /// Callers must check this before splitting; fixed-width codecs
    /// return `None`.
    fn as_splitter(&self) -> Option<&dyn Splitter> {
        None
    }
}

/// Segmentation capability for variable-size codings
pub trait Splitter: EncDec {
    /// True when the full encoding of `text` exceeds `octet_limit`
    fn should_split(&self, text: &str, octet_limit: usize) -> bool;

    /// Encode `text` into ordered segments, each within `octet_limit`.
    ///
    /// Atomic units (GSM escape pairs, UTF-16 surrogate pairs) are never
    /// divided between two segments.
    fn encode_split(&self, text: &str, octet_limit: usize) -> Result<Vec<Vec<u8>>>;
}
