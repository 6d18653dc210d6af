//! UTF-16 transcoding codecs, with and without a byte-order mark

use bytes::{BufMut, BytesMut};

use crate::coding::{DataCoding, EncDec};
use crate::errors::{CodingError, Result};

/// UTF-16 big-endian, no byte-order mark
pub static UTF16BE: Utf16 = Utf16::new(ByteOrder::BigEndian, false);

/// UTF-16 little-endian, no byte-order mark
pub static UTF16LE: Utf16 = Utf16::new(ByteOrder::LittleEndian, false);

/// UTF-16 big-endian, prefixed with `FE FF`
pub static UTF16BEM: Utf16 = Utf16::new(ByteOrder::BigEndian, true);

/// UTF-16 little-endian, prefixed with `FF FE`
pub static UTF16LEM: Utf16 = Utf16::new(ByteOrder::LittleEndian, true);

/// Byte order of 16-bit code units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Byte-order mark for this order
    pub fn bom(&self) -> [u8; 2] {
        match self {
            Self::BigEndian => [0xFE, 0xFF],
            Self::LittleEndian => [0xFF, 0xFE],
        }
    }

    fn put_unit(&self, buf: &mut BytesMut, unit: u16) {
        match self {
            Self::BigEndian => buf.put_u16(unit),
            Self::LittleEndian => buf.put_u16_le(unit),
        }
    }

    fn read_unit(&self, pair: &[u8]) -> u16 {
        match self {
            Self::BigEndian => u16::from_be_bytes([pair[0], pair[1]]),
            Self::LittleEndian => u16::from_le_bytes([pair[0], pair[1]]),
        }
    }
}

/// Append the code units of `text` to `buf`
pub(crate) fn encode_units(text: &str, order: ByteOrder, buf: &mut BytesMut) {
    for unit in text.encode_utf16() {
        order.put_unit(buf, unit);
    }
}

/// Decode 16-bit code units; `base_offset` shifts reported error offsets
pub(crate) fn decode_units(data: &[u8], order: ByteOrder, base_offset: usize) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(CodingError::malformed(
            base_offset + data.len() - 1,
            "odd byte length for 16-bit code units",
        ));
    }

    let units = data.chunks_exact(2).map(|pair| order.read_unit(pair));
    let mut result = String::with_capacity(data.len() / 2);
    let mut unit_index = 0;

    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(ch) => {
                result.push(ch);
                unit_index += ch.len_utf16();
            }
            Err(_) => {
                return Err(CodingError::malformed(
                    base_offset + unit_index * 2,
                    "unpaired surrogate",
                ));
            }
        }
    }

    Ok(result)
}

/// Direct UTF-16 transcoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16 {
    order: ByteOrder,
    with_bom: bool,
}

impl Utf16 {
    pub const fn new(order: ByteOrder, with_bom: bool) -> Self {
        Self { order, with_bom }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }
}

impl EncDec for Utf16 {
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(text.len() * 2 + 2);
        if self.with_bom {
            buf.put_slice(&self.order.bom());
        }
        encode_units(text, self.order, &mut buf);
        Ok(buf.to_vec())
    }

    fn decode(&self, data: &[u8]) -> Result<String> {
        match data.strip_prefix(&self.order.bom()) {
            Some(rest) => decode_units(rest, self.order, 2),
            None => decode_units(data, self.order, 0),
        }
    }

    /// UTF-16 payloads travel as UCS2
    fn data_coding(&self) -> DataCoding {
        DataCoding::UCS2
    }
}
