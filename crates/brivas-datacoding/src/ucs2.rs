//! UCS2 codec (UTF-16BE with surrogate pairs)

use bytes::BytesMut;
use tracing::trace;

use crate::coding::{DataCoding, EncDec, Splitter};
use crate::errors::{CodingError, Result};
use crate::utf16::{decode_units, encode_units, ByteOrder};

/// UCS2 codec
pub static UCS2: Ucs2 = Ucs2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ucs2;

impl EncDec for Ucs2 {
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(text.len() * 2);
        encode_units(text, ByteOrder::BigEndian, &mut buf);
        Ok(buf.to_vec())
    }

    fn decode(&self, data: &[u8]) -> Result<String> {
        decode_units(data, ByteOrder::BigEndian, 0)
    }

    fn data_coding(&self) -> DataCoding {
        DataCoding::UCS2
    }

    fn as_splitter(&self) -> Option<&dyn Splitter> {
        Some(self)
    }
}

impl Splitter for Ucs2 {
    fn should_split(&self, text: &str, octet_limit: usize) -> bool {
        text.encode_utf16().count() * 2 > octet_limit
    }

    fn encode_split(&self, text: &str, octet_limit: usize) -> Result<Vec<Vec<u8>>> {
        let mut segments = Vec::new();
        let mut current = BytesMut::with_capacity(octet_limit.min(text.len() * 4));
        let mut utf8 = [0u8; 4];

        for ch in text.chars() {
            // A surrogate pair is one 4-octet unit
            let width = ch.len_utf16() * 2;

            if current.len() + width > octet_limit {
                if current.is_empty() {
                    return Err(CodingError::SegmentLimitTooSmall {
                        limit: octet_limit,
                        required: width,
                    });
                }
                trace!(segment = segments.len(), octets = current.len(), "Closed UCS2 segment");
                segments.push(current.split().to_vec());
            }

            encode_units(ch.encode_utf8(&mut utf8), ByteOrder::BigEndian, &mut current);
        }

        if !current.is_empty() || segments.is_empty() {
            trace!(segment = segments.len(), octets = current.len(), "Closed UCS2 segment");
            segments.push(current.to_vec());
        }

        Ok(segments)
    }
}
