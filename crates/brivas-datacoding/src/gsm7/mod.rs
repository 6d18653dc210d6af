//! GSM 7-bit default alphabet codecs
//!
//! Two wire forms share the alphabet and the `data_coding` value 0:
//!
//! - **unpacked**: one octet per septet, high bit clear
//! - **packed**: 8 septets in 7 octets (GSM 03.38 / 3GPP TS 23.038)
//!
//! Packed messages and segments start at bit 0. When seven spare bits
//! remain in the last octet they carry a `<CR>` filler so the receiver
//! does not read an `@` there. A text that itself ends in `<CR>` on an
//! octet boundary sends it escaped. Decoding drops one `<CR>` found in
//! the final septet of a multiple of 7 octets, so the filler stays on the
//! wire but not in the decoded text.

mod alphabet;
mod packing;

pub use alphabet::{
    from_septets, is_gsm7_char, septet_count, to_septets, Septets, CARRIAGE_RETURN, ESCAPE,
};
pub use packing::{pack_septets, packed_len, unpack_septets};

use tracing::trace;

use crate::coding::{DataCoding, EncDec, Splitter};
use crate::errors::{CodingError, Result};

/// Character appended to packed segments as padding
pub const PADDING_FILLER: char = '\r';

/// Unpacked GSM 7-bit codec
pub static GSM7BIT: Gsm7Bit = Gsm7Bit::unpacked();

/// Packed GSM 7-bit codec
pub static GSM7BITPACKED: Gsm7Bit = Gsm7Bit::packed();

/// GSM 7-bit codec in one of its two wire forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gsm7Bit {
    packed: bool,
}

impl Gsm7Bit {
    pub const fn unpacked() -> Self {
        Self { packed: false }
    }

    pub const fn packed() -> Self {
        Self { packed: true }
    }

    pub fn is_packed(&self) -> bool {
        self.packed
    }

    /// Octets the given number of septets occupies on the wire
    fn octets_for(&self, septets: usize) -> usize {
        if self.packed {
            packed_len(septets, 0)
        } else {
            septets
        }
    }

    /// Most septets that fit in `octet_limit` octets
    fn septet_capacity(&self, octet_limit: usize) -> usize {
        if self.packed {
            octet_limit * 8 / 7
        } else {
            octet_limit
        }
    }

    /// Septets `text` occupies on the wire, filler included
    fn wire_septets(&self, text: &str) -> usize {
        let count = septet_count(text);
        if self.packed && count > 0 && count % 8 == 0 && text.ends_with(PADDING_FILLER) {
            count + 1
        } else {
            count
        }
    }

    /// Close the septets accumulated in `current` into one segment.
    ///
    /// A packed segment whose trailing `<CR>` cannot be escaped within
    /// `octet_limit` hands that `<CR>` back in `current` for the next
    /// segment.
    fn close_segment(&self, current: &mut Vec<u8>, octet_limit: usize, index: usize) -> Vec<u8> {
        let mut septets = std::mem::take(current);
        if !self.packed {
            trace!(segment = index, septets = septets.len(), "Closed GSM7 segment");
            return septets;
        }

        if ends_with_boundary_cr(&septets) && packed_len(septets.len() + 1, 0) > octet_limit {
            septets.pop();
            current.push(CARRIAGE_RETURN);
        }
        let padded = pad_septets(&mut septets);
        trace!(
            segment = index,
            septets = septets.len(),
            padded,
            "Closed packed GSM7 segment"
        );

        pack_septets(&septets, 0)
    }
}

/// A real `<CR>` in the last septet of a whole octet run
fn ends_with_boundary_cr(septets: &[u8]) -> bool {
    !septets.is_empty() && septets.len() % 8 == 0 && septets.last() == Some(&CARRIAGE_RETURN)
}

/// Fill the spare bits at the end of a packed septet run.
///
/// Seven spare bits take a `<CR>` filler. A real `<CR>` ending on an
/// octet boundary is sent as escape + `<CR>`, which decodes back to
/// `<CR>` and is never taken for a filler.
fn pad_septets(septets: &mut Vec<u8>) -> bool {
    if septets.len() % 8 == 7 {
        septets.push(CARRIAGE_RETURN);
        true
    } else if ends_with_boundary_cr(septets) {
        septets.insert(septets.len() - 1, ESCAPE);
        true
    } else {
        false
    }
}

impl EncDec for Gsm7Bit {
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut septets = to_septets(text)?;
        if self.packed {
            pad_septets(&mut septets);
            Ok(pack_septets(&septets, 0))
        } else {
            Ok(septets)
        }
    }

    fn decode(&self, data: &[u8]) -> Result<String> {
        if !self.packed {
            return from_septets(data);
        }

        let mut septets = unpack_septets(data, 0);
        if data.len() % 7 == 0 && septets.last() == Some(&CARRIAGE_RETURN) {
            septets.pop();
        }

        // Septet index to the octet holding its first bit
        from_septets(&septets).map_err(|e| match e {
            CodingError::MalformedInput { offset, reason } => {
                CodingError::malformed(offset * 7 / 8, reason)
            }
            other => other,
        })
    }

    fn data_coding(&self) -> DataCoding {
        DataCoding::GSM7BIT
    }

    fn as_splitter(&self) -> Option<&dyn Splitter> {
        Some(self)
    }
}

impl Splitter for Gsm7Bit {
    fn should_split(&self, text: &str, octet_limit: usize) -> bool {
        self.octets_for(self.wire_septets(text)) > octet_limit
    }

    fn encode_split(&self, text: &str, octet_limit: usize) -> Result<Vec<Vec<u8>>> {
        let capacity = self.septet_capacity(octet_limit);
        let mut segments = Vec::new();
        let mut current = Vec::with_capacity(capacity.min(text.len() * 2));

        for (position, ch) in text.chars().enumerate() {
            let septets = Septets::of(ch).ok_or(CodingError::unencodable(ch, position))?;

            if current.len() + septets.count() > capacity {
                if current.is_empty() {
                    return Err(CodingError::SegmentLimitTooSmall {
                        limit: octet_limit,
                        required: self.octets_for(septets.count()),
                    });
                }
                let closed = self.close_segment(&mut current, octet_limit, segments.len());
                segments.push(closed);
            }

            septets.push_to(&mut current);
        }

        while !current.is_empty() || segments.is_empty() {
            let closed = self.close_segment(&mut current, octet_limit, segments.len());
            segments.push(closed);
        }

        Ok(segments)
    }
}
