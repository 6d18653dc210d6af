//! 7-into-8 bit packing
//!
//! Septets are laid LSB-first into a continuous bit stream which is then
//! cut into octets, so 8 septets fill 7 octets. `fill_bits` shifts the
//! first septet by that many bits, for payloads that follow a header not
//! ending on a septet boundary.

/// Octets needed for `septets` septets after `fill_bits` leading bits
pub fn packed_len(septets: usize, fill_bits: u8) -> usize {
    (fill_bits as usize + septets * 7 + 7) / 8
}

/// Pack septet values (0-127) into octets.
///
/// `fill_bits` must be below 7. Spare bits in the last octet are zero.
pub fn pack_septets(septets: &[u8], fill_bits: u8) -> Vec<u8> {
    debug_assert!(fill_bits < 7, "fill bits out of range: {}", fill_bits);

    let mut octets = vec![0u8; packed_len(septets.len(), fill_bits)];

    for (i, &septet) in septets.iter().enumerate() {
        let septet = septet & 0x7F;
        let bit = fill_bits as usize + i * 7;
        let (index, shift) = (bit / 8, bit % 8);

        octets[index] |= septet << shift;
        if shift > 1 {
            octets[index + 1] |= septet >> (8 - shift);
        }
    }

    octets
}

/// Unpack octets into every whole septet they hold, skipping the first
/// `fill_bits` bits.
pub fn unpack_septets(octets: &[u8], fill_bits: u8) -> Vec<u8> {
    debug_assert!(fill_bits < 7, "fill bits out of range: {}", fill_bits);

    let count = (octets.len() * 8).saturating_sub(fill_bits as usize) / 7;
    let mut septets = Vec::with_capacity(count);

    for i in 0..count {
        let bit = fill_bits as usize + i * 7;
        let (index, shift) = (bit / 8, bit % 8);

        let mut septet = octets[index] >> shift;
        if shift > 1 {
            septet |= octets[index + 1] << (8 - shift);
        }
        septets.push(septet & 0x7F);
    }

    septets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_hello() {
        // "Hello" in the default alphabet
        let septets = [0x48, 0x65, 0x6C, 0x6C, 0x6F];
        assert_eq!(pack_septets(&septets, 0), vec![0xC8, 0x32, 0x9B, 0xFD, 0x06]);
    }

    #[test]
    fn test_eight_septets_fill_seven_octets() {
        let septets = [0x7F; 8];
        let packed = pack_septets(&septets, 0);
        assert_eq!(packed, vec![0xFF; 7]);
        assert_eq!(unpack_septets(&packed, 0), septets.to_vec());
    }

    #[test]
    fn test_fill_bits_shift_stream() {
        let septets = [0x48, 0x65, 0x6C, 0x6C, 0x6F];
        let packed = pack_septets(&septets, 1);
        assert_eq!(packed, vec![0x90, 0x65, 0x36, 0xFB, 0x0D]);
        assert_eq!(unpack_septets(&packed, 1), septets.to_vec());
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(0, 0), 0);
        assert_eq!(packed_len(1, 0), 1);
        assert_eq!(packed_len(8, 0), 7);
        assert_eq!(packed_len(153, 0), 134);
        assert_eq!(packed_len(153, 1), 134);
        assert_eq!(packed_len(160, 0), 140);
    }

    #[test]
    fn test_unpack_ignores_trailing_bits() {
        assert!(unpack_septets(&[], 0).is_empty());
        assert_eq!(unpack_septets(&[0x61], 0), vec![0x61]);
        assert_eq!(unpack_septets(&[0x61], 2).len(), 0);
    }
}
