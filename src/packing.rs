//! Wire Transcoding
//!
//! Conversions between the MIDI-safe wire representations used by the
//! Prophet-600 dialects and raw 8-bit bytes:
//! - 7-bit groups: five transmitted bytes carry four raw bytes, the fifth
//!   byte holding the high bit of each of the preceding four (GliGli and
//!   Imogen dumps)
//! - nibble pairs: each raw byte is sent as two bytes of one nibble each,
//!   low nibble first (original Sequential firmware dumps)
//!
//! All functions are stateless and validate their length preconditions.

use crate::{Result, SyxError};

/// Unpack 7-bit wire data into raw 8-bit bytes.
///
/// Each group of five input bytes yields four output bytes: the low seven
/// bits of output byte `i` come from input byte `i` of the group, and bit 7
/// comes from bit `i` of the group's fifth byte. Input length must be a
/// multiple of five; a trailing partial group is rejected rather than
/// silently dropped.
pub fn unpack_seven_bit(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() % 5 != 0 {
        return Err(SyxError::MalformedInput(format!(
            "7-bit packed length {} is not a multiple of 5",
            data.len()
        )));
    }

    let mut raw = Vec::with_capacity(data.len() / 5 * 4);
    for group in data.chunks_exact(5) {
        let high_bits = group[4];
        for (i, &byte) in group[..4].iter().enumerate() {
            raw.push(byte | ((high_bits >> i) & 1) << 7);
        }
    }
    Ok(raw)
}

/// Pack raw 8-bit bytes into 7-bit wire data.
///
/// Exact inverse of [`unpack_seven_bit`]; input length must be a multiple
/// of four. The crate only models the decode path, but the inverse
/// transform is needed to build wire-format fixtures and to check the
/// round-trip property in tests.
pub fn pack_seven_bit(raw: &[u8]) -> Result<Vec<u8>> {
    if raw.len() % 4 != 0 {
        return Err(SyxError::MalformedInput(format!(
            "raw length {} is not a multiple of 4",
            raw.len()
        )));
    }

    let mut packed = Vec::with_capacity(raw.len() / 4 * 5);
    for group in raw.chunks_exact(4) {
        let mut high_bits = 0u8;
        for (i, &byte) in group.iter().enumerate() {
            packed.push(byte & 0x7f);
            high_bits |= (byte >> 7) << i;
        }
        packed.push(high_bits);
    }
    Ok(packed)
}

/// Compose raw bytes from a sequence of 4-bit nibbles, low nibble first.
///
/// Output byte `k` is `input[2k + 1] << 4 | input[2k]`. Input length must
/// be even; the 32-byte payload size the nibble dialect mandates is checked
/// by its decoder, not here.
pub fn compose_nibbles(nibbles: &[u8]) -> Result<Vec<u8>> {
    if nibbles.len() % 2 != 0 {
        return Err(SyxError::MalformedInput(format!(
            "nibble stream length {} is odd",
            nibbles.len()
        )));
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[1] << 4) | (pair[0] & 0x0f))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_single_group() {
        // High bits 0b0101 set bit 7 of bytes 0 and 2
        let packed = [0x01, 0x02, 0x03, 0x04, 0b0101];
        let raw = unpack_seven_bit(&packed).unwrap();
        assert_eq!(raw, vec![0x81, 0x02, 0x83, 0x04]);
    }

    #[test]
    fn test_unpack_length_is_four_fifths() {
        let packed = vec![0u8; 25];
        let raw = unpack_seven_bit(&packed).unwrap();
        assert_eq!(raw.len(), 20);
    }

    #[test]
    fn test_unpack_rejects_partial_group() {
        let err = unpack_seven_bit(&[0x00, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, SyxError::MalformedInput(_)));
    }

    #[test]
    fn test_pack_rejects_unaligned_input() {
        let err = pack_seven_bit(&[0x00, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, SyxError::MalformedInput(_)));
    }

    #[test]
    fn test_pack_unpack_round_trip() {
        let raw: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        let packed = pack_seven_bit(&raw).unwrap();
        assert_eq!(packed.len(), raw.len() / 4 * 5);
        // Wire bytes must all be MIDI-safe
        assert!(packed.iter().all(|&b| b <= 0x7f));
        assert_eq!(unpack_seven_bit(&packed).unwrap(), raw);
    }

    #[test]
    fn test_compose_nibbles_low_nibble_first() {
        let nibbles = [0x04, 0x0a, 0x0f, 0x00, 0x01, 0x08];
        let raw = compose_nibbles(&nibbles).unwrap();
        assert_eq!(raw, vec![0xa4, 0x0f, 0x81]);
    }

    #[test]
    fn test_compose_nibbles_halves_length() {
        let nibbles = vec![0x05u8; 32];
        let raw = compose_nibbles(&nibbles).unwrap();
        assert_eq!(raw.len(), 16);
        for (k, &byte) in raw.iter().enumerate() {
            assert_eq!(byte, nibbles[2 * k + 1] << 4 | nibbles[2 * k]);
        }
    }

    #[test]
    fn test_compose_nibbles_rejects_odd_length() {
        let err = compose_nibbles(&[0x01, 0x02, 0x03]).unwrap_err();
        assert!(matches!(err, SyxError::MalformedInput(_)));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(unpack_seven_bit(&[]).unwrap().is_empty());
        assert!(pack_seven_bit(&[]).unwrap().is_empty());
        assert!(compose_nibbles(&[]).unwrap().is_empty());
    }
}
