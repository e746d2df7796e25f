//! Bit-Level Field Extraction
//!
//! The original Sequential firmware packs every patch parameter into a
//! contiguous bitstream spread over 16 raw bytes (owner's manual, page
//! 10-6). A [`BitField`] names one parameter and records where its bits
//! live: the index of the byte holding its lowest bit, the bit offset
//! within that byte, and the field width. Fields may straddle one byte
//! boundary, taking low bits from one byte and high bits from the next.

/// Size of the composed patch data buffer the fields are extracted from
pub const PATCH_DATA_LEN: usize = 16;

/// A named field at a fixed bit position inside the 16-byte patch data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// Parameter name
    pub name: &'static str,
    /// Field width in bits, 1 to 8
    pub width: u8,
    /// Index of the byte holding the field's lowest bit
    pub byte: usize,
    /// Bit offset of the field within that byte
    pub shift: u8,
}

impl BitField {
    /// Describe a field of `width` bits starting at bit `shift` of `byte`.
    pub const fn new(name: &'static str, width: u8, byte: usize, shift: u8) -> Self {
        BitField {
            name,
            width,
            byte,
            shift,
        }
    }

    /// Largest value the field can hold, `(1 << width) - 1`.
    pub const fn max(&self) -> u16 {
        (1 << self.width) - 1
    }

    /// Extract the field's unsigned value from composed patch data.
    ///
    /// Reads the low bits from the indexed byte and, when the field crosses
    /// the byte boundary, the high bits from the following byte, then masks
    /// to the declared width.
    pub fn extract(&self, data: &[u8; PATCH_DATA_LEN]) -> u16 {
        let mut value = (data[self.byte] >> self.shift) as u16;
        if self.shift + self.width > 8 {
            value |= (data[self.byte + 1] as u16) << (8 - self.shift);
        }
        value & self.max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_field() {
        let field = BitField::new("OSC A PULSE WIDTH", 7, 0x0, 0);
        let mut data = [0u8; PATCH_DATA_LEN];
        data[0x0] = 0xff;
        assert_eq!(field.extract(&data), 0x7f);
        data[0x0] = 0x2a;
        assert_eq!(field.extract(&data), 0x2a);
    }

    #[test]
    fn test_straddling_field() {
        // FILTER CUTOFF: 7 bits starting at bit 4 of byte 6,
        // equivalent to data[7] << 4 | data[6] >> 4
        let field = BitField::new("FILTER CUTOFF", 7, 0x6, 4);
        let mut data = [0u8; PATCH_DATA_LEN];
        data[0x6] = 0b1010_0000;
        data[0x7] = 0b0000_0101;
        assert_eq!(field.extract(&data), 0b101_1010);
    }

    #[test]
    fn test_shifted_flag_bit() {
        let field = BitField::new("UNISON", 1, 0xf, 7);
        let mut data = [0u8; PATCH_DATA_LEN];
        assert_eq!(field.extract(&data), 0);
        data[0xf] = 0x80;
        assert_eq!(field.extract(&data), 1);
    }

    #[test]
    fn test_value_never_exceeds_max() {
        let field = BitField::new("FIL ENV AMT", 4, 0x8, 1);
        let data = [0xffu8; PATCH_DATA_LEN];
        assert!(field.extract(&data) <= field.max());
        assert_eq!(field.max(), 15);
    }

    #[test]
    fn test_full_byte_field() {
        let field = BitField::new("wide", 8, 0x3, 0);
        let mut data = [0u8; PATCH_DATA_LEN];
        data[0x3] = 0xc3;
        assert_eq!(field.extract(&data), 0xc3);
        assert_eq!(field.max(), 255);
    }
}
