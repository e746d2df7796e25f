//! Dialect Decoders
//!
//! Decoder implementations for the patch dump dialects spoken by the
//! different Prophet-600 firmware generations:
//! - Original Sequential Circuits firmware (nibble-encoded, bit-packed)
//! - GliGli mod (7-bit packed, versioned storage formats 1-8)
//! - Imogen mod legacy layout (7-bit packed, fixed table)
//!
//! Every decoder exposes the same capability pair: `identify` inspects a
//! raw message without consuming it, `decode` turns it into a
//! [`DecodedPatch`] or a typed error. Shared mechanics (header checking,
//! byte consumption) live here as free helpers rather than in a base type.

pub mod gligli;
pub mod imogen;
pub mod sequential;

pub use gligli::GliGliDecoder;
pub use imogen::ImogenDecoder;
pub use sequential::SequentialDecoder;

use std::fmt;

use crate::params::{ParamSpec, ParamWidth};
use crate::{Result, SyxError};

/// Trait for decoding Prophet-600 SysEx patch dumps
pub trait SysExDecoder {
    /// Short unique decoder name, used for registration and selection
    fn name(&self) -> &'static str;

    /// Check whether this decoder can decode the given message.
    ///
    /// Pure and infallible: malformed input degrades to `false` so that a
    /// registry scan can move on to the next decoder.
    fn identify(&self, msg: &[u8]) -> bool;

    /// Decode the message into a patch.
    fn decode(&self, msg: &[u8]) -> Result<DecodedPatch>;
}

/// One decoded parameter: a display name and an unsigned value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter value
    pub value: u16,
}

/// A fully decoded patch dump
///
/// Owns all of its data; nothing borrows from the input message. The
/// parameter order matches the dialect's table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPatch {
    /// Program (patch slot) number the dump belongs to
    pub program: u8,
    /// Decoded parameters in table order
    pub parameters: Vec<Parameter>,
    /// Raw bytes left over after the full table was consumed
    pub trailing: Vec<u8>,
}

impl fmt::Display for DecodedPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program: {}", self.program)?;
        for parameter in &self.parameters {
            writeln!(f, "  {}: {}", parameter.name, parameter.value)?;
        }
        if !self.trailing.is_empty() {
            writeln!(f, "Trailing data: {:02x?}", self.trailing)?;
        }
        Ok(())
    }
}

/// Strip `header` from the front of `msg`, or report what was found there.
pub(crate) fn strip_header<'a>(msg: &'a [u8], header: &[u8]) -> Result<&'a [u8]> {
    if msg.starts_with(header) {
        Ok(&msg[header.len()..])
    } else {
        Err(SyxError::HeaderMismatch {
            expected: header.to_vec(),
            got: msg[..msg.len().min(header.len())].to_vec(),
        })
    }
}

/// Forward-only reader over unpacked dump data.
///
/// Reading past the end yields zero bytes instead of failing; real-world
/// captures are often truncated and the reference behavior is to decode
/// the missing tail as zeros.
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, pos: 0 }
    }

    /// Next byte, or `None` once the data is exhausted.
    pub(crate) fn pop(&mut self) -> Option<u8> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    /// Next byte, substituting 0 when the data is exhausted.
    pub(crate) fn pop_or_zero(&mut self) -> u8 {
        self.pop().unwrap_or(0)
    }

    /// Everything not yet consumed.
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

/// Consume one table entry from the cursor and compose its value
/// little-endian (low byte first).
pub(crate) fn read_parameter(spec: &ParamSpec, cursor: &mut ByteCursor<'_>) -> Parameter {
    let lsb = cursor.pop_or_zero() as u16;
    let msb = match spec.width {
        ParamWidth::Two => cursor.pop_or_zero() as u16,
        ParamWidth::One => 0,
    };
    Parameter {
        name: spec.name.to_string(),
        value: (msb << 8) | lsb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSpec;

    #[test]
    fn test_strip_header() {
        let msg = [0xf0, 0x01, 0x02, 0x42];
        assert_eq!(strip_header(&msg, &[0xf0, 0x01, 0x02]).unwrap(), &[0x42]);

        let err = strip_header(&msg, &[0xf0, 0x00, 0x61]).unwrap_err();
        assert!(matches!(err, SyxError::HeaderMismatch { .. }));
    }

    #[test]
    fn test_strip_header_short_message() {
        let err = strip_header(&[0xf0], &[0xf0, 0x01, 0x02]).unwrap_err();
        match err {
            SyxError::HeaderMismatch { got, .. } => assert_eq!(got, vec![0xf0]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cursor_substitutes_zeros() {
        let mut cursor = ByteCursor::new(&[0x10]);
        assert_eq!(cursor.pop_or_zero(), 0x10);
        assert_eq!(cursor.pop_or_zero(), 0);
        assert_eq!(cursor.pop(), None);
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn test_read_parameter_little_endian() {
        let mut cursor = ByteCursor::new(&[0x34, 0x12, 0x7f]);
        let parameter = read_parameter(&ParamSpec::two("Cutoff"), &mut cursor);
        assert_eq!(parameter.value, 0x1234);
        let parameter = read_parameter(&ParamSpec::one("Sync"), &mut cursor);
        assert_eq!(parameter.value, 0x7f);
    }

    #[test]
    fn test_read_parameter_from_exhausted_cursor() {
        let mut cursor = ByteCursor::new(&[0xab]);
        let parameter = read_parameter(&ParamSpec::two("Glide"), &mut cursor);
        assert_eq!(parameter.value, 0x00ab);
        let parameter = read_parameter(&ParamSpec::two("Glide"), &mut cursor);
        assert_eq!(parameter.value, 0);
    }

    #[test]
    fn test_display_format() {
        let patch = DecodedPatch {
            program: 7,
            parameters: vec![Parameter {
                name: "Cutoff".into(),
                value: 99,
            }],
            trailing: vec![0x01, 0x02],
        };
        let text = patch.to_string();
        assert!(text.contains("Program: 7"));
        assert!(text.contains("  Cutoff: 99"));
        assert!(text.contains("Trailing data"));
    }
}
