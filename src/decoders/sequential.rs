//! Original Sequential Circuits Firmware Dialect
//!
//! The factory firmware sends a patch as a 3-byte header, the program
//! number, and 16 bytes of data transmitted as 32 right-justified 4-bit
//! nibbles, least significant nibble first (owner's manual, page 10-5).
//! The composed 16 bytes hold every parameter as a fixed bit field; the
//! table below transcribes the layout from page 10-6 of the manual:
//!
//! ```text
//! BYTE  MS BIT           LS BIT
//! 0     B0 A6 A5 A4 A3 A2 A1 A0
//! 1     D0 C3 C2 C1 C0 B3 B2 B1
//! 2     E1 E0 D6 D5 D4 D3 D2 D1
//! 3     F4 F3 F2 F1 F0 E4 E3 E2
//! 4     H0 G5 G4 G3 G2 G1 G0 F5
//! 5     I1 I0 H6 H5 H4 H3 H2 H1
//! 6     J3 J2 J1 J0 I5 I4 I3 I2
//! 7     K4 K3 K2 K1 K0 J6 J5 J4
//! 8     M2 M1 M0 L3 L2 L1 L0 K5
//! 9     O2 O1 O0 N3 N2 N1 N0 M1
//! A     Q2 Q1 Q0 P3 P2 P1 P0 O3
//! B     S2 S1 S0 R3 R2 R1 R0 Q3
//! C     U2 U1 U0 T3 T2 T1 T0 S3
//! D     V6 V5 V4 V3 V2 V1 V0 U3
//! E     Z7 Z6 Z5 Z4 Z3 Z2 Z1 Z0
//! F     ZF ZE ZD ZC ZB ZA Z9 Z8
//! ```
//!
//! Decoded parameter names carry the field's maximum value, since dump
//! viewers display both.

use super::{strip_header, DecodedPatch, Parameter, SysExDecoder};
use crate::bitfield::{BitField, PATCH_DATA_LEN};
use crate::constants::SYSEX_START;
use crate::packing::compose_nibbles;
use crate::{Result, SyxError};

/// Header of an original-firmware patch dump
pub const HEADER: [u8; 3] = [SYSEX_START, 0x01, 0x02];

/// Nibble count mandated by the dialect (16 data bytes)
pub const NIBBLE_COUNT: usize = 32;

/// Bit field layout of the 16 composed data bytes
pub const FIELD_TABLE: [BitField; 38] = [
    BitField::new("OSC A PULSE WIDTH", 7, 0x0, 0),
    BitField::new("PMOD FIL ENV AMT", 4, 0x0, 7),
    BitField::new("LFO FREQ", 4, 0x1, 3),
    BitField::new("PMOD OSC B AMT", 7, 0x1, 7),
    BitField::new("LFO AMT", 5, 0x2, 6),
    BitField::new("OSC B FREQ", 6, 0x3, 3),
    BitField::new("OSC A FREQ", 6, 0x4, 1),
    BitField::new("OSC B FINE", 7, 0x4, 7),
    BitField::new("MIXER", 6, 0x5, 6),
    BitField::new("FILTER CUTOFF", 7, 0x6, 4),
    BitField::new("RESONANCE", 6, 0x7, 3),
    BitField::new("FIL ENV AMT", 4, 0x8, 1),
    BitField::new("FIL REL", 4, 0x8, 5),
    BitField::new("FIL SUS", 4, 0x9, 1),
    BitField::new("FIL DEC", 4, 0x9, 5),
    BitField::new("FIL ATK", 4, 0xa, 1),
    BitField::new("AMP REL", 4, 0xa, 5),
    BitField::new("AMP SUS", 4, 0xb, 1),
    BitField::new("AMP DEC", 4, 0xb, 5),
    BitField::new("AMP ATK", 4, 0xc, 1),
    BitField::new("GLIDE", 4, 0xc, 5),
    BitField::new("OSC B PULSE WIDTH", 7, 0xd, 1),
    BitField::new("OSC A PULSE", 1, 0xe, 0),
    BitField::new("OSC B PULSE", 1, 0xe, 1),
    BitField::new("FIL KBD FULL", 1, 0xe, 2),
    BitField::new("FIL KBD 1/2", 1, 0xe, 3),
    BitField::new("LFO SHAPE (1=TRI)", 1, 0xe, 4),
    BitField::new("LFO FREQ AB", 1, 0xe, 5),
    BitField::new("LFO PW AB", 1, 0xe, 6),
    BitField::new("LFO FIL", 1, 0xe, 7),
    BitField::new("OSC A SAW", 1, 0xf, 0),
    BitField::new("OSC A TRI", 1, 0xf, 1),
    BitField::new("OSC A SYNC", 1, 0xf, 2),
    BitField::new("OSC B SAW", 1, 0xf, 3),
    BitField::new("OSC B TRI", 1, 0xf, 4),
    BitField::new("PMOD FREQ A", 1, 0xf, 5),
    BitField::new("PMOD FIL", 1, 0xf, 6),
    BitField::new("UNISON", 1, 0xf, 7),
];

/// Decoder for original-firmware patch dumps
pub struct SequentialDecoder;

impl SysExDecoder for SequentialDecoder {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn identify(&self, msg: &[u8]) -> bool {
        msg.starts_with(&HEADER)
    }

    fn decode(&self, msg: &[u8]) -> Result<DecodedPatch> {
        let rest = strip_header(msg, &HEADER)?;
        let (&program, nibbles) = rest.split_first().ok_or(SyxError::WrongPayloadLength {
            expected: NIBBLE_COUNT,
            got: 0,
        })?;

        if nibbles.len() != NIBBLE_COUNT {
            return Err(SyxError::WrongPayloadLength {
                expected: NIBBLE_COUNT,
                got: nibbles.len(),
            });
        }

        let composed = compose_nibbles(nibbles)?;
        let mut data = [0u8; PATCH_DATA_LEN];
        data.copy_from_slice(&composed);

        let parameters = FIELD_TABLE
            .iter()
            .map(|field| Parameter {
                name: format!("{} (max: {})", field.name, field.max()),
                value: field.extract(&data),
            })
            .collect();

        // The fixed-size table consumes the payload completely
        Ok(DecodedPatch {
            program,
            parameters,
            trailing: Vec::new(),
        })
    }
}
