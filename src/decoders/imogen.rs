//! Imogen Mod Legacy Dialect
//!
//! The Imogen mod predates the versioned storage format and ships a fixed
//! parameter layout with its own field labels. Structurally the table
//! matches the version 2 shape of the GliGli format, but dumps carry no
//! storage format id or version byte: after the shared 5-byte header and
//! 7-bit unpacking, the program number is followed directly by parameter
//! data.
//!
//! Because the outer header is shared with the GliGli dialect, this
//! decoder identifies on the header alone and is registered after the
//! GliGli decoder, picking up dumps whose storage format id the GliGli
//! decoder rejects.

use super::{read_parameter, strip_header, ByteCursor, DecodedPatch, SysExDecoder};
use crate::decoders::gligli::HEADER;
use crate::packing::unpack_seven_bit;
use crate::params::ParamSpec;
use crate::Result;

/// Fixed parameter layout of an Imogen legacy dump
pub const LEGACY_TABLE: [ParamSpec; 73] = [
    ParamSpec::two("Frequency A"),
    ParamSpec::two("Volume A"),
    ParamSpec::two("PWA"),
    ParamSpec::two("Frequency B"),
    ParamSpec::two("Volume B"),
    ParamSpec::two("PWB"),
    ParamSpec::two("Frequency Fine B"),
    ParamSpec::two("Cutoff"),
    ParamSpec::two("Resonance"),
    ParamSpec::two("Filter Envelope Amount"),
    ParamSpec::two("Filter Release"),
    ParamSpec::two("Filter Sustain"),
    ParamSpec::two("Filter Decay"),
    ParamSpec::two("Filter Attack"),
    ParamSpec::two("Amp Release"),
    ParamSpec::two("Amp Sustain"),
    ParamSpec::two("Amp Decay"),
    ParamSpec::two("Amp Attack"),
    ParamSpec::two("Poly Mod Envelope Amount"),
    ParamSpec::two("Poly Mod OSC B"),
    ParamSpec::two("LFO Frequency"),
    ParamSpec::two("LFO Amount"),
    ParamSpec::two("Glide"),
    ParamSpec::two("Amp Velocity"),
    ParamSpec::two("Filter Velocity"),
    ParamSpec::one("Saw A"),
    ParamSpec::one("Tri A"),
    ParamSpec::one("SQR A"),
    ParamSpec::one("Saw B"),
    ParamSpec::one("Tri B"),
    ParamSpec::one("SQR B"),
    ParamSpec::one("Sync"),
    ParamSpec::one("Poly Mod Frequency A"),
    ParamSpec::one("Poly Mod Filter"),
    ParamSpec::one("LFO Shape"),
    ParamSpec::one("LFO Shift"),
    ParamSpec::one("LFO Targets"),
    ParamSpec::one("Tracking Shift"),
    ParamSpec::one("Filter Envelope Shape"),
    ParamSpec::one("Filter Envelope Speed"),
    ParamSpec::one("Amp Envelope Shape"),
    ParamSpec::one("Amp Envelope Speed"),
    ParamSpec::one("Unison"),
    ParamSpec::one("Assigner Priority"),
    ParamSpec::one("Bender Semitones"),
    ParamSpec::one("Bender Target"),
    ParamSpec::one("Mod Wheel Shift"),
    ParamSpec::one("Chromatic Pitch"),
    ParamSpec::two("Modulation Delay"),
    ParamSpec::two("Vibrato Frequency"),
    ParamSpec::two("Vibrato Amount"),
    ParamSpec::two("Unison Detune"),
    ParamSpec::two("(unused, arp/seq clock slot)"),
    ParamSpec::one("Modulation Wheel Target"),
    ParamSpec::one("Vibrato Target"),
    ParamSpec::one("Voice Pattern (1/6 voices)"),
    ParamSpec::one("Voice Pattern (2/6 voices)"),
    ParamSpec::one("Voice Pattern (3/6 voices)"),
    ParamSpec::one("Voice Pattern (4/6 voices)"),
    ParamSpec::one("Voice Pattern (5/6 voices)"),
    ParamSpec::one("Voice Pattern (6/6 voices)"),
    ParamSpec::two("Tuning per Note  (1/12)"),
    ParamSpec::two("Tuning per Note  (2/12)"),
    ParamSpec::two("Tuning per Note  (3/12)"),
    ParamSpec::two("Tuning per Note  (4/12)"),
    ParamSpec::two("Tuning per Note  (5/12)"),
    ParamSpec::two("Tuning per Note  (6/12)"),
    ParamSpec::two("Tuning per Note  (7/12)"),
    ParamSpec::two("Tuning per Note  (8/12)"),
    ParamSpec::two("Tuning per Note  (9/12)"),
    ParamSpec::two("Tuning per Note (10/12)"),
    ParamSpec::two("Tuning per Note (11/12)"),
    ParamSpec::two("Tuning per Note (12/12)"),
];

/// Decoder for Imogen mod legacy patch dumps
pub struct ImogenDecoder;

impl SysExDecoder for ImogenDecoder {
    fn name(&self) -> &'static str {
        "imogen"
    }

    fn identify(&self, msg: &[u8]) -> bool {
        msg.starts_with(&HEADER)
    }

    fn decode(&self, msg: &[u8]) -> Result<DecodedPatch> {
        let rest = strip_header(msg, &HEADER)?;
        let data = unpack_seven_bit(rest)?;
        let mut cursor = ByteCursor::new(&data);

        let program = cursor.pop_or_zero();
        let parameters = LEGACY_TABLE
            .iter()
            .map(|spec| read_parameter(spec, &mut cursor))
            .collect();

        Ok(DecodedPatch {
            program,
            parameters,
            trailing: cursor.remaining().to_vec(),
        })
    }
}
