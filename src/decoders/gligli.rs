//! GliGli Mod Dialect
//!
//! The GliGli mod replaced the Prophet-600's firmware and introduced its
//! own patch dump format: a 5-byte header, then 7-bit packed data holding
//! the program number, a 4-byte storage format id, a storage format
//! version byte (1-8) and the parameter bytes. Each firmware release
//! appended parameters to the previous version's table, occasionally
//! renaming (never resizing) a slot that fell out of use, so the table for
//! version N is built by stacking suffixes on the version 1 base.

use super::{read_parameter, strip_header, ByteCursor, DecodedPatch, SysExDecoder};
use crate::constants::{
    SYSEX_COMMAND_PATCH_DUMP, SYSEX_ID_0, SYSEX_ID_1, SYSEX_ID_2, SYSEX_START,
};
use crate::packing::unpack_seven_bit;
use crate::params::ParamSpec;
use crate::{Result, SyxError};

/// Header of a GliGli (and Imogen legacy) patch dump
pub const HEADER: [u8; 5] = [
    SYSEX_START,
    SYSEX_ID_0,
    SYSEX_ID_1,
    SYSEX_ID_2,
    SYSEX_COMMAND_PATCH_DUMP,
];

/// Storage format id found after the program number in the unpacked data
pub const FORMAT_MAGIC: [u8; 4] = [0xa5, 0x16, 0x61, 0x00];

/// Raw bytes needed ahead of the parameter data: program number, format
/// magic and version byte fit in the first two 5-byte wire groups.
const IDENTIFY_PREFIX_LEN: usize = 10;

const VOICE_PATTERN_NAMES: [&str; 6] = [
    "Voice Pattern (1/6)",
    "Voice Pattern (2/6)",
    "Voice Pattern (3/6)",
    "Voice Pattern (4/6)",
    "Voice Pattern (5/6)",
    "Voice Pattern (6/6)",
];

const TUNING_NAMES: [&str; 12] = [
    "Tuning per Note ( 1/12)",
    "Tuning per Note ( 2/12)",
    "Tuning per Note ( 3/12)",
    "Tuning per Note ( 4/12)",
    "Tuning per Note ( 5/12)",
    "Tuning per Note ( 6/12)",
    "Tuning per Note ( 7/12)",
    "Tuning per Note ( 8/12)",
    "Tuning per Note ( 9/12)",
    "Tuning per Note (10/12)",
    "Tuning per Note (11/12)",
    "Tuning per Note (12/12)",
];

// Slot labels as printed by the reference tooling, stray digit included.
const PATCH_NAME_SLOTS: [&str; 16] = [
    "Patch Name (011/16)",
    "Patch Name (021/16)",
    "Patch Name (031/16)",
    "Patch Name (041/16)",
    "Patch Name (051/16)",
    "Patch Name (061/16)",
    "Patch Name (071/16)",
    "Patch Name (081/16)",
    "Patch Name (091/16)",
    "Patch Name (101/16)",
    "Patch Name (111/16)",
    "Patch Name (121/16)",
    "Patch Name (131/16)",
    "Patch Name (141/16)",
    "Patch Name (151/16)",
    "Patch Name (161/16)",
];

/// Build the ordered parameter table for a storage format version.
///
/// Valid versions are 1 to 8. Later versions extend earlier ones by
/// appending entries; three slots only change their label across versions:
/// "LFO Speed Range" (version 1 only), "Arpeggiator/Sequencer clock"
/// (through version 6) and the padding slot that became "Vibrato Target"
/// at version 3.
pub fn table_for_version(version: u8) -> Result<Vec<ParamSpec>> {
    if !(1..=8).contains(&version) {
        return Err(SyxError::UnsupportedVersion(version));
    }

    // version 1
    let mut table = vec![
        ParamSpec::two("Osc A Frequency"),
        ParamSpec::two("Osc A Volume"),
        ParamSpec::two("Osc A Pulse Width"),
        ParamSpec::two("Osc B Frequency"),
        ParamSpec::two("Osc B Volume"),
        ParamSpec::two("Osc B Pulse Width"),
        ParamSpec::two("Osc B Fine"),
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
        ParamSpec::two("Poly Mod Filter Amount"),
        ParamSpec::two("Poly Mod Osc B Amount"),
        ParamSpec::two("LFO Frequency"),
        ParamSpec::two("LFO Amount"),
        ParamSpec::two("Glide"),
        ParamSpec::two("Amp Velocity"),
        ParamSpec::two("Filter Velocity"),
        ParamSpec::one("Osc A Saw"),
        ParamSpec::one("Osc A Triangle"),
        ParamSpec::one("Osc A Sqr"),
        ParamSpec::one("Osc A Saw"),
        ParamSpec::one("Osc A Triangle"),
        ParamSpec::one("Osc A Sqr"),
        ParamSpec::one("Sync"),
        ParamSpec::one("Poly Mod Osc A Destination"),
        ParamSpec::one("Poly Mod Filter Destination"),
        ParamSpec::one("LFO Shape"),
        ParamSpec::one(if version == 1 {
            "LFO Speed Range"
        } else {
            "(unused)"
        }),
        ParamSpec::one("LFO Mode Destination"),
        ParamSpec::one("Keyboard Filter Tracking"),
        ParamSpec::one("Filter EG Exponential/Linear"),
        ParamSpec::one("Filter EG Fast/Slow"),
        ParamSpec::one("Amp EG Exponential/Linear"),
        ParamSpec::one("Amp EG Fast/Slow"),
        ParamSpec::one("Unison"),
        ParamSpec::one("Assigner Priority Mode"),
        ParamSpec::one("Pitch Bender Semitones"),
        ParamSpec::one("Pitch Bender Target"),
        ParamSpec::one("Modulation Wheel Range"),
        ParamSpec::one("Osc Pitch Mode"),
    ];

    if version < 2 {
        return Ok(table);
    }

    // version 2
    table.extend([
        ParamSpec::two("Modulation Delay"),
        ParamSpec::two("Vibrato Frequency"),
        ParamSpec::two("Vibrato Amount"),
        ParamSpec::two("Unison Detune"),
        ParamSpec::two(if version < 7 {
            "Arpeggiator/Sequencer clock"
        } else {
            "(unused)"
        }),
        ParamSpec::one("Modulation Wheel Target"),
        ParamSpec::one(if version == 2 {
            "(padding)"
        } else {
            "Vibrato Target"
        }),
    ]);
    table.extend(VOICE_PATTERN_NAMES.iter().copied().map(ParamSpec::one));
    table.extend(TUNING_NAMES.iter().copied().map(ParamSpec::two));

    if version < 8 {
        return Ok(table);
    }

    // version 8
    table.extend([
        ParamSpec::one("PW Bug"),
        ParamSpec::two("Vintage"),
        ParamSpec::two("Ext Voltage"),
        ParamSpec::one("Envelope Routing"),
        ParamSpec::one("Voice Assigner"),
        ParamSpec::one("LFO Sync"),
    ]);
    table.extend(PATCH_NAME_SLOTS.iter().copied().map(ParamSpec::one));

    Ok(table)
}

/// Decoder for GliGli mod patch dumps
pub struct GliGliDecoder;

impl SysExDecoder for GliGliDecoder {
    fn name(&self) -> &'static str {
        "gligli"
    }

    /// Header match alone is not enough here: the Imogen legacy dialect
    /// shares the same outer header, so the storage format id inside the
    /// first two wire groups is checked as well. Version validity is left
    /// to `decode`.
    fn identify(&self, msg: &[u8]) -> bool {
        let rest = match msg.strip_prefix(HEADER.as_slice()) {
            Some(rest) => rest,
            None => return false,
        };
        if rest.len() < IDENTIFY_PREFIX_LEN {
            return false;
        }
        match unpack_seven_bit(&rest[..IDENTIFY_PREFIX_LEN]) {
            Ok(unpacked) => unpacked[1..5] == FORMAT_MAGIC,
            Err(_) => false,
        }
    }

    fn decode(&self, msg: &[u8]) -> Result<DecodedPatch> {
        let rest = strip_header(msg, &HEADER)?;
        let data = unpack_seven_bit(rest)?;
        let mut cursor = ByteCursor::new(&data);

        let program = cursor.pop_or_zero();

        let mut magic = [0u8; 4];
        for byte in &mut magic {
            *byte = cursor.pop_or_zero();
        }
        if magic != FORMAT_MAGIC {
            return Err(SyxError::MagicMismatch {
                expected: FORMAT_MAGIC,
                got: magic,
            });
        }

        let version = cursor.pop_or_zero();
        let table = table_for_version(version)?;

        let parameters = table
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
