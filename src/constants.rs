//! SysEx framing and Prophet-600 device identification constants.

/// SysEx message initiator (status byte)
pub const SYSEX_START: u8 = 0xf0;

/// SysEx message terminator (EOX status byte)
pub const SYSEX_END: u8 = 0xf7;

/// Extended manufacturer id used by the GliGli and Imogen mods, byte 0
pub const SYSEX_ID_0: u8 = 0x00;
/// Extended manufacturer id used by the GliGli and Imogen mods, byte 1
pub const SYSEX_ID_1: u8 = 0x61;
/// Extended manufacturer id used by the GliGli and Imogen mods, byte 2
pub const SYSEX_ID_2: u8 = 0x16;

/// Command byte of a patch dump message
pub const SYSEX_COMMAND_PATCH_DUMP: u8 = 0x01;
/// Command byte of a patch dump request
pub const SYSEX_COMMAND_PATCH_DUMP_REQUEST: u8 = 0x02;
/// Command byte of a firmware update block
pub const SYSEX_COMMAND_UPDATE_FW: u8 = 0x6b;
