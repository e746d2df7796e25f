//! MIDI SysEx patch dump decoder for the Sequential Circuits Prophet-600
//!
//! The Prophet-600 analog synthesizer saw several incompatible firmware
//! generations, each with its own SysEx patch dump encoding: the original
//! Sequential Circuits firmware (nibble-encoded, bit-packed parameters),
//! the GliGli mod (7-bit packed, versioned storage formats 1-8) and the
//! Imogen mod (7-bit packed, fixed legacy layout). This crate recognizes
//! which dialect a raw message uses and decodes it into a program number
//! plus an ordered list of named parameter values.
//!
//! # Features
//! - Dialect auto-detection from header and storage format magic bytes
//! - 7-bit group and nibble-pair transcoding between wire and raw bytes
//! - Version-aware parameter tables tracking real firmware evolution
//! - Tolerant decoding of truncated dumps (missing parameters read as 0)
//!
//! # Crate feature flags
//! - `syx-file` (default): `.syx` file loading, message splitting and dump
//!   tool configuration (`syx_loader`, `config`)
//!
//! # Quick start
//! ```no_run
//! use p600syx::DecoderRegistry;
//!
//! let data = std::fs::read("patch.syx").unwrap();
//! let registry = DecoderRegistry::with_default_decoders();
//! if let Some(decoder) = registry.select(&data) {
//!     let patch = decoder.decode(&data).unwrap();
//!     println!("program {}", patch.program);
//!     for parameter in &patch.parameters {
//!         println!("{}: {}", parameter.name, parameter.value);
//!     }
//! }
//! ```

#![warn(missing_docs)]

// Domain modules
pub mod bitfield; // Bit-level field extraction
pub mod constants; // SysEx framing and device identification
pub mod decoders; // Dialect decoders
pub mod packing; // Wire transcoding (7-bit groups, nibble pairs)
pub mod params; // Parameter table schema
pub mod registry; // Decoder registration and selection

#[cfg(feature = "syx-file")]
pub mod config; // Dump tool preferences
#[cfg(feature = "syx-file")]
pub mod syx_loader; // .syx file I/O

/// Error types for SysEx decoding operations
#[derive(thiserror::Error, Debug)]
pub enum SyxError {
    /// Message does not start with the decoder's header bytes
    #[error("header mismatch: expected {expected:02x?}, got {got:02x?}")]
    HeaderMismatch {
        /// Header the decoder requires
        expected: Vec<u8>,
        /// Bytes actually found at the start of the message
        got: Vec<u8>,
    },

    /// Storage format magic bytes present but incorrect (versioned dialect)
    #[error("storage format id mismatch: expected {expected:02x?}, got {got:02x?}")]
    MagicMismatch {
        /// Expected storage format id
        expected: [u8; 4],
        /// Storage format id found in the unpacked data
        got: [u8; 4],
    },

    /// Storage format version outside the known 1-8 range
    #[error("unsupported storage format version {0}")]
    UnsupportedVersion(u8),

    /// Fixed-size payload has the wrong byte count (nibble dialect)
    #[error("expected {expected} bytes of patch data, got {got}")]
    WrongPayloadLength {
        /// Byte count the dialect mandates
        expected: usize,
        /// Byte count actually present
        got: usize,
    },

    /// Packing or unpacking precondition violated
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// IO error from the filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid dump tool configuration
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for SysEx decoding operations
pub type Result<T> = std::result::Result<T, SyxError>;

// Public API exports
pub use bitfield::BitField;
pub use decoders::{
    DecodedPatch, GliGliDecoder, ImogenDecoder, Parameter, SequentialDecoder, SysExDecoder,
};
pub use packing::{compose_nibbles, pack_seven_bit, unpack_seven_bit};
pub use params::{ParamSpec, ParamWidth};
pub use registry::DecoderRegistry;

#[cfg(feature = "syx-file")]
pub use config::ToolConfig;
#[cfg(feature = "syx-file")]
pub use syx_loader::{load_file, SyxFileLoader};
