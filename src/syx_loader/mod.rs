//! SysEx File Loader Domain
//!
//! Handles file I/O for `.syx` capture files: reading raw dumps from disk
//! and splitting the byte stream into individual SysEx messages ready for
//! the decoders.

pub mod loader;

pub use loader::{split_messages, SyxFileLoader};

use crate::Result;

/// Convenience function to load all SysEx messages from a `.syx` file
pub fn load_file(path: &str) -> Result<Vec<Vec<u8>>> {
    SyxFileLoader::load(path)
}
