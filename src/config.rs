//! Dump Tool Configuration
//!
//! Operator preferences for the `p600syx` dump tool, read from JSON config
//! files. Config files are optional; candidates are visited in order with
//! later files overriding earlier ones, and command line flags override
//! both. None of these settings ever reach the codec itself.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, SyxError};

/// Preferences for the dump tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Force a specific decoder by name instead of auto-detection
    pub decoder: Option<String>,
    /// Only print the program number of each decoded patch
    pub quiet: Option<bool>,
}

impl ToolConfig {
    /// Parse a config file. Fails when the file is missing or invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|err| SyxError::ConfigError(err.to_string()))
    }

    /// Merge the default config file candidates, skipping missing ones.
    pub fn load_default() -> Self {
        let mut config = ToolConfig::default();
        for path in Self::default_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(found) => config = config.merged(found),
                Err(err) => eprintln!("Ignoring config file {}: {}", path.display(), err),
            }
        }
        config
    }

    /// Candidate config file locations, least specific first.
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(home) = std::env::var("HOME") {
            paths.push(Path::new(&home).join(".config").join("p600syx.json"));
        }
        paths.push(PathBuf::from("p600syx.json"));
        paths
    }

    /// Combine two configs; fields set in `other` win.
    pub fn merged(self, other: ToolConfig) -> ToolConfig {
        ToolConfig {
            decoder: other.decoder.or(self.decoder),
            quiet: other.quiet.or(self.quiet),
        }
    }
}
