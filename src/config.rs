//! Project-local configuration
//!
//! An optional `.entlint.toml` in the working directory can name the
//! default document to validate. Resolution order: CLI argument, config
//! target, built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".entlint.toml";

/// Fallback document when neither the CLI nor the config names one.
/// Carried over from the site deployment this tool was first written for.
pub const DEFAULT_TARGET: &str = "contoh aset/Rawtracks â€“home.html";

/// Project-local entlint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default document to validate when no path is given on the CLI
    #[serde(default)]
    pub target: Option<String>,
}

impl Config {
    /// Load config from the working directory, or default if absent or
    /// unparseable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load config from a specific path
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Resolve the document to validate: CLI argument first, then the
    /// config target, then the built-in default
    #[must_use]
    pub fn resolve_target(&self, cli_path: Option<&Path>) -> PathBuf {
        cli_path.map_or_else(
            || {
                self.target
                    .as_deref()
                    .map_or_else(|| PathBuf::from(DEFAULT_TARGET), PathBuf::from)
            },
            Path::to_path_buf,
        )
    }
}
