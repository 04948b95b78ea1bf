use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "rusty-prices.json";

/// Runtime settings. Every key is optional in the file:
///
/// ```json
/// { "directory": "PRICE", "default_export": "prices.html" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory scanned for `*price*.csv` files.
    pub directory: PathBuf,
    /// File name offered when the user exports without typing one.
    pub default_export: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("PRICE"),
            default_export: "prices.html".to_string(),
        }
    }
}

impl Settings {
    /// Read settings from `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
