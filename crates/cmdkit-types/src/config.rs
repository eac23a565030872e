//! Dispatch configuration loaded from TOML.
//!
//! ```toml
//! app_name = "calc"
//! version = "1.0.0"
//! halt_on_unrecognized = true
//! report = "json"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CmdkitError, Result};
use crate::info::AppInfo;

/// How a finished run is summarized, in addition to the console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Console output only.
    #[default]
    None,
    /// Emit the run report as JSON on stderr.
    Json,
}

/// Top-level configuration (`cmdkit.toml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub version: String,
    /// Stop the whole run at the first token that names no command.
    #[serde(default)]
    pub halt_on_unrecognized: bool,
    #[serde(default)]
    pub report: ReportFormat,
}

impl DispatchConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)
            .map_err(|e| CmdkitError::Config(format!("{}: {e}", path.display())))?;
        let config = toml::from_str(&src)
            .map_err(|e| CmdkitError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded dispatch config from {}", path.display());
        Ok(config)
    }

    /// The application identity described by this configuration.
    pub fn info(&self) -> AppInfo {
        AppInfo::new(&self.app_name, &self.version)
    }
}
