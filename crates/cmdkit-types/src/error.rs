//! Error types for cmdkit.
//!
//! Dispatch outcomes (unrecognized commands, short parameter lists, handler
//! failures) are not errors; they are reported through exit codes and
//! events. This type covers the infrastructure around dispatch.

use std::io;

/// Errors produced by cmdkit outside of command dispatch itself.
#[derive(Debug, thiserror::Error)]
pub enum CmdkitError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CmdkitError>;
