//! Foundation types for cmdkit.
//!
//! This crate holds the pieces shared by the dispatcher and the binaries
//! built on top of it: the application info record printed by `version`
//! and `help`, the TOML dispatch configuration, and the error type.

pub mod config;
pub mod error;
pub mod info;

pub use config::{DispatchConfig, ReportFormat};
pub use error::{CmdkitError, Result};
pub use info::AppInfo;
