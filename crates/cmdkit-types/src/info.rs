//! Application identity shown by the `version` and `help` builtins.

use serde::{Deserialize, Serialize};

/// Name and version of the hosting application.
///
/// Both fields default to empty strings, so a host that never initializes
/// them still gets well-formed (if blank) builtin output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub app_name: String,
    pub version: String,
}

impl AppInfo {
    pub fn new(app_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            version: version.into(),
        }
    }

    /// The `"<app_name> <version>"` line printed by `version`.
    pub fn version_line(&self) -> String {
        format!("{} {}", self.app_name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let info = AppInfo::default();
        assert!(info.app_name.is_empty());
        assert!(info.version.is_empty());
    }

    #[test]
    fn version_line_joins_with_space() {
        let info = AppInfo::new("calc", "1.2.0");
        assert_eq!(info.version_line(), "calc 1.2.0");
    }

    #[test]
    fn version_line_uninitialized() {
        assert_eq!(AppInfo::default().version_line(), " ");
    }
}
