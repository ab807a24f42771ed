//! Engine configuration loaded from TOML
//!
//! ```toml
//! [cascade]
//! error = "stop"
//! warning = "continue"
//! info = "continue"
//! ```

use crate::error::ConfigError;
use crate::types::{CascadeMode, Severity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration struct for the validator engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Cascade mode each tier's rules receive when they are declared
    #[serde(default)]
    pub cascade: CascadeDefaults,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

/// Default cascade mode per severity tier
///
/// Missing entries fall back to Stop for errors and Continue for warnings
/// and info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CascadeDefaults {
    pub error: CascadeMode,
    pub warning: CascadeMode,
    pub info: CascadeMode,
}

impl CascadeDefaults {
    /// Cascade mode for rules declared under `severity`
    pub fn for_severity(&self, severity: Severity) -> CascadeMode {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

impl Default for CascadeDefaults {
    fn default() -> Self {
        Self {
            error: CascadeMode::default_for(Severity::Error),
            warning: CascadeMode::default_for(Severity::Warning),
            info: CascadeMode::default_for(Severity::Info),
        }
    }
}
