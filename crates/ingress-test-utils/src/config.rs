use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::TestError;

/// Directory the controller renders VirtualServer configuration into.
pub const DEFAULT_CONF_DIR: &str = "/etc/nginx/conf.d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub kubectl_path: String,
    pub conf_dir: String,
    pub exec_timeout: Duration,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            kubectl_path: "kubectl".to_string(),
            conf_dir: DEFAULT_CONF_DIR.to_string(),
            exec_timeout: Duration::from_secs(30),
        }
    }
}

impl SuiteConfig {
    pub fn new(kubectl_path: impl Into<String>) -> Self {
        Self {
            kubectl_path: kubectl_path.into(),
            ..Default::default()
        }
    }

    /// Parses a YAML document; keys that are absent keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TestError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TestError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }
}
