use thiserror::Error;

/// Error types for the test utilities
#[derive(Debug, Error)]
pub enum TestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Timeout error
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// kubectl exited unsuccessfully
    #[error("kubectl {command} failed: {stderr}")]
    Kubectl { command: String, stderr: String },
}
