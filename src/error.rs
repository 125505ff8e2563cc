use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML report: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
