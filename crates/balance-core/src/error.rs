//! Scenario loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a scenario file.
///
/// The allocation pipeline itself never fails; only getting its inputs
/// off disk can.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to render TOML scenario: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported scenario format: {0}")]
    UnsupportedFormat(String),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
