//! Error types
//!
//! Gameplay never fails: out-of-range coordinates are clamped. The only
//! errors are configuration problems, which are fatal. Settings errors carry
//! I/O and JSON sources, so the scene machine keeps only their message.

use std::path::PathBuf;

use thiserror::Error;

use crate::scene::SceneId;

/// Scene machine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// A scene id was used that has no registered factory.
    #[error("scene {scene:?} is not registered")]
    Unregistered { scene: SceneId },
    /// `tick` was called before `init`.
    #[error("scene machine has not been started")]
    NotStarted,
    /// Settings handed to the machine failed validation.
    #[error("{0}")]
    Settings(String),
}

impl From<SettingsError> for SceneError {
    fn from(err: SettingsError) -> Self {
        SceneError::Settings(err.to_string())
    }
}

/// Settings loading and validation errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Settings JSON is malformed.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// Settings parsed but describe an unplayable configuration.
    #[error("invalid settings: {0}")]
    Invalid(String),
}
