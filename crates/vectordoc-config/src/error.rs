//! Error types for the configuration loader.

use std::path::PathBuf;

use thiserror::Error;

use crate::hook::HookError;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fatal errors raised while loading the build configuration
///
/// Every variant aborts the build; there is no recovery or retry at this
/// layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The version file could not be read
    ///
    /// The build cannot proceed without a release string, so this is
    /// surfaced before any other configuration is assembled.
    #[error("missing version file {path}: {source}")]
    MissingVersionFile {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The pre-build hook could not be launched or exited non-zero
    #[error("pre-build hook failed: {0}")]
    PreBuildHook(#[from] HookError),

    /// The settings overlay file is not valid TOML
    #[error("invalid settings overlay {path}: {source}")]
    Overlay {
        /// Path of the overlay file
        path: PathBuf,
        /// TOML parse error
        source: toml::de::Error,
    },
}
