//! The configuration loader.
//!
//! A single linear initialization sequence, run once per build: run the
//! pre-build hook, read the release identifier from the version file, then
//! assemble the settings surface (defaults plus the optional TOML overlay).
//! The two fatal failure points are a missing version file and a failing
//! hook.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::hook::{NoopHook, PreBuildHook};
use crate::settings::BuildSettings;

/// Default version-file location, relative to the config directory
pub const VERSION_FILE: &str = "../VERSION";

/// Default overlay filename inside the config directory
pub const OVERLAY_FILE: &str = "vectordoc.toml";

/// Builds a [`BuildSettings`] value for the rendering engine
///
/// Construct with [`ConfigLoader::new`] for a plain load (no-op hook) or
/// [`ConfigLoader::from_env`] to resolve the hook from the environment, then
/// adjust paths with the `with_*` methods as needed.
pub struct ConfigLoader {
    config_dir: PathBuf,
    version_file: PathBuf,
    overlay_file: PathBuf,
    hook: Box<dyn PreBuildHook>,
}

impl ConfigLoader {
    /// Create a loader for the given config directory with a no-op hook
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        Self {
            version_file: config_dir.join(VERSION_FILE),
            overlay_file: config_dir.join(OVERLAY_FILE),
            config_dir,
            hook: Box::new(NoopHook),
        }
    }

    /// Create a loader with the pre-build hook resolved from the environment
    pub fn from_env(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let hook = crate::hook::hook_from_env(&config_dir);
        Self::new(config_dir).with_hook(hook)
    }

    /// Override the version-file path
    pub fn with_version_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.version_file = path.into();
        self
    }

    /// Override the overlay-file path
    pub fn with_overlay_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.overlay_file = path.into();
        self
    }

    /// Replace the pre-build hook
    pub fn with_hook(mut self, hook: Box<dyn PreBuildHook>) -> Self {
        self.hook = hook;
        self
    }

    /// The config directory this loader resolves paths against
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The pre-build hook this loader will run
    pub fn hook(&self) -> &dyn PreBuildHook {
        self.hook.as_ref()
    }

    /// Produce the settings surface for one build
    ///
    /// Runs the hook, reads the release identifier, and assembles the
    /// settings. Any failure aborts the whole load; nothing is retried.
    pub fn load(&self) -> Result<BuildSettings> {
        self.hook.run()?;

        let release = self.read_release()?;
        let mut settings = self.read_overlay()?;
        settings.release = release;
        Ok(settings)
    }

    /// Read and trim the release identifier from the version file
    ///
    /// A whitespace-only file yields an empty release string; only an
    /// unreadable file is an error.
    fn read_release(&self) -> Result<String> {
        let text =
            fs::read_to_string(&self.version_file).map_err(|source| {
                ConfigError::MissingVersionFile {
                    path: self.version_file.clone(),
                    source,
                }
            })?;
        Ok(text.trim().to_string())
    }

    /// Parse the overlay file, or fall back to the built-in defaults
    fn read_overlay(&self) -> Result<BuildSettings> {
        match fs::read_to_string(&self.overlay_file) {
            Ok(text) => {
                BuildSettings::from_toml_str(&text).map_err(|source| ConfigError::Overlay {
                    path: self.overlay_file.clone(),
                    source,
                })
            }
            Err(_) => Ok(BuildSettings::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_relative_to_config_dir() {
        let loader = ConfigLoader::new("docs/info");
        assert_eq!(loader.config_dir(), Path::new("docs/info"));
        assert_eq!(loader.version_file, Path::new("docs/info/../VERSION"));
        assert_eq!(loader.overlay_file, Path::new("docs/info/vectordoc.toml"));
    }

    #[test]
    fn test_builder_overrides() {
        let loader = ConfigLoader::new(".")
            .with_version_file("/tmp/VERSION")
            .with_overlay_file("/tmp/overlay.toml");
        assert_eq!(loader.version_file, Path::new("/tmp/VERSION"));
        assert_eq!(loader.overlay_file, Path::new("/tmp/overlay.toml"));
    }

    #[test]
    fn test_plain_loader_has_noop_hook() {
        let loader = ConfigLoader::new(".");
        assert!(loader.hook().command().is_none());
    }
}
