//! The settings surface handed to the documentation-rendering engine.
//!
//! [`BuildSettings`] is constructed once per build and never mutated
//! afterwards. The built-in defaults describe the Vector reference manual;
//! an optional TOML overlay can override individual fields, and the release
//! identifier is always filled in by the loader from the `VERSION` file.

use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::{Deserialize, Serialize};

/// Immutable configuration record for one documentation build
///
/// Field names mirror the values the rendering engine reads: extension order
/// matters (later extensions may override earlier behavior), and none of the
/// values are validated at this layer. An unknown theme identifier, for
/// example, is the engine's problem to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Project name displayed in generated documentation
    pub project: String,

    /// Copyright holder and year
    pub copyright: String,

    /// Project author
    pub author: String,

    /// Release identifier, sourced from the version file by the loader
    pub release: String,

    /// Ordered extension identifiers the engine loads
    pub extensions: Vec<String>,

    /// Additional resolution roots for project-local extensions
    ///
    /// Passed to the engine explicitly instead of mutating any process-wide
    /// search path. Relative paths are resolved against the config directory.
    pub extension_paths: Vec<PathBuf>,

    /// Glob patterns excluded from source discovery
    pub exclude_patterns: Vec<String>,

    /// Default cross-reference domain
    pub primary_domain: String,

    /// Default markup role for bare interpreted text
    pub default_role: String,

    /// HTML theme identifier
    pub html_theme: String,

    /// Directories of custom static assets, copied after builtin ones
    pub html_static_path: Vec<String>,

    /// Stylesheet filenames added to every generated page
    pub html_css_files: Vec<String>,

    /// Default source-highlighting language
    pub highlight_language: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            project: "Vector".to_string(),
            copyright: "2020, Kaiting Chen".to_string(),
            author: "Kaiting Chen".to_string(),
            release: String::new(),
            extensions: vec![
                "sphinx.ext.autodoc".to_string(),
                "sphinx.ext.autosummary".to_string(),
                "aerate".to_string(),
            ],
            extension_paths: vec![PathBuf::from("../../aerate")],
            exclude_patterns: vec![
                "output".to_string(),
                "Thumbs.db".to_string(),
                ".DS_Store".to_string(),
                ".venv".to_string(),
            ],
            // The manual documents a native library's C-level API, so the
            // default domain and highlight language are both "c" even though
            // bare `text` cross-references resolve through "any".
            primary_domain: "c".to_string(),
            default_role: "any".to_string(),
            html_theme: "furo".to_string(),
            html_static_path: vec!["static".to_string()],
            html_css_files: vec!["custom.css".to_string()],
            highlight_language: "c".to_string(),
        }
    }
}

impl BuildSettings {
    /// Parse settings from a TOML string
    ///
    /// Missing keys keep their built-in defaults, so an overlay only has to
    /// name the fields it changes.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Check whether a source path matches any exclusion pattern
    ///
    /// A pattern matches the path as a whole or its final component, so the
    /// bare names in the defaults (`Thumbs.db`, `.venv`) exclude entries at
    /// any depth. Patterns that fail to compile as globs are skipped.
    pub fn is_excluded(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.exclude_patterns.iter().any(|raw| {
            let Ok(pattern) = Pattern::new(raw) else {
                return false;
            };
            if pattern.matches_path(path) {
                return true;
            }
            path.file_name()
                .map(|name| pattern.matches(&name.to_string_lossy()))
                .unwrap_or(false)
        })
    }
}
