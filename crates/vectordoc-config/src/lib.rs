//! vectordoc-config - Build configuration for the Vector reference manual
//!
//! This crate produces the [`BuildSettings`] surface consumed by the external
//! documentation-rendering engine: project metadata, the release identifier
//! (read from the project's `VERSION` file), the ordered extension list and
//! extension search roots, exclusion patterns, and HTML output options.
//!
//! The loader also owns the pre-build hook: on hosted documentation builds
//! (signalled by the `READTHEDOCS` environment variable) an external
//! preparation command runs before any settings are handed out. The hook is
//! an injectable capability, so callers outside the hosted context get a
//! no-op and tests never need real environment variables.
//!
//! # Example
//!
//! ```no_run
//! use vectordoc_config::ConfigLoader;
//!
//! let settings = ConfigLoader::from_env("docs").load()?;
//! assert_eq!(settings.project, "Vector");
//! # Ok::<(), vectordoc_config::ConfigError>(())
//! ```

pub mod error;
pub mod hook;
pub mod loader;
pub mod settings;

// Re-export main types and functions
pub use error::{ConfigError, Result};
pub use hook::{hook_for, hook_from_env, CommandHook, HookError, NoopHook, PreBuildHook};
pub use loader::ConfigLoader;
pub use settings::BuildSettings;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
