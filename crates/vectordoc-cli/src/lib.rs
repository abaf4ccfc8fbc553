//! vectordoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for vectordoc:
//! - Show: print the settings surface the rendering engine receives
//! - Check: run the full configuration load, pre-build hook included
//! - Prepare: run only the environment-resolved pre-build hook
//!
//! # Binary Usage
//!
//! ```bash
//! # Inspect the configuration
//! vectordoc show --config-dir docs/info --format json
//!
//! # Verify the build can start (runs the hook on hosted builds)
//! vectordoc check --config-dir docs/info
//!
//! # Run the hosted-build preparation step on its own
//! vectordoc prepare --config-dir docs/info
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{check_command, prepare_command, run_cli, show_command, OutputFormat};
