//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use vectordoc_config::{hook_from_env, BuildSettings, ConfigLoader};

/// Output format for the settings surface
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "vectordoc")]
#[command(author, version, about = "Build configuration for the Vector reference manual", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the settings surface the rendering engine would receive
    Show {
        /// Directory containing the documentation build files
        #[arg(short, long, default_value = ".")]
        config_dir: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run the full configuration load, pre-build hook included
    Check {
        /// Directory containing the documentation build files
        #[arg(short, long, default_value = ".")]
        config_dir: PathBuf,
    },

    /// Run only the pre-build hook resolved from the environment
    Prepare {
        /// Directory containing the documentation build files
        #[arg(short, long, default_value = ".")]
        config_dir: PathBuf,
    },
}

/// Main CLI entry point
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { config_dir, format } => show_command(&config_dir, format),
        Commands::Check { config_dir } => check_command(&config_dir),
        Commands::Prepare { config_dir } => prepare_command(&config_dir),
    }
}

/// Load the configuration without side effects and print it
///
/// Inspection only: the pre-build hook is not run, so `show` is safe in any
/// environment.
pub fn show_command(config_dir: &Path, format: OutputFormat) -> Result<()> {
    let settings = ConfigLoader::new(config_dir)
        .load()
        .context("failed to load build configuration")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        OutputFormat::Text => print_settings(&settings),
    }
    Ok(())
}

/// Run the full load sequence and report the outcome
pub fn check_command(config_dir: &Path) -> Result<()> {
    let settings = ConfigLoader::from_env(config_dir)
        .load()
        .context("build configuration check failed")?;

    println!(
        "configuration ok: {} release {}",
        settings.project,
        if settings.release.is_empty() {
            "(unset)"
        } else {
            settings.release.as_str()
        }
    );
    Ok(())
}

/// Run the pre-build hook and nothing else
pub fn prepare_command(config_dir: &Path) -> Result<()> {
    let hook = hook_from_env(config_dir);
    match hook.command() {
        Some(command) => {
            hook.run().context("pre-build hook failed")?;
            println!("ran pre-build hook {}", command.display());
        }
        None => println!("no pre-build hook configured for this environment"),
    }
    Ok(())
}

/// Print the settings surface as labelled lines
fn print_settings(settings: &BuildSettings) {
    println!("project:             {}", settings.project);
    println!("copyright:           {}", settings.copyright);
    println!("author:              {}", settings.author);
    println!("release:             {}", settings.release);
    println!("extensions:          {}", settings.extensions.join(", "));
    println!(
        "extension paths:     {}",
        settings
            .extension_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "exclude patterns:    {}",
        settings.exclude_patterns.join(", ")
    );
    println!("primary domain:      {}", settings.primary_domain);
    println!("default role:        {}", settings.default_role);
    println!("html theme:          {}", settings.html_theme);
    println!(
        "html static path:    {}",
        settings.html_static_path.join(", ")
    );
    println!("html css files:      {}", settings.html_css_files.join(", "));
    println!("highlight language:  {}", settings.highlight_language);
}
