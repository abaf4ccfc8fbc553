//! Integration tests for the configuration loader
//!
//! These tests exercise the full load sequence against real files in a
//! temporary directory: version-file reading and trimming, overlay merging,
//! and pre-build hook gating and failure propagation.

use std::fs;
#[cfg(unix)]
use std::path::Path;

use tempfile::TempDir;
use vectordoc_config::{
    hook_for, BuildSettings, ConfigError, ConfigLoader, HookError, PreBuildHook,
};

/// Create a docs tree with a version file one level above the config dir
fn create_docs_tree(version: &str) -> (TempDir, std::path::PathBuf) {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("VERSION"), version).unwrap();
    let config_dir = root.path().join("info");
    fs::create_dir(&config_dir).unwrap();
    (root, config_dir)
}

#[test]
fn load_trims_version_whitespace() {
    let (_root, config_dir) = create_docs_tree("1.2.3\n");
    let settings = ConfigLoader::new(&config_dir).load().unwrap();
    assert_eq!(settings.release, "1.2.3");
}

#[test]
fn load_accepts_whitespace_only_version() {
    let (_root, config_dir) = create_docs_tree("  \n\t\n");
    let settings = ConfigLoader::new(&config_dir).load().unwrap();
    assert_eq!(settings.release, "");
}

#[test]
fn load_fails_without_version_file() {
    let root = TempDir::new().unwrap();
    let config_dir = root.path().join("info");
    fs::create_dir(&config_dir).unwrap();

    let err = ConfigLoader::new(&config_dir).load().unwrap_err();
    assert!(matches!(err, ConfigError::MissingVersionFile { .. }));
}

#[test]
fn load_uses_defaults_without_overlay() {
    let (_root, config_dir) = create_docs_tree("2.0.0");
    let settings = ConfigLoader::new(&config_dir).load().unwrap();

    let mut expected = BuildSettings::default();
    expected.release = "2.0.0".to_string();
    assert_eq!(settings, expected);
}

#[test]
fn load_merges_overlay_over_defaults() {
    let (_root, config_dir) = create_docs_tree("2.0.0");
    fs::write(
        config_dir.join("vectordoc.toml"),
        r#"
        html_theme = "alabaster"
        exclude_patterns = ["output", "*.tmp"]
        "#,
    )
    .unwrap();

    let settings = ConfigLoader::new(&config_dir).load().unwrap();
    assert_eq!(settings.html_theme, "alabaster");
    assert_eq!(settings.exclude_patterns, vec!["output", "*.tmp"]);
    // Untouched fields keep their defaults, release still comes from VERSION
    assert_eq!(settings.project, "Vector");
    assert_eq!(settings.release, "2.0.0");
}

#[test]
fn load_rejects_malformed_overlay() {
    let (_root, config_dir) = create_docs_tree("2.0.0");
    fs::write(config_dir.join("vectordoc.toml"), "html_theme = [broken").unwrap();

    let err = ConfigLoader::new(&config_dir).load().unwrap_err();
    assert!(matches!(err, ConfigError::Overlay { .. }));
}

/// Hook stub that records nothing and always fails
struct FailingHook;

impl PreBuildHook for FailingHook {
    fn run(&self) -> Result<(), HookError> {
        Err(HookError::Launch {
            command: "./before-rtd".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        })
    }
}

#[test]
fn hook_failure_aborts_load() {
    let (_root, config_dir) = create_docs_tree("1.2.3");
    let err = ConfigLoader::new(&config_dir)
        .with_hook(Box::new(FailingHook))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::PreBuildHook(_)));
}

#[test]
fn hook_runs_before_version_read() {
    // Hook failure wins even when the version file is also missing
    let root = TempDir::new().unwrap();
    let err = ConfigLoader::new(root.path())
        .with_hook(Box::new(FailingHook))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::PreBuildHook(_)));
}

#[cfg(unix)]
fn write_executable(dir: &Path, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

#[cfg(unix)]
#[test]
fn hosted_build_runs_prepare_command() {
    let (_root, config_dir) = create_docs_tree("1.2.3");
    write_executable(&config_dir, "before-rtd", "#!/bin/sh\ntouch prepared\n");

    let hook = hook_for(Some("True"), &config_dir);
    let settings = ConfigLoader::new(&config_dir)
        .with_hook(hook)
        .load()
        .unwrap();

    assert_eq!(settings.release, "1.2.3");
    assert!(config_dir.join("prepared").exists());
}

#[cfg(unix)]
#[test]
fn hosted_build_fails_on_nonzero_exit() {
    let (_root, config_dir) = create_docs_tree("1.2.3");
    write_executable(&config_dir, "before-rtd", "#!/bin/sh\nexit 3\n");

    let hook = hook_for(Some("True"), &config_dir);
    let err = ConfigLoader::new(&config_dir)
        .with_hook(hook)
        .load()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::PreBuildHook(HookError::Exit { .. })
    ));
}

#[cfg(unix)]
#[test]
fn hosted_build_fails_on_missing_command() {
    let (_root, config_dir) = create_docs_tree("1.2.3");

    let hook = hook_for(Some("True"), &config_dir);
    let err = ConfigLoader::new(&config_dir)
        .with_hook(hook)
        .load()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::PreBuildHook(HookError::Launch { .. })
    ));
}

#[test]
fn unhosted_build_spawns_nothing() {
    // No before-rtd exists; a falsy environment must not try to run it
    let (_root, config_dir) = create_docs_tree("1.2.3");

    for value in [None, Some("")] {
        let hook = hook_for(value, &config_dir);
        let settings = ConfigLoader::new(&config_dir)
            .with_hook(hook)
            .load()
            .unwrap();
        assert_eq!(settings.release, "1.2.3");
    }
}
