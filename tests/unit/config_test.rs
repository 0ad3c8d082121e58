//! Tests for layered configuration loading

use std::fs;
use std::time::Duration;

use depwarden::config::{Config, ConfigError};
use depwarden::core::models::Language;
use tempfile::TempDir;

#[test]
fn missing_files_give_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_layers(&[temp.path().join("nope.toml")]).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn project_layer_overrides_global() {
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("global.toml");
    let project = temp.path().join("project.toml");
    fs::write(&global, "[audit]\ntimeout_secs = 60\n\n[project]\nlanguage = \"javascript\"\n").unwrap();
    fs::write(&project, "[project]\nlanguage = \"typescript\"\n").unwrap();

    let config = Config::load_layers(&[global, project]).unwrap();

    assert_eq!(config.audit_timeout(), Some(Duration::from_secs(60)));
    assert_eq!(config.project.language, Some(Language::TypeScript));
}

#[test]
fn disabled_practices_accumulate() {
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("global.toml");
    let project = temp.path().join("project.toml");
    fs::write(&global, "[practices]\ndisabled = [\"A\"]\n").unwrap();
    fs::write(&project, "[practices]\ndisabled = [\"B\"]\n").unwrap();

    let config = Config::load_layers(&[global, project]).unwrap();
    let disabled = config.disabled_practices();

    assert!(disabled.contains("A"));
    assert!(disabled.contains("B"));
}

#[test]
fn load_reads_project_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".depwarden.toml"), "[audit]\ntimeout_secs = 0\n").unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.audit_timeout(), None);
}

#[test]
fn malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[audit]\ntimeout_secs = \"soon\"\n").unwrap();

    let err = Config::load_layers(&[path]).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}
