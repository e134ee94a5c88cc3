//! Tests for bootstrap configuration resolution and graceful degradation
//!
//! Tests that manipulate RCM_CONFIG are marked with #[serial] so they do
//! not race each other.

use rcm_common::config::{load_toml_config, resolve_config_path, CONFIG_ENV_VAR};
use rcm_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;

#[test]
#[serial]
fn test_resolve_without_overrides() {
    env::remove_var(CONFIG_ENV_VAR);
    assert!(resolve_config_path(None).is_none());
}

#[test]
#[serial]
fn test_resolve_from_env_var() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/rcm-test-config.toml");

    let path = resolve_config_path(None);
    assert_eq!(path, Some(PathBuf::from("/tmp/rcm-test-config.toml")));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_cli_path_takes_precedence() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/rcm-from-env.toml");

    let cli = PathBuf::from("/tmp/rcm-from-cli.toml");
    assert_eq!(resolve_config_path(Some(&cli)), Some(cli.clone()));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let config = load_toml_config(Some(&missing)).unwrap();
    assert!(config.port.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_no_path_gives_defaults() {
    let config = load_toml_config(None).unwrap();
    assert!(config.records_file.is_none());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 6000\necho_delay_ms = 10\n[logging]\nlevel = \"warn\"").unwrap();

    let config = load_toml_config(Some(file.path())).unwrap();
    assert_eq!(config.port, Some(6000));
    assert_eq!(config.echo_delay_ms, Some(10));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = [").unwrap();

    let result = load_toml_config(Some(file.path()));
    assert!(matches!(result, Err(Error::Config(_))));
}
