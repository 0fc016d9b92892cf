//! Tests for loading configuration files.

use std::io::Write;
use tictac::{CpuSeats, GameConfig};

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
cpu = "both"
seed = 12
games = 4
log_filter = "debug"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.cpu(), &CpuSeats::Both);
    assert_eq!(config.seed(), &Some(12));
    assert_eq!(config.games(), &Some(4));
    assert_eq!(config.log_filter().as_deref(), Some("debug"));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 3").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.cpu(), &CpuSeats::Second);
    assert_eq!(config.games(), &None);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_values_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "cpu = \"sometimes\"").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "games = 0").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert_eq!(err.message, "games must be at least 1");
}
