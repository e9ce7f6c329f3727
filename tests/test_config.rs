use std::io::Write;

use as2d::config::*;
use as2d::error::GameError;

#[test]
fn defaults_are_valid() {
    let config = GameConfig::default();
    assert!(config.validate().is_empty());
    assert_eq!(config.window.width, 800.0);
    assert_eq!(config.rules.lives, 3);
    assert_eq!(config.rules.max_missiles, 3);
    assert_eq!(config.seed, None);
}

#[test]
fn timing_multiples() {
    let timing = TimingConfig {
        standard_interval: 0.02,
        fast_factor: 1.5,
        slow_factor: 6.0,
    };
    assert!((timing.fast() - 0.03).abs() < 1e-6);
    assert!((timing.slow() - 0.12).abs() < 1e-6);
    assert_eq!(timing.standard(), 0.02);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = GameConfig::from_toml_str(
        r#"
        seed = 7

        [rules]
        lives = 5

        [window]
        width = 1024.0
        "#,
    )
    .unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.rules.lives, 5);
    assert_eq!(config.rules.max_missiles, 3);
    assert_eq!(config.window.width, 1024.0);
    assert_eq!(config.window.height, 480.0);
    assert_eq!(config.timing, TimingConfig::default());
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn malformed_toml_is_a_config_error() {
    match GameConfig::from_toml_str("[rules\nlives = ") {
        Err(GameError::Config { .. }) => {}
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn wrong_type_is_a_config_error() {
    assert!(matches!(
        GameConfig::from_toml_str("[rules]\nlives = \"three\""),
        Err(GameError::Config { .. })
    ));
}

#[test]
fn validate_reports_each_problem() {
    let mut config = GameConfig::default();
    config.timing.standard_interval = 0.0;
    config.rules.lives = 0;
    config.rules.text_margin = 1.0;
    let problems = config.validate();
    assert_eq!(problems.len(), 3);
    assert!(problems.iter().any(|p| p.contains("standard_interval")));
    assert!(problems.iter().any(|p| p.contains("lives")));
    assert!(problems.iter().any(|p| p.contains("text_margin")));
}

#[test]
fn validate_rejects_empty_window() {
    let mut config = GameConfig::default();
    config.window.height = 0.0;
    config.window.frame_rate = 0;
    assert_eq!(config.validate().len(), 2);
}

#[test]
fn load_from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[log]\nfilter = \"debug\"\nfile = \"as2d.log\"").unwrap();
    let config = GameConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.log.filter, "debug");
    assert_eq!(config.log.file.as_deref(), Some(std::path::Path::new("as2d.log")));
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GameConfig::load_from_file(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(GameError::Io(_))));
}

#[test]
fn load_or_default_falls_back_with_reason() {
    let dir = tempfile::tempdir().unwrap();
    let (config, reason) = GameConfig::load_or_default(dir.path().join("nope.toml"));
    assert_eq!(config, GameConfig::default());
    assert!(reason.is_some());
}

#[test]
fn load_or_default_names_broken_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "window = 3").unwrap();
    let (config, reason) = GameConfig::load_or_default(file.path());
    assert_eq!(config, GameConfig::default());
    let reason = reason.unwrap();
    assert!(reason.contains("Invalid config"), "{}", reason);
}
