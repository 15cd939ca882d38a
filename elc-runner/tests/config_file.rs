//! Config file loading.

use std::io::Write;

use elc_runner::{ConfigError, ElcConfig, ElcEngine};

#[test]
fn loads_overrides_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "alpha_second = 1.4\npath_count = 50\nseed = 3").unwrap();

    let config = ElcConfig::from_file(file.path()).unwrap();
    assert_eq!(config.alpha_second, 1.4);
    assert_eq!(config.path_count, 50);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.alpha_first, 1.6);

    let engine = ElcEngine::new(config).unwrap();
    assert_eq!(engine.master_seed(), 3);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ElcConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn invalid_value_in_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "dt = -0.01").unwrap();
    let err = ElcConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "dt", .. }));
}
