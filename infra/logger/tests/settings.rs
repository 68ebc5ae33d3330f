use mfx_logger::{LevelFilter, LogRotation, LogSettings, LoggerError};
use std::path::Path;

#[test]
fn defaults_log_info_to_console() {
    let settings = LogSettings::default();
    assert!(settings.console);
    assert!(settings.directory.is_none());
    assert_eq!(settings.level_filter().unwrap(), LevelFilter::INFO);
}

#[test]
fn partial_table_keeps_other_defaults() {
    let settings: LogSettings = serde_json::from_str(
        r#"{ "level": "debug", "directory": "logs", "rotation": "hourly" }"#,
    )
    .unwrap();

    assert_eq!(settings.level_filter().unwrap(), LevelFilter::DEBUG);
    assert_eq!(settings.directory.as_deref(), Some(Path::new("logs")));
    assert_eq!(settings.rotation, LogRotation::Hourly);
    assert_eq!(settings.max_files, LogSettings::default().max_files);
    assert!(!settings.json);
}

#[test]
fn unknown_level_is_a_configuration_error() {
    let settings = LogSettings { level: "loud".to_owned(), ..LogSettings::default() };
    assert!(matches!(settings.level_filter(), Err(LoggerError::InvalidConfiguration(_))));
}
