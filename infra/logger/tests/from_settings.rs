use mfx_logger::{LogSettings, Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::{NamedTempFile, tempdir};

#[test]
#[serial]
fn unknown_level_fails_before_installing() {
    let settings = LogSettings { level: "verbose".to_owned(), ..LogSettings::default() };

    let err = Logger::from_settings("mfx-bad-level", &settings).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("verbose"));
}

#[test]
#[serial]
fn unusable_directory_is_reported_with_its_path() -> Result<(), Box<dyn std::error::Error>> {
    // A regular file where a parent directory is expected.
    let blocker = NamedTempFile::new()?;
    let directory = blocker.path().join("logs");
    let settings = LogSettings { directory: Some(directory.clone()), ..LogSettings::default() };

    let err = Logger::from_settings("mfx-bad-dir", &settings).unwrap_err();
    match err {
        LoggerError::Directory { path, .. } => assert_eq!(path, directory),
        other => panic!("expected a directory error, got {other}"),
    }
    Ok(())
}

#[test]
#[serial]
fn json_file_settings_install_once() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let settings = LogSettings {
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        ..LogSettings::default()
    };

    let logger = Logger::from_settings("mfx-json", &settings)?;
    assert!(logger.has_file_output());

    let second = Logger::from_settings("mfx-json-second", &LogSettings::default());
    assert!(matches!(second, Err(LoggerError::Subscriber(_))));

    tracing::info!(has_date = true, "Quote request composed");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");
    let content = fs::read_to_string(log_file)?;
    let line = content
        .lines()
        .find(|line| line.contains("Quote request composed"))
        .expect("event should be written");

    let record: serde_json::Value = serde_json::from_str(line)?;
    assert_eq!(record["fields"]["message"], "Quote request composed");
    assert_eq!(record["fields"]["has_date"], true);
    Ok(())
}
