use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use wpt_logger::{FileOutput, LevelFilter, Logger};

#[test]
fn file_logging_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("wpt-file-logging")
        .file(FileOutput::new(&log_dir))
        .level(LevelFilter::INFO)
        .init()?;
    assert_eq!(logger.file_dir(), Some(log_dir.as_path()));

    tracing::info!(path = "/ms/eventos", "brand resolved");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("brand resolved"));
    assert!(!contents.contains('\u{1b}'), "file output carries no ANSI codes");
    Ok(())
}
