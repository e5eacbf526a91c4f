use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use wpt_logger::{FileOutput, LevelFilter, Logger, Rotation};

#[test]
fn json_file_logging_writes_structured_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("wpt-json")
        .console(None)
        .file(FileOutput::new(&log_dir).rotation(Rotation::NEVER).max_files(1).json(true))
        .level(LevelFilter::DEBUG)
        .directives("debug,wpt_noise=off")
        .init()?;

    tracing::info!(tenant = "ms", "tenant resolved");
    tracing::debug!(target: "wpt_noise", "filtered out");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let line = contents.lines().find(|l| l.contains("tenant resolved")).expect("event logged");
    assert!(line.starts_with('{'), "json layer should emit objects: {line}");
    assert!(line.contains("\"tenant\":\"ms\""));
    assert!(!contents.contains("filtered out"));

    Ok(())
}
