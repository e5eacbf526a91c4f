use wpt_logger::{ConsoleTarget, LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file() {
    let logger = Logger::builder("wpt-console-only")
        .console(Some(ConsoleTarget::Stderr))
        .level(LevelFilter::WARN)
        .init()
        .expect("logger should initialize");

    assert!(logger.file_dir().is_none());
}
