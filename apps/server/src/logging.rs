//! Maps the `[logging]` configuration section onto the process logger.

use anyhow::{Context, Result};
use wpt::domain::config::{LogRotation, LoggingConfig};
use wpt_logger::{ConsoleTarget, FileOutput, LevelFilter, Logger, LoggerBuilder, Rotation};

/// Builds a logger named `name` from `cfg`.
///
/// # Errors
/// Returns an error if `cfg.level` is not a known level name.
pub fn logger(name: &str, cfg: &LoggingConfig) -> Result<LoggerBuilder> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid log level '{}'", cfg.level))?;

    let mut builder = Logger::builder(name)
        .level(level)
        .console(cfg.console.then_some(ConsoleTarget::Stdout));
    if let Some(directives) = &cfg.directives {
        builder = builder.directives(directives.as_str());
    }
    if let Some(file) = &cfg.file {
        builder = builder.file(
            FileOutput::new(&file.dir)
                .rotation(rotation(file.rotation))
                .max_files(file.max_files)
                .json(file.json),
        );
    }
    Ok(builder)
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}
