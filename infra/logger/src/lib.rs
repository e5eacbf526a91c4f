//! # Logger
//!
//! Global `tracing` subscriber for the `Waypoint` binaries.
//!
//! A [`Logger`] combines up to two outputs behind one [`EnvFilter`]:
//!
//! * a compact console layer on stdout or stderr ([`ConsoleTarget`]);
//! * a non-blocking rolling file layer ([`FileOutput`]), plain text or JSON.
//!
//! The filter starts from [`LoggerBuilder::level`], adds [`LoggerBuilder::directives`]
//! (e.g. `"wpt_tenancy=debug,tower_http=info"`) and falls back to `RUST_LOG` when no
//! directives were given.
//!
//! With the `profiling` feature and `--cfg tokio_unstable`, a `tokio-console` layer is
//! added next to the console output.
//!
//! ## Example
//!
//! ```rust
//! # use wpt_logger::{ConsoleTarget, LevelFilter, Logger};
//! let _logger = Logger::builder("waypoint")
//!     .console(Some(ConsoleTarget::Stderr))
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Stream the console layer writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    /// For tools that print their results on stdout.
    Stderr,
}

/// Rolling log file settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    pub dir: PathBuf,
    pub rotation: Rotation,
    /// Rotated files kept on disk, at least one.
    pub max_files: usize,
    pub json: bool,
}

impl FileOutput {
    /// Daily-rotated plain-text files in `dir`, ten kept.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), rotation: Rotation::DAILY, max_files: 10, json: false }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    #[must_use]
    pub const fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Collects logger settings; [`LoggerBuilder::init`] installs the subscriber.
#[derive(Debug)]
#[must_use = "call .init() to install the subscriber"]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    directives: Option<String>,
    console: Option<ConsoleTarget>,
    file: Option<FileOutput>,
}

impl LoggerBuilder {
    /// Default level for targets no directive mentions.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Extra `EnvFilter` directives. Setting them disables the `RUST_LOG` fallback.
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    /// Console stream, or `None` for file-only logging.
    pub const fn console(mut self, target: Option<ConsoleTarget>) -> Self {
        self.console = target;
        self
    }

    pub fn file(mut self, file: FileOutput) -> Self {
        self.file = Some(file);
        self
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker; keep it alive until exit.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, bad
    ///   directives or no output at all;
    /// * [`LoggerError::Internal`] / [`LoggerError::Appender`] when the log directory or
    ///   file cannot be created;
    /// * [`LoggerError::Subscriber`] when a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.trim().is_empty() {
            return Err(invalid("logger name cannot be empty"));
        }
        if self.console.is_none() && self.file.is_none() {
            return Err(invalid("no output enabled, set a console target or a log file"));
        }

        let filter = self.filter()?;
        let mut layers: Vec<BoxedLayer<_>> = Vec::new();

        if let Some(target) = self.console {
            #[cfg(all(feature = "profiling", tokio_unstable))]
            layers.push(console_subscriber::spawn().boxed());
            layers.push(console_layer(target));
        }

        let guard = match &self.file {
            Some(file) => {
                let (layer, guard) =
                    file_layer(&self.name, file).context(format!("log file for {}", self.name))?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { file_dir: self.file.map(|file| file.dir), _guard: guard })
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            Some(directives) => builder
                .parse(directives)
                .map_err(|e| invalid(format!("invalid directives '{directives}': {e}"))),
            None => Ok(builder.from_env_lossy()),
        }
    }
}

fn console_layer<S>(target: ConsoleTarget) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = fmt::layer().compact();
    match target {
        ConsoleTarget::Stdout => layer.with_ansi(std::io::stdout().is_terminal()).boxed(),
        ConsoleTarget::Stderr => {
            layer.with_writer(std::io::stderr).with_ansi(std::io::stderr().is_terminal()).boxed()
        },
    }
}

fn file_layer<S>(name: &str, file: &FileOutput) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if file.max_files == 0 {
        return Err(invalid("max_files must be greater than zero"));
    }
    fs::create_dir_all(&file.dir).map_err(|e| LoggerError::Internal {
        message: format!("cannot create {}: {e}", file.dir.display()).into(),
        context: None,
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if file.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

/// Handle to the installed subscriber.
///
/// Dropping it flushes and stops the file writer.
#[must_use = "dropping the logger stops file output"]
#[derive(Debug)]
pub struct Logger {
    file_dir: Option<PathBuf>,
    _guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder for a logger named `name`.
    ///
    /// The name prefixes rolling log files (`waypoint.2026-10-19.log`). Console output on
    /// stdout at `INFO` is the default.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            directives: None,
            console: Some(ConsoleTarget::Stdout),
            file: None,
        }
    }

    /// Directory of the rolling log files, when file output is on.
    pub fn file_dir(&self) -> Option<&Path> {
        self.file_dir.as_deref()
    }
}
