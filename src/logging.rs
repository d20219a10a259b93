// Logging pipeline - colorized console plus an append-only file sink,
// both emitting `<timestamp> <level>: <message>` lines

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use console::Style;
use thiserror::Error;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::Config;

/// Errors raised while constructing the logging pipeline
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}")]
    OpenLogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("global subscriber already installed")]
    AlreadyInstalled(#[from] TryInitError),
}

/// `<timestamp> <level>: <message>` formatter
pub struct LineFormatter {
    color: bool,
}

impl LineFormatter {
    /// Formatter with ANSI-tinted level names, for the console sink
    pub fn colored() -> Self {
        Self { color: true }
    }

    /// Plain-text formatter, for the file sink
    pub fn plain() -> Self {
        Self { color: false }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");

        let name = match level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };

        if self.color {
            let style = match level {
                Level::TRACE => Style::new().dim(),
                Level::DEBUG => Style::new().blue(),
                Level::INFO => Style::new().green(),
                Level::WARN => Style::new().yellow(),
                Level::ERROR => Style::new().red(),
            };
            write!(writer, "{} {}: ", timestamp, style.apply_to(name))?;
        } else {
            write!(writer, "{} {}: ", timestamp, name)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global logging pipeline.
///
/// Opens the configured log file in create-and-append mode (creating parent
/// directories), then registers a plain-text file layer and a colorized
/// stdout layer. The level defaults to the configured one and can be
/// overridden through `RUST_LOG`. The subscriber lives until process exit;
/// write failures after installation are best-effort and never surface.
pub fn init(config: &Config) -> Result<(), LoggingError> {
    let file = open_log_file(Path::new(&config.log.file))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    let file_layer = fmt::layer()
        .event_format(LineFormatter::plain())
        .with_writer(Mutex::new(file));

    let console_layer = if config.console.color {
        fmt::layer().event_format(LineFormatter::colored())
    } else {
        fmt::layer().event_format(LineFormatter::plain())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoggingError::OpenLogFile {
            path: path.display().to_string(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.display().to_string(),
            source,
        })
}
