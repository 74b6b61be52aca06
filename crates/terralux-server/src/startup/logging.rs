//! Logging setup
//!
//! Console output by default, with an optional daily-rotated file under the
//! configured log directory. The level applies to this workspace's crates;
//! dependencies stay at WARN unless `RUST_LOG` says otherwise.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_NAME: &str = "terralux.log";

/// Logging configuration derived from the application config.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    pub console_output: bool,
    pub file_logging: bool,
    pub level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            console_output: true,
            file_logging: false,
            level: Level::INFO,
        }
    }
}

fn default_log_dir() -> PathBuf {
    std::env::var("TERRALUX_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("logs"))
}

impl LoggingConfig {
    pub fn from_config(
        log_dir: Option<String>,
        console_output: bool,
        file_logging: bool,
        level: String,
    ) -> Self {
        Self {
            log_dir: log_dir.map(PathBuf::from).unwrap_or_else(default_log_dir),
            console_output,
            file_logging,
            level: level.parse().unwrap_or(Level::INFO),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let directives = format!(
            "warn,terralux_server={level},terralux_api={level},terralux_console={level},\
             terralux_persistence={level},terralux_suggest={level}",
            level = self.level
        );
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
    }
}

/// Initialize the global subscriber.
///
/// The returned guard must be held for the process lifetime when file
/// logging is enabled, or buffered events are lost on exit.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let console_layer = config.console_output.then(|| {
        fmt::layer()
            .with_target(true)
            .with_filter(config.env_filter())
    });

    let (file_layer, guard) = if config.file_logging {
        std::fs::create_dir_all(&config.log_dir)?;
        let appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(config.env_filter());
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
