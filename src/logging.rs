//! Tracing subscriber setup.
//!
//! Console output is always installed, as plain text or as one JSON object per
//! line. Setting `LOG_DIR` adds a daily rolling file next to it.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Guard to ensure buffered logs are flushed on shutdown.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LOG_FILE_PREFIX: &str = "lastmatch.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogSettings {
    pub format: LogFormat,
    pub dir: Option<String>,
    pub max_files: Option<usize>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match var("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            format,
            dir: var("LOG_DIR").filter(|d| !d.is_empty()),
            max_files: var("LOG_MAX_FILES").and_then(|v| v.parse().ok()),
        }
    }
}

pub fn init() {
    init_with(LogSettings::from_env());
}

pub fn init_with(settings: LogSettings) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let mut layers = vec![console_layer(settings.format)];
    let file_error = match settings.dir.as_deref() {
        Some(dir) => match file_layer(dir, settings.max_files) {
            Ok(layer) => {
                layers.push(layer);
                None
            }
            Err(e) => Some(e),
        },
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("file logging disabled: {}", e);
    }
    tracing::info!("logger initialized ({:?})", settings.format);
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    let layer = fmt::layer()
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Text => layer.with_ansi(true).boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn file_layer(dir: &str, max_files: Option<usize>) -> Result<BoxedLayer, String> {
    let writer = file_writer(dir, max_files)?;

    Ok(fmt::layer()
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .boxed())
}

fn file_writer(dir: &str, max_files: Option<usize>) -> Result<NonBlocking, String> {
    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX);

    if let Some(n) = max_files {
        builder = builder.max_log_files(n);
    }

    let appender = builder.build(dir).map_err(|e| e.to_string())?;
    let (writer, guard) = non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    Ok(writer)
}
