//! Logging initialisation for calendar-square.
//!
//! When the `CALENDAR_SQUARE_LOG` environment variable is set to `1`,
//! structured logs are written to the OS log directory under
//! `calendar-square/calendar-square.log`, filtered by `RUST_LOG`.  Otherwise
//! no subscriber is installed, as anything written to stderr would scribble
//! over the full-screen display.
//!
//! Returns a guard that must be kept alive for the duration of the process
//! so that buffered log lines are flushed on exit.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_NAME: &str = "calendar-square";

const LOG_ENV_VAR: &str = "CALENDAR_SQUARE_LOG";

#[derive(Debug)]
pub(crate) struct LogGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialise the global tracing subscriber.
///
/// Call once from `main` and keep the returned `LogGuard` in a local
/// variable until the program exits.
pub(crate) fn init() -> LogGuard {
    if std::env::var(LOG_ENV_VAR).as_deref() != Ok("1") {
        return LogGuard { _file_guard: None };
    }
    let dir = log_dir().unwrap_or_else(std::env::temp_dir);
    if std::fs::create_dir_all(&dir).is_err() {
        return LogGuard { _file_guard: None };
    }
    let Ok(file_appender) = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(APP_NAME)
        .filename_suffix("log")
        .build(dir)
    else {
        return LogGuard { _file_guard: None };
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let r = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init();
    LogGuard {
        _file_guard: r.is_ok().then_some(guard),
    }
}

fn log_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return Some(PathBuf::from(xdg).join(APP_NAME));
    }
    let home = PathBuf::from(std::env::var_os("HOME")?);
    if cfg!(target_os = "macos") {
        Some(home.join("Library").join("Logs").join(APP_NAME))
    } else {
        Some(home.join(".local").join("share").join(APP_NAME))
    }
}
