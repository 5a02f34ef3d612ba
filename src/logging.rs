//! File logging. The terminal belongs to the dashboard, so tracing output goes
//! to a log file through a non-blocking writer.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "teamboard=info";

/// Install the global subscriber writing to `path`.
///
/// The returned guard flushes buffered lines on drop and must be held for
/// the lifetime of the program.
pub fn init(path: &Path) -> Result<WorkerGuard, AppError> {
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Config(format!("invalid log file: {}", path.display())))?;

    std::fs::create_dir_all(directory)?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()
        .map_err(|e| AppError::Config(format!("failed to install logger: {}", e)))?;

    Ok(guard)
}
