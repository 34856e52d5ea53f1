use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const DEFAULT_FILTER: &str = "icon_catalog=info";

/// Initializes logging with a console layer on stderr and a daily JSON log
/// file under `logs/`. Stdout is left to the catalog summaries.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the whole run.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Without a writable log directory, log to the console only
    let (file_layer, guard) = if fs::create_dir_all(LOG_DIR).is_ok() {
        let file_appender = tracing_appender::rolling::daily(LOG_DIR, "icon_catalog.log");
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer().json().with_writer(non_blocking_writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    guard
}
