use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Target of the append-only conversion log (captured and converted text).
pub const DIAGNOSTICS_TARGET: &str = "akshara_shift::diagnostics";

const LOG_FILE_PREFIX: &str = "akshara-shift.log";

fn default_filter() -> &'static str {
    if cfg!(feature = "debug-tracing") {
        "trace"
    } else {
        "info"
    }
}

/// Subscriber writing to a daily rolling file in `log_dir`, plus the guard of its
/// background writer. Events still buffered are flushed when the guard drops.
pub(crate) fn file_subscriber(
    log_dir: &Path,
    filter: EnvFilter,
) -> (impl tracing::Subscriber + Send + Sync + 'static, WorkerGuard) {
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .finish();

    (subscriber, guard)
}

/// Installs the global file subscriber.
///
/// Keep the returned guard alive until the process is about to exit. Returns `None`
/// if a subscriber is already installed.
#[must_use = "dropping the guard stops the log writer"]
pub fn init_tracing(log_dir: &Path) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    let (subscriber, guard) = file_subscriber(log_dir, env_filter);
    tracing::subscriber::set_global_default(subscriber).ok()?;

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");
    Some(guard)
}
