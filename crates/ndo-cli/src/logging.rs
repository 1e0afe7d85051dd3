//! Tracing setup: console output plus a per-run debug log file.
//!
//! The console level follows `--debug` (overridable via `NDOMIG_LOG`); the
//! file layer always captures debug so a failed migration can be audited
//! after the fact.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Initialize tracing. The returned guard must stay alive for the process
/// lifetime or buffered file output is lost.
pub fn init(log_dir: &Path, debug: bool) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory '{}'", log_dir.display()))?;

    let file_name = format!("ndomig_{}.log", chrono::Local::now().format("%Y-%m-%d_%H%M%S"));
    let appender = tracing_appender::rolling::never(log_dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let console_level = if debug { "debug" } else { "info" };
    let console_filter = EnvFilter::try_from_env("NDOMIG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(console_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("debug")),
        )
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(guard)
}
