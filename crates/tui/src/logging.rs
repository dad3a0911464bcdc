use std::path::Path;

use anyhow::{anyhow, Context};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to a daily log file; the terminal is in raw mode
/// so nothing may go to stdout. Keep the guard alive until exit.
pub fn init(dir: &Path) -> anyhow::Result<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("console-input")
        .filename_suffix("log")
        .build(dir)
        .with_context(|| format!("open log dir: {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("init logging: {}", e))?;
    Ok(guard)
}

/// Like [`init`], but a log dir that cannot be opened only costs the log
/// file; the app still starts.
pub fn init_or_warn(dir: &Path) -> Option<WorkerGuard> {
    match init(dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("console-input: file logging disabled: {:#}", e);
            None
        }
    }
}
