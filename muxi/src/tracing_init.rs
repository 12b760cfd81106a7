// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Logging setup.
//!
//! The process owns the terminal, so diagnostics can never go to
//! stdout/stderr while running; they go to `muxi.log` in the working
//! directory through a non-blocking appender. Logging is off unless the
//! user asks for it (`--log-level` or `MUXI_LOG`).

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file written next to wherever muxi was started.
pub const LOG_FILE: &str = "muxi.log";

/// Environment variable consulted when `--log-level` is absent, in
/// `EnvFilter` syntax.
pub const LOG_ENV: &str = "MUXI_LOG";

/// Initialize file logging. Returns `None` (logging fully disabled) when
/// neither the flag nor the environment variable asks for it. The returned
/// guard must live for the whole process so buffered events flush on exit.
#[must_use]
pub fn try_init(level: Option<&str>) -> Option<WorkerGuard> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok()?,
        None => EnvFilter::try_from_env(LOG_ENV).ok()?,
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::debug!("logging initialized");
    Some(guard)
}
