// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Unified logging initialization for NERD
//!
//! Console output always; with the `file-logging` feature, one folder per run:
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── nerd.log
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;
use crate::config::{normalize_level, ObservabilityConfig};
use crate::ObservabilityError;

const RUN_PREFIX: &str = "run_";
const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Keeps file writers alive; logs are flushed when dropped
#[derive(Debug, Default)]
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder, if file logging is active
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Filter from debug flags on top of the configured default level
pub fn build_filter(debug_flags: &CrateDebugFlags, level: &str) -> Result<EnvFilter> {
    let level = normalize_level(level)?;
    let directives = debug_flags.to_filter_string_with_default(level);
    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: {}", directives))
}

/// Console-only logging to stderr
pub fn init_console_logging(debug_flags: &CrateDebugFlags, level: &str) -> Result<()> {
    let filter = build_filter(debug_flags, level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|_| ObservabilityError::AlreadyInitialized)?;
    Ok(())
}

/// Initialize logging from configuration
///
/// Falls back to console-only output when `log_to_file` is off or the crate
/// was built without `file-logging`.
pub fn init_logging(
    debug_flags: &CrateDebugFlags,
    config: &ObservabilityConfig,
) -> Result<LoggingGuard> {
    if !config.log_to_file {
        init_console_logging(debug_flags, &config.level)?;
        return Ok(LoggingGuard::default());
    }

    init_file_logging(debug_flags, config)
}

#[cfg(not(feature = "file-logging"))]
fn init_file_logging(
    debug_flags: &CrateDebugFlags,
    config: &ObservabilityConfig,
) -> Result<LoggingGuard> {
    init_console_logging(debug_flags, &config.level)?;
    tracing::warn!(target: "nerd-observability", "log_to_file requested but file logging is not compiled in");
    Ok(LoggingGuard::default())
}

#[cfg(feature = "file-logging")]
fn init_file_logging(
    debug_flags: &CrateDebugFlags,
    config: &ObservabilityConfig,
) -> Result<LoggingGuard> {
    use tracing_appender::rolling;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{Layer, Registry};

    let run_folder = config
        .log_dir
        .join(format!("{}{}", RUN_PREFIX, Utc::now().format(RUN_TIMESTAMP_FORMAT)));
    std::fs::create_dir_all(&run_folder)
        .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;

    let removed = cleanup_old_logs(&config.log_dir, config.retention_days, config.retention_runs)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(build_filter(debug_flags, &config.level)?);

    let file_appender = rolling::daily(&run_folder, "nerd.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_filter(debug_flags, &config.level)?);

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| ObservabilityError::AlreadyInitialized)?;

    tracing::info!(target: "nerd-observability", "Logging to {} ({} old runs removed)", run_folder.display(), removed);

    Ok(LoggingGuard {
        _file_guards: vec![guard],
        log_dir: Some(run_folder),
    })
}

fn run_timestamp(dir_name: &str) -> Option<DateTime<Utc>> {
    let timestamp = dir_name.strip_prefix(RUN_PREFIX)?;
    let naive = NaiveDateTime::parse_from_str(timestamp, RUN_TIMESTAMP_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Remove run folders older than `retention_days`, then all but the newest
/// `retention_runs`; returns how many were removed
///
/// Entries that are not `run_<timestamp>` folders are left alone.
pub fn cleanup_old_logs(
    base_log_dir: &Path,
    retention_days: u64,
    retention_runs: usize,
) -> Result<usize> {
    if !base_log_dir.exists() {
        return Ok(0);
    }

    // Retention beyond the representable date range means no age cutoff
    let cutoff_date = i64::try_from(retention_days)
        .ok()
        .and_then(chrono::Duration::try_days)
        .and_then(|age| Utc::now().checked_sub_signed(age));

    let mut runs: Vec<(PathBuf, DateTime<Utc>)> = Vec::new();
    for entry in std::fs::read_dir(base_log_dir)
        .with_context(|| format!("Failed to read log directory: {}", base_log_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(dt) = path.file_name().and_then(|n| n.to_str()).and_then(run_timestamp) {
            runs.push((path, dt));
        }
    }

    // Newest first
    runs.sort_by(|a, b| b.1.cmp(&a.1));

    let mut removed = 0;
    for (index, (path, dt)) in runs.iter().enumerate() {
        let within_age = cutoff_date.map_or(true, |cutoff| *dt >= cutoff);
        if within_age && index < retention_runs {
            continue;
        }
        match std::fs::remove_dir_all(path) {
            Ok(()) => removed += 1,
            Err(e) => tracing::warn!(
                target: "nerd-observability",
                "Failed to remove old log directory {}: {}",
                path.display(),
                e
            ),
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn run_dir(base: &Path, when: DateTime<Utc>) -> PathBuf {
        let path = base.join(format!("{}{}", RUN_PREFIX, when.format(RUN_TIMESTAMP_FORMAT)));
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    #[test]
    fn test_run_timestamp() {
        let dt = run_timestamp("run_20250101_120000").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-01-01 12:00:00");
        assert!(run_timestamp("run_garbage").is_none());
        assert!(run_timestamp("notes").is_none());
    }

    #[test]
    fn test_cleanup_by_age() {
        let dir = tempdir().unwrap();
        let old = run_dir(dir.path(), Utc::now() - chrono::Duration::days(60));
        let recent = run_dir(dir.path(), Utc::now() - chrono::Duration::hours(1));
        let other = dir.path().join("keep_me");
        std::fs::create_dir_all(&other).unwrap();

        assert_eq!(cleanup_old_logs(dir.path(), 30, 10).unwrap(), 1);
        assert!(!old.exists());
        assert!(recent.exists());
        assert!(other.exists());
    }

    #[test]
    fn test_cleanup_by_count() {
        let dir = tempdir().unwrap();
        let runs: Vec<PathBuf> = (1..=3)
            .map(|h| run_dir(dir.path(), Utc::now() - chrono::Duration::hours(h)))
            .collect();

        assert_eq!(cleanup_old_logs(dir.path(), 30, 2).unwrap(), 1);
        assert!(runs[0].exists());
        assert!(runs[1].exists());
        assert!(!runs[2].exists());
    }

    #[test]
    fn test_cleanup_with_huge_retention_keeps_age() {
        let dir = tempdir().unwrap();
        let old = run_dir(dir.path(), Utc::now() - chrono::Duration::days(3650));
        let newer: Vec<PathBuf> = (1..=2)
            .map(|h| run_dir(dir.path(), Utc::now() - chrono::Duration::hours(h)))
            .collect();

        assert_eq!(cleanup_old_logs(dir.path(), 200_000_000, 10).unwrap(), 0);
        assert_eq!(cleanup_old_logs(dir.path(), u64::MAX, 10).unwrap(), 0);
        assert!(old.exists());

        // Run count still applies
        assert_eq!(cleanup_old_logs(dir.path(), u64::MAX, 2).unwrap(), 1);
        assert!(!old.exists());
        assert!(newer.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let dir = tempdir().unwrap();
        assert_eq!(cleanup_old_logs(&dir.path().join("nope"), 30, 10).unwrap(), 0);
    }

    #[test]
    fn test_build_filter_rejects_unknown_level() {
        assert!(build_filter(&CrateDebugFlags::default(), "loud").is_err());
        assert!(build_filter(&CrateDebugFlags::default(), "WARNING").is_ok());
    }
}
