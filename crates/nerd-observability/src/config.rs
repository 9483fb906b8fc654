// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Observability configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ObservabilityError;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level (trace, debug, info, warn/warning, error)
    pub level: String,

    /// Write log files in addition to the console (needs `file-logging`)
    pub log_to_file: bool,

    /// Base directory for per-run log folders
    pub log_dir: PathBuf,

    /// Remove run folders older than this
    pub retention_days: u64,

    /// Keep at most this many run folders
    pub retention_runs: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        ObservabilityConfig {
            level: "info".to_string(),
            log_to_file: false,
            log_dir: PathBuf::from("./logs"),
            retention_days: 30,
            retention_runs: 10,
        }
    }
}

/// Map a configured level name onto an `EnvFilter` level
///
/// Accepts the Python-style `WARNING` alongside `warn`, case-insensitive.
pub fn normalize_level(level: &str) -> Result<&'static str, ObservabilityError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        _ => Err(ObservabilityError::UnknownLevel(level.to_string())),
    }
}
