// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # nerd-observability
//!
//! Logging infrastructure for NERD with per-crate debug flag support.
//!
//! ## Features
//! - `file-logging`: per-run log folders with daily rotation (desktop only)

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use config::*;
pub use init::*;

/// Known NERD crate names (and tracing targets) for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "nerd",
    "nerd-neural",
    "nerd-config",
    "nerd-observability",
    "srn_trace",
];

/// Observability setup errors
#[derive(Debug, thiserror::Error)]
pub enum ObservabilityError {
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
    #[error("Global subscriber already installed")]
    AlreadyInitialized,
}
