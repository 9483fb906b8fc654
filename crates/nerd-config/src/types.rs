// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `nerd_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NerdConfig {
    pub system: SystemConfig,
    pub simulation: SimulationConfig,
    pub srn: SrnConfig,
    pub logging: LoggingConfig,
}

/// System-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    /// One of `TRACE`, `DEBUG`, `INFO`, `WARNING`/`WARN`, `ERROR` (case-insensitive)
    pub log_level: String,
    pub data_dir: PathBuf,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
            data_dir: PathBuf::from(""),
        }
    }
}

/// Network run settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Steps to execute
    pub steps: usize,
    /// Constant external input of the driving neuron
    pub input: f64,
    /// Absolute strength of the loop synapses
    pub loop_strength: f64,
    /// Bias of the loop neurons
    pub bias: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            input: 0.5,
            loop_strength: 1.0,
            bias: 0.0,
        }
    }
}

/// Self-regulating neuron defaults
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SrnConfig {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub a_star: f64,
    /// Comma separated option tokens (`w`, `rl`, `t+1`, `e`)
    pub options: String,
    pub receptor_mode: i64,
    pub transmitter_mode: i64,
    pub theta_mode: i64,
    /// `tanh`, `sigmoid`, `ramp` or `identity`
    pub transfer_function: String,
}

impl Default for SrnConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.1,
            gamma: 0.1,
            delta: 0.1,
            a_star: 0.658479,
            options: "w".to_string(),
            receptor_mode: 0,
            transmitter_mode: 0,
            theta_mode: 0,
            transfer_function: "tanh".to_string(),
        }
    }
}

impl SrnConfig {
    /// Named coefficients, in a stable order
    pub fn coefficients(&self) -> [(&'static str, f64); 5] {
        [
            ("srn.alpha", self.alpha),
            ("srn.beta", self.beta),
            ("srn.gamma", self.gamma),
            ("srn.delta", self.delta),
            ("srn.a_star", self.a_star),
        ]
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_to_file: bool,
    pub log_dir: PathBuf,
    /// Run folders older than this are removed at startup
    pub retention_days: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_to_file: false,
            log_dir: PathBuf::from("logs"),
            retention_days: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: NerdConfig = toml::from_str(
            r#"
            [srn]
            options = "w,t+1"
            beta = 0.2
            "#,
        )
        .unwrap();

        assert_eq!(config.srn.options, "w,t+1");
        assert_eq!(config.srn.beta, 0.2);
        assert_eq!(config.srn.alpha, 0.5);
        assert_eq!(config.simulation, SimulationConfig::default());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(NerdConfig::default()).unwrap();
        assert_eq!(json["srn"]["a_star"], 0.658479);
        assert_eq!(json["simulation"]["steps"], 100);
    }
}
