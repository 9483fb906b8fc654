// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, NerdConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "nerd_configuration.toml";

/// Find the NERD configuration file
///
/// Search order:
/// 1. `NERD_CONFIG_PATH` environment variable
/// 2. Current working directory: `./nerd_configuration.toml`
/// 3. Parent directories (up to 5 levels)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("NERD_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by NERD_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd.as_path();
        for _ in 0..5 {
            let Some(parent) = current.parent() else {
                break;
            };
            search_paths.push(parent.join(CONFIG_FILE_NAME));
            current = parent;
        }
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "NERD configuration file '{}' not found in any of these locations:\n{}\n\nSet NERD_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML.
/// Values are not validated here; see [`crate::validate_config`].
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<NerdConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };
    info!(target: "nerd-config", "Loading configuration from {}", config_file.display());

    let content = fs::read_to_string(&config_file)?;
    let mut config: NerdConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Parse `value` into `target`; unparsable values are logged and ignored
fn set_parsed<T: FromStr>(target: &mut T, key: &str, value: &str) {
    match value.trim().parse::<T>() {
        Ok(parsed) => *target = parsed,
        Err(_) => warn!(target: "nerd-config", "Ignoring override {}={:?}: not a valid value", key, value),
    }
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `NERD_LOG_LEVEL` -> `system.log_level`
/// - `NERD_SIMULATION_STEPS` -> `simulation.steps`
/// - `NERD_SRN_OPTIONS` -> `srn.options`
/// - `NERD_SRN_RECEPTOR_MODE` -> `srn.receptor_mode`
/// - `NERD_SRN_TRANSMITTER_MODE` -> `srn.transmitter_mode`
/// - `NERD_SRN_THETA_MODE` -> `srn.theta_mode`
pub fn apply_environment_overrides(config: &mut NerdConfig) {
    if let Ok(value) = env::var("NERD_LOG_LEVEL") {
        config.system.log_level = value;
    }
    if let Ok(value) = env::var("NERD_SIMULATION_STEPS") {
        set_parsed(&mut config.simulation.steps, "NERD_SIMULATION_STEPS", &value);
    }
    if let Ok(value) = env::var("NERD_SRN_OPTIONS") {
        config.srn.options = value;
    }
    if let Ok(value) = env::var("NERD_SRN_RECEPTOR_MODE") {
        set_parsed(&mut config.srn.receptor_mode, "NERD_SRN_RECEPTOR_MODE", &value);
    }
    if let Ok(value) = env::var("NERD_SRN_TRANSMITTER_MODE") {
        set_parsed(&mut config.srn.transmitter_mode, "NERD_SRN_TRANSMITTER_MODE", &value);
    }
    if let Ok(value) = env::var("NERD_SRN_THETA_MODE") {
        set_parsed(&mut config.srn.theta_mode, "NERD_SRN_THETA_MODE", &value);
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"steps": "500", "srn_options": "w,t+1"}`)
///
/// Recognized keys: `log_level`, `steps`, `input`, `srn_options`, `alpha`,
/// `beta`, `gamma`, `delta`, `a_star`, `receptor_mode`, `transmitter_mode`,
/// `theta_mode`, `transfer_function`, `log_dir`.
pub fn apply_cli_overrides(config: &mut NerdConfig, cli_args: &HashMap<String, String>) {
    for (key, value) in cli_args {
        match key.as_str() {
            "log_level" => config.system.log_level = value.clone(),
            "steps" => set_parsed(&mut config.simulation.steps, key, value),
            "input" => set_parsed(&mut config.simulation.input, key, value),
            "srn_options" => config.srn.options = value.clone(),
            "alpha" => set_parsed(&mut config.srn.alpha, key, value),
            "beta" => set_parsed(&mut config.srn.beta, key, value),
            "gamma" => set_parsed(&mut config.srn.gamma, key, value),
            "delta" => set_parsed(&mut config.srn.delta, key, value),
            "a_star" => set_parsed(&mut config.srn.a_star, key, value),
            "receptor_mode" => set_parsed(&mut config.srn.receptor_mode, key, value),
            "transmitter_mode" => set_parsed(&mut config.srn.transmitter_mode, key, value),
            "theta_mode" => set_parsed(&mut config.srn.theta_mode, key, value),
            "transfer_function" => config.srn.transfer_function = value.clone(),
            "log_dir" => config.logging.log_dir = PathBuf::from(value),
            _ => {}
        }
    }
}
