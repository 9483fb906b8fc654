// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Collects every violation before failing, so a single run reports all of
//! them.

use crate::{ConfigError, ConfigResult, NerdConfig};

/// Log levels accepted in `system.log_level`
pub const LOG_LEVELS: &[&str] = &["TRACE", "DEBUG", "INFO", "WARN", "WARNING", "ERROR"];

/// Transfer functions accepted in `srn.transfer_function`
pub const TRANSFER_FUNCTIONS: &[&str] = &["tanh", "sigmoid", "ramp", "identity"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    NotFinite { field: String, value: f64 },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite { field, value } => {
                write!(f, "{} = {} is not a finite number", field, value)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Finite SRN coefficients and simulation values
/// - A positive step count
/// - Known log level and transfer function names
///
/// Mode numbers are not checked; unknown modes are valid and disable their term.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every violation
pub fn validate_config(config: &NerdConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

/// All violations of `config`, empty if it is valid
pub fn collect_errors(config: &NerdConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    validate_finite_values(config, &mut errors);
    validate_simulation(config, &mut errors);
    validate_names(config, &mut errors);
    errors
}

fn validate_finite_values(config: &NerdConfig, errors: &mut Vec<ConfigValidationError>) {
    let simulation = [
        ("simulation.input", config.simulation.input),
        ("simulation.loop_strength", config.simulation.loop_strength),
        ("simulation.bias", config.simulation.bias),
    ];
    for (field, value) in config.srn.coefficients().into_iter().chain(simulation) {
        if !value.is_finite() {
            errors.push(ConfigValidationError::NotFinite {
                field: field.to_string(),
                value,
            });
        }
    }
}

fn validate_simulation(config: &NerdConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.simulation.steps == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "simulation.steps".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
}

fn validate_names(config: &NerdConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.system.log_level.to_uppercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "system.log_level".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                config.system.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let transfer = config.srn.transfer_function.to_lowercase();
    if !TRANSFER_FUNCTIONS.contains(&transfer.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "srn.transfer_function".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                config.srn.transfer_function,
                TRANSFER_FUNCTIONS.join(", ")
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        assert!(collect_errors(&NerdConfig::default()).is_empty());
    }

    #[test]
    fn test_non_finite_coefficient() {
        let mut config = NerdConfig::default();
        config.srn.beta = f64::NAN;

        let result = validate_config(&config);
        assert!(result.is_err());

        if let Err(ConfigError::ValidationError(msg)) = result {
            assert!(msg.contains("srn.beta"));
            assert!(msg.contains("finite"));
        }
    }

    #[test]
    fn test_zero_steps() {
        let mut config = NerdConfig::default();
        config.simulation.steps = 0;

        let errors = collect_errors(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("simulation.steps"));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = NerdConfig::default();
        config.system.log_level = "warning".to_string();
        assert!(validate_config(&config).is_ok());

        config.system.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_all_violations_are_reported() {
        let mut config = NerdConfig::default();
        config.srn.alpha = f64::INFINITY;
        config.simulation.steps = 0;
        config.srn.transfer_function = "relu".to_string();

        let result = validate_config(&config);
        if let Err(ConfigError::ValidationError(msg)) = result {
            assert!(msg.contains("srn.alpha"));
            assert!(msg.contains("simulation.steps"));
            assert!(msg.contains("relu"));
        } else {
            panic!("expected validation error");
        }
    }

    #[test]
    fn test_unknown_modes_are_accepted() {
        let mut config = NerdConfig::default();
        config.srn.receptor_mode = 17;
        config.srn.theta_mode = -1;
        assert!(validate_config(&config).is_ok());
    }
}
