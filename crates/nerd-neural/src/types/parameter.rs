// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Named, typed parameters for network functions
//!
//! Activation functions expose their tunables by name so that editors,
//! config loaders and tests can read and write them uniformly.

use core::fmt;

use super::error::{NeuralError, Result};

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParameterValue {
    Double(f64),
    Int(i64),
    Text(String),
}

impl ParameterValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterValue::Double(v) => Some(*v),
            ParameterValue::Int(v) => Some(*v as f64),
            ParameterValue::Text(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParameterValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Read a finite double, or fail with a typed error naming `name`.
    pub fn expect_f64(&self, name: &str) -> Result<f64> {
        let value = self.as_f64().ok_or_else(|| NeuralError::ParameterTypeMismatch {
            name: name.to_string(),
            expected: "numeric",
        })?;
        if !value.is_finite() {
            return Err(NeuralError::InvalidParameter {
                name: name.to_string(),
                reason: format!("{} is not finite", value),
            });
        }
        Ok(value)
    }

    pub fn expect_i64(&self, name: &str) -> Result<i64> {
        self.as_i64().ok_or_else(|| NeuralError::ParameterTypeMismatch {
            name: name.to_string(),
            expected: "integer",
        })
    }

    pub fn expect_str(&self, name: &str) -> Result<&str> {
        self.as_str().ok_or_else(|| NeuralError::ParameterTypeMismatch {
            name: name.to_string(),
            expected: "text",
        })
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Double(v) => write!(f, "{}", v),
            ParameterValue::Int(v) => write!(f, "{}", v),
            ParameterValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Double(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Int(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Text(value)
    }
}

/// Objects with named tunables
pub trait Parameterized {
    /// Names of all parameters, in display order
    fn parameter_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Current value of a parameter, `None` if the name is unknown
    fn parameter(&self, _name: &str) -> Option<ParameterValue> {
        None
    }

    /// Set a parameter by name
    fn set_parameter(&mut self, name: &str, _value: ParameterValue) -> Result<()> {
        Err(NeuralError::UnknownParameter {
            function: core::any::type_name::<Self>().to_string(),
            name: name.to_string(),
        })
    }
}
