// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for network construction and parameter access
//!
//! The per-step update path never produces these: missing collaborators
//! degrade to neutral values there. Errors only surface while building or
//! configuring a network.

use super::ids::NeuronId;

/// Error types for NERD neural operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NeuralError {
    #[error("Neuron not found: {0}")]
    NeuronNotFound(NeuronId),

    #[error("Network already holds {0} neurons, no neuron id left")]
    NeuronCapacityExceeded(usize),

    #[error("Unknown parameter '{name}' for {function}")]
    UnknownParameter { function: String, name: String },

    #[error("Parameter '{name}' expects a {expected} value")]
    ParameterTypeMismatch { name: String, expected: &'static str },

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

pub type Result<T> = core::result::Result<T, NeuralError>;
pub type Error = NeuralError;
