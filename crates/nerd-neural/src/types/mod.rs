// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neural Types Module
//!
//! Identifiers, errors and parameter values shared by the network model.

pub mod error;
pub mod ids;
pub mod parameter;

// Re-export commonly used types
pub use error::{Error, NeuralError, Result};
pub use ids::{NeuronId, SynapseId};
pub use parameter::{ParameterValue, Parameterized};
