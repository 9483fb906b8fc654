// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # NERD - Self-Regulating Neuron Dynamics
//!
//! Discrete-time neural networks whose neurons regulate their own receptor
//! (`xi`) and transmitter (`eta`) gains, co-adapting incoming link weights.
//!
//! ## Quick Start
//!
//! ```rust
//! use nerd::prelude::*;
//!
//! let config = NerdConfig::default();
//! let mut srn_loop = nerd::build_srn_loop(&config)?;
//! srn_loop.network.run(config.simulation.steps);
//!
//! for state in srn_loop.network.regulation_states() {
//!     assert!(state.xi.abs() <= 100.0 && state.eta.abs() <= 100.0);
//! }
//! # Ok::<(), nerd::NerdError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  nerd-config: TOML + env + CLI overrides, validation    │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  nerd (this crate): config → network wiring             │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  nerd-neural: neurons, synapses, SRN activation         │
//! └─────────────────────────────────────────────────────────┘
//!
//!     nerd-observability: tracing subscriber setup (cross-cutting)
//! ```
//!
//! ## License
//!
//! Apache-2.0

pub mod builder;

// Re-export workspace crates
pub use nerd_config as config;
pub use nerd_neural as neural;
pub use nerd_observability as observability;

pub use builder::{
    build_srn_loop, observability_config, srn_from_config, transfer_from_config, SrnLoop,
};

/// Errors raised while turning configuration into a network
#[derive(Debug, thiserror::Error)]
pub enum NerdError {
    #[error(transparent)]
    Neural(#[from] nerd_neural::NeuralError),

    #[error(transparent)]
    Config(#[from] nerd_config::ConfigError),

    #[error("Unknown transfer function: {0}")]
    UnknownTransferFunction(String),
}

pub type Result<T> = std::result::Result<T, NerdError>;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use nerd_config::{load_config, validate_config, NerdConfig, SrnConfig};
    pub use nerd_neural::models::{
        ActivationFunction, AdditiveTimeDiscreteActivation, BiasMode, ProvidesRegulationGain,
        ReceptorMode, SelfRegulatingActivation, SrnCoefficients, SrnOptions, TransmitterMode,
    };
    pub use nerd_neural::network::{NeuralNetwork, Neuron, RegulationState};
    pub use nerd_neural::synapse::{SimpleLinkSynapseFunction, SimpleSynapseFunction};
    pub use nerd_neural::transfer::TransferFunction;
    pub use nerd_neural::types::{NeuronId, ParameterValue, Parameterized};
}
