// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # NERD Neural Computation
//!
//! Discrete-time neural networks with self-regulating neurons:
//! - **Types**: identifiers, errors, named parameters
//! - **Transfer**: activation → output mappings (tanh, sigmoid, ramp, identity)
//! - **Synapse**: connections, synapse functions, link-weight adaptation
//! - **Network**: neurons, per-sweep snapshot, step-driven network
//! - **Models**: activation functions (additive, self-regulating)
//!
//! ## Example
//!
//! ```
//! use nerd_neural::models::{AdditiveTimeDiscreteActivation, SelfRegulatingActivation};
//! use nerd_neural::network::NeuralNetwork;
//! use nerd_neural::synapse::SimpleLinkSynapseFunction;
//! use nerd_neural::transfer::TransferFunctionTanh;
//!
//! let mut net = NeuralNetwork::new();
//! let input = net.add_neuron(
//!     "input",
//!     Box::new(TransferFunctionTanh),
//!     Box::new(AdditiveTimeDiscreteActivation::new()),
//! )?;
//! let srn = net.add_neuron(
//!     "srn",
//!     Box::new(TransferFunctionTanh),
//!     Box::new(SelfRegulatingActivation::new()),
//! )?;
//! net.add_synapse(input, srn, 1.0, Box::new(SimpleLinkSynapseFunction))?;
//! net.set_input(input, 0.5)?;
//! net.run(10);
//! assert_eq!(net.regulation_states().len(), 1);
//! # Ok::<(), nerd_neural::NeuralError>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod network;
pub mod synapse;
pub mod transfer;
pub mod types;

// Re-export types
pub use models::{
    ActivationFunction, AdditiveTimeDiscreteActivation, BiasMode, ProvidesRegulationGain,
    ReceptorMode, SelfRegulatingActivation, SrnCoefficients, SrnOptions, TransmitterMode,
};
pub use network::{
    NetworkSnapshot, NeuralNetwork, Neuron, NeuronReport, RegulationState, SourceLookup,
    SourceState,
};
pub use synapse::{SimpleLinkSynapseFunction, SimpleSynapseFunction, Synapse, SynapseFunction};
pub use transfer::{
    TransferFunction, TransferFunctionIdentity, TransferFunctionRamp, TransferFunctionSigmoid,
    TransferFunctionTanh,
};
pub use types::{Error, NeuralError, NeuronId, ParameterValue, Parameterized, Result, SynapseId};
