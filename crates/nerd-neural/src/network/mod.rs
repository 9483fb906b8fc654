// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Network Module
//!
//! Neurons, the per-sweep source snapshot, and the step-driven network.

pub mod graph;
pub mod neuron;
pub mod snapshot;

pub use graph::{NeuralNetwork, NeuronReport, RegulationState};
pub use neuron::Neuron;
pub use snapshot::{NetworkSnapshot, NoSources, SourceLookup, SourceState};
