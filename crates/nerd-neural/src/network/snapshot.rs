// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Read-only view of source neurons during one network sweep
//!
//! Activation functions read other neurons (their output and regulation gain)
//! while the network is being updated. To make a sweep independent of the
//! order in which neurons are visited, the network captures every neuron's
//! state once after `prepare` and hands that frozen copy to all updates.

use crate::types::NeuronId;

use super::neuron::Neuron;

/// What a target neuron may observe about one of its sources
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceState {
    /// Output activation at snapshot time
    pub output_activation: f64,
    /// Output activation of the previous step
    pub last_output_activation: f64,
    /// Transmitter gain if the source provides one (`None` = treat as 1)
    pub regulation_gain: Option<f64>,
}

impl SourceState {
    pub fn of(neuron: &Neuron) -> Self {
        Self {
            output_activation: neuron.output_activation(),
            last_output_activation: neuron.last_output_activation(),
            regulation_gain: neuron.regulation_gain(),
        }
    }
}

/// Resolves source neuron ids to their observable state
pub trait SourceLookup {
    fn source_state(&self, id: NeuronId) -> Option<SourceState>;
}

/// Lookup that knows no neurons; every source is absent
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSources;

impl SourceLookup for NoSources {
    fn source_state(&self, _id: NeuronId) -> Option<SourceState> {
        None
    }
}

/// Frozen source states for a whole network, indexed by neuron id
#[derive(Debug, Clone, Default)]
pub struct NetworkSnapshot {
    states: Vec<SourceState>,
}

impl NetworkSnapshot {
    pub fn capture(neurons: &[Neuron]) -> Self {
        Self {
            states: neurons.iter().map(SourceState::of).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl SourceLookup for NetworkSnapshot {
    #[inline]
    fn source_state(&self, id: NeuronId) -> Option<SourceState> {
        self.states.get(id.index()).copied()
    }
}
