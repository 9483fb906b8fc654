// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Step-driven neural network
//!
//! ```text
//! execute_step():
//!     1. input neurons:   activation = output = input + bias
//!     2. all neurons:     prepare()        (current -> last)
//!     3. snapshot:        capture outputs and regulation gains
//!     4. other neurons:   update_activation(snapshot), in insertion order
//! ```
//!
//! Because every update reads the same snapshot, the regulation gains of all
//! neurons are stable for a full sweep and the result does not depend on the
//! visiting order.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::models::{ActivationFunction, SelfRegulatingActivation};
use crate::synapse::{Synapse, SynapseFunction};
use crate::transfer::TransferFunction;
use crate::types::{NeuralError, NeuronId, Result, SynapseId};

use super::neuron::Neuron;
use super::snapshot::NetworkSnapshot;

/// Observable state of one neuron after a step
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeuronReport {
    pub id: NeuronId,
    pub name: String,
    pub activation: f64,
    pub output: f64,
    pub bias: f64,
    /// Named outputs of the activation function (e.g. `Xi`, `Eta`)
    pub observables: BTreeMap<String, f64>,
}

/// Receptor and transmitter gains of one self-regulating neuron
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegulationState {
    pub id: NeuronId,
    pub activation: f64,
    pub output: f64,
    pub bias: f64,
    pub xi: f64,
    pub eta: f64,
}

/// A network of neurons with incoming synapses
#[derive(Debug, Default)]
pub struct NeuralNetwork {
    neurons: Vec<Neuron>,
    next_synapse_id: u32,
    step_count: u64,
}

/// Id of the neuron stored at `index`; fails once ids no longer fit in `u32`
fn neuron_id_at(index: usize) -> Result<NeuronId> {
    u32::try_from(index)
        .map(NeuronId)
        .map_err(|_| NeuralError::NeuronCapacityExceeded(index))
}

impl NeuralNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a neuron; ids are assigned densely in insertion order
    pub fn add_neuron(
        &mut self,
        name: impl Into<String>,
        transfer_function: Box<dyn TransferFunction>,
        activation_function: Box<dyn ActivationFunction>,
    ) -> Result<NeuronId> {
        let id = neuron_id_at(self.neurons.len())?;
        let neuron = Neuron::new(id, name)
            .with_transfer_function(transfer_function)
            .with_activation_function(activation_function);
        self.neurons.push(neuron);
        Ok(id)
    }

    /// Connect `source` to `target`
    pub fn add_synapse(
        &mut self,
        source: NeuronId,
        target: NeuronId,
        strength: f64,
        function: Box<dyn SynapseFunction>,
    ) -> Result<SynapseId> {
        if self.neuron(source).is_none() {
            return Err(NeuralError::NeuronNotFound(source));
        }
        let id = SynapseId(self.next_synapse_id);
        let target_neuron = self
            .neuron_mut(target)
            .ok_or(NeuralError::NeuronNotFound(target))?;
        target_neuron.add_synapse(Synapse::new(id, Some(source), strength, function));
        self.next_synapse_id += 1;
        Ok(id)
    }

    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id.index())
    }

    pub fn neuron_mut(&mut self, id: NeuronId) -> Option<&mut Neuron> {
        self.neurons.get_mut(id.index())
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    pub fn synapse_count(&self) -> usize {
        self.neurons.iter().map(|n| n.synapses().len()).sum()
    }

    /// Find a synapse by id
    pub fn synapse(&self, id: SynapseId) -> Option<&Synapse> {
        self.neurons
            .iter()
            .flat_map(|n| n.synapses().iter())
            .find(|s| s.id() == id)
    }

    /// Turn `id` into an input neuron driven by `value`
    pub fn set_input(&mut self, id: NeuronId, value: f64) -> Result<()> {
        let neuron = self.neuron_mut(id).ok_or(NeuralError::NeuronNotFound(id))?;
        neuron.set_input(Some(value));
        Ok(())
    }

    /// Return `id` to normal processing
    pub fn clear_input(&mut self, id: NeuronId) -> Result<()> {
        let neuron = self.neuron_mut(id).ok_or(NeuralError::NeuronNotFound(id))?;
        neuron.set_input(None);
        Ok(())
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Frozen view of all neurons as update sources
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot::capture(&self.neurons)
    }

    /// Advance the network by one step
    pub fn execute_step(&mut self) {
        for neuron in self.neurons.iter_mut() {
            neuron.apply_input();
        }
        for neuron in self.neurons.iter_mut() {
            neuron.prepare();
        }

        let snapshot = self.snapshot();
        for neuron in self.neurons.iter_mut().filter(|n| !n.is_input()) {
            neuron.update_activation(&snapshot);
        }

        self.step_count += 1;
        trace!(target: "nerd-neural", "network step {} completed ({} neurons)", self.step_count, self.neurons.len());
    }

    /// Run `steps` steps
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.execute_step();
        }
    }

    /// Reset all neurons (activations, activation functions, synapses)
    pub fn reset(&mut self) {
        for neuron in self.neurons.iter_mut() {
            neuron.reset();
        }
        self.step_count = 0;
        debug!(target: "nerd-neural", "network reset ({} neurons, {} synapses)", self.neurons.len(), self.synapse_count());
    }

    /// Observable state of every neuron
    pub fn reports(&self) -> Vec<NeuronReport> {
        self.neurons
            .iter()
            .map(|n| NeuronReport {
                id: n.id(),
                name: n.name().to_string(),
                activation: n.activation(),
                output: n.output_activation(),
                bias: n.bias(),
                observables: n
                    .activation_function()
                    .map(|af| {
                        af.observable_outputs()
                            .into_iter()
                            .map(|(name, value)| (name.to_string(), value))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// `xi`/`eta` of every neuron driven by a [`SelfRegulatingActivation`]
    pub fn regulation_states(&self) -> Vec<RegulationState> {
        self.neurons
            .iter()
            .filter_map(|n| {
                let srn = n.activation_function_as::<SelfRegulatingActivation>()?;
                Some(RegulationState {
                    id: n.id(),
                    activation: n.activation(),
                    output: n.output_activation(),
                    bias: n.bias(),
                    xi: srn.xi(),
                    eta: srn.eta(),
                })
            })
            .collect()
    }
}
