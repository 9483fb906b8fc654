// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Neuron: activation state, bias, functions and incoming synapses

use core::any::Any;

use tracing::warn;

use crate::models::ActivationFunction;
use crate::synapse::Synapse;
use crate::transfer::TransferFunction;
use crate::types::NeuronId;

use super::snapshot::SourceLookup;

/// A neuron of a discrete-time network
///
/// Each step the activation function computes the raw activation from the
/// incoming synapses and the bias, then the transfer function maps it to the
/// output activation.
#[derive(Debug)]
pub struct Neuron {
    id: NeuronId,
    name: String,
    activation: f64,
    output_activation: f64,
    last_activation: f64,
    last_output_activation: f64,
    bias: f64,
    transfer_function: Option<Box<dyn TransferFunction>>,
    activation_function: Option<Box<dyn ActivationFunction>>,
    synapses: Vec<Synapse>,
    input: Option<f64>,
}

impl Neuron {
    /// Bare neuron without transfer or activation function
    pub fn new(id: NeuronId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            activation: 0.0,
            output_activation: 0.0,
            last_activation: 0.0,
            last_output_activation: 0.0,
            bias: 0.0,
            transfer_function: None,
            activation_function: None,
            synapses: Vec::new(),
            input: None,
        }
    }

    pub fn with_transfer_function(mut self, tf: Box<dyn TransferFunction>) -> Self {
        self.transfer_function = Some(tf);
        self
    }

    pub fn with_activation_function(mut self, af: Box<dyn ActivationFunction>) -> Self {
        self.activation_function = Some(af);
        self
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn id(&self) -> NeuronId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn activation(&self) -> f64 {
        self.activation
    }

    pub fn set_activation(&mut self, activation: f64) {
        self.activation = activation;
    }

    pub fn output_activation(&self) -> f64 {
        self.output_activation
    }

    pub fn set_output_activation(&mut self, output: f64) {
        self.output_activation = output;
    }

    /// Activation of the previous step (captured by [`Neuron::prepare`])
    pub fn last_activation(&self) -> f64 {
        self.last_activation
    }

    pub fn last_output_activation(&self) -> f64 {
        self.last_output_activation
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    pub fn transfer_function(&self) -> Option<&dyn TransferFunction> {
        self.transfer_function.as_deref()
    }

    pub fn set_transfer_function(&mut self, tf: Option<Box<dyn TransferFunction>>) {
        self.transfer_function = tf;
    }

    pub fn activation_function(&self) -> Option<&dyn ActivationFunction> {
        self.activation_function.as_deref()
    }

    pub fn activation_function_mut(&mut self) -> Option<&mut (dyn ActivationFunction + 'static)> {
        self.activation_function.as_deref_mut()
    }

    pub fn set_activation_function(&mut self, af: Option<Box<dyn ActivationFunction>>) {
        self.activation_function = af;
    }

    /// Activation function downcast to a concrete type
    pub fn activation_function_as<T: Any>(&self) -> Option<&T> {
        self.activation_function()
            .and_then(|af| af.as_any().downcast_ref::<T>())
    }

    pub fn activation_function_as_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.activation_function
            .as_deref_mut()
            .and_then(|af| af.as_any_mut().downcast_mut::<T>())
    }

    /// Transmitter gain seen by downstream synapses, if the activation
    /// function provides one
    pub fn regulation_gain(&self) -> Option<f64> {
        self.activation_function()
            .and_then(|af| af.as_regulation_gain())
            .map(|gain| gain.regulation_gain())
    }

    pub fn synapses(&self) -> &[Synapse] {
        &self.synapses
    }

    pub fn synapses_mut(&mut self) -> &mut [Synapse] {
        &mut self.synapses
    }

    pub fn add_synapse(&mut self, synapse: Synapse) {
        self.synapses.push(synapse);
    }

    pub fn remove_synapse(&mut self, index: usize) -> Option<Synapse> {
        (index < self.synapses.len()).then(|| self.synapses.remove(index))
    }

    pub fn input(&self) -> Option<f64> {
        self.input
    }

    pub fn is_input(&self) -> bool {
        self.input.is_some()
    }

    pub(crate) fn set_input(&mut self, input: Option<f64>) {
        self.input = input;
    }

    /// Drive an input neuron from its external value: `activation = output = input + bias`
    pub(crate) fn apply_input(&mut self) {
        if let Some(input) = self.input {
            self.activation = input + self.bias;
            self.output_activation = self.activation;
        }
    }

    /// Remember the current activations as "last"
    pub fn prepare(&mut self) {
        self.last_activation = self.activation;
        self.last_output_activation = self.output_activation;
    }

    /// Compute this step's activation and output
    ///
    /// Missing transfer or activation function: logged and skipped.
    pub fn update_activation(&mut self, sources: &dyn SourceLookup) {
        if self.transfer_function.is_none() {
            warn!(target: "nerd-neural", "{} [{}]: transfer function missing, skipping update", self.id, self.name);
            return;
        }
        let Some(mut af) = self.activation_function.take() else {
            warn!(target: "nerd-neural", "{} [{}]: activation function missing, skipping update", self.id, self.name);
            return;
        };

        let activation = af.calculate_activation(Some(&mut *self), sources);
        self.activation_function = Some(af);

        let output = match self.transfer_function.as_deref() {
            Some(tf) => tf.transfer_activation(activation, self),
            None => activation,
        };
        self.activation = activation;
        self.output_activation = output;
    }

    /// Zero all activations and reset the functions and synapses
    pub fn reset(&mut self) {
        self.activation = 0.0;
        self.output_activation = 0.0;
        self.last_activation = 0.0;
        self.last_output_activation = 0.0;
        if let Some(af) = self.activation_function.as_mut() {
            af.reset();
        }
        for synapse in self.synapses.iter_mut() {
            synapse.reset();
        }
    }

    /// Structural copy: same functions (via their `create_copy`), bias and synapses
    pub fn create_copy(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            activation: self.activation,
            output_activation: self.output_activation,
            last_activation: self.last_activation,
            last_output_activation: self.last_output_activation,
            bias: self.bias,
            transfer_function: self.transfer_function.as_ref().map(|tf| tf.create_copy()),
            activation_function: self.activation_function.as_ref().map(|af| af.create_copy()),
            synapses: self.synapses.iter().map(Synapse::create_copy).collect(),
            input: self.input,
        }
    }
}
