// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Activation function traits

use core::any::Any;
use core::fmt::Debug;

use crate::network::{Neuron, SourceLookup};
use crate::types::Parameterized;

/// Computes a neuron's raw activation once per step
///
/// Implementations receive the owning neuron mutably (learning rules may
/// adapt its bias and incoming synapses) and a read-only view of all other
/// neurons for the current sweep.
pub trait ActivationFunction: Parameterized + Debug + Send {
    fn name(&self) -> &'static str;

    /// New activation of `owner`
    ///
    /// Without an owner there is nothing to compute: implementations return
    /// `0.0` and leave their state untouched.
    fn calculate_activation(
        &mut self,
        owner: Option<&mut Neuron>,
        sources: &dyn SourceLookup,
    ) -> f64;

    /// Restore runtime state; configuration is kept
    fn reset(&mut self) {}

    /// Copy configuration into a fresh instance
    fn create_copy(&self) -> Box<dyn ActivationFunction>;

    /// Same concrete type and same configuration
    fn equals(&self, other: &dyn ActivationFunction) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Transmitter gain capability, `None` if this function has none
    fn as_regulation_gain(&self) -> Option<&dyn ProvidesRegulationGain> {
        None
    }

    /// Named runtime values worth plotting (e.g. regulation gains)
    fn observable_outputs(&self) -> Vec<(&'static str, f64)> {
        Vec::new()
    }
}

/// Activation functions whose neuron scales its outgoing signal by a gain
///
/// Downstream self-regulating neurons weight link synapses from such a source
/// with this gain; sources without the capability count as gain 1.
pub trait ProvidesRegulationGain {
    fn regulation_gain(&self) -> f64;
}
