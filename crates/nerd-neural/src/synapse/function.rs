// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Synapse functions
//!
//! A synapse function turns a synapse's stored strength into the factor that
//! multiplies the source neuron's output.

use core::fmt::Debug;

/// Computes the transmission factor of a synapse
pub trait SynapseFunction: Debug + Send {
    fn name(&self) -> &'static str;

    /// Transmission factor for the given strength.
    ///
    /// Called every step, also for disabled synapses, so that stateful
    /// functions keep their internal clocks running.
    fn calculate(&mut self, strength: f64) -> f64;

    /// True for sign-only "link" synapses whose magnitude is supplied by
    /// regulation gains instead of the stored strength.
    fn is_simple_link(&self) -> bool {
        false
    }

    fn create_copy(&self) -> Box<dyn SynapseFunction>;
}

/// Plain weighted synapse: factor = strength
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSynapseFunction;

impl SynapseFunction for SimpleSynapseFunction {
    fn name(&self) -> &'static str {
        "SimpleDefault"
    }

    #[inline]
    fn calculate(&mut self, strength: f64) -> f64 {
        strength
    }

    fn create_copy(&self) -> Box<dyn SynapseFunction> {
        Box::new(*self)
    }
}

/// Link synapse used by self-regulating neurons
///
/// Outside of an SRN it behaves like [`SimpleSynapseFunction`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLinkSynapseFunction;

impl SynapseFunction for SimpleLinkSynapseFunction {
    fn name(&self) -> &'static str {
        "SimpleLink"
    }

    #[inline]
    fn calculate(&mut self, strength: f64) -> f64 {
        strength
    }

    fn is_simple_link(&self) -> bool {
        true
    }

    fn create_copy(&self) -> Box<dyn SynapseFunction> {
        Box::new(*self)
    }
}
