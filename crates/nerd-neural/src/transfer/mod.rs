// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Transfer Functions
//!
//! A transfer function maps a neuron's raw activation to its bounded output
//! activation. The owning neuron is passed as context so that stateful or
//! neuron-dependent variants can be added without changing the call sites.
//!
//! ```text
//! Tanh:      o = tanh(a)                 range [-1, 1]
//! Sigmoid:   o = 1 / (1 + e^-a)          range [ 0, 1]
//! Ramp:      o = clamp(a, min, max)      range [min, max]
//! Identity:  o = a                       unbounded
//! ```

use core::fmt::Debug;

use crate::network::Neuron;

/// Maps raw activation to output activation
pub trait TransferFunction: Debug + Send {
    fn name(&self) -> &'static str;

    fn transfer_activation(&self, activation: f64, owner: &Neuron) -> f64;

    fn lower_bound(&self) -> f64;

    fn upper_bound(&self) -> f64;

    fn create_copy(&self) -> Box<dyn TransferFunction>;
}

/// Hyperbolic tangent, the usual choice for SRN networks
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferFunctionTanh;

impl TransferFunction for TransferFunctionTanh {
    fn name(&self) -> &'static str {
        "tanh"
    }

    #[inline]
    fn transfer_activation(&self, activation: f64, _owner: &Neuron) -> f64 {
        activation.tanh()
    }

    fn lower_bound(&self) -> f64 {
        -1.0
    }

    fn upper_bound(&self) -> f64 {
        1.0
    }

    fn create_copy(&self) -> Box<dyn TransferFunction> {
        Box::new(*self)
    }
}

/// Logistic sigmoid
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferFunctionSigmoid;

impl TransferFunction for TransferFunctionSigmoid {
    fn name(&self) -> &'static str {
        "sigmoid"
    }

    #[inline]
    fn transfer_activation(&self, activation: f64, _owner: &Neuron) -> f64 {
        1.0 / (1.0 + (-activation).exp())
    }

    fn lower_bound(&self) -> f64 {
        0.0
    }

    fn upper_bound(&self) -> f64 {
        1.0
    }

    fn create_copy(&self) -> Box<dyn TransferFunction> {
        Box::new(*self)
    }
}

/// Piecewise linear ramp between `min` and `max`
#[derive(Debug, Clone, Copy)]
pub struct TransferFunctionRamp {
    pub min: f64,
    pub max: f64,
}

impl TransferFunctionRamp {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }
}

impl Default for TransferFunctionRamp {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

impl TransferFunction for TransferFunctionRamp {
    fn name(&self) -> &'static str {
        "ramp"
    }

    #[inline]
    fn transfer_activation(&self, activation: f64, _owner: &Neuron) -> f64 {
        activation.clamp(self.min, self.max)
    }

    fn lower_bound(&self) -> f64 {
        self.min
    }

    fn upper_bound(&self) -> f64 {
        self.max
    }

    fn create_copy(&self) -> Box<dyn TransferFunction> {
        Box::new(*self)
    }
}

/// Pass-through; handy for input neurons and for checking formulas by hand
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferFunctionIdentity;

impl TransferFunction for TransferFunctionIdentity {
    fn name(&self) -> &'static str {
        "identity"
    }

    #[inline]
    fn transfer_activation(&self, activation: f64, _owner: &Neuron) -> f64 {
        activation
    }

    fn lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn create_copy(&self) -> Box<dyn TransferFunction> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NeuronId;

    #[test]
    fn test_tanh_is_odd_and_bounded() {
        let n = Neuron::new(NeuronId(0), "n");
        let tf = TransferFunctionTanh;
        assert_eq!(tf.transfer_activation(0.0, &n), 0.0);
        assert!((tf.transfer_activation(0.5, &n) + tf.transfer_activation(-0.5, &n)).abs() < 1e-12);
        assert!(tf.transfer_activation(50.0, &n) <= tf.upper_bound());
    }

    #[test]
    fn test_sigmoid_midpoint() {
        let n = Neuron::new(NeuronId(0), "n");
        assert!((TransferFunctionSigmoid.transfer_activation(0.0, &n) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ramp_clamps_and_orders_bounds() {
        let n = Neuron::new(NeuronId(0), "n");
        let ramp = TransferFunctionRamp::new(1.0, 0.0);
        assert_eq!(ramp.lower_bound(), 0.0);
        assert_eq!(ramp.transfer_activation(3.0, &n), 1.0);
        assert_eq!(ramp.transfer_activation(-3.0, &n), 0.0);
        assert_eq!(ramp.transfer_activation(0.25, &n), 0.25);
    }
}
