// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Self-Regulating Neuron Activation
//!
//! Each neuron carries a receptor gain `xi` (scales its input) and a
//! transmitter gain `eta` (scales what downstream neurons receive from it).
//! Both adapt every step from the neuron's own activation.
//!
//! ```text
//! for each enabled synapse with a source:
//!     link:      sign = sign(w)                        (0 counts as +)
//!                w    = sign × eta_src × xi            (option w, sign kept)
//!                sum += sign × eta_src × o_src
//!     otherwise: sum += synapse.calculate_activation()
//!
//! a     = θ + xi × sum
//! used  = a        (t+1)   | a(t-1)
//! prior = a(t-1)   (t+1)   | a(t-2)
//!
//! xi    = clamp(ε + xi × (1 + β × g(used)),        ±100)
//! eta   = clamp(ε + (1 - γ) × eta + δ × h(used),   ±100)
//! θ    += α × (tf(used) - tf(prior))               (bias mode 1)
//! ```
//!
//! `ε = 0.0001` with option `e`, otherwise 0. The formulas behind `g` and `h`
//! are listed in [`super::modes`].

use core::any::Any;

use tracing::warn;

use crate::models::traits::{ActivationFunction, ProvidesRegulationGain};
use crate::network::{Neuron, SourceLookup};
use crate::synapse::{adapted_link_strength, link_sign};
use crate::types::{NeuralError, ParameterValue, Parameterized, Result};

use super::modes::{BiasMode, ReceptorMode, TransmitterMode};
use super::options::{SrnOptions, DEFAULT_OPTIONS};

/// Bound of `xi` and `eta` in both directions
pub const REGULATION_LIMIT: f64 = 100.0;

/// Added to `xi` and `eta` each step with option `e`
pub const REGULATION_EPSILON: f64 = 0.0001;

/// Learning coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SrnCoefficients {
    /// Bias learning rate
    pub alpha: f64,
    /// Receptor learning rate
    pub beta: f64,
    /// Transmitter decay
    pub gamma: f64,
    /// Transmitter learning rate
    pub delta: f64,
    /// Target activation
    pub a_star: f64,
}

impl Default for SrnCoefficients {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.1,
            gamma: 0.1,
            delta: 0.1,
            a_star: 0.658479,
        }
    }
}

const PARAMETER_NAMES: &[&str] = &[
    "Xi",
    "Eta",
    "Alpha",
    "Beta",
    "Gamma",
    "Delta",
    "A*",
    "Options",
    "ReceptorMode",
    "TransmitterMode",
    "ThetaMode",
];

/// Self-regulating activation with weight co-adaptation ("SRN")
#[derive(Debug, Clone, PartialEq)]
pub struct SelfRegulatingActivation {
    xi: f64,
    eta: f64,
    coefficients: SrnCoefficients,
    options: String,
    flags: SrnOptions,
    receptor_mode: ReceptorMode,
    transmitter_mode: TransmitterMode,
    bias_mode: BiasMode,
    activation_two_steps_ago: f64,
}

impl Default for SelfRegulatingActivation {
    fn default() -> Self {
        Self::new()
    }
}

impl SelfRegulatingActivation {
    pub const NAME: &'static str = "SRN";

    pub fn new() -> Self {
        Self {
            xi: 1.0,
            eta: 1.0,
            coefficients: SrnCoefficients::default(),
            options: DEFAULT_OPTIONS.to_string(),
            flags: SrnOptions::parse(DEFAULT_OPTIONS),
            receptor_mode: ReceptorMode::default(),
            transmitter_mode: TransmitterMode::default(),
            bias_mode: BiasMode::default(),
            activation_two_steps_ago: 0.0,
        }
    }

    pub fn with_coefficients(mut self, coefficients: SrnCoefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn with_options(mut self, options: &str) -> Self {
        self.set_options(options);
        self
    }

    pub fn with_modes(mut self, receptor: ReceptorMode, transmitter: TransmitterMode, bias: BiasMode) -> Self {
        self.receptor_mode = receptor;
        self.transmitter_mode = transmitter;
        self.bias_mode = bias;
        self
    }

    pub fn xi(&self) -> f64 {
        self.xi
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Set `xi`, clamped to ±[`REGULATION_LIMIT`]; NaN is ignored
    pub fn set_xi(&mut self, xi: f64) {
        self.xi = self.regulated("xi", self.xi, xi);
    }

    /// Set `eta`, clamped to ±[`REGULATION_LIMIT`]; NaN is ignored
    pub fn set_eta(&mut self, eta: f64) {
        self.eta = self.regulated("eta", self.eta, eta);
    }

    pub fn coefficients(&self) -> SrnCoefficients {
        self.coefficients
    }

    pub fn set_coefficients(&mut self, coefficients: SrnCoefficients) {
        self.coefficients = coefficients;
    }

    /// Options string as configured
    pub fn options(&self) -> &str {
        &self.options
    }

    pub fn flags(&self) -> SrnOptions {
        self.flags
    }

    /// Replace the options string and re-derive every flag from it
    pub fn set_options(&mut self, options: &str) {
        self.options = options.to_string();
        self.flags = SrnOptions::parse(options);
    }

    pub fn receptor_mode(&self) -> ReceptorMode {
        self.receptor_mode
    }

    pub fn set_receptor_mode(&mut self, mode: ReceptorMode) {
        self.receptor_mode = mode;
    }

    pub fn transmitter_mode(&self) -> TransmitterMode {
        self.transmitter_mode
    }

    pub fn set_transmitter_mode(&mut self, mode: TransmitterMode) {
        self.transmitter_mode = mode;
    }

    pub fn bias_mode(&self) -> BiasMode {
        self.bias_mode
    }

    pub fn set_bias_mode(&mut self, mode: BiasMode) {
        self.bias_mode = mode;
    }

    /// Owner's activation captured at the start of the previous call
    pub fn activation_two_steps_ago(&self) -> f64 {
        self.activation_two_steps_ago
    }

    /// Weighted input of all enabled incoming synapses; adapts link strengths
    fn collect_input(&self, owner: &mut Neuron, sources: &dyn SourceLookup) -> f64 {
        let flags = self.flags;
        let mut input_sum = 0.0;

        for synapse in owner.synapses_mut() {
            if !synapse.is_enabled() {
                continue;
            }
            let Some(source) = synapse.source().and_then(|id| sources.source_state(id)) else {
                continue;
            };

            let is_link = !flags.restrict_to_link_synapses
                || synapse.synapse_function().is_some_and(|f| f.is_simple_link());
            if !is_link {
                input_sum += synapse.calculate_activation(sources);
                continue;
            }

            let source_gain = source.regulation_gain.unwrap_or(1.0);
            let sign = link_sign(synapse.strength());
            if flags.adjust_weights {
                synapse.set_strength(adapted_link_strength(sign, source_gain, self.xi));
            }
            input_sum += sign * source_gain * source.output_activation;
        }

        input_sum
    }

    fn regulated(&self, label: &str, previous: f64, next: f64) -> f64 {
        if next.is_nan() {
            warn!(target: "nerd-neural", "SRN {} would become NaN, keeping {}", label, previous);
            return previous;
        }
        next.clamp(-REGULATION_LIMIT, REGULATION_LIMIT)
    }
}

impl ActivationFunction for SelfRegulatingActivation {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn calculate_activation(
        &mut self,
        owner: Option<&mut Neuron>,
        sources: &dyn SourceLookup,
    ) -> f64 {
        let Some(owner) = owner else {
            return 0.0;
        };

        let input_sum = self.collect_input(owner, sources);
        let bias = owner.bias();
        let activation = bias + self.xi * input_sum;

        let last_activation = owner.last_activation();
        let (used, prior) = if self.flags.use_current_activations {
            (activation, last_activation)
        } else {
            (last_activation, self.activation_two_steps_ago)
        };

        let SrnCoefficients { alpha, beta, gamma, delta, a_star } = self.coefficients;
        let owner_ref: &Neuron = &*owner;
        let (g, h, bias_change) = match owner_ref.transfer_function() {
            Some(tf) => {
                let tf = |x: f64| tf.transfer_activation(x, owner_ref);
                (
                    self.receptor_mode.gain(tf, used, a_star, bias),
                    self.transmitter_mode.drive(tf, used, prior, bias),
                    self.bias_mode.bias_change(tf, used, prior, alpha),
                )
            }
            None => (0.0, 0.0, None),
        };

        let epsilon = if self.flags.add_epsilon { REGULATION_EPSILON } else { 0.0 };
        self.xi = self.regulated("xi", self.xi, epsilon + self.xi * (1.0 + beta * g));
        self.eta = self.regulated(
            "eta",
            self.eta,
            epsilon + (1.0 - gamma) * self.eta + delta * h,
        );

        if let Some(change) = bias_change {
            owner.set_bias(bias + change);
        }

        self.activation_two_steps_ago = last_activation;
        activation
    }

    fn reset(&mut self) {
        self.xi = 1.0;
        self.eta = 1.0;
        self.activation_two_steps_ago = 0.0;
    }

    fn create_copy(&self) -> Box<dyn ActivationFunction> {
        let mut copy = self.clone();
        copy.reset();
        Box::new(copy)
    }

    fn equals(&self, other: &dyn ActivationFunction) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| other.coefficients == self.coefficients)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_regulation_gain(&self) -> Option<&dyn ProvidesRegulationGain> {
        Some(self)
    }

    fn observable_outputs(&self) -> Vec<(&'static str, f64)> {
        vec![("Xi", self.xi), ("Eta", self.eta)]
    }
}

impl ProvidesRegulationGain for SelfRegulatingActivation {
    fn regulation_gain(&self) -> f64 {
        self.eta
    }
}

impl Parameterized for SelfRegulatingActivation {
    fn parameter_names(&self) -> &'static [&'static str] {
        PARAMETER_NAMES
    }

    fn parameter(&self, name: &str) -> Option<ParameterValue> {
        let c = &self.coefficients;
        let value = match name {
            "Xi" | "Xi (Rec)" => self.xi.into(),
            "Eta" | "Eta (Tra)" => self.eta.into(),
            "Alpha" => c.alpha.into(),
            "Beta" => c.beta.into(),
            "Gamma" => c.gamma.into(),
            "Delta" => c.delta.into(),
            "A*" => c.a_star.into(),
            "Options" => self.options.clone().into(),
            "ReceptorMode" => self.receptor_mode.as_i64().into(),
            "TransmitterMode" => self.transmitter_mode.as_i64().into(),
            "ThetaMode" => self.bias_mode.as_i64().into(),
            _ => return None,
        };
        Some(value)
    }

    fn set_parameter(&mut self, name: &str, value: ParameterValue) -> Result<()> {
        match name {
            "Xi" | "Xi (Rec)" => self.set_xi(value.expect_f64(name)?),
            "Eta" | "Eta (Tra)" => self.set_eta(value.expect_f64(name)?),
            "Alpha" => self.coefficients.alpha = value.expect_f64(name)?,
            "Beta" => self.coefficients.beta = value.expect_f64(name)?,
            "Gamma" => self.coefficients.gamma = value.expect_f64(name)?,
            "Delta" => self.coefficients.delta = value.expect_f64(name)?,
            "A*" => self.coefficients.a_star = value.expect_f64(name)?,
            "Options" => self.set_options(value.expect_str(name)?),
            "ReceptorMode" => self.receptor_mode = ReceptorMode::from_i64(value.expect_i64(name)?),
            "TransmitterMode" => {
                self.transmitter_mode = TransmitterMode::from_i64(value.expect_i64(name)?)
            }
            "ThetaMode" => self.bias_mode = BiasMode::from_i64(value.expect_i64(name)?),
            _ => {
                return Err(NeuralError::UnknownParameter {
                    function: Self::NAME.to_string(),
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}
