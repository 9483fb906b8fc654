// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Additive Time-Discrete Activation
//!
//! The default activation function of a discrete-time network:
//!
//! ```text
//! a_i(t+1) = theta_i + Σ_j w_ij × o_j(t)
//! ```
//!
//! History independent: repeated calls with the same inputs return the same value.

use core::any::Any;

use crate::network::{Neuron, SourceLookup};
use crate::types::Parameterized;

use super::traits::ActivationFunction;

#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveTimeDiscreteActivation;

impl AdditiveTimeDiscreteActivation {
    pub const NAME: &'static str = "AdditiveTD";

    pub fn new() -> Self {
        Self
    }
}

impl Parameterized for AdditiveTimeDiscreteActivation {}

impl ActivationFunction for AdditiveTimeDiscreteActivation {
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
        let mut activation = owner.bias();
        for synapse in owner.synapses_mut() {
            activation += synapse.calculate_activation(sources);
        }
        activation
    }

    fn create_copy(&self) -> Box<dyn ActivationFunction> {
        Box::new(*self)
    }

    fn equals(&self, other: &dyn ActivationFunction) -> bool {
        other.as_any().is::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelfRegulatingActivation;
    use crate::network::{SourceState, SourceLookup};
    use crate::synapse::Synapse;
    use crate::types::{NeuronId, SynapseId};

    /// Every source reports a last output of 1.0
    struct UnitSources;

    impl SourceLookup for UnitSources {
        fn source_state(&self, _id: NeuronId) -> Option<SourceState> {
            Some(SourceState {
                output_activation: 1.0,
                last_output_activation: 1.0,
                regulation_gain: None,
            })
        }
    }

    #[test]
    fn test_no_owner_returns_zero() {
        let mut af = AdditiveTimeDiscreteActivation::new();
        assert_eq!(af.calculate_activation(None, &UnitSources), 0.0);
    }

    #[test]
    fn test_bias_plus_weighted_sum() {
        let mut af = AdditiveTimeDiscreteActivation::new();
        let mut n = Neuron::new(NeuronId(0), "n");
        assert_eq!(af.calculate_activation(Some(&mut n), &UnitSources), 0.0);

        n.set_bias(0.355);
        assert_eq!(af.calculate_activation(Some(&mut n), &UnitSources), 0.355);

        n.add_synapse(Synapse::simple(SynapseId(0), NeuronId(1), 1.0));
        assert_eq!(af.calculate_activation(Some(&mut n), &UnitSources), 1.355);

        n.add_synapse(Synapse::simple(SynapseId(1), NeuronId(2), 159.0001));
        n.add_synapse(Synapse::simple(SynapseId(2), NeuronId(3), 0.12121));
        for _ in 0..10 {
            let activation = af.calculate_activation(Some(&mut n), &UnitSources);
            assert!((activation - 160.47631).abs() < 1e-5);
        }
    }

    #[test]
    fn test_equals_by_type() {
        let af = AdditiveTimeDiscreteActivation::new();
        let copy = af.create_copy();
        assert!(af.equals(copy.as_ref()));
        assert!(!af.equals(&SelfRegulatingActivation::new()));
    }
}
