// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Synapse: a weighted connection from a source neuron into its target

use crate::network::SourceLookup;
use crate::types::{NeuronId, SynapseId};

use super::function::{SimpleSynapseFunction, SynapseFunction};

/// An incoming connection of a neuron
///
/// Synapses are owned by their target neuron; the source is referenced by id
/// and resolved through a [`SourceLookup`] each step.
#[derive(Debug)]
pub struct Synapse {
    id: SynapseId,
    source: Option<NeuronId>,
    strength: f64,
    enabled: bool,
    function: Option<Box<dyn SynapseFunction>>,
    current_activation: f64,
}

impl Synapse {
    pub fn new(
        id: SynapseId,
        source: Option<NeuronId>,
        strength: f64,
        function: Box<dyn SynapseFunction>,
    ) -> Self {
        Self {
            id,
            source,
            strength,
            enabled: true,
            function: Some(function),
            current_activation: 0.0,
        }
    }

    /// Weighted synapse with [`SimpleSynapseFunction`]
    pub fn simple(id: SynapseId, source: NeuronId, strength: f64) -> Self {
        Self::new(id, Some(source), strength, Box::new(SimpleSynapseFunction))
    }

    pub fn id(&self) -> SynapseId {
        self.id
    }

    pub fn source(&self) -> Option<NeuronId> {
        self.source
    }

    pub fn set_source(&mut self, source: Option<NeuronId>) {
        self.source = source;
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn set_strength(&mut self, strength: f64) {
        self.strength = strength;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn synapse_function(&self) -> Option<&dyn SynapseFunction> {
        self.function.as_deref()
    }

    pub fn set_synapse_function(&mut self, function: Option<Box<dyn SynapseFunction>>) {
        self.function = function;
    }

    /// Last value produced by [`Synapse::calculate_activation`]
    pub fn activation(&self) -> f64 {
        self.current_activation
    }

    /// Signal arriving at the target this step
    ///
    /// `source.last_output × f(strength)` when enabled, `0.0` when disabled.
    /// The synapse function runs in both cases. A synapse without a resolvable
    /// source or function keeps its previous value.
    pub fn calculate_activation(&mut self, sources: &dyn SourceLookup) -> f64 {
        let source_state = self.source.and_then(|id| sources.source_state(id));
        if let (Some(state), Some(function)) = (source_state, self.function.as_mut()) {
            let factor = function.calculate(self.strength);
            self.current_activation = if self.enabled {
                state.last_output_activation * factor
            } else {
                0.0
            };
        }
        self.current_activation
    }

    pub fn reset(&mut self) {
        self.current_activation = 0.0;
    }

    /// Copy with the same source, strength, flag and function
    pub fn create_copy(&self) -> Self {
        Self {
            id: self.id,
            source: self.source,
            strength: self.strength,
            enabled: self.enabled,
            function: self.function.as_ref().map(|f| f.create_copy()),
            current_activation: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::SourceState;
    use std::collections::HashMap;

    struct Sources(HashMap<NeuronId, SourceState>);

    impl SourceLookup for Sources {
        fn source_state(&self, id: NeuronId) -> Option<SourceState> {
            self.0.get(&id).copied()
        }
    }

    fn sources(last_output: f64) -> Sources {
        let mut map = HashMap::new();
        map.insert(
            NeuronId(0),
            SourceState {
                output_activation: 0.0,
                last_output_activation: last_output,
                regulation_gain: None,
            },
        );
        Sources(map)
    }

    #[test]
    fn test_enabled_synapse_uses_last_output() {
        let mut s = Synapse::simple(SynapseId(0), NeuronId(0), 0.5);
        assert_eq!(s.calculate_activation(&sources(2.0)), 1.0);
        assert_eq!(s.activation(), 1.0);
    }

    #[test]
    fn test_disabled_synapse_is_silent() {
        let mut s = Synapse::simple(SynapseId(0), NeuronId(0), 0.5);
        s.set_enabled(false);
        assert_eq!(s.calculate_activation(&sources(2.0)), 0.0);
    }

    #[test]
    fn test_missing_source_keeps_previous_value() {
        let mut s = Synapse::simple(SynapseId(0), NeuronId(0), 0.5);
        assert_eq!(s.calculate_activation(&sources(2.0)), 1.0);
        s.set_source(Some(NeuronId(9)));
        assert_eq!(s.calculate_activation(&sources(2.0)), 1.0);
        s.reset();
        assert_eq!(s.activation(), 0.0);
    }
}
