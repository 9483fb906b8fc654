// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration → network wiring

use nerd_config::{NerdConfig, SrnConfig};
use nerd_neural::models::{
    AdditiveTimeDiscreteActivation, BiasMode, ReceptorMode, SelfRegulatingActivation,
    SrnCoefficients, TransmitterMode,
};
use nerd_neural::network::NeuralNetwork;
use nerd_neural::synapse::SimpleLinkSynapseFunction;
use nerd_neural::transfer::{
    TransferFunction, TransferFunctionIdentity, TransferFunctionRamp, TransferFunctionSigmoid,
    TransferFunctionTanh,
};
use nerd_neural::types::NeuronId;
use nerd_observability::ObservabilityConfig;
use tracing::debug;

use crate::{NerdError, Result};

/// Transfer function named by `srn.transfer_function`
pub fn transfer_from_config(config: &SrnConfig) -> Result<Box<dyn TransferFunction>> {
    let tf: Box<dyn TransferFunction> = match config.transfer_function.to_lowercase().as_str() {
        "tanh" => Box::new(TransferFunctionTanh),
        "sigmoid" => Box::new(TransferFunctionSigmoid),
        "ramp" => Box::new(TransferFunctionRamp::default()),
        "identity" => Box::new(TransferFunctionIdentity),
        _ => return Err(NerdError::UnknownTransferFunction(config.transfer_function.clone())),
    };
    Ok(tf)
}

/// Self-regulating activation carrying the configured coefficients, modes and options
pub fn srn_from_config(config: &SrnConfig) -> SelfRegulatingActivation {
    SelfRegulatingActivation::new()
        .with_coefficients(SrnCoefficients {
            alpha: config.alpha,
            beta: config.beta,
            gamma: config.gamma,
            delta: config.delta,
            a_star: config.a_star,
        })
        .with_options(&config.options)
        .with_modes(
            ReceptorMode::from_i64(config.receptor_mode),
            TransmitterMode::from_i64(config.transmitter_mode),
            BiasMode::from_i64(config.theta_mode),
        )
}

/// Logging settings from `system.log_level` and the `[logging]` section
pub fn observability_config(config: &NerdConfig) -> ObservabilityConfig {
    ObservabilityConfig {
        level: config.system.log_level.clone(),
        log_to_file: config.logging.log_to_file,
        log_dir: config.logging.log_dir.clone(),
        retention_days: config.logging.retention_days,
        ..ObservabilityConfig::default()
    }
}

/// Two self-regulating neurons in an excitatory/inhibitory loop, driven by
/// one input neuron
///
/// ```text
/// input ──(+w)──▶ x ──(+w)──▶ y
///                 ▲           │
///                 └───(-w)────┘
/// ```
#[derive(Debug)]
pub struct SrnLoop {
    pub network: NeuralNetwork,
    pub input: NeuronId,
    pub x: NeuronId,
    pub y: NeuronId,
}

/// Build the [`SrnLoop`] described by `config`
pub fn build_srn_loop(config: &NerdConfig) -> Result<SrnLoop> {
    let srn = &config.srn;
    let simulation = &config.simulation;
    let mut network = NeuralNetwork::new();

    let input = network.add_neuron(
        "input",
        Box::new(TransferFunctionIdentity),
        Box::new(AdditiveTimeDiscreteActivation::new()),
    )?;
    let x = network.add_neuron("x", transfer_from_config(srn)?, Box::new(srn_from_config(srn)))?;
    let y = network.add_neuron("y", transfer_from_config(srn)?, Box::new(srn_from_config(srn)))?;

    for id in [x, y] {
        if let Some(neuron) = network.neuron_mut(id) {
            neuron.set_bias(simulation.bias);
        }
    }

    let w = simulation.loop_strength.abs();
    network.add_synapse(input, x, w, Box::new(SimpleLinkSynapseFunction))?;
    network.add_synapse(x, y, w, Box::new(SimpleLinkSynapseFunction))?;
    network.add_synapse(y, x, -w, Box::new(SimpleLinkSynapseFunction))?;
    network.set_input(input, simulation.input)?;

    debug!(
        target: "nerd",
        "built SRN loop: options '{}', modes {}/{}/{}, transfer {}",
        srn.options, srn.receptor_mode, srn.transmitter_mode, srn.theta_mode, srn.transfer_function
    );

    Ok(SrnLoop { network, input, x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nerd_neural::models::ActivationFunction;
    use nerd_neural::types::{ParameterValue, Parameterized};

    #[test]
    fn test_srn_from_config() {
        let config = SrnConfig {
            alpha: 0.3,
            options: "rl, e".to_string(),
            receptor_mode: 3,
            theta_mode: 1,
            ..SrnConfig::default()
        };
        let srn = srn_from_config(&config);

        assert_eq!(srn.parameter("Alpha"), Some(ParameterValue::Double(0.3)));
        assert_eq!(srn.parameter("A*"), Some(ParameterValue::Double(0.658479)));
        assert!(srn.flags().restrict_to_link_synapses);
        assert!(srn.flags().add_epsilon);
        assert_eq!(srn.receptor_mode(), ReceptorMode::BiasSquaredDistance);
        assert_eq!(srn.bias_mode(), BiasMode::Adaptive);
        assert!(srn.equals(&srn_from_config(&config)));
    }

    #[test]
    fn test_transfer_from_config() {
        let mut config = SrnConfig::default();
        assert_eq!(transfer_from_config(&config).unwrap().name(), TransferFunctionTanh.name());

        config.transfer_function = "Sigmoid".to_string();
        assert!(transfer_from_config(&config).is_ok());

        config.transfer_function = "relu".to_string();
        assert!(matches!(
            transfer_from_config(&config),
            Err(NerdError::UnknownTransferFunction(_))
        ));
    }

    #[test]
    fn test_build_srn_loop() {
        let srn_loop = build_srn_loop(&NerdConfig::default()).unwrap();
        assert_eq!(srn_loop.network.neuron_count(), 3);
        assert_eq!(srn_loop.network.synapse_count(), 3);
        assert_eq!(srn_loop.network.regulation_states().len(), 2);
        assert!(srn_loop.network.neuron(srn_loop.input).unwrap().is_input());
    }

    #[test]
    fn test_observability_config() {
        let mut config = NerdConfig::default();
        config.system.log_level = "WARNING".to_string();
        config.logging.retention_days = 3;

        let obs = observability_config(&config);
        assert_eq!(obs.level, "WARNING");
        assert_eq!(obs.retention_days, 3);
        assert!(!obs.log_to_file);
    }
}
