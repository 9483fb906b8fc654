// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Whole-network scenarios for self-regulating neurons

use nerd_neural::models::{AdditiveTimeDiscreteActivation, SelfRegulatingActivation};
use nerd_neural::network::NeuralNetwork;
use nerd_neural::synapse::SimpleLinkSynapseFunction;
use nerd_neural::transfer::{TransferFunctionIdentity, TransferFunctionTanh};
use nerd_neural::types::NeuronId;

fn srn_of(net: &NeuralNetwork, id: NeuronId) -> &SelfRegulatingActivation {
    net.neuron(id)
        .and_then(|n| n.activation_function_as::<SelfRegulatingActivation>())
        .expect("neuron should be self-regulating")
}

/// Constant input of 2.0 into an SRN through a +1 link
fn input_into_srn(options: &str) -> (NeuralNetwork, NeuronId, NeuronId) {
    let mut net = NeuralNetwork::new();
    let source = net.add_neuron(
        "source",
        Box::new(TransferFunctionIdentity),
        Box::new(AdditiveTimeDiscreteActivation::new()),
    )
    .unwrap();
    let target = net.add_neuron(
        "target",
        Box::new(TransferFunctionTanh),
        Box::new(SelfRegulatingActivation::new().with_options(options)),
    )
    .unwrap();
    net.add_synapse(source, target, 1.0, Box::new(SimpleLinkSynapseFunction))
        .unwrap();
    net.set_input(source, 2.0).unwrap();
    (net, source, target)
}

#[test]
fn test_first_step_without_weight_adjustment() {
    let (mut net, _, target) = input_into_srn("");
    net.execute_step();

    let n = net.neuron(target).unwrap();
    assert_eq!(n.activation(), 2.0);
    assert_eq!(n.synapses()[0].strength(), 1.0);
}

#[test]
fn test_first_step_with_weight_adjustment() {
    let (mut net, _, target) = input_into_srn("w");
    net.execute_step();

    let n = net.neuron(target).unwrap();
    assert_eq!(n.activation(), 2.0);
    assert_eq!(n.synapses()[0].strength(), 1.0);
}

#[test]
fn test_adjusted_strength_follows_receptor_gain() {
    let (mut net, _, target) = input_into_srn("w");
    net.execute_step();
    let xi = srn_of(&net, target).xi();
    assert_ne!(xi, 1.0);

    // Additive source: gain 1, strength becomes the target's xi
    net.execute_step();
    let strength = net.neuron(target).unwrap().synapses()[0].strength();
    assert_eq!(strength, xi);
    assert_eq!(net.neuron(target).unwrap().activation(), xi * 2.0);
}

#[test]
fn test_srn_source_contributes_with_pre_sweep_gain() {
    let mut net = NeuralNetwork::new();
    let a = net.add_neuron(
        "a",
        Box::new(TransferFunctionTanh),
        Box::new(SelfRegulatingActivation::new().with_options("t+1")),
    )
    .unwrap();
    let b = net.add_neuron(
        "b",
        Box::new(TransferFunctionTanh),
        Box::new(SelfRegulatingActivation::new().with_options("")),
    )
    .unwrap();
    net.neuron_mut(a).unwrap().set_bias(0.5);
    net.add_synapse(a, b, 1.0, Box::new(SimpleLinkSynapseFunction)).unwrap();

    net.execute_step();
    let eta_a = srn_of(&net, a).eta();
    let out_a = net.neuron(a).unwrap().output_activation();
    let xi_b = srn_of(&net, b).xi();
    assert_ne!(eta_a, 1.0);

    // a is updated before b, yet b must see a's gain from before the sweep
    net.execute_step();
    let expected = xi_b * eta_a * out_a;
    assert!((net.neuron(b).unwrap().activation() - expected).abs() < 1e-12);
    assert_ne!(srn_of(&net, a).eta(), eta_a);
}

#[test]
fn test_two_neuron_loop_stays_bounded() {
    let mut net = NeuralNetwork::new();
    let x = net.add_neuron(
        "x",
        Box::new(TransferFunctionTanh),
        Box::new(SelfRegulatingActivation::new().with_options("w,e")),
    )
    .unwrap();
    let y = net.add_neuron(
        "y",
        Box::new(TransferFunctionTanh),
        Box::new(SelfRegulatingActivation::new().with_options("w,e")),
    )
    .unwrap();
    net.neuron_mut(x).unwrap().set_bias(0.2);
    net.add_synapse(x, y, 1.0, Box::new(SimpleLinkSynapseFunction)).unwrap();
    net.add_synapse(y, x, -1.0, Box::new(SimpleLinkSynapseFunction)).unwrap();
    net.add_synapse(x, x, 0.5, Box::new(SimpleLinkSynapseFunction)).unwrap();

    net.run(500);
    for state in net.regulation_states() {
        assert!(state.xi.abs() <= 100.0 && state.xi.is_finite());
        assert!(state.eta.abs() <= 100.0 && state.eta.is_finite());
        assert!(state.output.abs() <= 1.0);
    }

    // Polarity of every link survives adaptation
    assert!(net.neuron(x).unwrap().synapses()[0].strength() < 0.0);
    assert!(net.neuron(y).unwrap().synapses()[0].strength() >= 0.0);
}

#[test]
fn test_reset_restores_initial_gains() {
    let (mut net, _, target) = input_into_srn("w,t+1");
    net.run(20);
    net.reset();

    let srn = srn_of(&net, target);
    assert_eq!((srn.xi(), srn.eta()), (1.0, 1.0));
    assert_eq!(srn.activation_two_steps_ago(), 0.0);
    assert_eq!(net.neuron(target).unwrap().activation(), 0.0);
}

/// input → x ⇄ y with x self-excited, neurons added in `order`
fn loop_in_order(order: [&str; 3]) -> NeuralNetwork {
    let mut net = NeuralNetwork::new();
    let mut ids = std::collections::HashMap::new();
    for name in order {
        let id = if name == "input" {
            net.add_neuron(
                name,
                Box::new(TransferFunctionIdentity),
                Box::new(AdditiveTimeDiscreteActivation::new()),
            )
        } else {
            net.add_neuron(
                name,
                Box::new(TransferFunctionTanh),
                Box::new(SelfRegulatingActivation::new().with_options("w,t+1")),
            )
        }
        .unwrap();
        ids.insert(name, id);
    }

    net.neuron_mut(ids["x"]).unwrap().set_bias(0.1);
    net.neuron_mut(ids["y"]).unwrap().set_bias(-0.2);
    for (source, target, strength) in [("input", "x", 1.0), ("y", "x", -1.0), ("x", "x", 0.5), ("x", "y", 1.0)] {
        net.add_synapse(ids[source], ids[target], strength, Box::new(SimpleLinkSynapseFunction))
            .unwrap();
    }
    net.set_input(ids["input"], 0.7).unwrap();
    net
}

#[test]
fn test_step_results_independent_of_insertion_order() {
    let mut forward = loop_in_order(["input", "x", "y"]);
    let mut backward = loop_in_order(["y", "x", "input"]);
    forward.run(25);
    backward.run(25);

    for name in ["input", "x", "y"] {
        let a = forward.neurons().iter().find(|n| n.name() == name).unwrap();
        let b = backward.neurons().iter().find(|n| n.name() == name).unwrap();

        assert_eq!(a.activation(), b.activation(), "activation of {}", name);
        assert_eq!(a.output_activation(), b.output_activation(), "output of {}", name);
        assert_eq!(a.bias(), b.bias(), "bias of {}", name);
        assert_eq!(a.regulation_gain(), b.regulation_gain(), "eta of {}", name);

        let strengths = |n: &nerd_neural::network::Neuron| -> Vec<f64> {
            n.synapses().iter().map(|s| s.strength()).collect()
        };
        assert_eq!(strengths(a), strengths(b), "strengths into {}", name);

        if let (Some(sa), Some(sb)) = (
            a.activation_function_as::<SelfRegulatingActivation>(),
            b.activation_function_as::<SelfRegulatingActivation>(),
        ) {
            assert_eq!((sa.xi(), sa.eta()), (sb.xi(), sb.eta()), "gains of {}", name);
        }
    }

    // The loop actually adapted, so the comparison is not between initial values
    let x = forward.neurons().iter().find(|n| n.name() == "x").unwrap();
    assert_ne!(x.activation_function_as::<SelfRegulatingActivation>().unwrap().xi(), 1.0);
}
