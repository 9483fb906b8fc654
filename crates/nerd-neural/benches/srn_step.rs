// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! SRN sweep benchmarks
//!
//! Notes:
//! - Ring networks with fixed fan-in, no I/O.
//! - Compares the self-regulating activation against the additive baseline.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nerd_neural::models::{ActivationFunction, AdditiveTimeDiscreteActivation, SelfRegulatingActivation};
use nerd_neural::network::NeuralNetwork;
use nerd_neural::synapse::SimpleLinkSynapseFunction;
use nerd_neural::transfer::TransferFunctionTanh;

fn create_ring(
    neuron_count: usize,
    fan_in: usize,
    activation: impl Fn() -> Box<dyn ActivationFunction>,
) -> NeuralNetwork {
    let mut net = NeuralNetwork::new();
    let ids: Vec<_> = (0..neuron_count)
        .filter_map(|i| {
            net.add_neuron(format!("n{}", i), Box::new(TransferFunctionTanh), activation())
                .ok()
        })
        .collect();

    for (target_idx, &target) in ids.iter().enumerate() {
        for offset in 1..=fan_in {
            let source = ids[(target_idx + offset) % neuron_count];
            let strength = if offset % 4 == 0 { -0.5 } else { 0.5 };
            let _ = net.add_synapse(source, target, strength, Box::new(SimpleLinkSynapseFunction));
        }
    }
    let _ = net.set_input(ids[0], 0.8);
    net
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("srn_sweep");
    group.sample_size(20);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for &neuron_count in &[100usize, 1_000] {
        let fan_in = 10;
        group.throughput(Throughput::Elements((neuron_count * fan_in) as u64));

        let mut srn_net = create_ring(neuron_count, fan_in, || Box::new(SelfRegulatingActivation::new()));
        group.bench_with_input(BenchmarkId::new("srn", neuron_count), &neuron_count, |b, _| {
            b.iter(|| {
                srn_net.execute_step();
                black_box(srn_net.step_count());
            });
        });

        let mut additive_net =
            create_ring(neuron_count, fan_in, || Box::new(AdditiveTimeDiscreteActivation::new()));
        group.bench_with_input(BenchmarkId::new("additive", neuron_count), &neuron_count, |b, _| {
            b.iter(|| {
                additive_net.execute_step();
                black_box(additive_net.step_count());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
