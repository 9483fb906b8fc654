// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Activation Function Architecture
//!
//! Activation functions compute a neuron's raw activation each step. They are
//! trait objects owned by their neuron, so one network can mix models.
//!
//! ## Adding a New Activation Function
//!
//! 1. Create `src/models/your_function.rs`
//! 2. Implement `ActivationFunction` (and `Parameterized` for its tunables)
//! 3. Implement `ProvidesRegulationGain` if downstream neurons should see a gain
//! 4. Add tests
//! 5. Export in `mod.rs`

pub mod additive;
pub mod srn;
pub mod traits;

// Re-export core types
pub use additive::AdditiveTimeDiscreteActivation;
pub use srn::{
    BiasMode, ReceptorMode, SelfRegulatingActivation, SrnCoefficients, SrnOptions,
    TransmitterMode,
};
pub use traits::{ActivationFunction, ProvidesRegulationGain};
