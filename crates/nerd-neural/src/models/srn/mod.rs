// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Self-regulating neuron (SRN) activation with weight co-adaptation

pub mod activation;
pub mod modes;
pub mod options;

pub use activation::{
    SelfRegulatingActivation, SrnCoefficients, REGULATION_EPSILON, REGULATION_LIMIT,
};
pub use modes::{BiasMode, ReceptorMode, TransmitterMode};
pub use options::{SrnOptions, DEFAULT_OPTIONS};
