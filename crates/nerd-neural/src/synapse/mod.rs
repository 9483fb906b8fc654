// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! Synaptic computation module
//!
//! Connections, synapse functions and the link-weight helpers used by
//! self-regulating neurons.

pub mod connection;
pub mod function;
pub mod weight;

pub use connection::Synapse;
pub use function::{SimpleLinkSynapseFunction, SimpleSynapseFunction, SynapseFunction};
pub use weight::*;
