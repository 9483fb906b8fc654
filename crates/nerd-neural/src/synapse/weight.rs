// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Synaptic weight helpers for link synapses
//!
//! Pure functions for weight manipulation. A link synapse only carries a sign;
//! its magnitude is supplied by the regulation gains of the two neurons it
//! connects.

/// Sign of a synaptic strength, with zero treated as positive
///
/// # Example
/// ```
/// use nerd_neural::synapse::link_sign;
///
/// assert_eq!(link_sign(0.3), 1.0);
/// assert_eq!(link_sign(0.0), 1.0);
/// assert_eq!(link_sign(-2.0), -1.0);
/// ```
#[inline]
pub fn link_sign(strength: f64) -> f64 {
    if strength < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Strength of a link synapse after weight co-adaptation
///
/// `strength = sign × eta_source × xi_target`, flipped once more if the
/// product ended up with the opposite sign, so a link never changes polarity.
///
/// # Example
/// ```
/// use nerd_neural::synapse::adapted_link_strength;
///
/// assert_eq!(adapted_link_strength(1.0, 1.0, 1.0), 1.0);
/// assert_eq!(adapted_link_strength(-1.0, 2.0, 0.5), -1.0);
/// assert_eq!(adapted_link_strength(1.0, -2.0, 0.5), 1.0); // Polarity kept
/// ```
#[inline]
pub fn adapted_link_strength(sign: f64, source_gain: f64, xi: f64) -> f64 {
    let strength = sign * source_gain * xi;
    if link_sign(strength) != sign {
        -strength
    } else {
        strength
    }
}
