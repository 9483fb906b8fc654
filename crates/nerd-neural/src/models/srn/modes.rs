// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Regulation formula selectors
//!
//! ```text
//! receptor g(a):                    transmitter h(a):
//!   0  |tf(a*)| - |tf(a)|             0  1 + tf(a)
//!   1  tf(a*)² - tf(a)²               1  1 + 0.5 × (tf(a) - tf(a_prior))
//!   2  tf(θ) - tf(a)                  2  1 + (tf(a) - θ)
//!   3  θ - tf(a)²                     3  |tf(a)|
//!
//! bias (θ):
//!   0  static
//!   1  θ += α × (tf(a) - tf(a_prior))
//! ```
//!
//! Any other mode number evaluates to 0 (bias: no change).

/// Selects the receptor (xi) gain formula `g`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceptorMode {
    /// `|tf(a*)| - |tf(a)|`
    #[default]
    AbsoluteDistance,
    /// `tf(a*)² - tf(a)²`
    SquaredDistance,
    /// `tf(bias) - tf(a)`
    BiasDistance,
    /// `bias - tf(a)²`
    BiasSquaredDistance,
    Unsupported(i64),
}

impl ReceptorMode {
    pub fn from_i64(mode: i64) -> Self {
        match mode {
            0 => Self::AbsoluteDistance,
            1 => Self::SquaredDistance,
            2 => Self::BiasDistance,
            3 => Self::BiasSquaredDistance,
            other => Self::Unsupported(other),
        }
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            Self::AbsoluteDistance => 0,
            Self::SquaredDistance => 1,
            Self::BiasDistance => 2,
            Self::BiasSquaredDistance => 3,
            Self::Unsupported(other) => *other,
        }
    }

    /// `g(used)`
    pub fn gain(&self, tf: impl Fn(f64) -> f64, used: f64, a_star: f64, bias: f64) -> f64 {
        match self {
            Self::AbsoluteDistance => tf(a_star).abs() - tf(used).abs(),
            Self::SquaredDistance => tf(a_star).powi(2) - tf(used).powi(2),
            Self::BiasDistance => tf(bias) - tf(used),
            Self::BiasSquaredDistance => bias - tf(used).powi(2),
            Self::Unsupported(_) => 0.0,
        }
    }
}

/// Selects the transmitter (eta) drive formula `h`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransmitterMode {
    /// `1 + tf(a)`
    #[default]
    Activation,
    /// `1 + 0.5 × (tf(a) - tf(a_prior))`
    ActivationChange,
    /// `1 + (tf(a) - bias)`
    BiasOffset,
    /// `|tf(a)|`
    Magnitude,
    Unsupported(i64),
}

impl TransmitterMode {
    pub fn from_i64(mode: i64) -> Self {
        match mode {
            0 => Self::Activation,
            1 => Self::ActivationChange,
            2 => Self::BiasOffset,
            3 => Self::Magnitude,
            other => Self::Unsupported(other),
        }
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Activation => 0,
            Self::ActivationChange => 1,
            Self::BiasOffset => 2,
            Self::Magnitude => 3,
            Self::Unsupported(other) => *other,
        }
    }

    /// `h(used)`
    pub fn drive(&self, tf: impl Fn(f64) -> f64, used: f64, prior: f64, bias: f64) -> f64 {
        match self {
            Self::Activation => 1.0 + tf(used),
            Self::ActivationChange => 1.0 + 0.5 * (tf(used) - tf(prior)),
            Self::BiasOffset => 1.0 + (tf(used) - bias),
            Self::Magnitude => tf(used).abs(),
            Self::Unsupported(_) => 0.0,
        }
    }
}

/// Selects how the owner's bias evolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BiasMode {
    #[default]
    Static,
    /// `bias += alpha × (tf(a) - tf(a_prior))`
    Adaptive,
    Unsupported(i64),
}

impl BiasMode {
    pub fn from_i64(mode: i64) -> Self {
        match mode {
            0 => Self::Static,
            1 => Self::Adaptive,
            other => Self::Unsupported(other),
        }
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Static => 0,
            Self::Adaptive => 1,
            Self::Unsupported(other) => *other,
        }
    }

    /// Bias change for this step, `None` when the bias stays
    pub fn bias_change(&self, tf: impl Fn(f64) -> f64, used: f64, prior: f64, alpha: f64) -> Option<f64> {
        match self {
            Self::Adaptive => Some(alpha * (tf(used) - tf(prior))),
            Self::Static | Self::Unsupported(_) => None,
        }
    }
}
