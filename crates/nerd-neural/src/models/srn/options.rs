// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Option flags of the self-regulating activation
//!
//! Options are configured as a comma separated token string:
//!
//! | Token | Flag                        |
//! |-------|-----------------------------|
//! | `w`   | `adjust_weights`            |
//! | `rl`  | `restrict_to_link_synapses` |
//! | `t+1` | `use_current_activations`   |
//! | `e`   | `add_epsilon`               |

use core::fmt;

use tracing::debug;

pub const DEFAULT_OPTIONS: &str = "w";

/// Flags derived from an options string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SrnOptions {
    /// Rewrite link synapse strengths to `sign * eta_source * xi`
    pub adjust_weights: bool,
    /// Only synapses with a simple-link function are treated as links
    pub restrict_to_link_synapses: bool,
    /// Regulate on this step's activation instead of the previous one
    pub use_current_activations: bool,
    /// Add a small constant to xi and eta every step
    pub add_epsilon: bool,
}

impl SrnOptions {
    /// Parse a token string; unknown tokens are ignored
    pub fn parse(options: &str) -> Self {
        let mut parsed = Self::default();
        for token in options.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token {
                "w" => parsed.adjust_weights = true,
                "rl" => parsed.restrict_to_link_synapses = true,
                "t+1" => parsed.use_current_activations = true,
                "e" => parsed.add_epsilon = true,
                other => {
                    debug!(target: "nerd-neural", "ignoring unknown SRN option token '{}'", other)
                }
            }
        }
        parsed
    }
}

impl fmt::Display for SrnOptions {
    /// Canonical token string (`w,rl,t+1,e` order)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = [
            (self.adjust_weights, "w"),
            (self.restrict_to_link_synapses, "rl"),
            (self.use_current_activations, "t+1"),
            (self.add_epsilon, "e"),
        ]
        .into_iter()
        .filter_map(|(set, token)| set.then_some(token))
        .collect();
        write!(f, "{}", tokens.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token_string() {
        let options = SrnOptions::parse(DEFAULT_OPTIONS);
        assert!(options.adjust_weights);
        assert!(!options.restrict_to_link_synapses);
        assert!(!options.use_current_activations);
        assert!(!options.add_epsilon);
    }

    #[test]
    fn test_whitespace_and_unknown_tokens() {
        let options = SrnOptions::parse(" rl , t+1,, bogus ,e ");
        assert_eq!(
            options,
            SrnOptions {
                adjust_weights: false,
                restrict_to_link_synapses: true,
                use_current_activations: true,
                add_epsilon: true,
            }
        );
    }

    #[test]
    fn test_tokens_are_exact() {
        // "W" and "t + 1" are not recognized
        assert_eq!(SrnOptions::parse("W,t + 1"), SrnOptions::default());
        assert_eq!(SrnOptions::parse(""), SrnOptions::default());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(SrnOptions::parse("e, w ,rl").to_string(), "w,rl,e");
        assert_eq!(SrnOptions::default().to_string(), "");
    }
}
