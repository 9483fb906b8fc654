// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
SRN Trace Tool

Runs the two-neuron self-regulating loop and prints one JSON line per step
with the activations and the xi/eta gains of both loop neurons.

Usage:
  cargo run --bin srn_trace -- [config.toml] [--set key=value ...] [--debug crate ...]

Overrides use the keys of `apply_cli_overrides`, for example:
  cargo run --bin srn_trace -- --set steps=200 --set srn_options=w,t+1 --set receptor_mode=1

Without a config path, `nerd_configuration.toml` is searched for (see
`NERD_CONFIG_PATH`); if none exists, built-in defaults are used.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use std::collections::HashMap;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nerd::config::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    validate_config, NerdConfig,
};
use nerd::neural::network::RegulationState;
use nerd::observability::{init_logging, CrateDebugFlags, KNOWN_CRATES};
use serde::Serialize;
use tracing::{info, warn};

/// NERD SRN trace - runs the self-regulating loop and prints JSON lines
#[derive(Parser, Debug)]
#[command(name = "srn_trace", version, author, long_about = None)]
struct Args {
    /// Configuration file (default: search for nerd_configuration.toml)
    config: Option<PathBuf>,

    /// Override a configuration key, e.g. `--set steps=200` (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, String)>,

    /// Enable debug logging for a crate, or `all` (repeatable; NERD_DEBUG is honored too)
    #[arg(long, value_name = "CRATE")]
    debug: Vec<String>,
}

fn parse_override(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

#[derive(Serialize)]
struct TraceLine<'a> {
    step: u64,
    input: f64,
    neurons: &'a [RegulationState],
}

fn resolve_config(config_path: Option<PathBuf>, overrides: &HashMap<String, String>) -> Result<NerdConfig> {
    let path = match config_path {
        Some(path) => Some(path),
        None => find_config_file().ok(),
    };

    let config = match path {
        Some(path) => load_config(Some(&path), Some(overrides))
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            let mut config = NerdConfig::default();
            apply_environment_overrides(&mut config);
            apply_cli_overrides(&mut config, overrides);
            config
        }
    };

    validate_config(&config)?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let overrides: HashMap<String, String> = args.overrides.into_iter().collect();
    let config = resolve_config(args.config, &overrides)?;

    let debug_flags = CrateDebugFlags::from_names(&args.debug).with_env();
    let _guard = init_logging(&debug_flags, &nerd::observability_config(&config))?;
    for name in args.debug.iter().filter(|n| *n != "all" && !KNOWN_CRATES.contains(&n.as_str())) {
        warn!(target: "srn_trace", "--debug {}: not a known crate ({})", name, KNOWN_CRATES.join(", "));
    }

    let mut srn_loop = nerd::build_srn_loop(&config)?;
    info!(
        target: "srn_trace",
        "running {} steps (options '{}', transfer {})",
        config.simulation.steps, config.srn.options, config.srn.transfer_function
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..config.simulation.steps {
        srn_loop.network.execute_step();
        let states = srn_loop.network.regulation_states();
        if states.iter().any(|s| !s.activation.is_finite()) {
            warn!(target: "srn_trace", "non-finite activation at step {}", srn_loop.network.step_count());
        }

        let line = TraceLine {
            step: srn_loop.network.step_count(),
            input: config.simulation.input,
            neurons: &states,
        };
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "srn_trace",
            "my.toml",
            "--set",
            "steps=5",
            "-s",
            "srn_options=w,e",
            "--debug",
            "nerd-neural",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
        let overrides: HashMap<String, String> = args.overrides.into_iter().collect();
        assert_eq!(overrides.get("steps").map(String::as_str), Some("5"));
        assert_eq!(overrides.get("srn_options").map(String::as_str), Some("w,e"));
        assert_eq!(overrides.len(), 2);
        assert_eq!(args.debug, vec!["nerd-neural".to_string()]);
    }

    #[test]
    fn test_override_needs_key_and_value() {
        assert!(Args::try_parse_from(["srn_trace", "--set", "steps"]).is_err());
        assert!(Args::try_parse_from(["srn_trace", "--set", "=5"]).is_err());
        assert_eq!(parse_override(" alpha = 0.3"), Ok(("alpha".to_string(), "0.3".to_string())));
    }

    #[test]
    fn test_defaults_without_arguments() {
        let args = Args::try_parse_from(["srn_trace"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.overrides.is_empty());
        assert!(args.debug.is_empty());
    }
}
