//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{parse_duration, parse_worker_list};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Custom coefficients win over a preset, whichever layer set the preset
    if let Some(ref coeffs) = cli.coeffs {
        config.search.polynomial = PolynomialSource::Custom {
            coefficients: coeffs.clone(),
        };
    } else if let Some(preset) = cli.poly {
        config.search.polynomial = PolynomialSource::Preset { name: preset };
    }

    if let Some(target) = cli.target {
        config.search.target_roots = Some(target);
    }

    // Override worker settings
    if let Some(workers) = cli.workers {
        config.workers.threads = workers;
    }
    if let Some(ref sweep) = cli.sweep {
        config.workers.sweep = parse_worker_list(sweep).context("Invalid --sweep")?;
    }

    // Override output settings
    if cli.trace {
        config.output.trace = true;
    }
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.json_compact {
        config.output.json_pretty = false;
    }

    // Override runtime settings
    if let Some(ref timeout) = cli.timeout {
        config.runtime.timeout_secs = Some(parse_duration(timeout).context("Invalid --timeout")?);
    }
    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    Ok(config)
}
