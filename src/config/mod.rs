//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! CLI values override TOML values; the validator resolves the result into
//! a ready-to-run search before any worker is launched.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::polynomial::presets::Preset;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub workers: WorkerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// What to search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Polynomial to search
    #[serde(default)]
    pub polynomial: PolynomialSource,
    /// Number of roots to collect (defaults to the degree)
    pub target_roots: Option<usize>,
}

/// Where the polynomial comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PolynomialSource {
    /// Named preset from the catalog
    Preset { name: Preset },
    /// Comma-separated coefficients, highest degree first
    Custom { coefficients: String },
}

impl Default for PolynomialSource {
    fn default() -> Self {
        Self::Preset {
            name: Preset::default(),
        }
    }
}

/// Worker pool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Number of worker threads
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Rerun the search once per listed worker count (overrides `threads`)
    #[serde(default)]
    pub sweep: Vec<usize>,
}

fn default_threads() -> usize {
    4
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            sweep: Vec::new(),
        }
    }
}

impl WorkerConfig {
    /// Worker counts to run, in order
    pub fn worker_counts(&self) -> Vec<usize> {
        if self.sweep.is_empty() {
            vec![self.threads]
        } else {
            self.sweep.clone()
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit per-worker trace lines during the search
    #[serde(default)]
    pub trace: bool,
    /// JSON report file path
    pub json_output: Option<PathBuf>,
    /// Pretty-print the JSON report
    #[serde(default = "default_json_pretty")]
    pub json_pretty: bool,
}

fn default_json_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trace: false,
            json_output: None,
            json_pretty: default_json_pretty(),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// External deadline in seconds; the search is cancelled when it expires
    pub timeout_secs: Option<u64>,
    /// Validate and print the configuration without searching
    #[serde(default)]
    pub dry_run: bool,
    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

/// Build the effective configuration from the CLI (and its TOML file, if any)
pub fn load_config(cli: &cli::Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => toml::parse_toml_file(path)?,
        None => Config::default(),
    };
    toml::merge_cli_with_config(cli, base)
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Search: {}", self.search)?;
        writeln!(f, "  Workers: {}", self.workers)?;
        writeln!(f, "  Output: {}", self.output)?;
        writeln!(f, "  Runtime: {}", self.runtime)?;
        Ok(())
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.polynomial)?;
        match self.target_roots {
            Some(target) => write!(f, ", target={}", target),
            None => write!(f, ", target=degree"),
        }
    }
}

impl fmt::Display for PolynomialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolynomialSource::Preset { name } => write!(f, "preset {}", name),
            PolynomialSource::Custom { coefficients } => write!(f, "custom [{}]", coefficients),
        }
    }
}

impl fmt::Display for WorkerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sweep.is_empty() {
            write!(f, "threads={}", self.threads)
        } else {
            let counts: Vec<String> = self.sweep.iter().map(|c| c.to_string()).collect();
            write!(f, "sweep=[{}]", counts.join(", "))
        }
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trace={}", self.trace)?;
        if let Some(ref path) = self.json_output {
            write!(f, ", json={}", path.display())?;
        }
        Ok(())
    }
}

impl fmt::Display for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timeout_secs {
            Some(secs) => write!(f, "timeout={}s", secs)?,
            None => write!(f, "timeout=none")?,
        }
        if self.dry_run {
            write!(f, ", dry_run")?;
        }
        if self.debug {
            write!(f, ", debug")?;
        }
        Ok(())
    }
}
