//! CLI argument parsing using clap

use crate::polynomial::presets::Preset;
use clap::Parser;
use std::path::PathBuf;

/// introots - concurrent integer root search for integer polynomials
#[derive(Parser, Debug, Default)]
#[command(name = "introots")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Polynomial Selection ===
    /// Preset polynomial: p1, p2, p3 or p4
    #[arg(long, value_enum)]
    pub poly: Option<Preset>,

    /// Custom coefficients, highest degree first (e.g., "1,-6,11,-6").
    /// Takes precedence over --poly
    #[arg(long, allow_hyphen_values = true)]
    pub coeffs: Option<String>,

    /// Number of roots to collect (default: the polynomial's degree)
    #[arg(long)]
    pub target: Option<usize>,

    // === Worker Options ===
    /// Number of concurrent workers (default: 4)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Rerun the search once per worker count (comma-separated, e.g., "1,2,4")
    #[arg(long)]
    pub sweep: Option<String>,

    /// External deadline after which the search is cancelled (e.g., 30s, 5m)
    #[arg(long)]
    pub timeout: Option<String>,

    // === Output Options ===
    /// Show per-worker trace (lane start, roots found, stop)
    #[arg(long)]
    pub trace: bool,

    /// Write a JSON report to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Write the JSON report on a single line
    #[arg(long)]
    pub json_compact: bool,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without searching
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workers == Some(0) {
            anyhow::bail!("workers must be at least 1");
        }

        if self.target == Some(0) {
            anyhow::bail!("target must be at least 1");
        }

        if let Some(ref coeffs) = self.coeffs {
            if coeffs.trim().is_empty() {
                anyhow::bail!("--coeffs must not be empty");
            }
        }

        if self.json_compact && self.json_output.is_none() {
            anyhow::bail!("--json-compact requires --json-output");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["introots"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = parse(&[]);
        assert!(cli.poly.is_none());
        assert!(cli.coeffs.is_none());
        assert!(cli.workers.is_none());
        assert!(!cli.trace);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_parse_preset_and_workers() {
        let cli = parse(&["--poly", "p3", "-w", "8", "--trace"]);
        assert_eq!(cli.poly, Some(Preset::P3));
        assert_eq!(cli.workers, Some(8));
        assert!(cli.trace);
    }

    #[test]
    fn test_parse_negative_leading_coefficient() {
        let cli = parse(&["--coeffs", "-1,0,4"]);
        assert_eq!(cli.coeffs.as_deref(), Some("-1,0,4"));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(Cli::try_parse_from(["introots", "--poly", "p9"]).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let cli = parse(&["--workers", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_json_compact_requires_output() {
        let cli = parse(&["--json-compact"]);
        assert!(cli.validate().is_err());

        let cli = parse(&["--json-compact", "--json-output", "out.json"]);
        assert!(cli.validate().is_ok());
    }
}
