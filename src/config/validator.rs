//! Configuration validation
//!
//! Turns a `Config` into a `ResolvedSearch`: the polynomial is parsed and
//! every parameter checked here, so malformed input is rejected before any
//! worker is launched.

use super::*;
use crate::polynomial::presets::Preset;
use crate::polynomial::{parse_coefficients, Polynomial};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::warn;

/// A fully validated search, ready to run
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSearch {
    /// Short label for reports (`p1`..`p4` or `custom`)
    pub label: String,
    /// Polynomial to search
    pub polynomial: Polynomial,
    /// Number of roots to collect
    pub target: usize,
    /// Worker counts to run, one search per entry
    pub worker_counts: Vec<usize>,
    /// External deadline applied to each search
    pub timeout: Option<Duration>,
    /// Per-worker trace lines
    pub trace: bool,
}

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    resolve_search(config).map(|_| ())
}

/// Validate the configuration and resolve it into a runnable search
pub fn resolve_search(config: &Config) -> Result<ResolvedSearch> {
    let (label, polynomial) = resolve_polynomial(&config.search.polynomial)?;
    let target = validate_target(config.search.target_roots, &polynomial)?;
    validate_workers(&config.workers)?;
    let timeout = validate_runtime(&config.runtime)?;

    if let Some(name) = unbounded_preset(&config.search.polynomial, timeout) {
        warn!(
            "preset {} has fewer integer roots than its degree; without --timeout the search may never finish",
            name
        );
    }

    Ok(ResolvedSearch {
        label,
        polynomial,
        target,
        worker_counts: config.workers.worker_counts(),
        timeout,
        trace: config.output.trace,
    })
}

/// Resolve the polynomial source
fn resolve_polynomial(source: &PolynomialSource) -> Result<(String, Polynomial)> {
    match source {
        PolynomialSource::Preset { name } => Ok((name.name().to_string(), name.polynomial())),
        PolynomialSource::Custom { coefficients } => {
            let polynomial = parse_coefficients(coefficients)
                .with_context(|| format!("Invalid coefficient list {:?}", coefficients))?;
            Ok(("custom".to_string(), polynomial))
        }
    }
}

/// Preset that may never terminate and has no deadline to bound it
///
/// p2 and p3 have no integer roots at all, so any target hangs.
fn unbounded_preset(source: &PolynomialSource, timeout: Option<Duration>) -> Option<Preset> {
    match *source {
        PolynomialSource::Preset { name } if !name.terminates() && timeout.is_none() => Some(name),
        _ => None,
    }
}

/// Validate the target root count against the polynomial's degree
fn validate_target(target: Option<usize>, polynomial: &Polynomial) -> Result<usize> {
    let degree = polynomial.degree();
    match target {
        None => Ok(polynomial.max_roots()),
        Some(0) => anyhow::bail!("target_roots must be at least 1"),
        Some(t) if t > degree => anyhow::bail!(
            "target_roots ({}) cannot exceed the polynomial degree ({})",
            t,
            degree
        ),
        Some(t) => Ok(t),
    }
}

/// Validate worker configuration
pub fn validate_workers(workers: &WorkerConfig) -> Result<()> {
    if workers.threads == 0 {
        anyhow::bail!("threads must be at least 1");
    }

    for (i, &count) in workers.sweep.iter().enumerate() {
        if count == 0 {
            anyhow::bail!("sweep entry {} must be at least 1", i);
        }
    }

    let cpus = num_cpus::get();
    let max = workers.worker_counts().into_iter().max().unwrap_or(0);
    if max > cpus {
        warn!(
            "{} workers requested but only {} CPUs available; workers are CPU-bound",
            max, cpus
        );
    }

    Ok(())
}

/// Validate runtime configuration
fn validate_runtime(runtime: &RuntimeConfig) -> Result<Option<Duration>> {
    match runtime.timeout_secs {
        Some(0) => anyhow::bail!("timeout must be greater than 0"),
        Some(secs) => Ok(Some(Duration::from_secs(secs))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::presets::Preset;

    fn custom(coefficients: &str) -> Config {
        let mut config = Config::default();
        config.search.polynomial = PolynomialSource::Custom {
            coefficients: coefficients.to_string(),
        };
        config
    }

    #[test]
    fn test_resolve_default() {
        let resolved = resolve_search(&Config::default()).unwrap();
        assert_eq!(resolved.label, "p1");
        assert_eq!(resolved.polynomial, Preset::P1.polynomial());
        assert_eq!(resolved.target, 3);
        assert_eq!(resolved.worker_counts, vec![4]);
        assert_eq!(resolved.timeout, None);
    }

    #[test]
    fn test_resolve_custom() {
        let resolved = resolve_search(&custom("1, -6, 11, -6")).unwrap();
        assert_eq!(resolved.label, "custom");
        assert_eq!(resolved.target, 3);
    }

    #[test]
    fn test_rejects_malformed_coefficients() {
        assert!(resolve_search(&custom("abc,2,3")).is_err());
        assert!(resolve_search(&custom("5")).is_err());
        assert!(validate_config(&custom("1,2,x")).is_err());
    }

    #[test]
    fn test_target_bounds() {
        let mut config = custom("1,-6,11,-6");
        config.search.target_roots = Some(2);
        assert_eq!(resolve_search(&config).unwrap().target, 2);

        config.search.target_roots = Some(4);
        assert!(resolve_search(&config).is_err());

        config.search.target_roots = Some(0);
        assert!(resolve_search(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_workers() {
        let mut config = Config::default();
        config.workers.threads = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.workers.sweep = vec![1, 0, 4];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_sweep_overrides_threads() {
        let mut config = Config::default();
        config.workers.sweep = vec![1, 2, 4];
        assert_eq!(resolve_search(&config).unwrap().worker_counts, vec![1, 2, 4]);
    }

    #[test]
    fn test_unbounded_preset_any_target() {
        let p3 = PolynomialSource::Preset { name: Preset::P3 };
        assert_eq!(unbounded_preset(&p3, None), Some(Preset::P3));
        assert_eq!(unbounded_preset(&p3, Some(Duration::from_secs(5))), None);

        let p1 = PolynomialSource::Preset { name: Preset::P1 };
        assert_eq!(unbounded_preset(&p1, None), None);

        let custom = PolynomialSource::Custom {
            coefficients: "1,0,1".to_string(),
        };
        assert_eq!(unbounded_preset(&custom, None), None);

        let mut config = Config::default();
        config.search.polynomial = p3;
        config.search.target_roots = Some(1);
        assert_eq!(resolve_search(&config).unwrap().target, 1);
    }

    #[test]
    fn test_timeout() {
        let mut config = Config::default();
        config.runtime.timeout_secs = Some(10);
        assert_eq!(resolve_search(&config).unwrap().timeout, Some(Duration::from_secs(10)));

        config.runtime.timeout_secs = Some(0);
        assert!(resolve_search(&config).is_err());
    }
}
