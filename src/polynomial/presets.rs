//! Catalog of named polynomials
//!
//! Presets are given directly by their coefficients, not built from roots.
//! Two of them have fewer integer roots than their degree, so a search over
//! them never finishes on its own.

use super::Polynomial;
use clap::ValueEnum;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named polynomial preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// x^3 - 6000x^2 + 11000000x - 6000000000 (roots 1000, 2000, 3000)
    #[default]
    P1,
    /// x^4 - 5x^3 + 7x^2 - 3x - 6 (fewer than 4 integer roots, never terminates)
    P2,
    /// x^2 + 1 (no integer roots, never terminates)
    P3,
    /// x^2 - 15000000x + 50000000000000 (large roots, slow)
    P4,
}

impl Preset {
    /// All presets, in catalog order
    pub const ALL: [Preset; 4] = [Preset::P1, Preset::P2, Preset::P3, Preset::P4];

    /// Short selector name (`p1`..`p4`)
    pub fn name(&self) -> &'static str {
        match self {
            Preset::P1 => "p1",
            Preset::P2 => "p2",
            Preset::P3 => "p3",
            Preset::P4 => "p4",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Preset::P1 => "cubic with roots 1000, 2000, 3000",
            Preset::P2 => "quartic with fewer than 4 integer roots (never terminates)",
            Preset::P3 => "x^2 + 1, no integer roots (never terminates)",
            Preset::P4 => "quadratic with roots 5000000 and 10000000 (slow)",
        }
    }

    /// Whether a search with target = degree finishes for this preset
    pub fn terminates(&self) -> bool {
        matches!(self, Preset::P1 | Preset::P4)
    }

    fn coefficients(&self) -> &'static [i64] {
        match self {
            Preset::P1 => &[1, -6000, 11_000_000, -6_000_000_000],
            Preset::P2 => &[1, -5, 7, -3, -6],
            Preset::P3 => &[1, 0, 1],
            Preset::P4 => &[1, -15_000_000, 50_000_000_000_000],
        }
    }

    /// Build the preset polynomial
    pub fn polynomial(&self) -> Polynomial {
        let coefficients = self.coefficients().iter().copied().map(BigInt::from).collect();
        // Every preset has at least two coefficients
        Polynomial { coefficients }
    }

    /// Look a preset up by selector name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Preset> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_valid_degree() {
        assert_eq!(Preset::P1.polynomial().degree(), 3);
        assert_eq!(Preset::P2.polynomial().degree(), 4);
        assert_eq!(Preset::P3.polynomial().degree(), 2);
        assert_eq!(Preset::P4.polynomial().degree(), 2);
    }

    #[test]
    fn test_p1_roots() {
        let poly = Preset::P1.polynomial();
        for root in [1000, 2000, 3000] {
            assert!(poly.is_root(&BigInt::from(root)));
        }
        assert!(!poly.is_root(&BigInt::from(-1000)));
    }

    #[test]
    fn test_p4_roots() {
        let poly = Preset::P4.polynomial();
        assert!(poly.is_root(&BigInt::from(5_000_000)));
        assert!(poly.is_root(&BigInt::from(10_000_000)));
    }

    #[test]
    fn test_p3_has_no_small_roots() {
        let poly = Preset::P3.polynomial();
        for x in -1000..=1000 {
            assert!(!poly.is_root(&BigInt::from(x)));
        }
    }

    #[test]
    fn test_default_and_description() {
        assert_eq!(Preset::default(), Preset::P1);
        for preset in Preset::ALL {
            assert!(!preset.description().is_empty());
            assert_eq!(preset.description().contains("never terminates"), !preset.terminates());
        }
    }

    #[test]
    fn test_terminates() {
        assert!(Preset::P1.terminates());
        assert!(!Preset::P2.terminates());
        assert!(!Preset::P3.terminates());
        assert!(Preset::P4.terminates());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Preset::from_name("p1"), Some(Preset::P1));
        assert_eq!(Preset::from_name("P3"), Some(Preset::P3));
        assert_eq!(Preset::from_name("p9"), None);
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(&preset.to_string()), Some(preset));
        }
    }
}
