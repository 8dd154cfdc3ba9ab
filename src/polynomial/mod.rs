//! Polynomial representation and root testing
//!
//! A polynomial is an ordered sequence of arbitrary-precision integer
//! coefficients, most-significant term first. Evaluation is exact: powers
//! and products are computed with `num-bigint`, so there is no rounding and
//! no overflow regardless of the size of the candidate or the coefficients.
//!
//! # Example
//!
//! ```
//! use introots::polynomial::{is_root, Polynomial};
//! use num_bigint::BigInt;
//!
//! let poly: Polynomial = "1,-6,11,-6".parse()?;
//! assert_eq!(poly.degree(), 3);
//! assert!(is_root(poly.coefficients(), &BigInt::from(2)));
//! assert!(!is_root(poly.coefficients(), &BigInt::from(4)));
//! # Ok::<(), introots::polynomial::PolynomialError>(())
//! ```

pub mod presets;

use num_bigint::BigInt;
use num_traits::{One, Pow, Signed, Zero};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while building a polynomial from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// A polynomial needs at least a linear term and a constant
    #[error("at least 2 coefficients are required, got {count}")]
    TooFewCoefficients { count: usize },

    /// A token in a coefficient list is not an integer
    #[error("invalid coefficient {token:?}: not an integer")]
    InvalidCoefficient { token: String },
}

/// Polynomial with integer coefficients, highest degree first
///
/// Immutable once constructed. Workers share it by reference for the whole
/// search, so no synchronization is needed to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Create a polynomial from coefficients (highest degree first)
    ///
    /// Fails when fewer than two coefficients are given (degree must be ≥ 1).
    pub fn new(coefficients: Vec<BigInt>) -> Result<Self, PolynomialError> {
        if coefficients.len() < 2 {
            return Err(PolynomialError::TooFewCoefficients {
                count: coefficients.len(),
            });
        }
        Ok(Self { coefficients })
    }

    /// Convenience constructor for small literal coefficients
    pub fn from_i64(coefficients: &[i64]) -> Result<Self, PolynomialError> {
        Self::new(coefficients.iter().copied().map(BigInt::from).collect())
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Degree of the polynomial (number of coefficients minus one)
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Maximum number of roots a search over this polynomial collects
    pub fn max_roots(&self) -> usize {
        self.degree()
    }

    /// Evaluate the polynomial at `x` using Horner's rule
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .fold(BigInt::zero(), |acc, c| acc * x + c)
    }

    /// Check whether `x` is a root
    pub fn is_root(&self, x: &BigInt) -> bool {
        is_root(&self.coefficients, x)
    }
}

/// Decide whether the polynomial given by `coefficients` vanishes at `x`
///
/// Computes Σ coefficients[i] · x^(degree − i) with exact integer powers.
/// This is the hot path of the whole search; each call costs O(degree)
/// big-integer multiplications.
pub fn is_root(coefficients: &[BigInt], x: &BigInt) -> bool {
    let degree = coefficients.len().saturating_sub(1);
    let mut sum = BigInt::zero();

    for (i, coefficient) in coefficients.iter().enumerate() {
        let exponent = degree - i;
        if exponent == 0 {
            sum += coefficient;
        } else {
            let power: BigInt = Pow::pow(x, exponent);
            sum += coefficient * power;
        }
    }

    sum.is_zero()
}

/// Parse a comma-separated coefficient list (highest degree first)
///
/// Whitespace around tokens is ignored and empty fields are skipped, so
/// `"1, -6, 11, -6"` and `"1,-6,,11,-6,"` are both accepted.
pub fn parse_coefficients(csv: &str) -> Result<Polynomial, PolynomialError> {
    let mut coefficients = Vec::new();

    for field in csv.split(',') {
        let token = field.trim();
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<BigInt>()
            .map_err(|_| PolynomialError::InvalidCoefficient {
                token: token.to_string(),
            })?;
        coefficients.push(value);
    }

    Polynomial::new(coefficients)
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coefficients(s)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;

        for (i, coefficient) in self.coefficients.iter().enumerate() {
            if coefficient.is_zero() {
                continue;
            }
            let exponent = degree - i;
            let magnitude = coefficient.abs();

            if first {
                if coefficient.is_negative() {
                    write!(f, "-")?;
                }
            } else if coefficient.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            if exponent == 0 || !magnitude.is_one() {
                write!(f, "{}", magnitude)?;
            }
            match exponent {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", exponent)?,
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
