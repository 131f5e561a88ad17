//! Arbitrary precision numbers using dashu
//!
//! Uses dashu-float (DBig) for arbitrary precision decimal arithmetic.
//! Native support for transcendentals (ln, exp, sqrt), from which the
//! hyperbolic functions are built.

use dashu_base::Approximation;
use dashu_float::DBig;
use dashu_float::ops::{SquareRoot, Abs};
use dashu_int::IBig;
use dashu_int::ops::BitTest;
use std::num::NonZeroU32;
use serde::{Deserialize, Serialize, Serializer, Deserializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Overflow: result too large")]
    Overflow,
}

/// Default precision for calculations (decimal digits)
pub const DEFAULT_PRECISION: usize = 64;

/// Arbitrary precision decimal number
///
/// Built on dashu-float's DBig for efficient transcendental operations.
/// All operations return Results or new Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

/// Round `val` to `precision` digits, keeping the value whether or not
/// the rounding was exact.
fn at_precision(val: DBig, precision: usize) -> DBig {
    match val.with_precision(precision) {
        Approximation::Exact(v) => v,
        Approximation::Inexact(v, _) => v,
    }
}

impl Number {
    // ========== Construction ==========

    fn with_work_precision(val: DBig) -> DBig {
        at_precision(val, DEFAULT_PRECISION)
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "1.5e10", "-42"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        // Handle rational format "a/b"
        if s.contains('/') && !s.contains('.') && !s.contains('e') && !s.contains('E') {
            let parts: Vec<&str> = s.split('/').collect();
            if parts.len() == 2 {
                let num: DBig = parts[0].trim().parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let den: DBig = parts[1].trim().parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;

                if den == DBig::ZERO {
                    return Err(NumberError::DivisionByZero);
                }

                let result = Self::with_work_precision(num) / Self::with_work_precision(den);
                return Ok(Self { inner: result });
            }
        }

        // Scientific notation with integer mantissa: "602214076e15"
        if (s.contains('e') || s.contains('E')) && !s.contains('.') {
            let s_lower = s.to_lowercase();
            let parts: Vec<&str> = s_lower.split('e').collect();
            if parts.len() == 2 {
                let mantissa: IBig = parts[0].parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let exp: isize = parts[1].parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;

                let result = DBig::from_parts(mantissa, exp);
                return Ok(Self { inner: Self::with_work_precision(result) });
            }
        }

        let inner: DBig = s.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from ratio `num / den` at working precision.
    ///
    /// A zero denominator cannot be expressed; runtime divisors go through
    /// `checked_div`.
    pub fn from_ratio(num: i64, den: NonZeroU32) -> Self {
        let n = Self::with_work_precision(DBig::from(num));
        let d = Self::with_work_precision(DBig::from(den.get()));
        Self { inner: n / d }
    }

    /// Pi - from high-precision string constant
    pub fn pi(precision: u32) -> Self {
        const PI_STR: &str = "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899862803482534211706798214808651328230664709384460955058223172535940812848111745028410270193852110555964462294895493038196442881097566593344612847564823378678316527120190914564856692346034861045432664821339360726024914127372458700660631558817488152092096282925409171536436789259036001133053054882046652138414695194151160943305727036575959195309218611738193261179310511854807446237996274956735188575272489122793818301194912";

        let end_pos = (precision as usize + 2).min(PI_STR.len());
        Self::from_str(&PI_STR[..end_pos]).unwrap_or_else(|_| Self {
            inner: Self::with_work_precision(DBig::from_parts(IBig::from(3_141_592_653_589_793_i64), -15)),
        })
    }

    /// Create from f64. Non-finite inputs have no decimal representation.
    pub fn from_f64(f: f64) -> Result<Self, NumberError> {
        if !f.is_finite() {
            return Err(NumberError::ParseError(f.to_string()));
        }
        // Shortest round-trip representation, exponent form keeps tiny values
        Self::from_str(&format!("{:e}", f))
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    // ========== Basic Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self { inner: Abs::abs(self.inner.clone()) }
    }

    // ========== Transcendental Functions ==========

    pub fn sqrt(&self, precision: u32) -> Result<Self, NumberError> {
        if self.is_negative() {
            return Err(NumberError::DomainError(
                "square root of negative number".to_string()
            ));
        }
        if self.is_zero() {
            return Ok(Self::from_i64(0));
        }

        let val = at_precision(self.inner.clone(), precision as usize);
        Ok(Self { inner: val.sqrt() })
    }

    pub fn ln(&self, precision: u32) -> Result<Self, NumberError> {
        if self.inner <= DBig::ZERO {
            return Err(NumberError::DomainError(
                "logarithm of non-positive number".to_string()
            ));
        }

        let val = at_precision(self.inner.clone(), precision as usize);
        Ok(Self { inner: val.ln() })
    }

    /// Exponential function (e^x)
    pub fn exp(&self, precision: u32) -> Self {
        let val = at_precision(self.inner.clone(), precision as usize);
        Self { inner: val.exp() }
    }

    /// Hyperbolic sine: (e^x - e^-x) / 2
    pub fn sinh(&self, precision: u32) -> Result<Self, NumberError> {
        if self.is_zero() {
            return Ok(Self::from_i64(0));
        }
        let e_x = self.exp(precision);
        let e_neg_x = Self::from_i64(1).checked_div(&e_x)?;
        e_x.sub(&e_neg_x).checked_div(&Self::from_i64(2))
    }

    /// Inverse hyperbolic cosine: ln(x + sqrt(x^2 - 1)), defined for x >= 1
    pub fn acosh(&self, precision: u32) -> Result<Self, NumberError> {
        let one = Self::from_i64(1);
        if self < &one {
            return Err(NumberError::DomainError(
                "inverse hyperbolic cosine of value below 1".to_string()
            ));
        }
        let root = self.mul(self).sub(&one).sqrt(precision)?;
        self.add(&root).ln(precision)
    }

    // ========== Display ==========

    /// Render as decimal string with specified decimal places
    pub fn as_decimal(&self, places: u32) -> String {
        if let Some(f) = self.to_f64() {
            // Very small non-zero numbers keep their significant digits
            if f != 0.0 && f.abs() < 1e-6 {
                let log10 = f.abs().log10().floor() as i32;
                let sig_places = ((-log10) + 2) as usize;
                return format!("{:.prec$}", f, prec = sig_places);
            }

            if places == 0 {
                format!("{:.0}", f)
            } else {
                format!("{:.prec$}", f, prec = places as usize)
            }
        } else {
            format!("{}", self.inner)
        }
    }

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        // significand * 10^exponent
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let sig_f64: f64 = if significand.bit_len() <= 53 {
            match TryInto::<i64>::try_into(significand.clone()) {
                Ok(i) => i as f64,
                Err(_) => return None,
            }
        } else {
            // Shift right to fit in 53 bits, then scale back
            let extra_bits = significand.bit_len() - 53;
            let shifted = &significand >> extra_bits;
            let shifted_i64: i64 = shifted.try_into().ok()?;
            (shifted_i64 as f64) * 2_f64.powi(extra_bits as i32)
        };

        let result = if exponent == 0 {
            sig_f64
        } else if exponent > 0 && exponent <= 308 {
            sig_f64 * 10_f64.powi(exponent as i32)
        } else if exponent < 0 && exponent >= -308 {
            sig_f64 / 10_f64.powi((-exponent) as i32)
        } else {
            return None;
        };

        if result.is_finite() {
            Some(result)
        } else {
            None
        }
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_decimal(10))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(n: &Number) -> f64 {
        n.to_f64().unwrap()
    }

    #[test]
    fn test_from_str_forms() {
        assert_eq!(approx(&Number::from_str("3.25").unwrap()), 3.25);
        assert_eq!(approx(&Number::from_str("1/4").unwrap()), 0.25);
        assert_eq!(approx(&Number::from_str("15e1").unwrap()), 150.0);
        assert!(Number::from_str("abc").is_err());
        assert_eq!(Number::from_str("1/0"), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_from_f64() {
        let n = Number::from_f64(1.5).unwrap();
        assert_eq!(approx(&n), 1.5);
        let tiny = Number::from_f64(2.5e-20).unwrap();
        assert!(!tiny.is_zero());
        assert!(Number::from_f64(f64::NAN).is_err());
        assert!(Number::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sinh() {
        let half = Number::from_str("0.5").unwrap();
        let s = half.sinh(64).unwrap();
        assert!((approx(&s) - 0.5_f64.sinh()).abs() < 1e-12);
    }

    #[test]
    fn test_sinh_is_odd() {
        let x = Number::from_str("1.25").unwrap();
        let neg = Number::from_str("-1.25").unwrap();
        let a = approx(&x.sinh(64).unwrap());
        let b = approx(&neg.sinh(64).unwrap());
        assert!((a + b).abs() < 1e-12);
    }

    #[test]
    fn test_acosh() {
        let x = Number::from_str("1.5").unwrap();
        let r = x.acosh(64).unwrap();
        assert!((approx(&r) - 0.9624236501192069).abs() < 1e-12);
    }

    #[test]
    fn test_acosh_of_one_is_zero() {
        let r = Number::from_i64(1).acosh(64).unwrap();
        assert!(r.is_zero());
    }

    #[test]
    fn test_acosh_below_one_is_domain_error() {
        let x = Number::from_str("0.5").unwrap();
        assert!(matches!(x.acosh(64), Err(NumberError::DomainError(_))));
    }

    #[test]
    fn test_pi() {
        let pi = Number::pi(64);
        assert!(pi.as_decimal(5).starts_with("3.14159"));
    }

    #[test]
    fn test_from_ratio() {
        let third = Number::from_ratio(1, NonZeroU32::new(3).unwrap());
        assert!((approx(&third) - 1.0 / 3.0).abs() < 1e-12);
        let neg = Number::from_ratio(-3, NonZeroU32::new(4).unwrap());
        assert_eq!(approx(&neg), -0.75);
        assert_eq!(approx(&Number::from_ratio(6, NonZeroU32::new(3).unwrap())), 2.0);
    }

    #[test]
    fn test_runtime_zero_divisor_is_an_error() {
        let zero = Number::from_ratio(0, NonZeroU32::new(5).unwrap());
        assert!(zero.is_zero());
        assert_eq!(Number::from_i64(1).checked_div(&zero), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_div_by_zero() {
        let a = Number::from_i64(42);
        assert!(a.checked_div(&Number::from_i64(0)).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Number::from_i64(-2) < Number::from_i64(1));
        assert!(Number::from_i64(-5).is_negative());
        assert_eq!(Number::from_i64(-7).abs(), Number::from_i64(7));
    }
}
