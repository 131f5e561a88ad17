//! Type patterns matched against runtime values

use std::fmt;
use polymath_core::{ContainerKind, Value};
use serde::Serialize;

/// A pattern over the runtime tag of a `Value`.
///
/// `Container` and `Any` are catch-alls; put them after the specific
/// patterns, since the first matching signature wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypePattern {
    Real,
    Complex,
    BigNumber,
    Quantity,
    Array,
    Matrix,
    /// Array or Matrix
    Container,
    Any,
}

impl TypePattern {
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (TypePattern::Any, _) => true,
            (TypePattern::Real, Value::Real(_)) => true,
            (TypePattern::Complex, Value::Complex(_)) => true,
            (TypePattern::BigNumber, Value::BigNumber(_)) => true,
            (TypePattern::Quantity, Value::Quantity(_)) => true,
            (TypePattern::Container, Value::Container(_)) => true,
            (TypePattern::Array, Value::Container(c)) => c.kind() == ContainerKind::Array,
            (TypePattern::Matrix, Value::Container(c)) => c.kind() == ContainerKind::Matrix,
            _ => false,
        }
    }
}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypePattern::Real => "Real",
            TypePattern::Complex => "Complex",
            TypePattern::BigNumber => "BigNumber",
            TypePattern::Quantity => "Quantity",
            TypePattern::Array => "Array",
            TypePattern::Matrix => "Matrix",
            TypePattern::Container => "Array | Matrix",
            TypePattern::Any => "any",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymath_core::{Complex64, Container, Number};

    #[test]
    fn test_scalar_patterns() {
        assert!(TypePattern::Real.matches(&Value::Real(1.0)));
        assert!(!TypePattern::Real.matches(&Value::Complex(Complex64::new(1.0, 0.0))));
        assert!(TypePattern::BigNumber.matches(&Value::BigNumber(Number::from_i64(1))));
        assert!(!TypePattern::Complex.matches(&Value::Real(1.0)));
    }

    #[test]
    fn test_container_patterns() {
        let array = Value::Container(Container::array(vec![]).unwrap());
        let matrix = Value::Container(Container::matrix(vec![]).unwrap());

        assert!(TypePattern::Array.matches(&array));
        assert!(!TypePattern::Array.matches(&matrix));
        assert!(TypePattern::Matrix.matches(&matrix));
        assert!(TypePattern::Container.matches(&array));
        assert!(TypePattern::Container.matches(&matrix));
        assert!(!TypePattern::Container.matches(&Value::Real(0.0)));
    }

    #[test]
    fn test_any_matches_everything() {
        assert!(TypePattern::Any.matches(&Value::Real(f64::NAN)));
        assert!(TypePattern::Any.matches(&Value::Container(Container::array(vec![]).unwrap())));
    }

    #[test]
    fn test_display() {
        assert_eq!(TypePattern::Container.to_string(), "Array | Matrix");
        assert_eq!(TypePattern::Any.to_string(), "any");
    }
}
