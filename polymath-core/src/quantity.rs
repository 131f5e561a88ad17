//! Quantity type - a value with an associated unit

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::{Container, Dimension, MathError, Number, Unit, Value};

/// A physical quantity: a value with an associated unit.
///
/// The inner value is never itself a quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    value: Box<Value>,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: Value, unit: Unit) -> Result<Self, MathError> {
        if contains_quantity(&value) {
            return Err(MathError::type_error("Number, Complex, BigNumber or Container", "Quantity")
                .with_note("a quantity cannot wrap another quantity"));
        }
        Ok(Quantity { value: Box::new(value), unit })
    }

    /// Create a quantity from a value and a unit symbol from the unit table
    pub fn with_symbol(value: Value, symbol: &str) -> Result<Self, MathError> {
        let unit = Unit::lookup(symbol)
            .ok_or_else(|| MathError::type_error("known unit", symbol))?;
        Self::new(value, unit)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    pub fn has_dimension(&self, dimension: Dimension) -> bool {
        self.unit.dimension == dimension
    }

    /// The inner value expressed in SI base units (e.g. `90 deg` gives `π/2`)
    pub fn si_value(&self) -> Result<Value, MathError> {
        scale(&self.value, &self.unit.to_si_factor)
    }
}

/// True if `value` is a quantity or a container holding one at any depth
fn contains_quantity(value: &Value) -> bool {
    match value.as_container() {
        Some(c) => c.leaves().iter().any(|leaf| leaf.as_quantity().is_some()),
        None => value.as_quantity().is_some(),
    }
}

fn scale(value: &Value, factor: &Number) -> Result<Value, MathError> {
    let factor_f64 = || factor.to_f64()
        .ok_or_else(|| MathError::new(crate::codes::OVERFLOW, "unit factor out of f64 range"));

    match value {
        Value::Real(x) => Ok(Value::Real(*x * factor_f64()?)),
        Value::Complex(z) => Ok(Value::Complex(*z * factor_f64()?)),
        Value::BigNumber(n) => Ok(Value::BigNumber(n.mul(factor))),
        Value::Container(c) => {
            let items = c.items().iter()
                .map(|item| scale(item, factor))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Container(Container::new(items, c.kind())?))
        }
        Value::Quantity(_) => Err(MathError::type_error("scalar or container", "Quantity")),
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            value: Value,
            unit: Unit,
        }
        let raw = Raw::deserialize(deserializer)?;
        Quantity::new(raw.value, raw.unit).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_creation() {
        let q = Quantity::with_symbol(Value::Real(5.0), "m").unwrap();
        assert_eq!(q.unit().symbol, "m");
        assert_eq!(q.dimension(), Dimension::LENGTH);
        assert!(!q.has_dimension(Dimension::ANGLE));
    }

    #[test]
    fn test_nested_quantity_rejected() {
        let inner = Quantity::with_symbol(Value::Real(1.0), "rad").unwrap();
        let unit = Unit::lookup("rad").unwrap();
        let err = Quantity::new(Value::Quantity(inner), unit).unwrap_err();
        assert_eq!(err.code, crate::codes::TYPE_ERROR);
    }

    #[test]
    fn test_quantity_inside_container_rejected() {
        let rad = Quantity::with_symbol(Value::Real(1.0), "rad").unwrap();
        let row = Container::array(vec![Value::Real(2.0), Value::Quantity(rad)]).unwrap();
        let nested = Container::array(vec![Value::Container(row)]).unwrap();
        let err = Quantity::with_symbol(Value::Container(nested), "deg").unwrap_err();
        assert_eq!(err.code, crate::codes::TYPE_ERROR);
        assert_eq!(err.context.unwrap().notes, vec!["a quantity cannot wrap another quantity"]);
    }

    #[test]
    fn test_plain_container_accepted() {
        let c = Container::from_rows(vec![vec![1.0], vec![2.0]], crate::ContainerKind::Matrix).unwrap();
        assert!(Quantity::with_symbol(Value::Container(c), "deg").is_ok());
    }

    #[test]
    fn test_unknown_symbol() {
        assert!(Quantity::with_symbol(Value::Real(1.0), "parsec").is_err());
    }

    #[test]
    fn test_si_value_degrees() {
        let q = Quantity::with_symbol(Value::Real(90.0), "deg").unwrap();
        match q.si_value().unwrap() {
            Value::Real(x) => assert!((x - std::f64::consts::FRAC_PI_2).abs() < 1e-12),
            other => panic!("expected real, got {:?}", other),
        }
    }

    #[test]
    fn test_si_value_radians_unchanged() {
        let q = Quantity::with_symbol(Value::Real(0.5), "rad").unwrap();
        assert_eq!(q.si_value().unwrap(), Value::Real(0.5));
    }

    #[test]
    fn test_si_value_container() {
        let c = Container::array(vec![Value::Real(180.0), Value::Real(360.0)]).unwrap();
        let q = Quantity::with_symbol(Value::Container(c), "deg").unwrap();
        let si = q.si_value().unwrap();
        let leaves: Vec<f64> = match &si {
            Value::Container(c) => c.leaves().iter().filter_map(|v| v.as_real()).collect(),
            _ => panic!("expected container"),
        };
        assert!((leaves[0] - std::f64::consts::PI).abs() < 1e-12);
        assert!((leaves[1] - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    }
}
