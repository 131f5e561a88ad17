//! Runtime values
//!
//! A value is one of the numeric representations the engine dispatches on:
//! a plain real, a complex number, an arbitrary precision decimal, a
//! physical quantity, or a nested container of values.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use crate::{Container, Number, Quantity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Real(f64),
    Complex(Complex64),
    BigNumber(Number),
    Quantity(Quantity),
    Container(Container),
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            Value::Complex(z) => Some(*z),
            _ => None,
        }
    }

    pub fn as_big(&self) -> Option<&Number> {
        match self {
            Value::BigNumber(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Value::Quantity(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Runtime tag name, used by dispatch and in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Real(_) => "Real",
            Value::Complex(_) => "Complex",
            Value::BigNumber(_) => "BigNumber",
            Value::Quantity(_) => "Quantity",
            Value::Container(c) => match c.kind() {
                crate::ContainerKind::Array => "Array",
                crate::ContainerKind::Matrix => "Matrix",
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Real(x) => write!(f, "{}", x),
            Value::Complex(z) => write!(f, "{}", z),
            Value::BigNumber(n) => write!(f, "{}", n),
            Value::Quantity(q) => write!(f, "{}", q),
            Value::Container(c) => {
                let contents: Vec<String> = c.items().iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", contents.join(", "))
            }
        }
    }
}

// From implementations for convenience
impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Real(x)
    }
}

impl From<Complex64> for Value {
    fn from(z: Complex64) -> Self {
        Value::Complex(z)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::BigNumber(n)
    }
}

impl From<Quantity> for Value {
    fn from(q: Quantity) -> Self {
        Value::Quantity(q)
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Container(c)
    }
}
