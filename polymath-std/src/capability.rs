//! Capability interfaces consumed by the function library
//!
//! Complex, arbitrary precision and unit arithmetic are supplied from
//! outside the dispatch core. They are collected once into `Capabilities`
//! and handed to each function at construction time.

use std::sync::Arc;
use polymath_core::{Complex64, Dimension, MathError, Number, NumberError, Quantity, Value};

/// Complex hyperbolic operations
pub trait ComplexOps: Send + Sync {
    fn acosh(&self, z: Complex64) -> Result<Complex64, MathError>;
    fn csch(&self, z: Complex64) -> Result<Complex64, MathError>;
}

/// Arbitrary precision hyperbolic operations
pub trait ArbitraryPrecisionOps: Send + Sync {
    fn acosh(&self, x: &Number, precision: u32) -> Result<Number, NumberError>;
    fn csch(&self, x: &Number, precision: u32) -> Result<Number, NumberError>;
}

/// Dimension checks and unwrapping of physical quantities
pub trait UnitOps: Send + Sync {
    /// The angle dimension
    fn angle(&self) -> Dimension;
    fn has_dimension(&self, quantity: &Quantity, dimension: Dimension) -> bool;
    /// The inner value in SI base units
    fn unwrap(&self, quantity: &Quantity) -> Result<Value, MathError>;
}

/// Principal-branch complex functions from num-complex
#[derive(Debug, Clone, Copy, Default)]
pub struct StdComplexOps;

impl ComplexOps for StdComplexOps {
    fn acosh(&self, z: Complex64) -> Result<Complex64, MathError> {
        Ok(z.acosh())
    }

    fn csch(&self, z: Complex64) -> Result<Complex64, MathError> {
        Ok(z.sinh().inv())
    }
}

/// dashu-backed decimal operations
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalOps;

impl ArbitraryPrecisionOps for DecimalOps {
    fn acosh(&self, x: &Number, precision: u32) -> Result<Number, NumberError> {
        x.acosh(precision)
    }

    fn csch(&self, x: &Number, precision: u32) -> Result<Number, NumberError> {
        Number::from_i64(1).checked_div(&x.sinh(precision)?)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SiUnitOps;

impl UnitOps for SiUnitOps {
    fn angle(&self) -> Dimension {
        Dimension::ANGLE
    }

    fn has_dimension(&self, quantity: &Quantity, dimension: Dimension) -> bool {
        quantity.has_dimension(dimension)
    }

    fn unwrap(&self, quantity: &Quantity) -> Result<Value, MathError> {
        quantity.si_value()
    }
}

/// The capability set injected into the standard library
#[derive(Clone)]
pub struct Capabilities {
    pub complex: Arc<dyn ComplexOps>,
    pub big: Arc<dyn ArbitraryPrecisionOps>,
    pub units: Arc<dyn UnitOps>,
}

impl Capabilities {
    pub fn standard() -> Self {
        Self {
            complex: Arc::new(StdComplexOps),
            big: Arc::new(DecimalOps),
            units: Arc::new(SiUnitOps),
        }
    }

    pub fn with_complex<C: ComplexOps + 'static>(mut self, ops: C) -> Self {
        self.complex = Arc::new(ops);
        self
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::standard()
    }
}
