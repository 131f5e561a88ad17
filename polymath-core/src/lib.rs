//! Polymath Core - Fundamental types
//!
//! This crate provides the core types used throughout Polymath:
//! - `Number`: Arbitrary precision decimals
//! - `Dimension`, `Unit`, `Quantity`: Physical quantities
//! - `Container`: Nested arrays and matrices
//! - `Value`: Runtime values the engine dispatches on
//! - `MathError`: Structured errors

mod number;
mod dimension;
mod unit;
mod quantity;
mod container;
mod value;
mod error;

pub use number::{Number, NumberError, DEFAULT_PRECISION};
pub use dimension::Dimension;
pub use unit::{Unit, UnitTable, UNITS};
pub use quantity::Quantity;
pub use container::{Container, ContainerKind};
pub use value::Value;
pub use error::{MathError, ErrorContext, codes};
pub use num_complex::Complex64;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Complex64, Container, ContainerKind, Dimension, MathError, Number, Quantity,
        Unit, Value,
    };
    pub use crate::error::codes;
}
