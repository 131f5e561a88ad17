//! Unit guard: dimension check before unwrapping a quantity

use polymath_core::{Dimension, MathError, Quantity, Value};
use polymath_dispatch::TypedFunction;
use crate::UnitOps;

/// Check that `quantity` has the `expected` dimension, then dispatch `core`
/// on its SI value.
///
/// The result is returned bare, not wrapped back into a quantity: a
/// hyperbolic function of an angle is a plain number.
pub fn unit_guard(
    units: &dyn UnitOps,
    expected: Dimension,
    quantity: &Quantity,
    core: &TypedFunction,
) -> Result<Value, MathError> {
    if !units.has_dimension(quantity, expected) {
        return Err(MathError::dimension_mismatch(core.name(), expected, quantity.dimension()));
    }
    let inner = units.unwrap(quantity)?;
    core.call1(&inner)
}
