//! Hyperbolic cosecant

use std::sync::Arc;
use polymath_dispatch::prelude::*;
use crate::{unit_guard, Capabilities, RealKernels};

static CSCH_ARGS: [ArgMeta; 1] = [ArgMeta::required("x", "Real | Complex | BigNumber | Quantity(angle) | Array | Matrix", "Function input")];
static CSCH_EXAMPLES: [&str; 3] = ["csch(0.5)", "csch(2 rad)", "csch([1, 2, 3])"];
static CSCH_RELATED: [&str; 2] = ["sinh", "acosh"];

fn meta() -> FunctionMeta {
    FunctionMeta {
        name: "csch",
        description: "Hyperbolic cosecant, csch(x) = 1 / sinh(x). Angles are converted to radians first; the result carries no unit.",
        usage: "csch(x)",
        args: &CSCH_ARGS,
        returns: "Real | Complex | BigNumber | Array | Matrix",
        examples: &CSCH_EXAMPLES,
        category: "hyperbolic",
        related: &CSCH_RELATED,
    }
}

/// `csch(x) = |2 / (e^x - e^-x)| * sign(x)`
///
/// Zero has no sign to carry, so it maps to positive infinity.
pub fn csch_real(x: f64, kernels: &RealKernels) -> f64 {
    if x == 0.0 {
        return f64::INFINITY;
    }
    (2.0 / (x.exp() - (-x).exp())).abs() * kernels.sign(x)
}

pub fn csch(config: MathConfig, kernels: RealKernels, caps: &Capabilities) -> TypedFunction {
    let complex = Arc::clone(&caps.complex);
    let big = Arc::clone(&caps.big);
    let units = Arc::clone(&caps.units);
    let precision = config.precision;

    TypedFunction::builder("csch")
        .real(move |x| Ok(Value::Real(csch_real(x, &kernels))))
        .complex(move |z| complex.csch(z).map(Value::Complex))
        .big_number(move |n| Ok(Value::BigNumber(big.csch(n, precision)?)))
        .quantity(move |q, this| unit_guard(units.as_ref(), units.angle(), q, this))
        .container(|c, this| deep_map(c, &|leaf| this.call1(leaf)).map(Value::Container))
        .meta(meta())
        .build()
}
