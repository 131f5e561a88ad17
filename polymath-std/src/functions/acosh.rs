//! Inverse hyperbolic cosine
//!
//! The result domain depends on the value of a real input, not only on its
//! type: `x >= 1` stays real, everything else becomes complex unless the
//! engine runs in predictable mode.

use std::f64::consts::PI;
use std::sync::Arc;
use polymath_dispatch::prelude::*;
use crate::{Capabilities, ComplexOps, RealKernels};

static ACOSH_ARGS: [ArgMeta; 1] = [ArgMeta::required("x", "Real | Complex | BigNumber | Array | Matrix", "Function input")];
static ACOSH_EXAMPLES: [&str; 2] = ["acosh(1.5)", "acosh(-2)"];
static ACOSH_RELATED: [&str; 2] = ["cosh", "csch"];

fn meta() -> FunctionMeta {
    FunctionMeta {
        name: "acosh",
        description: "Hyperbolic arccosine, acosh(x) = ln(sqrt(x^2 - 1) + x). Evaluated element wise for containers.",
        usage: "acosh(x)",
        args: &ACOSH_ARGS,
        returns: "Real | Complex | BigNumber | Array | Matrix",
        examples: &ACOSH_EXAMPLES,
        category: "hyperbolic",
        related: &ACOSH_RELATED,
    }
}

/// Domain selection for a real input.
///
/// Predictable mode is checked first, so it wins even for `x <= -1` and the
/// result may be NaN.
pub fn acosh_real(
    x: f64,
    predictable: bool,
    kernels: &RealKernels,
    complex: &dyn ComplexOps,
) -> Result<Value, MathError> {
    if x >= 1.0 || predictable {
        return Ok(Value::Real(kernels.acosh(x)));
    }
    if x <= -1.0 {
        // principal branch, built directly
        return Ok(Value::Complex(Complex64::new(((x * x - 1.0).sqrt() - x).ln(), PI)));
    }
    complex.acosh(Complex64::new(x, 0.0)).map(Value::Complex)
}

pub fn acosh(config: MathConfig, kernels: RealKernels, caps: &Capabilities) -> TypedFunction {
    let complex_for_real = Arc::clone(&caps.complex);
    let complex = Arc::clone(&caps.complex);
    let big = Arc::clone(&caps.big);
    let precision = config.precision;

    TypedFunction::builder("acosh")
        .real(move |x| acosh_real(x, config.predictable, &kernels, complex_for_real.as_ref()))
        .complex(move |z| complex.acosh(z).map(Value::Complex))
        .big_number(move |n| Ok(Value::BigNumber(big.acosh(n, precision)?)))
        .container(|c, this| deep_map(c, &|leaf| this.call1(leaf)).map(Value::Container))
        .meta(meta())
        .build()
}
