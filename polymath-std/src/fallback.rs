//! Precision fallback for real transcendental primitives
//!
//! At startup the native `f64` primitives are checked against their
//! closed-form equivalents on a few reference points. If they agree (and
//! native use is allowed) the native ones are used, otherwise the closed
//! forms are installed. Either way the choice is fixed for the lifetime of
//! the functions that hold the kernels.

use num_traits::Float;
use tracing::debug;

const PROBE_TOLERANCE: f64 = 1e-12;
const ACOSH_PROBES: [f64; 5] = [1.0, 1.5, 2.0, 10.0, 1e6];
const SIGN_PROBES: [f64; 4] = [-2.5, -1e-300, 0.5, 3.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Native,
    Polyfill,
}

/// `acosh(x) = ln(sqrt(x^2 - 1) + x)`
pub fn polyfill_acosh<F: Float>(x: F) -> F {
    ((x * x - F::one()).sqrt() + x).ln()
}

/// -1, 0 or 1; zero and NaN are returned unchanged
pub fn polyfill_sign<F: Float>(x: F) -> F {
    if x > F::zero() {
        F::one()
    } else if x < F::zero() {
        -F::one()
    } else {
        x
    }
}

fn native_acosh(x: f64) -> f64 {
    x.acosh()
}

fn native_sign(x: f64) -> f64 {
    x.signum()
}

/// Real kernels selected once at initialization
#[derive(Debug, Clone, Copy)]
pub struct RealKernels {
    strategy: Strategy,
    acosh: fn(f64) -> f64,
    sign: fn(f64) -> f64,
}

impl RealKernels {
    pub fn native() -> Self {
        Self { strategy: Strategy::Native, acosh: native_acosh, sign: native_sign }
    }

    pub fn polyfill() -> Self {
        Self {
            strategy: Strategy::Polyfill,
            acosh: polyfill_acosh::<f64>,
            sign: polyfill_sign::<f64>,
        }
    }

    /// Use the native primitives if allowed and they pass the probe
    pub fn probe(prefer_native: bool) -> Self {
        let kernels = if prefer_native && Self::native_agrees() {
            Self::native()
        } else {
            Self::polyfill()
        };
        debug!(strategy = ?kernels.strategy, prefer_native, "selected real kernels");
        kernels
    }

    fn native_agrees() -> bool {
        let acosh_ok = ACOSH_PROBES.iter().all(|&x| {
            let (n, p) = (native_acosh(x), polyfill_acosh(x));
            (n - p).abs() <= PROBE_TOLERANCE * p.abs().max(1.0)
        });
        let sign_ok = SIGN_PROBES.iter().all(|&x| native_sign(x) == polyfill_sign(x));
        acosh_ok && sign_ok
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn acosh(&self, x: f64) -> f64 {
        (self.acosh)(x)
    }

    pub fn sign(&self, x: f64) -> f64 {
        (self.sign)(x)
    }
}

impl Default for RealKernels {
    fn default() -> Self {
        Self::probe(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol * b.abs().max(1.0), "{} vs {}", a, b);
    }

    #[test]
    fn test_probe_prefers_native() {
        assert_eq!(RealKernels::probe(true).strategy(), Strategy::Native);
    }

    #[test]
    fn test_probe_respects_opt_out() {
        assert_eq!(RealKernels::probe(false).strategy(), Strategy::Polyfill);
    }

    #[test]
    fn test_acosh_paths_agree() {
        let native = RealKernels::native();
        let polyfill = RealKernels::polyfill();
        let mut x = 1.0;
        while x < 1e8 {
            assert_close(native.acosh(x), polyfill.acosh(x), 1e-10);
            x = x * 1.37 + 0.01;
        }
    }

    #[test]
    fn test_acosh_reference_value() {
        assert_close(RealKernels::polyfill().acosh(1.5), 0.9624236501192069, 1e-10);
        assert_close(RealKernels::native().acosh(1.5), 0.9624236501192069, 1e-10);
    }

    #[test]
    fn test_acosh_outside_domain_is_nan() {
        assert!(RealKernels::native().acosh(0.5).is_nan());
        assert!(RealKernels::polyfill().acosh(0.5).is_nan());
        assert!(RealKernels::native().acosh(-2.0).is_nan());
        assert!(RealKernels::polyfill().acosh(-2.0).is_nan());
    }

    #[test]
    fn test_sign_paths_agree_off_zero() {
        for x in [-1e10, -3.0, -1e-20, 1e-20, 0.5, 7.0, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(RealKernels::native().sign(x), RealKernels::polyfill().sign(x));
        }
    }

    #[test]
    fn test_polyfill_sign_at_zero() {
        assert_eq!(polyfill_sign(0.0_f64), 0.0);
        assert!(polyfill_sign(f64::NAN).is_nan());
    }

    #[test]
    fn test_generic_over_f32() {
        assert!((polyfill_acosh(1.5_f32) - 0.962_423_6).abs() < 1e-5);
    }
}
