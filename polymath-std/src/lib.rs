//! Polymath Standard Library

pub mod functions;
mod capability;
mod fallback;
mod guard;

pub use capability::{
    ArbitraryPrecisionOps, Capabilities, ComplexOps, DecimalOps, SiUnitOps, StdComplexOps,
    UnitOps,
};
pub use fallback::{polyfill_acosh, polyfill_sign, RealKernels, Strategy};
pub use guard::unit_guard;

use std::sync::Arc;
use polymath_dispatch::{FunctionRegistry, MathConfig, TypedFunction};
use tracing::debug;

/// Handles to the standard functions
#[derive(Debug, Clone)]
pub struct StandardFunctions {
    pub acosh: Arc<TypedFunction>,
    pub csch: Arc<TypedFunction>,
}

impl StandardFunctions {
    /// Build every function with `config` and `caps`.
    ///
    /// The real kernels are probed once here and shared by every function.
    pub fn build(config: MathConfig, caps: &Capabilities) -> Self {
        let kernels = RealKernels::probe(config.native_primitives);
        debug!(?config, strategy = ?kernels.strategy(), "building standard functions");
        Self {
            acosh: Arc::new(functions::acosh(config, kernels, caps)),
            csch: Arc::new(functions::csch(config, kernels, caps)),
        }
    }

    pub fn install(&self, registry: FunctionRegistry) -> FunctionRegistry {
        registry
            .with_shared(Arc::clone(&self.acosh))
            .with_shared(Arc::clone(&self.csch))
    }
}

/// Load standard library into registry
pub fn load_standard_library(
    registry: FunctionRegistry,
    config: MathConfig,
    caps: &Capabilities,
) -> FunctionRegistry {
    StandardFunctions::build(config, caps).install(registry)
}

/// Create registry with standard library
pub fn standard_registry(config: MathConfig) -> FunctionRegistry {
    load_standard_library(FunctionRegistry::new(), config, &Capabilities::standard())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymath_core::{codes, Complex64, Value};

    #[test]
    fn test_standard_registry_names() {
        let registry = standard_registry(MathConfig::default());
        assert_eq!(registry.names(), vec!["acosh", "csch"]);
    }

    #[test]
    fn test_hyperbolic_category() {
        let registry = standard_registry(MathConfig::default());
        assert_eq!(registry.list_functions(Some("hyperbolic")).len(), 2);
        assert!(registry.list_functions(Some("trig")).is_empty());
    }

    #[test]
    fn test_config_is_captured() {
        let registry = standard_registry(MathConfig::new().with_predictable(true));
        let out = registry.call("acosh", &[Value::Real(-2.0)]).unwrap();
        assert!(out.as_real().unwrap().is_nan());
    }

    #[test]
    fn test_polyfill_library_matches_native() {
        let native = standard_registry(MathConfig::default());
        let polyfill = standard_registry(MathConfig::new().with_native_primitives(false));
        for x in [1.0, 1.5, 3.0, 42.0] {
            let a = native.call("acosh", &[Value::Real(x)]).unwrap().as_real().unwrap();
            let b = polyfill.call("acosh", &[Value::Real(x)]).unwrap().as_real().unwrap();
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn test_installed_handles_are_shared() {
        let fns = StandardFunctions::build(MathConfig::default(), &Capabilities::standard());
        let registry = fns.install(FunctionRegistry::new());
        assert!(Arc::ptr_eq(&registry.get("ACOSH").unwrap(), &fns.acosh));
        assert!(Arc::ptr_eq(&registry.get("csch").unwrap(), &fns.csch));
    }

    struct FailingComplex;

    impl ComplexOps for FailingComplex {
        fn acosh(&self, _z: Complex64) -> Result<Complex64, polymath_core::MathError> {
            Err(polymath_core::MathError::domain_error("complex acosh unavailable"))
        }

        fn csch(&self, z: Complex64) -> Result<Complex64, polymath_core::MathError> {
            Ok(z)
        }
    }

    #[test]
    fn test_injected_capability_error_is_not_wrapped() {
        let caps = Capabilities::standard().with_complex(FailingComplex);
        let registry = load_standard_library(FunctionRegistry::new(), MathConfig::default(), &caps);
        let err = registry.call("acosh", &[Value::Real(0.5)]).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
        assert_eq!(err.message, "Domain error: complex acosh unavailable");
        // the x <= -1 branch never reaches the capability
        assert!(registry.call("acosh", &[Value::Real(-2.0)]).is_ok());
    }
}
