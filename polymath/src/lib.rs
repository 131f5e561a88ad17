//! Polymath - typed multiple-dispatch numeric engine
//!
//! The engine owns one immutable function registry. Calls through the typed
//! handles (`Engine::acosh`, `Engine::csch`) skip the name lookup; calls by
//! name go through the registry.

use std::sync::{Arc, LazyLock};
use polymath_dispatch::FunctionHelp;
use polymath_std::StandardFunctions;
use tracing::debug;

pub use polymath_core::{
    codes, Complex64, Container, ContainerKind, Dimension, MathError, Number, NumberError,
    Quantity, Unit, Value, UNITS,
};
pub use polymath_dispatch::{FunctionMeta, FunctionRegistry, MathConfig, TypePattern, TypedFunction};
pub use polymath_std::{Capabilities, RealKernels, Strategy};

static GLOBAL: LazyLock<Engine> = LazyLock::new(Engine::default);

/// Main Polymath engine
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<FunctionRegistry>,
    functions: StandardFunctions,
    config: MathConfig,
}

impl Engine {
    pub fn new(config: MathConfig) -> Self {
        Self::with_capabilities(config, &Capabilities::standard())
    }

    pub fn with_capabilities(config: MathConfig, caps: &Capabilities) -> Self {
        let functions = StandardFunctions::build(config, caps);
        let registry = functions.install(FunctionRegistry::new());
        debug!(functions = registry.names().len(), "engine ready");
        Self { registry: Arc::new(registry), functions, config }
    }

    /// Process-wide engine with the default configuration
    pub fn global() -> &'static Engine {
        &GLOBAL
    }

    pub fn config(&self) -> MathConfig {
        self.config
    }

    pub fn registry(&self) -> &Arc<FunctionRegistry> {
        &self.registry
    }

    pub fn acosh(&self, x: &Value) -> Result<Value, MathError> {
        self.functions.acosh.call1(x)
    }

    pub fn csch(&self, x: &Value) -> Result<Value, MathError> {
        self.functions.csch.call1(x)
    }

    /// Call a function by name (case-insensitive)
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, MathError> {
        self.registry.call(name, args)
    }

    pub fn help(&self, name: &str) -> Option<FunctionHelp> {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Vec<FunctionMeta> {
        self.registry.list_functions(category)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(MathConfig::default())
    }
}
