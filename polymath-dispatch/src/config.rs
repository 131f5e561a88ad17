//! Engine configuration

use polymath_core::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};

/// Options captured when a function library is loaded.
///
/// The values are copied into the functions at construction time, so a
/// built registry never observes later changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// Always use the real-valued formula, even where the mathematically
    /// correct result would be complex
    pub predictable: bool,
    /// Decimal digits used by arbitrary precision operations
    pub precision: u32,
    /// Use native transcendental primitives when they pass the startup probe
    pub native_primitives: bool,
}

impl MathConfig {
    pub fn new() -> Self {
        Self {
            predictable: false,
            precision: DEFAULT_PRECISION as u32,
            native_primitives: true,
        }
    }

    pub fn with_predictable(mut self, predictable: bool) -> Self {
        self.predictable = predictable;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_native_primitives(mut self, enabled: bool) -> Self {
        self.native_primitives = enabled;
        self
    }
}

impl Default for MathConfig {
    fn default() -> Self {
        Self::new()
    }
}
