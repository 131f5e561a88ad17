//! Polymath Dispatch System
//!
//! Provides the machinery every numeric function is assembled from:
//! - Type patterns and ordered signatures (first match wins)
//! - Typed functions and the immutable function registry
//! - Elementwise mapping over nested containers
//! - Engine configuration

mod pattern;
mod function;
mod registry;
mod map;
mod config;

pub use pattern::TypePattern;
pub use function::{
    TypedFunction, TypedFunctionBuilder, Signature, Implementation,
    FunctionMeta, ArgMeta,
};
pub use registry::{FunctionRegistry, FunctionHelp};
pub use map::{deep_map, map_value};
pub use config::MathConfig;

/// Re-export core types for function authors
pub mod prelude {
    pub use crate::{
        TypePattern, TypedFunction, Signature, FunctionMeta, ArgMeta,
        FunctionRegistry, MathConfig, deep_map,
    };
    pub use polymath_core::prelude::*;
}
