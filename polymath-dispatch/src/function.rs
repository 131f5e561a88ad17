//! Typed functions: an ordered list of signatures behind one name

use std::fmt;
use std::sync::Arc;
use polymath_core::{Complex64, Container, MathError, Number, Quantity, Value};
use serde::Serialize;
use tracing::{debug, trace};
use crate::TypePattern;

/// Implementation closure of a signature. It receives the owning function so
/// that container and unit branches can dispatch again on inner values.
pub type Implementation =
    Arc<dyn Fn(&[Value], &TypedFunction) -> Result<Value, MathError> + Send + Sync>;

/// Metadata about a function argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description }
    }
}

/// Documentation attached to a typed function
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
    pub category: &'static str,
    pub related: &'static [&'static str],
}

/// One overload: parameter patterns (arity = length) plus implementation
#[derive(Clone)]
pub struct Signature {
    params: Vec<TypePattern>,
    implementation: Implementation,
}

impl Signature {
    pub fn new<F>(params: Vec<TypePattern>, implementation: F) -> Self
    where
        F: Fn(&[Value], &TypedFunction) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        Self { params, implementation: Arc::new(implementation) }
    }

    /// Single-parameter signature
    pub fn unary<F>(pattern: TypePattern, implementation: F) -> Self
    where
        F: Fn(&Value, &TypedFunction) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        // arity is checked by `matches` before the closure runs
        Self::new(vec![pattern], move |args, this| implementation(&args[0], this))
    }

    pub fn real<F>(implementation: F) -> Self
    where
        F: Fn(f64) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        Self::unary(TypePattern::Real, move |v, this| match v {
            Value::Real(x) => implementation(*x),
            other => Err(MathError::dispatch(this.name(), &[other.type_name()])),
        })
    }

    pub fn complex<F>(implementation: F) -> Self
    where
        F: Fn(Complex64) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        Self::unary(TypePattern::Complex, move |v, this| match v {
            Value::Complex(z) => implementation(*z),
            other => Err(MathError::dispatch(this.name(), &[other.type_name()])),
        })
    }

    pub fn big_number<F>(implementation: F) -> Self
    where
        F: Fn(&Number) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        Self::unary(TypePattern::BigNumber, move |v, this| match v {
            Value::BigNumber(n) => implementation(n),
            other => Err(MathError::dispatch(this.name(), &[other.type_name()])),
        })
    }

    pub fn quantity<F>(implementation: F) -> Self
    where
        F: Fn(&Quantity, &TypedFunction) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        Self::unary(TypePattern::Quantity, move |v, this| match v {
            Value::Quantity(q) => implementation(q, this),
            other => Err(MathError::dispatch(this.name(), &[other.type_name()])),
        })
    }

    /// Array or Matrix
    pub fn container<F>(implementation: F) -> Self
    where
        F: Fn(&Container, &TypedFunction) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        Self::unary(TypePattern::Container, move |v, this| match v {
            Value::Container(c) => implementation(c, this),
            other => Err(MathError::dispatch(this.name(), &[other.type_name()])),
        })
    }

    pub fn params(&self) -> &[TypePattern] {
        &self.params
    }

    pub fn matches(&self, args: &[Value]) -> bool {
        self.params.len() == args.len()
            && self.params.iter().zip(args).all(|(p, v)| p.matches(v))
    }

    fn invoke(&self, args: &[Value], owner: &TypedFunction) -> Result<Value, MathError> {
        (self.implementation)(args, owner)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", params.join(", "))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature").field("params", &self.params).finish_non_exhaustive()
    }
}

/// A named function dispatching over an ordered list of signatures.
///
/// Registration order is preserved and the first matching signature wins.
#[derive(Debug)]
pub struct TypedFunction {
    name: String,
    signatures: Vec<Signature>,
    meta: Option<FunctionMeta>,
}

impl TypedFunction {
    pub fn builder(name: impl Into<String>) -> TypedFunctionBuilder {
        TypedFunctionBuilder {
            name: name.into(),
            signatures: Vec::new(),
            meta: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn meta(&self) -> Option<&FunctionMeta> {
        self.meta.as_ref()
    }

    /// Pick the first signature whose patterns match `args`
    pub fn resolve(&self, args: &[Value]) -> Result<&Signature, MathError> {
        match self.signatures.iter().position(|s| s.matches(args)) {
            Some(index) => {
                trace!(function = %self.name, index, "resolved signature");
                Ok(&self.signatures[index])
            }
            None => {
                let got: Vec<&str> = args.iter().map(Value::type_name).collect();
                Err(MathError::dispatch(&self.name, &got))
            }
        }
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, MathError> {
        self.resolve(args)?.invoke(args, self)
    }

    pub fn call1(&self, arg: &Value) -> Result<Value, MathError> {
        self.call(std::slice::from_ref(arg))
    }
}

pub struct TypedFunctionBuilder {
    name: String,
    signatures: Vec<Signature>,
    meta: Option<FunctionMeta>,
}

impl TypedFunctionBuilder {
    pub fn signature(mut self, signature: Signature) -> Self {
        self.signatures.push(signature);
        self
    }

    pub fn unary<F>(self, pattern: TypePattern, implementation: F) -> Self
    where
        F: Fn(&Value, &TypedFunction) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        self.signature(Signature::unary(pattern, implementation))
    }

    pub fn real<F>(self, implementation: F) -> Self
    where
        F: Fn(f64) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        self.signature(Signature::real(implementation))
    }

    pub fn complex<F>(self, implementation: F) -> Self
    where
        F: Fn(Complex64) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        self.signature(Signature::complex(implementation))
    }

    pub fn big_number<F>(self, implementation: F) -> Self
    where
        F: Fn(&Number) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        self.signature(Signature::big_number(implementation))
    }

    pub fn quantity<F>(self, implementation: F) -> Self
    where
        F: Fn(&Quantity, &TypedFunction) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        self.signature(Signature::quantity(implementation))
    }

    pub fn container<F>(self, implementation: F) -> Self
    where
        F: Fn(&Container, &TypedFunction) -> Result<Value, MathError> + Send + Sync + 'static,
    {
        self.signature(Signature::container(implementation))
    }

    pub fn meta(mut self, meta: FunctionMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn build(self) -> TypedFunction {
        debug!(function = %self.name, signatures = self.signatures.len(), "built typed function");
        TypedFunction {
            name: self.name,
            signatures: self.signatures,
            meta: self.meta,
        }
    }
}
