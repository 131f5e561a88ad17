//! Structured errors
//!
//! Every failure carries a machine-readable code, a message and, where it
//! helps, a suggestion. Errors are returned, never recovered internally.

use crate::{Dimension, NumberError};
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DISPATCH_ERROR: &str = "DISPATCH_ERROR";
    pub const TYPE_ERROR: &str = "TYPE_ERROR";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const OVERFLOW: &str = "OVERFLOW";
}

/// Context about where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Function that raised the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Propagation notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl MathError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set function context
    pub fn in_function(mut self, function: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.function = Some(function.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// Name of the function recorded in the context, if any
    pub fn function(&self) -> Option<&str> {
        self.context.as_ref().and_then(|c| c.function.as_deref())
    }

    pub fn is_dispatch(&self) -> bool {
        self.code == codes::DISPATCH_ERROR
    }

    pub fn is_type_error(&self) -> bool {
        self.code == codes::TYPE_ERROR
    }

    // ========== Common Error Constructors ==========

    /// No signature of `func` accepts the given argument tags
    pub fn dispatch(func: &str, got: &[&str]) -> Self {
        Self::new(codes::DISPATCH_ERROR, format!(
            "Unexpected type of argument in function {} (arity {}, got {})",
            func, got.len(), got.join(", ")
        ))
        .with_suggestion(format!("Use help('{}') to see accepted types", func))
        .in_function(func)
    }

    /// A quantity argument does not carry the dimension `func` requires
    pub fn dimension_mismatch(func: &str, expected: Dimension, got: Dimension) -> Self {
        let expected_name = expected.name().map(str::to_string).unwrap_or_else(|| expected.to_string());
        Self::new(codes::TYPE_ERROR, format!("Unit in function {} is no {}", func, expected_name))
            .with_note(format!("got dimension {}", got))
            .in_function(func)
    }

    pub fn type_error(expected: &str, got: &str) -> Self {
        Self::new(codes::TYPE_ERROR, format!("Expected {}, got {}", expected, got))
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("Unknown function: {}", name))
            .with_suggestion("Use list_functions() to see available functions")
    }

    /// Items of a container do not share one nesting shape
    pub fn ragged(details: impl Into<String>) -> Self {
        Self::new(codes::DIMENSION_MISMATCH, format!("Dimension mismatch: {}", details.into()))
            .with_suggestion("All rows of a container must have the same size")
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MathError {}

/// Arithmetic failures keep their original message.
impl From<NumberError> for MathError {
    fn from(err: NumberError) -> Self {
        let code = match err {
            NumberError::ParseError(_) => codes::PARSE_ERROR,
            NumberError::DivisionByZero => codes::DIV_ZERO,
            NumberError::DomainError(_) => codes::DOMAIN_ERROR,
            NumberError::Overflow => codes::OVERFLOW,
        };
        Self::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error() {
        let err = MathError::dispatch("acosh", &["Quantity"]);
        assert!(err.is_dispatch());
        assert_eq!(err.function(), Some("acosh"));
        assert!(err.message.contains("Quantity"));
        assert!(err.message.contains("arity 1"));
    }

    #[test]
    fn test_dimension_mismatch_names_function() {
        let err = MathError::dimension_mismatch("csch", Dimension::ANGLE, Dimension::LENGTH);
        assert!(err.is_type_error());
        assert_eq!(err.message, "Unit in function csch is no angle");
        let ctx = err.context.unwrap();
        assert_eq!(ctx.notes, vec!["got dimension L".to_string()]);
    }

    #[test]
    fn test_number_error_message_kept() {
        let err: MathError = NumberError::DomainError("bad input".to_string()).into();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
        assert_eq!(err.message, "Domain error: bad input");

        let err: MathError = NumberError::DivisionByZero.into();
        assert_eq!(err.code, codes::DIV_ZERO);
        assert_eq!(err.message, "Division by zero");
    }

    #[test]
    fn test_error_display() {
        let err = MathError::undefined_func("acoshh");
        let display = format!("{}", err);
        assert!(display.starts_with("[UNDEFINED_FUNC]"));
    }

    #[test]
    fn test_error_serializes() {
        let err = MathError::dispatch("csch", &["Bool"]);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "DISPATCH_ERROR");
        assert_eq!(json["context"]["function"], "csch");
        let fields: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(fields, vec!["code", "context", "message", "suggestion"]);
    }
}
