//! Unified error types for mar-suitability.
//!
//! The scoring engine itself never fails on data problems: missing or
//! malformed evidence degrades to "unscored". Errors only arise while loading
//! documents (case files, judgment files, configuration) or writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mar-suitability operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MarError {
    /// Errors while reading an input document
    #[error("Failed to load input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization errors
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Unknown criterion id: {0} (expected C1-C5)")]
    UnknownCriterion(String),

    #[error("Unknown variable id: {0}")]
    UnknownVariable(String),

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for mar-suitability operations
pub type Result<T> = std::result::Result<T, MarError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MarError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an input error for an invalid field value
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::input(
            "invalid field value",
            InputErrorKind::InvalidValue {
                field: field.into(),
                message: message.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MarError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MarError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// # Example
///
/// ```ignore
/// use mar_suitability::error::ErrorContext;
///
/// fn load_case(path: &Path) -> Result<CaseInput> {
///     let content = std::fs::read_to_string(path)
///         .with_context(|| format!("reading case file {}", path.display()))?;
///     serde_json::from_str(&content).context("parsing case JSON")
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error, chaining with any existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MarError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: MarError, new_ctx: &str) -> MarError {
    match err {
        MarError::Input {
            context: existing,
            source,
        } => MarError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MarError::Io {
            path,
            message,
            source,
        } => MarError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MarError::Serialization(msg) => MarError::Serialization(chain_context(new_ctx, &msg)),
        MarError::Config(msg) => MarError::Config(chain_context(new_ctx, &msg)),
        MarError::Validation(msg) => MarError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing is chained yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarError::input(
            "judgments file",
            InputErrorKind::UnknownCriterion("C9".to_string()),
        );
        let display = err.to_string();
        assert!(display.contains("judgments file"), "{display}");

        let err = MarError::invalid_value("scenario", "expected 0-3");
        assert!(err.to_string().contains("invalid field value"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MarError::io("/cases/site-a.json", io_err);
        assert!(err.to_string().contains("/cases/site-a.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(MarError::input(
                "base",
                InputErrorKind::InvalidJson("eof".to_string()),
            ))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(MarError::Input { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(MarError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called);
    }

    #[test]
    fn test_serde_json_error_converts_to_input() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: MarError = parsed.unwrap_err().into();
        assert!(matches!(
            err,
            MarError::Input {
                source: InputErrorKind::InvalidJson(_),
                ..
            }
        ));
    }
}
