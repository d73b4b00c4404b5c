//! Error types for rule validation
//!
//! Two disjoint failure kinds:
//! - Configuration errors: the definition itself is malformed (missing
//!   `type`, unregistered strategy name). Fatal, immediate, never
//!   aggregated.
//! - Validation errors: the value violates declared constraints. Collected
//!   across all steps of one run and delivered together as one aggregate.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type for rule validation operations
pub type ValidateResult<T> = Result<T, ValidateError>;

/// One failed constraint, as reported by a single step or strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    /// Human-readable description of the violation
    pub message: String,
    /// Key of the field under validation, when the caller supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ErrorEntry {
    /// Creates an entry attributed to the given key.
    pub fn new(message: impl Into<String>, key: Option<&str>) -> Self {
        Self {
            message: message.into(),
            key: key.map(String::from),
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "'{}': {}", key, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Every constraint violated during one validation run, in detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateError {
    errors: Vec<ErrorEntry>,
}

impl AggregateError {
    /// Builds the aggregate from a non-empty list of entries.
    pub fn new(errors: Vec<ErrorEntry>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    /// Returns all entries in the order their steps detected them.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// Returns the number of violated constraints.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// An aggregate is only constructed with at least one entry.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed ({} error(s)):", self.errors.len())?;
        for entry in &self.errors {
            write!(f, " [{}]", entry)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

/// Top-level error for a `validate` call.
///
/// Configuration variants signal a programming mistake in the definition
/// and surface immediately; `Invalid` carries the data-driven aggregate.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Rule definitions must declare a 'type'
    #[error("rule definition must declare a 'type'")]
    MissingType,

    /// Type name does not resolve in the type strategy registry
    #[error("no type strategy registered for '{0}'")]
    UnknownType(String),

    /// Type strategy exists but has no check with the requested name
    #[error("type strategy '{strategy}' has no check named '{subtype}'")]
    UnknownSubtype {
        /// The registered type strategy name
        strategy: String,
        /// The unresolvable sub-check name
        subtype: String,
    },

    /// Modifier name does not resolve in the modifier registry
    #[error("no modifier strategy registered for '{0}'")]
    UnknownModifier(String),

    /// Creator name does not resolve in the creator registry
    #[error("no creator strategy registered for '{0}'")]
    UnknownCreator(String),

    /// The value violated one or more declared constraints
    #[error(transparent)]
    Invalid(#[from] AggregateError),
}

impl ValidateError {
    /// True for configuration (bad schema) errors, false for validation
    /// (bad input) rejections.
    pub fn is_config(&self) -> bool {
        !matches!(self, ValidateError::Invalid(_))
    }

    /// Returns the accumulated entries for validation rejections.
    pub fn validation_errors(&self) -> Option<&[ErrorEntry]> {
        match self {
            ValidateError::Invalid(agg) => Some(agg.errors()),
            _ => None,
        }
    }
}
