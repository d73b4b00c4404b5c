//! Rule definition types
//!
//! A `RuleDef` describes one schema field: its type strategy plus the
//! optional defaults, constraints, and transformations to apply. Every
//! optional property doubles as the presence flag for its pipeline step:
//! `default: 0`, `min: 0.0`, or `allow: []` are declared and still
//! activate their step.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Permitted values for the `allow` step.
///
/// JSON arrays deserialize as `Many`; any other JSON value as `One`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Allow {
    /// A set of permitted values
    Many(Vec<Value>),
    /// A single permitted value
    One(Value),
}

impl Allow {
    /// Returns whether the value is permitted (equality against the set).
    pub fn permits(&self, value: &Value) -> bool {
        match self {
            Allow::Many(values) => values.iter().any(|v| v == value),
            Allow::One(v) => v == value,
        }
    }
}

/// Declarative description of one schema field.
///
/// `type` is mandatory at validation time; a definition without it is
/// malformed and rejected before any step runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleDef {
    /// Name of the type strategy, optionally with a sub-check
    /// (e.g. `"string"` or `"string:alphanumeric"`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Whether the field must be present; absent non-required fields only
    /// run the creator/default/modifier steps
    pub required: bool,

    /// Value substituted when none is supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Name of a creator strategy that produces a value when none is supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Name of a modifier strategy applied to the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,

    /// Permitted values for the `allow` step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<Allow>,

    /// Lower bound; magnitude for numbers, length for strings/arrays/objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound; same measurement semantics as `min`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl RuleDef {
    /// Creates a definition for the given type strategy name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declares a default value.
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Declares a creator strategy by name.
    pub fn with_creator(mut self, name: impl Into<String>) -> Self {
        self.creator = Some(name.into());
        self
    }

    /// Declares a modifier strategy by name.
    pub fn with_modifier(mut self, name: impl Into<String>) -> Self {
        self.modifier = Some(name.into());
        self
    }

    /// Declares the permitted-values set.
    pub fn with_allow(mut self, values: Vec<Value>) -> Self {
        self.allow = Some(Allow::Many(values));
        self
    }

    /// Declares the lower bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Declares the upper bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}
