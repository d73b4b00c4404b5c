//! Per-call validation state
//!
//! `ValidationContext` is the error accumulator for exactly one `validate`
//! call: constructed fresh inside the call, owned by it, dropped when the
//! call resolves. It is never shared across calls.
//!
//! `StrategyContext` is the borrowed view handed to each strategy
//! invocation: the definition, the key under validation, the current
//! running value, and the `fail` capability bound to the run's context.

use serde_json::Value;

use super::definition::RuleDef;
use super::errors::ErrorEntry;

/// Ordered accumulator of constraint violations for one validation run.
#[derive(Debug, Default)]
pub struct ValidationContext {
    errors: Vec<ErrorEntry>,
}

impl ValidationContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violated constraint attributed to the given key.
    pub fn fail(&mut self, message: impl Into<String>, key: Option<&str>) {
        self.errors.push(ErrorEntry::new(message, key));
    }

    /// Returns whether any step has failed so far.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the entries recorded so far, in detection order.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// Consumes the context, yielding the entries in detection order.
    pub fn into_errors(self) -> Vec<ErrorEntry> {
        self.errors
    }
}

/// The view a strategy receives for one invocation.
///
/// `value` is `None` when no value was supplied (distinct from JSON null).
/// Strategies report violations through [`StrategyContext::fail`] and may
/// return a replacement value instead of, or in addition to, failing.
pub struct StrategyContext<'a> {
    /// The rule definition driving this run
    pub def: &'a RuleDef,
    /// Key of the field under validation, for error attribution
    pub key: Option<&'a str>,
    /// The current running value, `None` when absent
    pub value: Option<&'a Value>,
    /// Sub-check name for type strategies (`"default"` unless the
    /// definition used `type: "name:subtype"`)
    pub subtype: &'a str,
    context: &'a mut ValidationContext,
}

impl<'a> StrategyContext<'a> {
    /// Builds the view for one strategy invocation.
    pub(crate) fn new(
        def: &'a RuleDef,
        key: Option<&'a str>,
        value: Option<&'a Value>,
        subtype: &'a str,
        context: &'a mut ValidationContext,
    ) -> Self {
        Self {
            def,
            key,
            value,
            subtype,
            context,
        }
    }

    /// Records a constraint violation without halting the pipeline.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.context.fail(message, self.key);
    }
}
