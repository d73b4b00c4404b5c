//! Rule pipeline executor
//!
//! Runs one value through the step sequence selected for one definition.
//!
//! Execution semantics:
//! - Configuration mistakes (missing `type`, dangling strategy names)
//!   fail immediately, before any step runs
//! - Steps run strictly in sequence; each awaits the previous step's
//!   strategy so step n+1 always sees the value step n produced
//! - Constraint violations accumulate in the call's context; every
//!   declared step runs even after an earlier one failed, and the full
//!   aggregate is raised once at the end of the run

use serde_json::Value;

use crate::observability::Logger;
use crate::strategies::{ResolvedRule, StrategyRegistry, DEFAULT_SUBTYPE};

use super::context::{StrategyContext, ValidationContext};
use super::definition::RuleDef;
use super::errors::{AggregateError, ValidateError, ValidateResult};
use super::steps::{sequence_for, StepKind};

/// Pipeline executor backed by a strategy registry.
///
/// The registry is read-only during validation, so one validator (or
/// several validators sharing one registry) can serve concurrent
/// `validate` calls; each call owns its context exclusively.
pub struct RuleValidator<'a> {
    registry: &'a StrategyRegistry,
}

impl<'a> RuleValidator<'a> {
    /// Creates a validator backed by the given registry.
    pub fn new(registry: &'a StrategyRegistry) -> Self {
        Self { registry }
    }

    /// Validates one value against one rule definition.
    ///
    /// # Arguments
    ///
    /// * `def` - The rule definition; must declare a `type`
    /// * `value` - The input value, `None` when absent
    /// * `key` - Optional field identifier, used only for error attribution
    ///
    /// # Errors
    ///
    /// Returns a configuration error (`is_config()`) when the definition
    /// is malformed or references an unregistered strategy, or
    /// `ValidateError::Invalid` carrying every violated constraint in
    /// detection order.
    pub async fn validate(
        &self,
        def: &RuleDef,
        value: Option<Value>,
        key: Option<&str>,
    ) -> ValidateResult<Option<Value>> {
        let resolved = match self.registry.resolve(def) {
            Ok(resolved) => resolved,
            Err(err) => return Err(log_config_error(err, def, key)),
        };

        let steps = sequence_for(def, value.is_none());
        let mut cx = ValidationContext::new();
        let mut current = value;

        for step in steps {
            if !step.declared_in(def) {
                continue;
            }
            if let Some(next) = run_step(*step, def, key, &current, &resolved, &mut cx).await {
                current = Some(next);
            }
        }

        if cx.has_errors() {
            return Err(AggregateError::new(cx.into_errors()).into());
        }
        Ok(current)
    }
}

/// Runs one step; `Some(value)` replaces the running value.
async fn run_step(
    step: StepKind,
    def: &RuleDef,
    key: Option<&str>,
    current: &Option<Value>,
    resolved: &ResolvedRule,
    cx: &mut ValidationContext,
) -> Option<Value> {
    match step {
        StepKind::Creator => {
            // Creators only fill absent values
            if current.is_some() {
                return None;
            }
            let creator = resolved.creator.as_ref()?;
            let ctx = StrategyContext::new(def, key, current.as_ref(), DEFAULT_SUBTYPE, cx);
            creator.run(ctx).await
        }
        StepKind::Default => {
            if current.is_some() {
                None
            } else {
                def.default.clone()
            }
        }
        StepKind::Modifier => {
            let modifier = resolved.modifier.as_ref()?;
            let ctx = StrategyContext::new(def, key, current.as_ref(), DEFAULT_SUBTYPE, cx);
            modifier.run(ctx).await
        }
        StepKind::Allow => {
            let allow = def.allow.as_ref()?;
            let permitted = current.as_ref().map(|v| allow.permits(v)).unwrap_or(false);
            if !permitted {
                cx.fail(
                    format!("Value {} is not allowed", display_value(current)),
                    key,
                );
            }
            None
        }
        StepKind::Min => {
            let min = def.min?;
            match measure(current) {
                Some(size) if size >= min => {}
                Some(_) => cx.fail(format!("Value must be at least {}", min), key),
                None => cx.fail(
                    format!("Value does not support a 'min' bound of {}", min),
                    key,
                ),
            }
            None
        }
        StepKind::Max => {
            let max = def.max?;
            match measure(current) {
                Some(size) if size <= max => {}
                Some(_) => cx.fail(format!("Value must be at most {}", max), key),
                None => cx.fail(
                    format!("Value does not support a 'max' bound of {}", max),
                    key,
                ),
            }
            None
        }
        StepKind::Type => {
            let ctx = StrategyContext::new(def, key, current.as_ref(), &resolved.subtype, cx);
            resolved.type_strategy.run(ctx).await
        }
    }
}

/// Measures a value for the min/max bounds: numbers by magnitude, strings
/// by char count, arrays and objects by element count.
fn measure(value: &Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => Some(s.chars().count() as f64),
        Some(Value::Array(items)) => Some(items.len() as f64),
        Some(Value::Object(map)) => Some(map.len() as f64),
        _ => None,
    }
}

fn display_value(value: &Option<Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "(none)".to_string(),
    }
}

/// Configuration errors signal programmer mistakes; log them for
/// developers before surfacing the error to the caller.
fn log_config_error(err: ValidateError, def: &RuleDef, key: Option<&str>) -> ValidateError {
    let detail = err.to_string();
    Logger::error(
        "RULE_CONFIG_ERROR",
        &[
            ("detail", detail.as_str()),
            ("key", key.unwrap_or("")),
            ("type", def.type_name.as_deref().unwrap_or("")),
        ],
    );
    err
}
