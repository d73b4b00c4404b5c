//! Built-in modifier strategies
//!
//! Modifiers transform the running value before any constraint or type
//! check sees it. The built-ins operate on strings and leave every other
//! value (including an absent one) unchanged.

use serde_json::Value;

use crate::rules::StrategyContext;

use super::{BoxFuture, Strategy, StrategyRegistry};

/// Registers the built-in modifiers under their canonical names.
pub(crate) fn register_builtins(registry: &mut StrategyRegistry) {
    registry.register_modifier("trim", Trim);
    registry.register_modifier("lowercase", Lowercase);
    registry.register_modifier("uppercase", Uppercase);
}

fn map_string(value: Option<&Value>, f: impl Fn(&str) -> String) -> Option<Value> {
    match value {
        Some(Value::String(s)) => Some(Value::String(f(s))),
        _ => None,
    }
}

/// Strips leading and trailing whitespace from string values.
pub struct Trim;

impl Strategy for Trim {
    fn run<'a>(&'a self, ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move { map_string(ctx.value, |s| s.trim().to_string()) })
    }
}

/// Lowercases string values.
pub struct Lowercase;

impl Strategy for Lowercase {
    fn run<'a>(&'a self, ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move { map_string(ctx.value, |s| s.to_lowercase()) })
    }
}

/// Uppercases string values.
pub struct Uppercase;

impl Strategy for Uppercase {
    fn run<'a>(&'a self, ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move { map_string(ctx.value, |s| s.to_uppercase()) })
    }
}
