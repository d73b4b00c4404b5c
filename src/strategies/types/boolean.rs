//! Type strategy for booleans

use serde_json::Value;

use crate::rules::StrategyContext;
use crate::strategies::{BoxFuture, Strategy};

/// Built-in `boolean` type strategy.
pub struct BooleanType;

impl Strategy for BooleanType {
    fn run<'a>(&'a self, mut ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move {
            if !matches!(ctx.value, Some(Value::Bool(_))) {
                ctx.fail("Value must be a boolean");
            }
            None
        })
    }
}
