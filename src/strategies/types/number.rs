//! Type strategy for numbers

use serde_json::Value;

use crate::rules::StrategyContext;
use crate::strategies::{BoxFuture, Strategy};

/// Built-in `number` type strategy.
pub struct NumberType;

impl Strategy for NumberType {
    fn run<'a>(&'a self, mut ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move {
            if !matches!(ctx.value, Some(Value::Number(_))) {
                ctx.fail("Value must be a number");
            }
            None
        })
    }
}
