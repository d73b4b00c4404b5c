//! Type strategy for arrays

use serde_json::Value;

use crate::rules::StrategyContext;
use crate::strategies::{BoxFuture, Strategy};

/// Built-in `array` type strategy.
pub struct ArrayType;

impl Strategy for ArrayType {
    fn run<'a>(&'a self, mut ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move {
            if !matches!(ctx.value, Some(Value::Array(_))) {
                ctx.fail("Value must be an array");
            }
            None
        })
    }
}
