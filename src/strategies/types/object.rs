//! Type strategy for objects

use serde_json::Value;

use crate::rules::StrategyContext;
use crate::strategies::{BoxFuture, Strategy};

/// Built-in `object` type strategy.
pub struct ObjectType;

impl Strategy for ObjectType {
    fn run<'a>(&'a self, mut ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move {
            if !matches!(ctx.value, Some(Value::Object(_))) {
                ctx.fail("Value must be an object");
            }
            None
        })
    }
}
