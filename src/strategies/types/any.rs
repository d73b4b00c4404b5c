//! Type strategy accepting any value

use serde_json::Value;

use crate::rules::StrategyContext;
use crate::strategies::{BoxFuture, Strategy};

/// Built-in `any` type strategy: never fails, passes the value through.
pub struct AnyType;

impl Strategy for AnyType {
    fn run<'a>(&'a self, ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move { ctx.value.cloned() })
    }
}
