//! Built-in creator strategies
//!
//! Creators produce a value when none was supplied; the pipeline's creator
//! step only dispatches to them for an absent value.

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::rules::StrategyContext;

use super::{BoxFuture, Strategy, StrategyRegistry};

/// Registers the built-in creators under their canonical names.
pub(crate) fn register_builtins(registry: &mut StrategyRegistry) {
    registry.register_creator("uuid", UuidCreator);
    registry.register_creator("timestamp", TimestampCreator);
}

/// Generates a random v4 UUID string.
pub struct UuidCreator;

impl Strategy for UuidCreator {
    fn run<'a>(&'a self, _ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move { Some(Value::String(Uuid::new_v4().to_string())) })
    }
}

/// Generates the current UTC time as an RFC 3339 string.
pub struct TimestampCreator;

impl Strategy for TimestampCreator {
    fn run<'a>(&'a self, _ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move { Some(Value::String(Utc::now().to_rfc3339())) })
    }
}
