//! Pluggable validation strategies
//!
//! Three independent extension points, each a name-keyed registry of
//! [`Strategy`] implementations:
//!
//! - type strategies: validate the finalized value against a declared type
//! - modifier strategies: transform the value
//! - creator strategies: produce a value when none is supplied
//!
//! All three share one dispatch contract: the strategy receives a
//! [`StrategyContext`](crate::rules::StrategyContext) carrying the
//! definition, key, current value, and the `fail` capability, and returns
//! an optional replacement value. Strategies may suspend; the pipeline
//! awaits each one before running the next step.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::rules::StrategyContext;

pub mod creators;
pub mod modifiers;
mod registry;
pub mod types;

pub use registry::StrategyRegistry;
pub(crate) use registry::ResolvedRule;

/// Boxed strategy future, matching the pipeline's sequential await model.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Sub-check name used when the definition's `type` carries no `:subtype`.
pub const DEFAULT_SUBTYPE: &str = "default";

/// A named, registered validation strategy.
///
/// Returning `Some(value)` replaces the pipeline's running value;
/// returning `None` leaves it unchanged. Constraint violations are
/// reported through `ctx.fail(..)`, never by panicking or erroring, so
/// later steps still run and contribute their own errors.
pub trait Strategy: Send + Sync {
    /// Runs the strategy against the current value.
    fn run<'a>(&'a self, ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>>;

    /// Whether this strategy implements the named sub-check.
    ///
    /// Only consulted for type strategies; referencing an unsupported
    /// sub-check is a configuration error.
    fn supports(&self, subtype: &str) -> bool {
        subtype == DEFAULT_SUBTYPE
    }
}
