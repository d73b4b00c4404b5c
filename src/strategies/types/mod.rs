//! Built-in type strategies
//!
//! Each strategy validates the finalized value the pipeline hands it and
//! reports violations through `ctx.fail(..)`. Strategies never replace the
//! value except `any`, which passes it back unchanged.

mod any;
mod array;
mod boolean;
mod number;
mod object;
mod string;

pub use any::AnyType;
pub use array::ArrayType;
pub use boolean::BooleanType;
pub use number::NumberType;
pub use object::ObjectType;
pub use string::StringType;

use super::StrategyRegistry;

/// Registers every built-in type strategy under its canonical name.
pub(crate) fn register_builtins(registry: &mut StrategyRegistry) {
    registry.register_type("any", AnyType);
    registry.register_type("array", ArrayType);
    registry.register_type("boolean", BooleanType);
    registry.register_type("number", NumberType);
    registry.register_type("object", ObjectType);
    registry.register_type("string", StringType);
}
