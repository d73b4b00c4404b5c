//! Rule execution pipeline for verity
//!
//! One `validate` call runs one value through the ordered step sequence
//! described by a rule definition.
//!
//! # Design Principles
//!
//! - Steps run strictly in sequence, each seeing the previous step's value
//! - A step only runs when its property is declared on the definition
//!   (presence test, never truthiness)
//! - Every violated constraint is reported, never just the first
//! - Configuration mistakes fail fast and are never mixed into the
//!   validation aggregate

mod context;
mod definition;
mod errors;
mod steps;
mod validator;

pub use context::{StrategyContext, ValidationContext};
pub use definition::{Allow, RuleDef};
pub use errors::{AggregateError, ErrorEntry, ValidateError, ValidateResult};
pub use steps::{StepKind, DEFAULT_SEQUENCE, NO_VALUE_SEQUENCE};
pub use validator::RuleValidator;
