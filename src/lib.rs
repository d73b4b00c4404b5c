//! verity - A strict, extensible rule pipeline for schema-driven value validation
//!
//! The `rules` module is the execution core: it runs a fixed, ordered
//! sequence of validation steps against one value and one rule definition,
//! accumulating every violated constraint into a single aggregate. The
//! `strategies` module holds the pluggable type/modifier/creator handlers
//! the steps dispatch to.

pub mod observability;
pub mod rules;
pub mod strategies;
