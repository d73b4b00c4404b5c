//! Observability for verity
//!
//! Structured JSON logging for configuration mistakes surfaced by the
//! pipeline. Validation rejections are data-driven outcomes for the
//! caller and are not logged.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on validation
//! 3. Deterministic output

mod logger;

pub use logger::{Logger, Severity};
