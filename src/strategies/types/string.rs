//! Type strategy for UTF-8 strings
//!
//! Sub-checks:
//! - `default`: value must be a non-empty string
//! - `alphanumeric`: value must contain only letters and/or numbers; an
//!   absent value is left to the default check and not failed here

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::rules::StrategyContext;
use crate::strategies::{BoxFuture, Strategy};

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]*$").expect("Invalid alphanumeric regex"));

/// Built-in `string` type strategy.
pub struct StringType;

impl Strategy for StringType {
    fn run<'a>(&'a self, mut ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move {
            match ctx.subtype {
                "alphanumeric" => {
                    match ctx.value {
                        Some(Value::Null) => {
                            ctx.fail("Value must contain only letters and/or numbers");
                        }
                        Some(Value::String(s)) if !ALPHANUMERIC.is_match(s) => {
                            ctx.fail("Value must contain only letters and/or numbers");
                        }
                        Some(Value::String(_)) | None => {}
                        Some(other) => {
                            if !ALPHANUMERIC.is_match(&other.to_string()) {
                                ctx.fail("Value must contain only letters and/or numbers");
                            }
                        }
                    }
                }
                _ => match ctx.value {
                    Some(Value::String(s)) if !s.is_empty() => {}
                    _ => ctx.fail("Value must be a string"),
                },
            }
            None
        })
    }

    fn supports(&self, subtype: &str) -> bool {
        matches!(subtype, "default" | "alphanumeric")
    }
}
