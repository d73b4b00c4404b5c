//! Rule Pipeline Invariant Tests
//!
//! Cross-cutting invariants of the validation pipeline:
//! - Configuration errors are immediate and distinct from validation errors
//! - Sequence selection is a pure function of (required, value absent)
//! - Declared-but-falsy properties still activate their step
//! - Every violated constraint is reported, in detection order
//! - Steps run strictly in sequence, across suspension points

use std::time::Duration;

use serde_json::{json, Value};

use verity::rules::{RuleDef, RuleValidator, StrategyContext, ValidateError};
use verity::strategies::{BoxFuture, Strategy, StrategyRegistry};

// =============================================================================
// Helper Strategies
// =============================================================================

/// Modifier that suspends before uppercasing, to exercise await ordering.
struct SleepyUpper;

impl Strategy for SleepyUpper {
    fn run<'a>(&'a self, ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(2)).await;
            ctx.value
                .and_then(|v| v.as_str())
                .map(|s| Value::String(s.to_uppercase()))
        })
    }
}

/// Type strategy that only accepts fully uppercase strings.
struct UppercaseOnly;

impl Strategy for UppercaseOnly {
    fn run<'a>(&'a self, mut ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move {
            match ctx.value.and_then(|v| v.as_str()) {
                Some(s) if s.chars().all(|c| !c.is_lowercase()) => {}
                _ => ctx.fail("Value must be uppercase"),
            }
            None
        })
    }
}

/// Creator that produces a fixed value, for deterministic creator tests.
struct FixedCreator(Value);

impl Strategy for FixedCreator {
    fn run<'a>(&'a self, _ctx: StrategyContext<'a>) -> BoxFuture<'a, Option<Value>> {
        Box::pin(async move { Some(self.0.clone()) })
    }
}

fn setup_registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    registry.register_modifier("sleepy_upper", SleepyUpper);
    registry.register_type("uppercase_only", UppercaseOnly);
    registry.register_creator("fixed", FixedCreator(json!("made")));
    registry
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// A definition without a type fails fast, whatever the value.
#[tokio::test]
async fn test_missing_type_is_config_error_for_any_value() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::default();

    for value in [None, Some(json!("abc")), Some(json!(0)), Some(Value::Null)] {
        let err = validator.validate(&def, value, None).await.unwrap_err();
        assert!(matches!(err, ValidateError::MissingType));
        assert!(err.is_config());
    }
}

#[tokio::test]
async fn test_unregistered_names_are_config_errors() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);

    let err = validator
        .validate(&RuleDef::new("blob"), Some(json!("x")), None)
        .await
        .unwrap_err();
    assert!(err.is_config());

    let err = validator
        .validate(
            &RuleDef::new("string").with_modifier("missing"),
            Some(json!("x")),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ValidateError::UnknownModifier(_)));

    let err = validator
        .validate(&RuleDef::new("string:vowels"), Some(json!("x")), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ValidateError::UnknownSubtype { .. }));
}

/// Scenario: `definition = {}` never resolves as a validation aggregate.
#[tokio::test]
async fn test_empty_definition_never_aggregates() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def: RuleDef = serde_json::from_value(json!({})).unwrap();

    let err = validator.validate(&def, Some(json!("abc")), None).await.unwrap_err();
    assert!(err.is_config());
    assert!(err.validation_errors().is_none());
}

// =============================================================================
// Sequence Selection
// =============================================================================

/// Scenario: `{ type: 'string' }` with `'abc'` resolves to `'abc'`.
#[tokio::test]
async fn test_present_valid_value_resolves() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);

    let result = validator
        .validate(&RuleDef::new("string"), Some(json!("abc")), None)
        .await;
    assert_eq!(result.unwrap(), Some(json!("abc")));
}

/// Scenario: non-required absent value resolves without a type check.
#[tokio::test]
async fn test_absent_optional_value_resolves_unconstrained() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);

    let result = validator.validate(&RuleDef::new("string"), None, None).await;
    assert_eq!(result.unwrap(), None);
}

/// Declared allow/min/max/type must not affect an absent optional value.
#[tokio::test]
async fn test_no_value_sequence_ignores_constraints() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("string")
        .with_allow(vec![json!("never")])
        .with_min(100.0)
        .with_max(0.0);

    let result = validator.validate(&def, None, Some("field")).await;
    assert_eq!(result.unwrap(), None);
}

/// Scenario: required + absent runs the default sequence; the type step
/// fails inside a one-element aggregate.
#[tokio::test]
async fn test_required_absent_value_fails_type_check() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("string").required();

    let err = validator.validate(&def, None, Some("name")).await.unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Value must be a string");
    assert_eq!(errors[0].key.as_deref(), Some("name"));
}

// =============================================================================
// Presence, Not Truthiness
// =============================================================================

#[tokio::test]
async fn test_falsy_default_still_applies() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("number").with_default(json!(0));

    let result = validator.validate(&def, None, None).await;
    assert_eq!(result.unwrap(), Some(json!(0)));
}

#[tokio::test]
async fn test_zero_min_still_runs() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("number").with_min(0.0);

    let err = validator.validate(&def, Some(json!(-1)), None).await.unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert!(errors.iter().any(|e| e.message.contains("at least 0")));
}

#[tokio::test]
async fn test_empty_allow_list_still_runs() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def: RuleDef = serde_json::from_value(json!({
        "type": "string",
        "allow": []
    }))
    .unwrap();

    let err = validator.validate(&def, Some(json!("abc")), None).await.unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert!(errors[0].message.contains("not allowed"));
}

// =============================================================================
// Error Completeness and Ordering
// =============================================================================

/// Scenario: `{ type: 'number', min: 5, max: 10 }` with `2` reports the
/// min violation.
#[tokio::test]
async fn test_min_violation_reported() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("number").with_min(5.0).with_max(10.0);

    let err = validator.validate(&def, Some(json!(2)), None).await.unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert!(errors.iter().any(|e| e.message.contains("at least 5")));
}

/// Independent failing steps all contribute, in step order.
#[tokio::test]
async fn test_all_violations_reported_in_detection_order() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    // "xx" measures as length 2: below min 3, above max 1, and not a number.
    let def = RuleDef::new("number").with_min(3.0).with_max(1.0);

    let err = validator.validate(&def, Some(json!("xx")), None).await.unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 3);
    assert!(errors[0].message.contains("at least 3"));
    assert!(errors[1].message.contains("at most 1"));
    assert_eq!(errors[2].message, "Value must be a number");
}

// =============================================================================
// Step Ordering Across Transformations
// =============================================================================

/// The min bound sees the modified value, not the input.
#[tokio::test]
async fn test_bounds_see_modified_value() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("string").with_modifier("trim").with_min(3.0);

    let err = validator
        .validate(&def, Some(json!("  ab  ")), None)
        .await
        .unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert!(errors[0].message.contains("at least 3"));
}

/// The type step sees the value after the (suspending) modifier ran.
#[tokio::test]
async fn test_type_sees_modified_value_across_suspension() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("uppercase_only").with_modifier("sleepy_upper");

    let result = validator.validate(&def, Some(json!("abc")), None).await;
    assert_eq!(result.unwrap(), Some(json!("ABC")));
}

/// Creator output still flows through the modifier and the type check.
#[tokio::test]
async fn test_creator_output_flows_through_pipeline() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("string")
        .required()
        .with_creator("fixed")
        .with_modifier("uppercase");

    let result = validator.validate(&def, None, None).await;
    assert_eq!(result.unwrap(), Some(json!("MADE")));
}

#[tokio::test]
async fn test_creator_skipped_for_present_value() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("string").with_creator("fixed");

    let result = validator.validate(&def, Some(json!("given")), None).await;
    assert_eq!(result.unwrap(), Some(json!("given")));
}

// =============================================================================
// Idempotence and Concurrency
// =============================================================================

/// Validating an already-final value twice yields the same outcome.
#[tokio::test]
async fn test_validation_is_idempotent() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("string")
        .with_modifier("trim")
        .with_allow(vec![json!("abc")]);

    let first = validator
        .validate(&def, Some(json!("abc")), None)
        .await
        .unwrap();
    let second = validator.validate(&def, first.clone(), None).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(second, Some(json!("abc")));
}

/// Independent calls share the registry but never share error state.
#[tokio::test]
async fn test_concurrent_calls_keep_errors_separate() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let good = RuleDef::new("string");
    let bad = RuleDef::new("number").with_min(5.0);

    let (ok, err) = tokio::join!(
        validator.validate(&good, Some(json!("fine")), Some("a")),
        validator.validate(&bad, Some(json!(1)), Some("b")),
    );

    assert_eq!(ok.unwrap(), Some(json!("fine")));
    let errors = err.unwrap_err();
    let errors = errors.validation_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key.as_deref(), Some("b"));
}

// =============================================================================
// Built-in Strategies Through the Pipeline
// =============================================================================

#[tokio::test]
async fn test_alphanumeric_subtype_through_pipeline() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("string:alphanumeric");

    let result = validator.validate(&def, Some(json!("abc123")), None).await;
    assert_eq!(result.unwrap(), Some(json!("abc123")));

    let err = validator
        .validate(&def, Some(json!("a b!")), None)
        .await
        .unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert!(errors[0].message.contains("letters and/or numbers"));
}

#[tokio::test]
async fn test_uuid_creator_fills_absent_value() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def = RuleDef::new("string").with_creator("uuid");

    let result = validator.validate(&def, None, None).await.unwrap();
    let value = result.unwrap();
    assert_eq!(value.as_str().unwrap().len(), 36);
}

/// Definitions are plain JSON mappings; the whole pipeline is reachable
/// from a deserialized definition.
#[tokio::test]
async fn test_definition_from_json_end_to_end() {
    let registry = setup_registry();
    let validator = RuleValidator::new(&registry);
    let def: RuleDef = serde_json::from_value(json!({
        "type": "string",
        "required": true,
        "modifier": "lowercase",
        "allow": ["yes", "no"]
    }))
    .unwrap();

    let result = validator.validate(&def, Some(json!("YES")), Some("answer")).await;
    assert_eq!(result.unwrap(), Some(json!("yes")));

    let err = validator
        .validate(&def, Some(json!("maybe")), Some("answer"))
        .await
        .unwrap_err();
    assert!(!err.is_config());
}
