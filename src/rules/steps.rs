//! The fixed pipeline step catalogue
//!
//! Seven steps exist, process-wide and immutable. A step runs only when
//! the definition declares its property, and sequence selection is a pure
//! function of `(required, value absent)`:
//!
//! - default sequence: creator → default → modifier → allow → min → max → type
//! - no-value sequence: creator → default → modifier
//!
//! An absent, non-required value is only filled and transformed, never
//! constrained; allow/min/max/type do not run for it even when declared.

use super::definition::RuleDef;

/// One named stage of the validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Generate a value when none was supplied
    Creator,
    /// Substitute the declared default when no value was supplied
    Default,
    /// Transform the value
    Modifier,
    /// Restrict the value to a permitted set
    Allow,
    /// Enforce the lower bound
    Min,
    /// Enforce the upper bound
    Max,
    /// Validate the finalized value against its type strategy
    Type,
}

impl StepKind {
    /// Returns the stable step name, matching the definition property.
    pub fn name(self) -> &'static str {
        match self {
            StepKind::Creator => "creator",
            StepKind::Default => "default",
            StepKind::Modifier => "modifier",
            StepKind::Allow => "allow",
            StepKind::Min => "min",
            StepKind::Max => "max",
            StepKind::Type => "type",
        }
    }

    /// Presence test: whether the definition declares this step's property.
    ///
    /// This is an explicit is-some test, so declared-but-falsy properties
    /// (`default: 0`, `min: 0.0`, `allow: []`) still activate their step.
    pub fn declared_in(self, def: &RuleDef) -> bool {
        match self {
            StepKind::Creator => def.creator.is_some(),
            StepKind::Default => def.default.is_some(),
            StepKind::Modifier => def.modifier.is_some(),
            StepKind::Allow => def.allow.is_some(),
            StepKind::Min => def.min.is_some(),
            StepKind::Max => def.max.is_some(),
            StepKind::Type => def.type_name.is_some(),
        }
    }
}

/// Step order when a value is present or the field is required.
///
/// Creator and default precede modifier so generated/substituted values
/// still pass through user transformations; type runs last so it validates
/// the fully finalized value.
pub const DEFAULT_SEQUENCE: [StepKind; 7] = [
    StepKind::Creator,
    StepKind::Default,
    StepKind::Modifier,
    StepKind::Allow,
    StepKind::Min,
    StepKind::Max,
    StepKind::Type,
];

/// Step order when the value is absent and the field is not required.
pub const NO_VALUE_SEQUENCE: [StepKind; 3] =
    [StepKind::Creator, StepKind::Default, StepKind::Modifier];

/// Selects the applicable sequence for one validation call.
pub(crate) fn sequence_for(def: &RuleDef, value_absent: bool) -> &'static [StepKind] {
    if !def.required && value_absent {
        &NO_VALUE_SEQUENCE
    } else {
        &DEFAULT_SEQUENCE
    }
}
