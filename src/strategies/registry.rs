//! Strategy registries and name resolution
//!
//! The registry is read-only during validation: entries are added or
//! overridden up front, then shared lookups serve any number of concurrent
//! `validate` calls.

use std::collections::HashMap;
use std::sync::Arc;

use crate::rules::{RuleDef, ValidateError, ValidateResult};

use super::{creators, modifiers, types, Strategy, DEFAULT_SUBTYPE};

/// Name-keyed registries for type, modifier, and creator strategies.
///
/// `new()` pre-registers the built-in type strategies
/// (any/string/number/boolean/array/object), the built-in modifiers
/// (trim/lowercase/uppercase), and the built-in creators (uuid/timestamp).
/// Registering under an existing name overrides the entry.
pub struct StrategyRegistry {
    types: HashMap<String, Arc<dyn Strategy>>,
    modifiers: HashMap<String, Arc<dyn Strategy>>,
    creators: HashMap<String, Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Creates a registry with all built-in strategies registered.
    pub fn new() -> Self {
        let mut registry = Self {
            types: HashMap::new(),
            modifiers: HashMap::new(),
            creators: HashMap::new(),
        };
        types::register_builtins(&mut registry);
        modifiers::register_builtins(&mut registry);
        creators::register_builtins(&mut registry);
        registry
    }

    /// Creates a registry with no strategies registered.
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
            modifiers: HashMap::new(),
            creators: HashMap::new(),
        }
    }

    /// Registers (or overrides) a type strategy.
    pub fn register_type(&mut self, name: impl Into<String>, strategy: impl Strategy + 'static) {
        self.types.insert(name.into(), Arc::new(strategy));
    }

    /// Registers (or overrides) a modifier strategy.
    pub fn register_modifier(
        &mut self,
        name: impl Into<String>,
        strategy: impl Strategy + 'static,
    ) {
        self.modifiers.insert(name.into(), Arc::new(strategy));
    }

    /// Registers (or overrides) a creator strategy.
    pub fn register_creator(&mut self, name: impl Into<String>, strategy: impl Strategy + 'static) {
        self.creators.insert(name.into(), Arc::new(strategy));
    }

    /// Resolves every strategy name a definition references.
    ///
    /// Called before any step runs, so a missing type or dangling name
    /// surfaces as an immediate configuration error rather than a
    /// validation entry.
    pub(crate) fn resolve(&self, def: &RuleDef) -> ValidateResult<ResolvedRule> {
        let type_name = def.type_name.as_deref().ok_or(ValidateError::MissingType)?;
        let (name, subtype) = match type_name.split_once(':') {
            Some((name, subtype)) => (name, subtype),
            None => (type_name, DEFAULT_SUBTYPE),
        };

        let type_strategy = self
            .types
            .get(name)
            .cloned()
            .ok_or_else(|| ValidateError::UnknownType(name.to_string()))?;
        if !type_strategy.supports(subtype) {
            return Err(ValidateError::UnknownSubtype {
                strategy: name.to_string(),
                subtype: subtype.to_string(),
            });
        }

        let modifier = match def.modifier.as_deref() {
            Some(name) => Some(
                self.modifiers
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ValidateError::UnknownModifier(name.to_string()))?,
            ),
            None => None,
        };

        let creator = match def.creator.as_deref() {
            Some(name) => Some(
                self.creators
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ValidateError::UnknownCreator(name.to_string()))?,
            ),
            None => None,
        };

        Ok(ResolvedRule {
            type_strategy,
            subtype: subtype.to_string(),
            modifier,
            creator,
        })
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Every strategy a definition references, resolved once per `validate` call.
pub(crate) struct ResolvedRule {
    pub type_strategy: Arc<dyn Strategy>,
    pub subtype: String,
    pub modifier: Option<Arc<dyn Strategy>>,
    pub creator: Option<Arc<dyn Strategy>>,
}

impl std::fmt::Debug for ResolvedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedRule")
            .field("subtype", &self.subtype)
            .field("has_modifier", &self.modifier.is_some())
            .field("has_creator", &self.creator.is_some())
            .finish()
    }
}
