//! Pluggable schema validation rules.
//!
//! `ValidationRules` is an explicit, append-only rule set built during
//! pipeline startup and passed by reference into validation. Concrete rule
//! bodies are supplied by callers through [`ValidationRules::register`].

use std::fmt;

use gantry_core::Schema;

use crate::error::{RuleViolation, SchemaError};

/// Check function for a rule: `Some(message)` reports a problem.
pub type RuleFn = dyn Fn(&Schema) -> Option<String> + Send + Sync;

struct Rule {
    name: String,
    check: Box<RuleFn>,
}

/// Ordered list of named schema rules.
///
/// Rules run in registration order. Each rule sees the whole schema and must
/// be valid on its own, independent of which rules ran before it.
#[derive(Default)]
pub struct ValidationRules {
    rules: Vec<Rule>,
}

impl ValidationRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Rules cannot be removed or reordered once registered.
    pub fn register<F>(&mut self, name: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&Schema) -> Option<String> + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            name: name.into(),
            check: Box::new(check),
        });
        self
    }

    /// Run every rule and collect every reported violation.
    ///
    /// Never stops at the first failure. An empty result means the schema
    /// passed.
    #[must_use]
    pub fn run_all(&self, schema: &Schema) -> Vec<RuleViolation> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            if let Some(message) = (rule.check)(schema) {
                tracing::warn!(rule = %rule.name, %message, "schema rule violated");
                errors.push(RuleViolation {
                    rule: rule.name.clone(),
                    message,
                });
            } else {
                tracing::debug!(rule = %rule.name, "schema rule passed");
            }
        }
        errors
    }

    /// Run every rule and fold the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` carrying all violations if any
    /// rule reported a problem.
    pub fn validate(&self, schema: &Schema) -> Result<(), SchemaError> {
        let errors = self.run_all(schema);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Registered rule names, in run order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for ValidationRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRules")
            .field("rules", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::{TypeDefinition, TypeKind};
    use pretty_assertions::assert_eq;

    fn schema_with_person() -> Schema {
        let mut schema = Schema::default();
        schema.insert(TypeDefinition::object("Person"));
        schema
    }

    #[test]
    fn empty_rule_set_passes() {
        let rules = ValidationRules::new();
        assert!(rules.is_empty());
        assert!(rules.run_all(&Schema::default()).is_empty());
        assert!(rules.validate(&Schema::default()).is_ok());
    }

    #[test]
    fn collects_every_violation_in_registration_order() {
        let mut rules = ValidationRules::new();
        rules
            .register("always_fails_a", |_| Some("first".to_string()))
            .register("passes", |_| None)
            .register("always_fails_b", |_| Some("second".to_string()));

        let errors = rules.run_all(&schema_with_person());
        assert_eq!(
            errors,
            vec![
                RuleViolation {
                    rule: "always_fails_a".to_string(),
                    message: "first".to_string(),
                },
                RuleViolation {
                    rule: "always_fails_b".to_string(),
                    message: "second".to_string(),
                },
            ]
        );
    }

    #[test]
    fn rules_inspect_the_schema() {
        let mut rules = ValidationRules::new();
        rules.register("no_enums", |schema| {
            schema
                .types_of_kind(TypeKind::Enum)
                .next()
                .map(|def| format!("enum '{}' is not supported", def.name))
        });

        assert!(rules.validate(&schema_with_person()).is_ok());

        let mut schema = schema_with_person();
        schema.insert(TypeDefinition::enumeration("Color", ["RED"]));
        let result = rules.validate(&schema);
        assert!(matches!(
            result,
            Err(SchemaError::ValidationFailed { errors }) if errors.len() == 1
                && errors[0].message == "enum 'Color' is not supported"
        ));
    }

    #[test]
    fn names_follow_registration_order() {
        let mut rules = ValidationRules::new();
        rules.register("b", |_| None);
        rules.register("a", |_| None);
        assert_eq!(rules.names(), vec!["b", "a"]);
        assert_eq!(rules.len(), 2);
    }
}
