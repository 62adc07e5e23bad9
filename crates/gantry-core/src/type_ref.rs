//! Type references used by fields and arguments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a type from a field or argument.
///
/// `non_null` on a `List` applies to the list itself; the element keeps its
/// own nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    Named {
        name: String,
        #[serde(default)]
        non_null: bool,
    },
    List {
        element: Box<TypeRef>,
        #[serde(default)]
        non_null: bool,
    },
}

impl TypeRef {
    /// Nullable reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            non_null: false,
        }
    }

    /// Non-null reference to a named type.
    pub fn named_non_null(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            non_null: true,
        }
    }

    /// Nullable list of `element`.
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List {
            element: Box::new(element),
            non_null: false,
        }
    }

    /// Same reference with the outermost level marked non-null.
    #[must_use]
    pub fn non_null(mut self) -> Self {
        self.set_non_null(true);
        self
    }

    /// Innermost named type, unwrapping every list level.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named { name, .. } => name,
            Self::List { element, .. } => element.named_type(),
        }
    }

    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        match self {
            Self::Named { non_null, .. } | Self::List { non_null, .. } => *non_null,
        }
    }

    /// Set nullability of the outermost level only.
    pub const fn set_non_null(&mut self, value: bool) {
        match self {
            Self::Named { non_null, .. } | Self::List { non_null, .. } => *non_null = value,
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Copy of this reference with the innermost name replaced by `f(name)`.
    ///
    /// List nesting and every level's nullability are preserved.
    #[must_use]
    pub fn map_named<F>(&self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        self.map_named_inner(&f)
    }

    fn map_named_inner<F>(&self, f: &F) -> Self
    where
        F: Fn(&str) -> String,
    {
        match self {
            Self::Named { name, non_null } => Self::Named {
                name: f(name),
                non_null: *non_null,
            },
            Self::List { element, non_null } => Self::List {
                element: Box::new(element.map_named_inner(f)),
                non_null: *non_null,
            },
        }
    }
}

/// Canonical notation: `!` suffix for non-null, `[...]` for lists.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, .. } => f.write_str(name)?,
            Self::List { element, .. } => write!(f, "[{element}]")?,
        }
        if self.is_non_null() {
            f.write_str("!")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TypeRef::named("String"), "String")]
    #[case(TypeRef::named_non_null("ID"), "ID!")]
    #[case(TypeRef::list(TypeRef::named("Int")), "[Int]")]
    #[case(TypeRef::list(TypeRef::named_non_null("Person")).non_null(), "[Person!]!")]
    #[case(
        TypeRef::list(TypeRef::list(TypeRef::named_non_null("Float")).non_null()),
        "[[Float!]!]"
    )]
    fn renders_canonical_notation(#[case] ty: TypeRef, #[case] expected: &str) {
        assert_eq!(ty.to_string(), expected);
    }

    #[test]
    fn named_type_unwraps_lists() {
        let ty = TypeRef::list(TypeRef::list(TypeRef::named("Person")));
        assert_eq!(ty.named_type(), "Person");
    }

    #[test]
    fn set_non_null_touches_outer_level_only() {
        let mut ty = TypeRef::list(TypeRef::named_non_null("Person")).non_null();
        ty.set_non_null(false);
        assert_eq!(ty.to_string(), "[Person!]");
    }

    #[test]
    fn map_named_preserves_structure() {
        let ty = TypeRef::list(TypeRef::named_non_null("Person"));
        let mapped = ty.map_named(|name| format!("{name}Ref"));
        assert_eq!(mapped.to_string(), "[PersonRef!]");
        assert_eq!(ty.to_string(), "[Person!]");
    }

    #[test]
    fn non_null_defaults_to_false_when_absent() {
        let ty: TypeRef = serde_json::from_str(r#"{"kind":"named","name":"Int"}"#).unwrap();
        assert_eq!(ty, TypeRef::named("Int"));
    }
}
