//! Type kinds and derived-from tags for schema definitions.
//!
//! Both enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TypeKind
// ---------------------------------------------------------------------------

/// Structural kind of a type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Object,
    Scalar,
    InputObject,
    Enum,
    Interface,
    Union,
}

impl TypeKind {
    /// SDL keyword used when rendering a definition of this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::InputObject => "input",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Union => "union",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::InputObject => "input_object",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Union => "union",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TypeOrigin
// ---------------------------------------------------------------------------

/// Records which role a type definition plays in the augmented schema.
///
/// User-authored types carry `UserDefined`; every generated companion type is
/// tagged at creation time with the derivation that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TypeOrigin {
    #[default]
    UserDefined,
    Input,
    Ref,
    Update,
    Filter,
    Payload,
    Query,
    Mutation,
}

impl TypeOrigin {
    /// Whether the type was authored by the user rather than generated.
    #[must_use]
    pub const fn is_user_defined(self) -> bool {
        matches!(self, Self::UserDefined)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserDefined => "user_defined",
            Self::Input => "input",
            Self::Ref => "ref",
            Self::Update => "update",
            Self::Filter => "filter",
            Self::Payload => "payload",
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for TypeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
