//! Augmentation, validation, and document loading error types.

use gantry_core::CoreError;
use thiserror::Error;

/// A structural problem found while deriving companion types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AugmentError {
    /// A field's declared type name is absent from the schema.
    #[error("Undefined type reference: {type_name}.{field} refers to unknown type '{referenced}'")]
    UndefinedTypeReference {
        type_name: String,
        field: String,
        referenced: String,
    },

    /// A field refers to an object type that never receives a `Ref` companion,
    /// such as an introspection or generated payload type.
    #[error(
        "Unreferenceable object: {type_name}.{field} refers to '{referenced}', which has no Ref type"
    )]
    UnreferenceableObject {
        type_name: String,
        field: String,
        referenced: String,
    },

    /// A derived type name is already taken by a user-authored type or by
    /// another derived type in the same pass.
    #[error("Name collision: derived type '{derived}' (from '{source_type}') already exists")]
    NameCollision {
        derived: String,
        source_type: String,
    },
}

/// A violation reported by a registered validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{rule}] {message}")]
pub struct RuleViolation {
    /// Name the rule was registered under.
    pub rule: String,
    pub message: String,
}

/// Errors from the schema layer.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Augmentation aborted; the schema was left untouched.
    #[error("Augmentation failed: {errors:?}")]
    Augmentation {
        /// Every structural problem found in the pass.
        errors: Vec<AugmentError>,
    },

    /// One or more validation rules reported a problem.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Violations in rule registration order.
        errors: Vec<RuleViolation>,
    },

    /// Incoming JSON did not match the schema document shape.
    #[error("Invalid schema document: {errors:?}")]
    InvalidDocument {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
