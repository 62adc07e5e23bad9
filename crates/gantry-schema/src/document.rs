//! Loading schema documents handed over as JSON.
//!
//! The JSON Schema for [`SchemaDocument`] is built with
//! [`schemars::schema_for!`]; incoming values are checked against it with
//! `jsonschema` before deserialization so every shape problem is reported at
//! once instead of serde's first-error-wins.

use gantry_core::SchemaDocument;
use schemars::schema_for;

use crate::error::SchemaError;

/// JSON Schema describing a serialized [`SchemaDocument`].
///
/// # Panics
///
/// Panics if `serde_json::to_value` fails on the `schemars` output, which
/// always produces JSON-serialisable data.
#[must_use]
pub fn document_json_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(SchemaDocument))
        .expect("schemars output is always serialisable")
}

/// Validate and deserialize a schema document.
///
/// # Errors
///
/// Returns `SchemaError::InvalidDocument` listing every validation error, or
/// `SchemaError::Json` if deserialization still fails.
pub fn load_document(value: &serde_json::Value) -> Result<SchemaDocument, SchemaError> {
    let schema = document_json_schema();
    let validator = jsonschema::validator_for(&schema).map_err(|e| SchemaError::InvalidDocument {
        errors: vec![format!("document schema does not compile: {e}")],
    })?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| format!("{e}"))
        .collect();
    if !errors.is_empty() {
        return Err(SchemaError::InvalidDocument { errors });
    }

    let document: SchemaDocument = serde_json::from_value(value.clone())?;
    tracing::debug!(
        definitions = document.definitions.len(),
        "loaded schema document"
    );
    Ok(document)
}

/// Parse JSON text and load it as a schema document.
///
/// # Errors
///
/// Returns `SchemaError::Json` for malformed JSON, otherwise see
/// [`load_document`].
pub fn load_document_str(json: &str) -> Result<SchemaDocument, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    load_document(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::{TypeKind, TypeOrigin};
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_minimal_document() {
        let doc = load_document_str(
            r#"{
                "definitions": [
                    {
                        "kind": "object",
                        "name": "Person",
                        "fields": [
                            {"name": "id", "type": {"kind": "named", "name": "ID", "non_null": true}},
                            {"name": "tags", "type": {"kind": "list", "element": {"kind": "named", "name": "String"}}}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.definitions.len(), 1);
        let person = &doc.definitions[0];
        assert_eq!(person.kind, TypeKind::Object);
        assert_eq!(person.origin, TypeOrigin::UserDefined);
        assert_eq!(person.fields[1].ty.to_string(), "[String]");
    }

    #[test]
    fn rejects_unknown_kind() {
        let result = load_document_str(r#"{"definitions": [{"kind": "table", "name": "Person"}]}"#);
        assert!(matches!(
            result,
            Err(SchemaError::InvalidDocument { errors }) if !errors.is_empty()
        ));
    }

    #[test]
    fn rejects_missing_name() {
        let value = serde_json::json!({"definitions": [{"kind": "object"}]});
        assert!(matches!(
            load_document(&value),
            Err(SchemaError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            load_document_str("{not json"),
            Err(SchemaError::Json(_))
        ));
    }

    #[test]
    fn json_schema_describes_definitions() {
        let schema = document_json_schema();
        assert!(schema["properties"].get("definitions").is_some());
    }
}
