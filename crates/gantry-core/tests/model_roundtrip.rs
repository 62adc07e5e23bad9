//! Serde roundtrip and JsonSchema validation tests for the schema model.

use gantry_core::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn person() -> TypeDefinition {
    TypeDefinition::object("Person")
        .with_description("A person")
        .with_field(FieldDefinition::new("id", TypeRef::named_non_null("ID")))
        .with_field(FieldDefinition::new("name", TypeRef::named_non_null("String")))
        .with_field(FieldDefinition::new(
            "friends",
            TypeRef::list(TypeRef::named_non_null("Person")),
        ))
}

roundtrip_and_validate!(
    type_ref_roundtrip,
    TypeRef,
    TypeRef::list(TypeRef::list(TypeRef::named_non_null("Int")).non_null())
);

roundtrip_and_validate!(
    field_with_arguments_roundtrip,
    FieldDefinition,
    FieldDefinition::new("getPerson", TypeRef::named_non_null("Person"))
        .with_argument(ArgumentDefinition::new("id", TypeRef::named_non_null("ID")))
        .with_description("ID based query function for Person")
);

roundtrip_and_validate!(object_definition_roundtrip, TypeDefinition, person());

roundtrip_and_validate!(
    enum_definition_roundtrip,
    TypeDefinition,
    TypeDefinition::enumeration("Color", ["RED", "GREEN"])
);

roundtrip_and_validate!(
    derived_definition_roundtrip,
    TypeDefinition,
    TypeDefinition::input_object("PersonRef")
        .with_origin(TypeOrigin::Ref)
        .with_field(FieldDefinition::new("id", TypeRef::named_non_null("ID")))
);

roundtrip_and_validate!(
    document_roundtrip,
    SchemaDocument,
    SchemaDocument::new(vec![person(), TypeDefinition::scalar("ID")])
);

roundtrip_and_validate!(schema_roundtrip, Schema, {
    let mut schema = Schema::default();
    schema.insert(person());
    schema.insert(TypeDefinition::scalar("String"));
    schema.query = Some(TypeDefinition::object("Query").with_origin(TypeOrigin::Query));
    schema
});
