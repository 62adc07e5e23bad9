//! Companion type derivation for a single object type.
//!
//! For an object type `T` this produces `TInput`, `TRef`, `TUpdate`,
//! `TFilter`, `AddTPayload`, `UpdateTPayload`, and `DeleteTPayload`. Every
//! derived field is an owned clone, so mutating one companion never reaches
//! another companion or `T` itself.

use gantry_config::AugmentConfig;
use gantry_core::{
    FieldDefinition, ID_SCALAR, STRING_SCALAR, Schema, TypeDefinition, TypeKind, TypeOrigin,
    TypeRef,
};

use crate::error::AugmentError;

#[must_use]
pub fn input_name(type_name: &str) -> String {
    format!("{type_name}Input")
}

#[must_use]
pub fn ref_name(type_name: &str) -> String {
    format!("{type_name}Ref")
}

#[must_use]
pub fn update_name(type_name: &str) -> String {
    format!("{type_name}Update")
}

#[must_use]
pub fn filter_name(type_name: &str) -> String {
    format!("{type_name}Filter")
}

#[must_use]
pub fn add_payload_name(type_name: &str) -> String {
    format!("Add{type_name}Payload")
}

#[must_use]
pub fn update_payload_name(type_name: &str) -> String {
    format!("Update{type_name}Payload")
}

#[must_use]
pub fn delete_payload_name(type_name: &str) -> String {
    format!("Delete{type_name}Payload")
}

/// Whether `def` receives companion types: a user-authored object outside the
/// introspection namespace. Only these types get a `Ref`.
#[must_use]
pub fn is_source(def: &TypeDefinition, config: &AugmentConfig) -> bool {
    def.kind == TypeKind::Object && def.origin.is_user_defined() && !config.is_reserved(&def.name)
}

fn is_id_field(field: &FieldDefinition) -> bool {
    field.ty.named_type() == ID_SCALAR
}

/// Input-side copy of a field: same name, type, and description, no arguments.
fn input_field(field: &FieldDefinition, ty: TypeRef) -> FieldDefinition {
    FieldDefinition {
        name: field.name.clone(),
        ty,
        arguments: Vec::new(),
        description: field.description.clone(),
    }
}

/// Non-ID fields of `def`, with object-typed fields pointing at their `Ref`.
///
/// The referenced type of every field must exist in `schema`; a missing type
/// is reported rather than treated as a non-object. An object that is not a
/// source has no `Ref` to point at and is reported too.
fn non_id_fields(
    schema: &Schema,
    def: &TypeDefinition,
    config: &AugmentConfig,
) -> Result<Vec<FieldDefinition>, Vec<AugmentError>> {
    let mut fields = Vec::new();
    let mut errors = Vec::new();

    for field in def.fields.iter().filter(|field| !is_id_field(field)) {
        let referenced = field.ty.named_type();
        match schema.get(referenced) {
            None => errors.push(AugmentError::UndefinedTypeReference {
                type_name: def.name.clone(),
                field: field.name.clone(),
                referenced: referenced.to_string(),
            }),
            Some(target) if is_source(target, config) => {
                fields.push(input_field(field, field.ty.map_named(ref_name)));
            }
            Some(target) if target.kind == TypeKind::Object => {
                errors.push(AugmentError::UnreferenceableObject {
                    type_name: def.name.clone(),
                    field: field.name.clone(),
                    referenced: referenced.to_string(),
                });
            }
            Some(_) => fields.push(input_field(field, field.ty.clone())),
        }
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(errors)
    }
}

fn input_from_fields(def: &TypeDefinition, fields: Vec<FieldDefinition>) -> TypeDefinition {
    TypeDefinition::input_object(input_name(&def.name))
        .with_origin(TypeOrigin::Input)
        .with_fields(fields)
}

fn update_from_fields(def: &TypeDefinition, mut fields: Vec<FieldDefinition>) -> TypeDefinition {
    for field in &mut fields {
        field.ty.set_non_null(false);
    }
    TypeDefinition::input_object(update_name(&def.name))
        .with_origin(TypeOrigin::Update)
        .with_fields(fields)
}

/// `TInput`: every non-ID field of `T`, object fields rewritten to `Ref`.
///
/// # Errors
///
/// Returns every `UndefinedTypeReference` and `UnreferenceableObject` found
/// among the fields.
pub fn derive_input(
    schema: &Schema,
    def: &TypeDefinition,
) -> Result<TypeDefinition, Vec<AugmentError>> {
    let fields = non_id_fields(schema, def, &AugmentConfig::default())?;
    Ok(input_from_fields(def, fields))
}

/// `TRef`: exactly the ID-typed fields of `T`.
#[must_use]
pub fn derive_ref(def: &TypeDefinition) -> TypeDefinition {
    let fields = def
        .fields
        .iter()
        .filter(|field| is_id_field(field))
        .map(|field| input_field(field, field.ty.clone()))
        .collect();

    TypeDefinition::input_object(ref_name(&def.name))
        .with_origin(TypeOrigin::Ref)
        .with_fields(fields)
}

/// `TUpdate`: the `TInput` field set with every field made optional.
///
/// # Errors
///
/// Returns every `UndefinedTypeReference` and `UnreferenceableObject` found
/// among the fields.
pub fn derive_update(
    schema: &Schema,
    def: &TypeDefinition,
) -> Result<TypeDefinition, Vec<AugmentError>> {
    let fields = non_id_fields(schema, def, &AugmentConfig::default())?;
    Ok(update_from_fields(def, fields))
}

/// `TFilter`: a fixed placeholder filter with a single `dgraph: String` field.
#[must_use]
pub fn derive_filter(def: &TypeDefinition) -> TypeDefinition {
    TypeDefinition::input_object(filter_name(&def.name))
        .with_origin(TypeOrigin::Filter)
        .with_field(FieldDefinition::new("dgraph", TypeRef::named(STRING_SCALAR)))
}

fn payload_with_parent(name: String, def: &TypeDefinition) -> TypeDefinition {
    TypeDefinition::object(name)
        .with_origin(TypeOrigin::Payload)
        .with_field(FieldDefinition::new(
            def.name.to_lowercase(),
            TypeRef::named_non_null(def.name.clone()),
        ))
}

#[must_use]
pub fn derive_add_payload(def: &TypeDefinition) -> TypeDefinition {
    payload_with_parent(add_payload_name(&def.name), def)
}

#[must_use]
pub fn derive_update_payload(def: &TypeDefinition) -> TypeDefinition {
    payload_with_parent(update_payload_name(&def.name), def)
}

#[must_use]
pub fn derive_delete_payload(def: &TypeDefinition) -> TypeDefinition {
    TypeDefinition::object(delete_payload_name(&def.name))
        .with_origin(TypeOrigin::Payload)
        .with_field(FieldDefinition::new(
            "msg",
            TypeRef::named_non_null(STRING_SCALAR),
        ))
}

/// All seven companion types of `def` with the default configuration.
///
/// # Errors
///
/// See [`derive_companions_with`].
pub fn derive_companions(
    schema: &Schema,
    def: &TypeDefinition,
) -> Result<Vec<TypeDefinition>, Vec<AugmentError>> {
    derive_companions_with(schema, def, &AugmentConfig::default())
}

/// All seven companion types of `def`, in a fixed order: Input, Ref, Update,
/// Filter, Add/Update/Delete payloads.
///
/// # Errors
///
/// Returns every `UndefinedTypeReference` and `UnreferenceableObject` found
/// among the fields, each reported once.
pub fn derive_companions_with(
    schema: &Schema,
    def: &TypeDefinition,
    config: &AugmentConfig,
) -> Result<Vec<TypeDefinition>, Vec<AugmentError>> {
    let fields = non_id_fields(schema, def, config)?;

    Ok(vec![
        input_from_fields(def, fields.clone()),
        derive_ref(def),
        update_from_fields(def, fields),
        derive_filter(def),
        derive_add_payload(def),
        derive_update_payload(def),
        derive_delete_payload(def),
    ])
}
