//! Root Query and Mutation field generation.

use gantry_core::{
    ArgumentDefinition, FieldDefinition, ID_SCALAR, TypeDefinition, TypeOrigin, TypeRef,
};

use crate::derive::{
    add_payload_name, delete_payload_name, filter_name, input_name, update_name,
    update_payload_name,
};

/// Fresh, empty root `Query` type.
#[must_use]
pub fn query_root() -> TypeDefinition {
    TypeDefinition::object("Query")
        .with_origin(TypeOrigin::Query)
        .with_description("Query object contains all the query functions")
}

/// Fresh, empty root `Mutation` type.
#[must_use]
pub fn mutation_root() -> TypeDefinition {
    TypeDefinition::object("Mutation")
        .with_origin(TypeOrigin::Mutation)
        .with_description("Mutation object contains all the mutation functions")
}

fn id_argument() -> ArgumentDefinition {
    ArgumentDefinition::new("id", TypeRef::named_non_null(ID_SCALAR))
}

/// Append `get<T>(id: ID!): T!` and `query<T>(filter: TFilter!): [T!]!`.
///
/// Appends unconditionally; calling twice for the same type duplicates fields.
pub fn add_query_fields(def: &TypeDefinition, query: &mut TypeDefinition) {
    let name = &def.name;

    query.fields.push(
        FieldDefinition::new(format!("get{name}"), TypeRef::named_non_null(name.clone()))
            .with_argument(id_argument())
            .with_description(format!("ID based query function for {name}")),
    );

    query.fields.push(
        FieldDefinition::new(
            format!("query{name}"),
            TypeRef::list(TypeRef::named_non_null(name.clone())).non_null(),
        )
        .with_argument(ArgumentDefinition::new(
            "filter",
            TypeRef::named_non_null(filter_name(name)),
        ))
        .with_description(format!("Input Filter based query function for {name}")),
    );
}

/// Append `add<T>`, `update<T>`, and `delete<T>`.
///
/// `update<T>` takes a nullable `input` so a call may carry only the id.
pub fn add_mutation_fields(def: &TypeDefinition, mutation: &mut TypeDefinition) {
    let name = &def.name;

    mutation.fields.push(
        FieldDefinition::new(
            format!("add{name}"),
            TypeRef::named_non_null(add_payload_name(name)),
        )
        .with_argument(ArgumentDefinition::new(
            "input",
            TypeRef::named_non_null(input_name(name)),
        ))
        .with_description(format!("Function for adding {name}")),
    );

    mutation.fields.push(
        FieldDefinition::new(
            format!("update{name}"),
            TypeRef::named_non_null(update_payload_name(name)),
        )
        .with_argument(id_argument())
        .with_argument(ArgumentDefinition::new(
            "input",
            TypeRef::named(update_name(name)),
        ))
        .with_description(format!("Function for updating {name}")),
    );

    mutation.fields.push(
        FieldDefinition::new(
            format!("delete{name}"),
            TypeRef::named_non_null(delete_payload_name(name)),
        )
        .with_argument(id_argument())
        .with_description(format!("Function for deleting {name}")),
    );
}
