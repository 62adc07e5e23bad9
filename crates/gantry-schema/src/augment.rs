//! Whole-schema augmentation.
//!
//! Every user-authored object type gets its seven companion types and its
//! root Query/Mutation fields. Derived types are staged and only merged into
//! the schema after the full pass, so a freshly derived `PersonRef` is never
//! mistaken for a source type, and a failing pass leaves the schema exactly as
//! it was.

use std::collections::BTreeMap;

use gantry_config::AugmentConfig;
use gantry_core::{Schema, TypeDefinition};

use crate::derive::{derive_companions_with, is_source};
use crate::error::{AugmentError, SchemaError};
use crate::operations::{add_mutation_fields, add_query_fields, mutation_root, query_root};

/// Counts describing a successful augmentation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AugmentSummary {
    pub object_types: usize,
    pub derived_types: usize,
    pub query_fields: usize,
    pub mutation_fields: usize,
}

/// Augment `schema` in place with the default configuration.
///
/// # Errors
///
/// See [`augment_schema_with`].
pub fn augment_schema(schema: &mut Schema) -> Result<AugmentSummary, SchemaError> {
    augment_schema_with(schema, &AugmentConfig::default())
}

/// Augment `schema` in place.
///
/// Replaces any existing Query/Mutation roots. Types generated by an earlier
/// pass are overwritten, so augmenting twice gives the same schema as
/// augmenting once.
///
/// # Errors
///
/// Returns `SchemaError::Augmentation` with every `UndefinedTypeReference`,
/// `UnreferenceableObject`, and `NameCollision` found in the pass. Nothing is installed in that case.
pub fn augment_schema_with(
    schema: &mut Schema,
    config: &AugmentConfig,
) -> Result<AugmentSummary, SchemaError> {
    let mut staged: BTreeMap<String, TypeDefinition> = BTreeMap::new();
    let mut query = query_root();
    let mut mutation = mutation_root();
    let mut errors: Vec<AugmentError> = Vec::new();
    let mut object_types = 0usize;
    let current: &Schema = schema;

    for def in current.types.values().filter(|def| is_source(def, config)) {
        object_types += 1;

        match derive_companions_with(current, def, config) {
            Ok(companions) => {
                for companion in companions {
                    let taken_by_user = current
                        .get(&companion.name)
                        .is_some_and(|existing| existing.origin.is_user_defined());
                    if taken_by_user || staged.contains_key(&companion.name) {
                        errors.push(AugmentError::NameCollision {
                            derived: companion.name,
                            source_type: def.name.clone(),
                        });
                        continue;
                    }
                    staged.insert(companion.name.clone(), companion);
                }
            }
            Err(mut found) => errors.append(&mut found),
        }

        add_query_fields(def, &mut query);
        add_mutation_fields(def, &mut mutation);
        tracing::debug!(type_name = %def.name, "derived companion types");
    }

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "augmentation aborted");
        return Err(SchemaError::Augmentation { errors });
    }

    let summary = AugmentSummary {
        object_types,
        derived_types: staged.len(),
        query_fields: query.fields.len(),
        mutation_fields: mutation.fields.len(),
    };

    schema.types.extend(staged);
    schema.query = Some(query);
    schema.mutation = Some(mutation);

    tracing::debug!(
        object_types = summary.object_types,
        derived_types = summary.derived_types,
        "schema augmented"
    );
    Ok(summary)
}
