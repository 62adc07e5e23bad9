//! Schema documents and constructed schemas.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::definition::TypeDefinition;
use crate::enums::TypeKind;
use crate::errors::CoreError;

/// Ordered list of definitions as handed over by the external parser.
///
/// This is the form scalar bootstrapping operates on, before names are
/// resolved into a [`Schema`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaDocument {
    #[serde(default)]
    pub definitions: Vec<TypeDefinition>,
}

impl SchemaDocument {
    #[must_use]
    pub fn new(definitions: Vec<TypeDefinition>) -> Self {
        Self { definitions }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.iter().any(|def| def.name == name)
    }
}

/// Name-keyed schema plus its root operation types.
///
/// `types` is a `BTreeMap` so every walk over the schema happens in name
/// order and the rendered text is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Schema {
    #[serde(default)]
    pub types: BTreeMap<String, TypeDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<TypeDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<TypeDefinition>,
}

impl Schema {
    /// Resolve a document into a schema.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateType` if two definitions share a name.
    pub fn from_document(document: SchemaDocument) -> Result<Self, CoreError> {
        let mut types = BTreeMap::new();
        for def in document.definitions {
            if types.contains_key(&def.name) {
                return Err(CoreError::DuplicateType(def.name));
            }
            types.insert(def.name.clone(), def);
        }
        Ok(Self {
            types,
            query: None,
            mutation: None,
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Insert a definition, returning the one it replaced.
    pub fn insert(&mut self, def: TypeDefinition) -> Option<TypeDefinition> {
        self.types.insert(def.name.clone(), def)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Definitions of the given kind, in name order.
    pub fn types_of_kind(&self, kind: TypeKind) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values().filter(move |def| def.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
