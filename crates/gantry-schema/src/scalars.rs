//! Built-in scalar bootstrapping.

use gantry_core::{Schema, SchemaDocument, TypeDefinition};

/// Scalars every schema supports, in insertion order.
pub const BUILTIN_SCALARS: [&str; 6] = ["Int", "Float", "ID", "DateTime", "String", "Boolean"];

/// Append a scalar definition for every built-in scalar the document lacks.
///
/// A name already present (whatever its kind) is left alone, so calling this
/// any number of times yields exactly one definition per built-in name.
pub fn ensure_scalars(document: &mut SchemaDocument) {
    for name in BUILTIN_SCALARS {
        if document.contains(name) {
            continue;
        }
        tracing::trace!(scalar = name, "adding built-in scalar");
        document.definitions.push(TypeDefinition::scalar(name));
    }
}

/// Same as [`ensure_scalars`] for an already constructed schema.
pub fn ensure_schema_scalars(schema: &mut Schema) {
    for name in BUILTIN_SCALARS {
        if schema.contains(name) {
            continue;
        }
        tracing::trace!(scalar = name, "adding built-in scalar");
        schema.insert(TypeDefinition::scalar(name));
    }
}
