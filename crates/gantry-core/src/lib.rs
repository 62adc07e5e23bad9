//! # gantry-core
//!
//! Schema graph model and error types for Gantry.
//!
//! This crate provides the foundational types shared across all Gantry crates:
//! - Type definitions, field definitions, and argument definitions
//! - `TypeRef`, the named/list type reference with canonical SDL rendering
//! - `TypeKind` and the `TypeOrigin` derived-from tag
//! - `SchemaDocument` (pre-construction) and `Schema` (name-keyed, ordered)
//! - Cross-cutting error types

pub mod definition;
pub mod enums;
pub mod errors;
pub mod schema;
pub mod type_ref;

pub use definition::{ArgumentDefinition, FieldDefinition, TypeDefinition};
pub use enums::{TypeKind, TypeOrigin};
pub use errors::CoreError;
pub use schema::{Schema, SchemaDocument};
pub use type_ref::TypeRef;

/// Name of the built-in ID scalar.
pub const ID_SCALAR: &str = "ID";

/// Name of the built-in String scalar.
pub const STRING_SCALAR: &str = "String";

/// Prefix reserved for introspection types, fields, and enum values.
pub const INTROSPECTION_PREFIX: &str = "__";
