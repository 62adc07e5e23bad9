//! # gantry-schema
//!
//! Schema augmentation, validation rules, and SDL rendering for Gantry.
//!
//! This crate provides:
//! - Built-in scalar bootstrapping (`ensure_scalars`)
//! - `ValidationRules`: an ordered, caller-owned set of named schema checks
//! - Companion type derivation and root Query/Mutation field generation
//! - `augment_schema`: the all-or-nothing pass that installs both
//! - `stringify`: the bucketed SDL renderer
//! - JSON document loading validated against a `schemars`-generated schema
//!
//! ## Pipeline
//!
//! ```
//! use gantry_core::{FieldDefinition, Schema, SchemaDocument, TypeDefinition, TypeRef};
//! use gantry_schema::{augment_schema, ensure_scalars, stringify, ValidationRules};
//!
//! let mut doc = SchemaDocument::new(vec![TypeDefinition::object("Person")
//!     .with_field(FieldDefinition::new("id", TypeRef::named_non_null("ID")))]);
//! ensure_scalars(&mut doc);
//!
//! let mut schema = Schema::from_document(doc).unwrap();
//! augment_schema(&mut schema).unwrap();
//! assert!(ValidationRules::new().validate(&schema).is_ok());
//! assert!(stringify(&schema).contains("getPerson(id: ID!): Person!"));
//! ```

pub mod augment;
pub mod derive;
pub mod document;
pub mod error;
pub mod operations;
pub mod scalars;
pub mod stringify;
pub mod validation;

pub use augment::{AugmentSummary, augment_schema, augment_schema_with};
pub use document::{document_json_schema, load_document, load_document_str};
pub use error::{AugmentError, RuleViolation, SchemaError};
pub use scalars::{BUILTIN_SCALARS, ensure_scalars, ensure_schema_scalars};
pub use stringify::{stringify, stringify_with};
pub use validation::ValidationRules;
