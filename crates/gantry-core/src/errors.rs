//! Cross-cutting error types for Gantry.
//!
//! Errors raised while assembling the schema graph itself. Augmentation and
//! validation errors live in `gantry-schema`; the CLI converges everything into
//! `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Two definitions in a document share the same type name.
    #[error("Duplicate type definition: {0}")]
    DuplicateType(String),
}
