//! Augmentation pipeline configuration.

use gantry_core::INTROSPECTION_PREFIX;
use serde::{Deserialize, Serialize};

const fn default_bootstrap_scalars() -> bool {
    true
}

fn default_introspection_prefix() -> String {
    INTROSPECTION_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AugmentConfig {
    /// Add the built-in scalars to incoming documents before building the schema.
    #[serde(default = "default_bootstrap_scalars")]
    pub bootstrap_scalars: bool,

    /// Object types whose name starts with this prefix are never augmented.
    #[serde(default = "default_introspection_prefix")]
    pub introspection_prefix: String,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            bootstrap_scalars: default_bootstrap_scalars(),
            introspection_prefix: default_introspection_prefix(),
        }
    }
}

impl AugmentConfig {
    /// Whether `name` lies in the introspection namespace.
    ///
    /// An empty prefix reserves nothing.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        !self.introspection_prefix.is_empty() && name.starts_with(&self.introspection_prefix)
    }
}
