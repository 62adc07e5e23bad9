//! SDL output formatting configuration.

use gantry_core::INTROSPECTION_PREFIX;
use serde::{Deserialize, Serialize};

fn default_indent() -> String {
    "\t".to_string()
}

fn default_argument_separator() -> String {
    ",".to_string()
}

fn default_introspection_prefix() -> String {
    INTROSPECTION_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Indentation written before each field, argument-bearing root field, and
    /// enum value.
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Separator between arguments of a root operation field.
    #[serde(default = "default_argument_separator")]
    pub argument_separator: String,

    /// Names starting with this prefix are omitted from the output.
    #[serde(default = "default_introspection_prefix")]
    pub introspection_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            argument_separator: default_argument_separator(),
            introspection_prefix: default_introspection_prefix(),
        }
    }
}

impl OutputConfig {
    /// Whether `name` is reserved for introspection and must not be printed.
    ///
    /// An empty prefix reserves nothing.
    #[must_use]
    pub fn is_hidden(&self, name: &str) -> bool {
        !self.introspection_prefix.is_empty() && name.starts_with(&self.introspection_prefix)
    }
}
