//! Model-level controls.
//!
//! These are the knobs the model facade passes down into the core: whether
//! direct-hierarchy questions use the built-in equivalence-aware computation,
//! and whether new union graphs deduplicate `find` results.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Settings shared by the hierarchy and union-graph layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelControls {
    /// Compute direct children with the built-in cycle-aware algorithm.
    pub use_builtin_hierarchy_support: bool,
    /// Default `distinct` flag for union graphs.
    pub distinct_union: bool,
}

impl Default for ModelControls {
    fn default() -> Self {
        Self {
            use_builtin_hierarchy_support: true,
            distinct_union: true,
        }
    }
}

impl ModelControls {
    /// Parse controls from JSON. Missing keys take their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_builtin_hierarchy_support(mut self, enabled: bool) -> Self {
        self.use_builtin_hierarchy_support = enabled;
        self
    }

    pub fn with_distinct_union(mut self, distinct: bool) -> Self {
        self.distinct_union = distinct;
        self
    }
}
