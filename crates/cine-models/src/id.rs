//! Shot plan identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a generated shot plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ShotPlanId(pub String);

impl ShotPlanId {
    /// Generate a new random shot plan ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ShotPlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShotPlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ShotPlanId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ShotPlanId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
