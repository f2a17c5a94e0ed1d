//! Command history entries.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::ShotPlanId;

/// One submitted command, appended to the store's history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CommandHistoryEntry {
    pub id: String,
    pub command: String,
    pub timestamp: DateTime<Utc>,
    /// Absent when the command never produced a plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_plan_id: Option<ShotPlanId>,
}

impl CommandHistoryEntry {
    /// Record a command, optionally linked to the plan it produced.
    pub fn new(command: impl Into<String>, shot_plan_id: Option<ShotPlanId>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            command: command.into(),
            timestamp: Utc::now(),
            shot_plan_id,
        }
    }
}
