//! Alternative-technique recommendations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::id::ShotPlanId;

/// The aspect of the shot a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Angle,
    Movement,
    Lighting,
    Lens,
    Style,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Angle => "angle",
            RecommendationKind::Movement => "movement",
            RecommendationKind::Lighting => "lighting",
            RecommendationKind::Lens => "lens",
            RecommendationKind::Style => "style",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An alternative-technique suggestion contrasting with the current plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub id: String,
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub benefit: String,
    /// Symbolic icon name for the consuming UI
    pub icon: String,
    /// Absent for recommendations generated without a backing plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_shot_plan_id: Option<ShotPlanId>,
}

impl Recommendation {
    pub fn new(
        kind: RecommendationKind,
        title: impl Into<String>,
        description: impl Into<String>,
        benefit: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            description: description.into(),
            benefit: benefit.into(),
            icon: icon.into(),
            related_shot_plan_id: None,
        }
    }

    /// Link the recommendation to its source plan.
    pub fn for_plan(mut self, id: ShotPlanId) -> Self {
        self.related_shot_plan_id = Some(id);
        self
    }
}
