//! Derived simulation artifacts: camera paths, compositions, 3D scene setups.
//!
//! Each record is keyed one-to-at-most-one to a shot plan and is lazily
//! materialized by the simulation data service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::geometry::{LineSegment, Point2, Vec3};
use crate::id::ShotPlanId;

/// Camera movement archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    #[default]
    Dolly,
    Tracking,
    Orbit,
    Crane,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Dolly => "dolly",
            MovementType::Tracking => "tracking",
            MovementType::Orbit => "orbit",
            MovementType::Crane => "crane",
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Path traversal speed bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl PathSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathSpeed::Slow => "slow",
            PathSpeed::Medium => "medium",
            PathSpeed::Fast => "fast",
        }
    }

    /// Traversal speed in scene units per second.
    pub fn units_per_second(&self) -> f64 {
        match self {
            PathSpeed::Slow => 0.5,
            PathSpeed::Medium => 1.0,
            PathSpeed::Fast => 2.0,
        }
    }
}

impl fmt::Display for PathSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sampled parametric camera path for one shot plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CameraPath {
    pub shot_plan_id: ShotPlanId,
    pub movement_type: MovementType,
    pub speed: PathSpeed,
    /// Free-text travel direction ("forward", "left", ...)
    pub direction: String,
    /// Present iff `movement_type` is orbit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    pub start_position: Vec3,
    pub end_position: Vec3,
    /// 21 samples at t = i/20; endpoints coincide with start/end
    pub path_points: Vec<Vec3>,
    /// Playback duration in seconds
    pub duration: f64,
}

/// Direction a light arrives from, in frame terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LightDirection {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Front,
    Back,
}

impl LightDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightDirection::TopLeft => "top-left",
            LightDirection::TopRight => "top-right",
            LightDirection::BottomLeft => "bottom-left",
            LightDirection::BottomRight => "bottom-right",
            LightDirection::Front => "front",
            LightDirection::Back => "back",
        }
    }
}

impl fmt::Display for LightDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LightDirection {
    type Err = LightDirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top-left" => Ok(LightDirection::TopLeft),
            "top-right" => Ok(LightDirection::TopRight),
            "bottom-left" => Ok(LightDirection::BottomLeft),
            "bottom-right" => Ok(LightDirection::BottomRight),
            "front" => Ok(LightDirection::Front),
            "back" => Ok(LightDirection::Back),
            _ => Err(LightDirectionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown light direction: {0}")]
pub struct LightDirectionParseError(String);

/// Category of a composition suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    RuleOfThirds,
    LeadingLines,
    Lighting,
    Framing,
}

/// One compositional technique, with whether the layout already applies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompositionSuggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub applied: bool,
}

/// 2D composition layout derived from a shot plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneComposition {
    pub shot_plan_id: ShotPlanId,
    pub rule_of_thirds_enabled: bool,
    pub leading_lines_enabled: bool,
    /// Normalized [0,1] x [0,1] subject placement
    pub subject_position: Point2,
    pub key_light_direction: LightDirection,
    pub fill_light_direction: LightDirection,
    /// Absent for styles that kill the rim (split, silhouette)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rim_light_direction: Option<LightDirection>,
    pub leading_lines_points: Vec<LineSegment>,
    pub suggestions: Vec<CompositionSuggestion>,
}

/// Arrow endpoints for rendering a light direction, in a 0-100 overlay space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArrowGeometry {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// Environment category for the 3D preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentType {
    Studio,
    Outdoor,
    Interior,
    Street,
}

impl EnvironmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentType::Studio => "studio",
            EnvironmentType::Outdoor => "outdoor",
            EnvironmentType::Interior => "interior",
            EnvironmentType::Street => "street",
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 3D scene setup consumed by the preview renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneSimulation {
    pub shot_plan_id: ShotPlanId,
    pub camera_position: Vec3,
    pub camera_rotation: Vec3,
    pub camera_fov: f64,
    pub actor_position: Vec3,
    pub environment_type: EnvironmentType,
    pub show_grid: bool,
    pub show_frustum: bool,
    /// Embedded path override for playback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_config: Option<CameraPath>,
}
