//! Shot plan definitions.
//!
//! A [`ShotPlan`] is the structured cinematography specification derived from
//! one natural-language command. Every field is a deterministic function of
//! the command text; two interpretations of the same text differ only in
//! `id` and `created_at`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::id::ShotPlanId;

/// Interior vs. exterior scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum SceneType {
    #[default]
    Interior,
    Exterior,
}

impl SceneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneType::Interior => "interior",
            SceneType::Exterior => "exterior",
        }
    }

    pub fn is_exterior(&self) -> bool {
        matches!(self, SceneType::Exterior)
    }
}

impl fmt::Display for SceneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Camera angle relative to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CameraAngle {
    Low,
    #[default]
    EyeLevel,
    High,
    BirdEye,
    Dutch,
}

impl CameraAngle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraAngle::Low => "low",
            CameraAngle::EyeLevel => "eye-level",
            CameraAngle::High => "high",
            CameraAngle::BirdEye => "bird-eye",
            CameraAngle::Dutch => "dutch",
        }
    }

    /// Hyphen-free label for prose templates ("bird eye").
    pub fn as_words(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for CameraAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CameraAngle {
    type Err = AngleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(CameraAngle::Low),
            "eye-level" => Ok(CameraAngle::EyeLevel),
            "high" => Ok(CameraAngle::High),
            "bird-eye" => Ok(CameraAngle::BirdEye),
            "dutch" => Ok(CameraAngle::Dutch),
            _ => Err(AngleParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown camera angle: {0}")]
pub struct AngleParseError(String);

/// Shot-size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Framing {
    ExtremeCloseUp,
    CloseUp,
    MediumClose,
    #[default]
    Medium,
    MediumWide,
    Wide,
    ExtremeWide,
}

impl Framing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framing::ExtremeCloseUp => "extreme-close-up",
            Framing::CloseUp => "close-up",
            Framing::MediumClose => "medium-close",
            Framing::Medium => "medium",
            Framing::MediumWide => "medium-wide",
            Framing::Wide => "wide",
            Framing::ExtremeWide => "extreme-wide",
        }
    }

    /// Hyphen-free label for prose templates ("extreme close up").
    pub fn as_words(&self) -> String {
        self.as_str().replace('-', " ")
    }

    /// Wide or extreme-wide, the framings that establish geography.
    pub fn is_wide_shot(&self) -> bool {
        matches!(self, Framing::Wide | Framing::ExtremeWide)
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framing {
    type Err = FramingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extreme-close-up" => Ok(Framing::ExtremeCloseUp),
            "close-up" => Ok(Framing::CloseUp),
            "medium-close" => Ok(Framing::MediumClose),
            "medium" => Ok(Framing::Medium),
            "medium-wide" => Ok(Framing::MediumWide),
            "wide" => Ok(Framing::Wide),
            "extreme-wide" => Ok(Framing::ExtremeWide),
            _ => Err(FramingParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown framing: {0}")]
pub struct FramingParseError(String);

/// Lighting contrast ratio bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Low,
    #[default]
    Medium,
    High,
}

impl Contrast {
    pub fn as_str(&self) -> &'static str {
        match self {
            Contrast::Low => "low",
            Contrast::Medium => "medium",
            Contrast::High => "high",
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scene classification tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SceneTag {
    Action,
    Dialogue,
    Establishing,
    Transition,
    Dramatic,
    Romantic,
    Suspense,
    Comedy,
}

impl SceneTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneTag::Action => "action",
            SceneTag::Dialogue => "dialogue",
            SceneTag::Establishing => "establishing",
            SceneTag::Transition => "transition",
            SceneTag::Dramatic => "dramatic",
            SceneTag::Romantic => "romantic",
            SceneTag::Suspense => "suspense",
            SceneTag::Comedy => "comedy",
        }
    }
}

impl fmt::Display for SceneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Camera configuration for one shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CameraSetup {
    /// Prose description of the camera placement
    pub position: String,
    pub angle: CameraAngle,
    /// Lens category label ("Wide Angle", "Standard Prime", "Telephoto")
    pub lens: String,
    /// Focal length label, e.g. "35mm"
    pub focal_length: String,
    /// F-stop label, e.g. "f/2.8"
    pub aperture: String,
    pub framing: Framing,
    /// Movement label, e.g. "Dolly Push-In" or "Static"
    pub movement: String,
    pub stabilization: String,
}

impl CameraSetup {
    /// Leading integer of the focal length label ("35mm" -> 35).
    pub fn focal_length_mm(&self) -> Option<u32> {
        let digits: String = self
            .focal_length
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

/// Lighting configuration for one shot.
///
/// `back_light` and `practicals` are present-or-absent by design, never
/// empty-string sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LightingSetup {
    pub style: String,
    pub key_light: String,
    pub fill_light: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practicals: Option<Vec<String>>,
    pub color_temperature: String,
    pub contrast: Contrast,
}

/// The structured cinematography specification derived from one command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShotPlan {
    pub id: ShotPlanId,
    /// Original command text, immutable
    pub command: String,
    pub created_at: DateTime<Utc>,

    // Scene details
    pub scene_type: SceneType,
    pub location: String,
    pub time_of_day: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,

    pub camera: CameraSetup,
    pub lighting: LightingSetup,

    // Mood & style
    pub mood: String,
    pub cinematic_style: String,
    /// Four hex colors, ordered
    pub color_palette: Vec<String>,
    pub references: Vec<String>,

    // Shot summary
    pub shot_type: String,
    pub duration: String,
    pub description: String,

    /// Non-empty; defaults to `[dramatic]` when no keyword matched
    pub tags: Vec<SceneTag>,
}
