//! Shared data models for the CineCraft planning backend.
//!
//! This crate provides Serde-serializable types for:
//! - Shot plans derived from natural-language commands
//! - Command history entries
//! - Alternative-technique recommendations
//! - Camera paths, scene compositions and scene simulations
//! - Normalized 2D / world-space 3D geometry

pub mod geometry;
pub mod history;
pub mod id;
pub mod recommendation;
pub mod shot;
pub mod simulation;

// Re-export common types
pub use geometry::{LineSegment, Point2, Vec3};
pub use history::CommandHistoryEntry;
pub use id::ShotPlanId;
pub use recommendation::{Recommendation, RecommendationKind};
pub use shot::{
    CameraAngle, CameraSetup, Contrast, Framing, LightingSetup, SceneTag, SceneType, ShotPlan,
};
pub use simulation::{
    ArrowGeometry, CameraPath, CompositionSuggestion, EnvironmentType, LightDirection,
    MovementType, PathSpeed, SceneComposition, SceneSimulation, SuggestionKind,
};
