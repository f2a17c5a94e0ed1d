//! Derived-geometry generators.
//!
//! Pure functions mapping a [`cine_models::ShotPlan`] to its downstream
//! visualization artifacts: a sampled 3D camera path, a 2D composition
//! layout, and a default 3D scene setup. All generators are deterministic
//! and total; malformed inputs degrade to documented default geometry
//! instead of failing.

pub mod camera_path;
pub mod composition;
pub mod scene;

pub use camera_path::{generate_path, look_at_target, position_at_progress};
pub use composition::{analyze, arrow_geometry};
pub use scene::default_simulation;
