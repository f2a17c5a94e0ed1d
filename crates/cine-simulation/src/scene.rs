//! Default 3D scene setup for a shot plan.

use cine_models::{EnvironmentType, SceneSimulation, ShotPlan, Vec3};

const DEFAULT_FOV: f64 = 50.0;

/// Build the default scene simulation used until a persisted one exists.
///
/// The camera field of view borrows the focal length number directly, which
/// matches how the preview renderer maps lenses onto its projection.
pub fn default_simulation(plan: &ShotPlan) -> SceneSimulation {
    SceneSimulation {
        shot_plan_id: plan.id.clone(),
        camera_position: Vec3::new(0.0, 2.0, 5.0),
        camera_rotation: Vec3::new(0.0, 0.0, 0.0),
        camera_fov: plan
            .camera
            .focal_length_mm()
            .map(f64::from)
            .filter(|fov| *fov != 0.0)
            .unwrap_or(DEFAULT_FOV),
        actor_position: Vec3::new(0.0, 0.0, 0.0),
        environment_type: environment_for(plan),
        show_grid: true,
        show_frustum: true,
        path_config: None,
    }
}

/// Environment classification: street beats generic outdoor for exteriors,
/// everything else previews as an interior.
fn environment_for(plan: &ShotPlan) -> EnvironmentType {
    if plan.scene_type.is_exterior() {
        if plan.location.to_lowercase().contains("street") {
            EnvironmentType::Street
        } else {
            EnvironmentType::Outdoor
        }
    } else {
        EnvironmentType::Interior
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_interpreter::interpret;

    #[test]
    fn test_environment_classification() {
        let street = default_simulation(&interpret("exterior rainy street"));
        assert_eq!(street.environment_type, EnvironmentType::Street);

        let outdoor = default_simulation(&interpret("exterior desert at dawn"));
        assert_eq!(outdoor.environment_type, EnvironmentType::Outdoor);

        let interior = default_simulation(&interpret("interior office"));
        assert_eq!(interior.environment_type, EnvironmentType::Interior);
    }

    #[test]
    fn test_fov_follows_focal_length() {
        let sim = default_simulation(&interpret("35mm lens"));
        assert_eq!(sim.camera_fov, 35.0);

        let fallback = default_simulation(&interpret(""));
        assert_eq!(fallback.camera_fov, 50.0);
    }

    #[test]
    fn test_defaults() {
        let sim = default_simulation(&interpret("interior office"));
        assert_eq!(sim.camera_position, Vec3::new(0.0, 2.0, 5.0));
        assert_eq!(sim.actor_position, Vec3::new(0.0, 0.0, 0.0));
        assert!(sim.show_grid);
        assert!(sim.show_frustum);
        assert_eq!(sim.path_config, None);
    }
}
