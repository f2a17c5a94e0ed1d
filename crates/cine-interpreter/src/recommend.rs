//! Alternative-technique recommendations, contrastive to the current plan.

use cine_models::{CameraAngle, Contrast, Recommendation, RecommendationKind, ShotPlan};

/// Generate recommendations for a plan. Rules fire in a fixed order, so the
/// result is order-stable: optional angle and movement suggestions first,
/// then the unconditional reverse-shot, lighting and lens alternatives.
pub fn recommend(plan: &ShotPlan) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if plan.camera.angle == CameraAngle::EyeLevel {
        recommendations.push(
            Recommendation::new(
                RecommendationKind::Angle,
                "Try a Low Angle",
                "A low angle would add more visual power and make the subject appear more dominant.",
                "Increases dramatic tension and visual interest",
                "ArrowDown",
            )
            .for_plan(plan.id.clone()),
        );
    }

    if plan.camera.movement == "Static" {
        recommendations.push(
            Recommendation::new(
                RecommendationKind::Movement,
                "Add Dolly Movement",
                "A subtle push-in could enhance emotional engagement with the subject.",
                "Creates subconscious emotional pull",
                "MoveRight",
            )
            .for_plan(plan.id.clone()),
        );
    }

    recommendations.push(
        Recommendation::new(
            RecommendationKind::Angle,
            "Reverse Shot Coverage",
            "Consider a complementary reverse angle for dialogue coverage or reaction shots.",
            "Complete scene coverage for editing flexibility",
            "RotateCcw",
        )
        .for_plan(plan.id.clone()),
    );

    if plan.scene_type.is_exterior() {
        recommendations.push(
            Recommendation::new(
                RecommendationKind::Movement,
                "Drone Establishing Shot",
                "An aerial perspective could provide context and scale for this exterior scene.",
                "Establishes geography and adds production value",
                "Plane",
            )
            .for_plan(plan.id.clone()),
        );
    }

    let high_contrast = plan.lighting.contrast == Contrast::High;
    recommendations.push(
        Recommendation::new(
            RecommendationKind::Lighting,
            if high_contrast { "Softer Fill Light" } else { "Higher Contrast Ratio" },
            if high_contrast {
                "Adding more fill could reveal details while maintaining mood."
            } else {
                "Reducing fill light would create more dramatic shadows."
            },
            "Alternative visual interpretation of the scene",
            "Sun",
        )
        .for_plan(plan.id.clone()),
    );

    let short_lens = plan
        .camera
        .focal_length_mm()
        .map(|mm| mm < 50)
        .unwrap_or(false);
    recommendations.push(
        Recommendation::new(
            RecommendationKind::Lens,
            if short_lens { "Longer Lens Compression" } else { "Wider Lens Perspective" },
            if short_lens {
                "A longer lens would compress the background and isolate the subject more."
            } else {
                "A wider lens would show more environment and context."
            },
            "Different spatial relationship and feel",
            "Aperture",
        )
        .for_plan(plan.id.clone()),
    );

    recommendations
}
