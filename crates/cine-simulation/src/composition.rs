//! 2D composition analysis.
//!
//! Places the subject on a rule-of-thirds grid, assigns three-point lighting
//! directions, accumulates leading-line geometry and emits technique
//! suggestions, all from the shot plan alone.

use cine_models::{
    ArrowGeometry, CameraAngle, CompositionSuggestion, Framing, LightDirection, LineSegment,
    Point2, SceneComposition, ShotPlan, SuggestionKind,
};

// Rule-of-thirds grid stops.
const THIRD_NEAR: f64 = 0.33;
const CENTER: f64 = 0.5;
const THIRD_FAR: f64 = 0.67;

/// How close subject x must sit to a thirds line to count as on a power point.
const THIRDS_TOLERANCE: f64 = 0.05;

/// Analyze a shot plan into a composition layout.
pub fn analyze(plan: &ShotPlan) -> SceneComposition {
    let subject_position = subject_position(plan.camera.framing, plan.camera.angle);
    let (key, fill, rim) = lighting_directions(plan);
    let leading_lines = leading_lines(plan);
    let suggestions = suggestions(plan, subject_position);

    SceneComposition {
        shot_plan_id: plan.id.clone(),
        rule_of_thirds_enabled: true,
        leading_lines_enabled: plan.scene_type.is_exterior()
            || plan.camera.framing.is_wide_shot(),
        subject_position,
        key_light_direction: key,
        fill_light_direction: fill,
        rim_light_direction: rim,
        leading_lines_points: leading_lines,
        suggestions,
    }
}

/// Base thirds placement by framing, nudged vertically by angle.
fn subject_position(framing: Framing, angle: CameraAngle) -> Point2 {
    let (x, mut y) = match framing {
        Framing::CloseUp | Framing::ExtremeCloseUp => (CENTER, THIRD_NEAR),
        Framing::Medium | Framing::MediumClose => (THIRD_NEAR, CENTER),
        Framing::Wide | Framing::MediumWide => (THIRD_FAR, THIRD_FAR),
        Framing::ExtremeWide => (CENTER, THIRD_FAR),
    };

    // Low angles look up at the subject, so it drops in frame; high and
    // bird-eye angles push it up.
    match angle {
        CameraAngle::Low => y = (y + 0.1).min(0.8),
        CameraAngle::High | CameraAngle::BirdEye => y = (y - 0.1).max(0.2),
        _ => {}
    }

    Point2::new(x, y)
}

/// Key/fill/rim assignment: a base three-point setup, overridden first by
/// the lighting style and then by the mood, so mood wins on conflict.
fn lighting_directions(
    plan: &ShotPlan,
) -> (LightDirection, LightDirection, Option<LightDirection>) {
    let style = plan.lighting.style.to_lowercase();
    let mood = plan.mood.to_lowercase();

    let mut key = LightDirection::TopLeft;
    let mut fill = LightDirection::Front;
    let mut rim = Some(LightDirection::Back);

    if style.contains("rembrandt") {
        key = LightDirection::TopRight;
        fill = LightDirection::Front;
        rim = Some(LightDirection::Back);
    } else if style.contains("split") {
        key = LightDirection::TopLeft;
        fill = LightDirection::BottomRight;
        rim = None;
    } else if style.contains("butterfly") || style.contains("paramount") {
        key = LightDirection::Front;
        fill = LightDirection::BottomLeft;
        rim = Some(LightDirection::Back);
    } else if style.contains("silhouette") {
        key = LightDirection::Back;
        fill = LightDirection::Back;
        rim = None;
    } else if style.contains("low-key") || style.contains("noir") {
        key = LightDirection::TopRight;
        fill = LightDirection::BottomLeft;
        rim = Some(LightDirection::TopLeft);
    }

    if mood.contains("dramatic") || mood.contains("noir") {
        rim = Some(LightDirection::Back);
    } else if mood.contains("romantic") || mood.contains("soft") {
        fill = LightDirection::Front;
    }

    (key, fill, rim)
}

/// Leading-line segments accumulate: exterior convergence lines, a horizon
/// for wide framings, and street/alley perspective lines.
fn leading_lines(plan: &ShotPlan) -> Vec<LineSegment> {
    let mut lines = Vec::new();

    if plan.scene_type.is_exterior() {
        lines.push(LineSegment::new(0.0, 1.0, THIRD_NEAR, 0.5));
        lines.push(LineSegment::new(1.0, 1.0, THIRD_FAR, 0.5));
    }

    if plan.camera.framing.is_wide_shot() {
        lines.push(LineSegment::new(0.0, THIRD_NEAR, 1.0, THIRD_NEAR));
    }

    let location = plan.location.to_lowercase();
    if location.contains("street") || location.contains("alley") {
        lines.push(LineSegment::new(0.1, 0.8, 0.5, 0.4));
        lines.push(LineSegment::new(0.9, 0.8, 0.5, 0.4));
    }

    lines
}

fn suggestions(plan: &ShotPlan, subject: Point2) -> Vec<CompositionSuggestion> {
    let mut suggestions = Vec::new();

    let on_thirds = (subject.x - THIRD_NEAR).abs() < THIRDS_TOLERANCE
        || (subject.x - THIRD_FAR).abs() < THIRDS_TOLERANCE;
    suggestions.push(CompositionSuggestion {
        kind: SuggestionKind::RuleOfThirds,
        title: "Rule of Thirds".to_string(),
        description: if on_thirds {
            "Subject is well-positioned on a power point".to_string()
        } else {
            "Consider moving subject to a thirds intersection for stronger composition"
                .to_string()
        },
        applied: on_thirds,
    });

    // Any framing whose label mentions "wide" counts here, medium-wide
    // included, unlike the stricter leading_lines_enabled flag.
    if plan.scene_type.is_exterior() || plan.camera.framing.as_str().contains("wide") {
        suggestions.push(CompositionSuggestion {
            kind: SuggestionKind::LeadingLines,
            title: "Leading Lines".to_string(),
            description: "Use environmental elements to guide viewer's eye to subject".to_string(),
            applied: true,
        });
    }

    suggestions.push(CompositionSuggestion {
        kind: SuggestionKind::Lighting,
        title: "Three-Point Lighting".to_string(),
        description: format!(
            "Using {} with {} contrast ratio",
            plan.lighting.style, plan.lighting.contrast
        ),
        applied: true,
    });

    if matches!(plan.camera.framing, Framing::Medium | Framing::MediumClose) {
        suggestions.push(CompositionSuggestion {
            kind: SuggestionKind::Framing,
            title: "Headroom Balance".to_string(),
            description: "Allow appropriate headroom above subject for balanced composition"
                .to_string(),
            applied: true,
        });
    }

    suggestions
}

/// Arrow endpoints for rendering a light direction in a 0-100 overlay space.
/// Unknown direction labels fall back to the front arrow.
pub fn arrow_geometry(direction: &str) -> ArrowGeometry {
    let direction = direction
        .parse::<LightDirection>()
        .unwrap_or(LightDirection::Front);
    match direction {
        LightDirection::TopLeft => ArrowGeometry { start_x: 15.0, start_y: 15.0, end_x: 40.0, end_y: 40.0 },
        LightDirection::TopRight => ArrowGeometry { start_x: 85.0, start_y: 15.0, end_x: 60.0, end_y: 40.0 },
        LightDirection::BottomLeft => ArrowGeometry { start_x: 15.0, start_y: 85.0, end_x: 40.0, end_y: 60.0 },
        LightDirection::BottomRight => ArrowGeometry { start_x: 85.0, start_y: 85.0, end_x: 60.0, end_y: 60.0 },
        LightDirection::Front => ArrowGeometry { start_x: 50.0, start_y: 10.0, end_x: 50.0, end_y: 40.0 },
        LightDirection::Back => ArrowGeometry { start_x: 50.0, start_y: 90.0, end_x: 50.0, end_y: 60.0 },
    }
}
