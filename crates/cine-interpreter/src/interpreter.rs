//! Command interpretation: raw text to a fully populated shot plan.

use chrono::Utc;

use cine_models::{
    CameraAngle, CameraSetup, Contrast, Framing, LightingSetup, SceneTag, SceneType, ShotPlan,
    ShotPlanId,
};

use crate::vocabulary::{
    palette_for_mood, ANGLE_KEYWORDS, FRAMING_KEYWORDS, LENS_RE, LOCATION_PATTERNS,
    MOOD_KEYWORDS, MOVEMENT_KEYWORDS, TIME_OF_DAY_RE, WEATHER_RE,
};

const DEFAULT_FOCAL_MM: u32 = 50;

/// Interpret a natural-language command into a shot plan.
///
/// Total over any input: every category has an explicit default when no
/// keyword matches, so interpretation never fails. Derived fields are a
/// deterministic function of the command text; only `id` and `created_at`
/// vary between calls.
pub fn interpret(command: &str) -> ShotPlan {
    let lower = command.to_lowercase();

    let scene_type = detect_scene_type(&lower);
    let weather = WEATHER_RE
        .captures(&lower)
        .map(|caps| capitalize(&caps[1]));
    let time_of_day = TIME_OF_DAY_RE
        .captures(&lower)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| "day".to_string());

    let angle = detect_angle(&lower);
    let framing = detect_framing(&lower);
    let (focal_length, focal_mm) = detect_lens(&lower);
    let lens = lens_category(focal_mm);
    let aperture = aperture_for(focal_mm);
    let movement = detect_movement(&lower);
    let mood = detect_mood(&lower);
    let location = detect_location(command, scene_type);

    let lighting_style = lighting_style_for(&lower, &mood);
    let cinematic_style = cinematic_style_for(&lower, focal_mm);
    let contrast = contrast_for(&mood);
    let shot_type = compose_shot_type(framing, angle, &movement);
    let tags = collect_tags(&lower, framing, &mood);
    let description = compose_description(
        framing,
        angle,
        &focal_length,
        lens,
        &movement,
        &lighting_style,
        &mood,
    );

    let is_static = movement == "Static";
    let warm_light = time_of_day.eq_ignore_ascii_case("golden hour")
        || time_of_day.eq_ignore_ascii_case("sunset");

    ShotPlan {
        id: ShotPlanId::new(),
        command: command.to_string(),
        created_at: Utc::now(),
        scene_type,
        location,
        time_of_day: capitalize(&time_of_day),
        weather,
        camera: CameraSetup {
            position: position_for(angle),
            angle,
            lens: lens.to_string(),
            focal_length,
            aperture: aperture.to_string(),
            framing,
            stabilization: stabilization_for(&movement),
            movement,
        },
        lighting: LightingSetup {
            style: lighting_style,
            key_light: if scene_type.is_exterior() {
                "Sun/Available Light".to_string()
            } else {
                "ARRI SkyPanel".to_string()
            },
            fill_light: "Bounce/Negative Fill".to_string(),
            back_light: (mood == "Dramatic").then(|| "Rim/Edge Light".to_string()),
            practicals: (!scene_type.is_exterior())
                .then(|| vec!["Window light".to_string(), "Practical lamps".to_string()]),
            color_temperature: if warm_light {
                "3200K (Warm)".to_string()
            } else {
                "5600K (Daylight)".to_string()
            },
            contrast,
        },
        cinematic_style: cinematic_style.clone(),
        color_palette: palette_for_mood(&mood)
            .iter()
            .map(|c| c.to_string())
            .collect(),
        references: vec![
            format!("{cinematic_style} films"),
            format!("{mood} sequences from acclaimed cinematographers"),
            format!(
                "Roger Deakins' {} work",
                if scene_type.is_exterior() { "exterior" } else { "interior" }
            ),
        ],
        mood,
        shot_type,
        duration: if is_static {
            "3-5 seconds".to_string()
        } else {
            "8-12 seconds".to_string()
        },
        description,
        tags,
    }
}

fn detect_scene_type(lower: &str) -> SceneType {
    if lower.contains("exterior") || lower.contains("outdoor") || lower.contains("outside") {
        SceneType::Exterior
    } else {
        SceneType::Interior
    }
}

fn detect_angle(lower: &str) -> CameraAngle {
    ANGLE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, angle)| *angle)
        .unwrap_or(CameraAngle::EyeLevel)
}

fn detect_framing(lower: &str) -> Framing {
    FRAMING_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, framing)| *framing)
        .unwrap_or(Framing::Medium)
}

/// Returns the focal length label and its numeric value in millimeters.
fn detect_lens(lower: &str) -> (String, u32) {
    match LENS_RE.captures(lower) {
        Some(caps) => {
            let mm = caps[1].parse().unwrap_or(DEFAULT_FOCAL_MM);
            (format!("{}mm", &caps[1]), mm)
        }
        None => (format!("{DEFAULT_FOCAL_MM}mm"), DEFAULT_FOCAL_MM),
    }
}

fn lens_category(focal_mm: u32) -> &'static str {
    if focal_mm < 35 {
        "Wide Angle"
    } else if focal_mm > 85 {
        "Telephoto"
    } else {
        "Standard Prime"
    }
}

fn aperture_for(focal_mm: u32) -> &'static str {
    if focal_mm < 35 {
        "f/2.8"
    } else if focal_mm > 85 {
        "f/1.4"
    } else {
        "f/2.0"
    }
}

fn detect_movement(lower: &str) -> String {
    for keyword in MOVEMENT_KEYWORDS {
        if lower.contains(keyword) {
            return match *keyword {
                "follow" => "Follow/Tracking".to_string(),
                "push in" => "Dolly Push-In".to_string(),
                "pull out" => "Dolly Pull-Out".to_string(),
                other => capitalize(other),
            };
        }
    }
    "Static".to_string()
}

fn detect_mood(lower: &str) -> String {
    MOOD_KEYWORDS
        .iter()
        .find(|keyword| lower.contains(*keyword))
        .map(|keyword| capitalize(keyword))
        .unwrap_or_else(|| "Dramatic".to_string())
}

fn detect_location(command: &str, scene_type: SceneType) -> String {
    for pattern in LOCATION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(command) {
            return capitalize(caps[1].trim());
        }
    }
    if scene_type.is_exterior() {
        "Urban Street".to_string()
    } else {
        "Interior Space".to_string()
    }
}

fn lighting_style_for(lower: &str, mood: &str) -> String {
    if lower.contains("noir") {
        "Low-Key Noir"
    } else if lower.contains("natural") {
        "Natural/Available"
    } else if mood == "Dramatic" {
        "Chiaroscuro"
    } else if mood == "Romantic" {
        "Soft High-Key"
    } else {
        "Three-Point Lighting"
    }
    .to_string()
}

fn cinematic_style_for(lower: &str, focal_mm: u32) -> String {
    if lower.contains("noir") {
        "Film Noir"
    } else if lower.contains("documentary") {
        "Documentary Style"
    } else if focal_mm > 50 {
        "Anamorphic Widescreen"
    } else {
        "Naturalistic Cinema"
    }
    .to_string()
}

fn contrast_for(mood: &str) -> Contrast {
    match mood {
        "Dramatic" | "Noir" => Contrast::High,
        "Romantic" => Contrast::Low,
        _ => Contrast::Medium,
    }
}

fn position_for(angle: CameraAngle) -> String {
    match angle {
        CameraAngle::Low => "Camera positioned below subject level",
        CameraAngle::High => "Camera positioned above subject level",
        _ => "Camera positioned at subject eye level",
    }
    .to_string()
}

fn stabilization_for(movement: &str) -> String {
    match movement {
        "Handheld" => "Handheld (intentional shake)",
        "Steadicam" => "Steadicam",
        _ => "Tripod/Dolly",
    }
    .to_string()
}

fn compose_shot_type(framing: Framing, angle: CameraAngle, movement: &str) -> String {
    let angle_part = if angle == CameraAngle::EyeLevel {
        String::new()
    } else {
        format!("{} angle ", angle.as_words())
    };
    let movement_part = if movement == "Static" {
        String::new()
    } else {
        format!("{movement} ")
    };
    format!(
        "{} {angle_part}{movement_part}Shot",
        title_case(&framing.as_words())
    )
    .trim()
    .to_string()
}

fn collect_tags(lower: &str, framing: Framing, mood: &str) -> Vec<SceneTag> {
    let mut tags = Vec::new();
    if lower.contains("action") {
        tags.push(SceneTag::Action);
    }
    if lower.contains("dialogue") || lower.contains("conversation") {
        tags.push(SceneTag::Dialogue);
    }
    if framing.is_wide_shot() {
        tags.push(SceneTag::Establishing);
    }
    if mood.eq_ignore_ascii_case("dramatic") {
        tags.push(SceneTag::Dramatic);
    }
    if mood.eq_ignore_ascii_case("romantic") {
        tags.push(SceneTag::Romantic);
    }
    if lower.contains("suspense") || lower.contains("tension") {
        tags.push(SceneTag::Suspense);
    }
    if tags.is_empty() {
        tags.push(SceneTag::Dramatic);
    }
    tags
}

fn compose_description(
    framing: Framing,
    angle: CameraAngle,
    focal_length: &str,
    lens: &str,
    movement: &str,
    lighting_style: &str,
    mood: &str,
) -> String {
    let movement_clause = if movement == "Static" {
        String::new()
    } else {
        format!("The camera executes a {} movement. ", movement.to_lowercase())
    };
    format!(
        "A {} shot from a {} angle, capturing the scene with a {focal_length} {} lens. \
         {movement_clause}The lighting creates a {} atmosphere, emphasizing the {} tone \
         of the scene.",
        framing.as_words(),
        angle.as_words(),
        lens.to_lowercase(),
        lighting_style.to_lowercase(),
        mood.to_lowercase(),
    )
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Uppercase the first character of every whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
