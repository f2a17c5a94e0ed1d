//! Keyword vocabularies and extraction patterns.
//!
//! Scans are first-match-wins over the lower-cased command, so table order
//! is load-bearing: a specific phrase must precede any generic phrase it
//! contains ("low angle" before "low"). Matching is substring-based;
//! partial-word hits ("lowered" matching "low") are an accepted limitation.

use std::sync::LazyLock;

use regex::Regex;

use cine_models::{CameraAngle, Framing};

/// Camera angle phrases, checked in order.
pub const ANGLE_KEYWORDS: &[(&str, CameraAngle)] = &[
    ("low angle", CameraAngle::Low),
    ("low", CameraAngle::Low),
    ("high angle", CameraAngle::High),
    ("high", CameraAngle::High),
    ("bird eye", CameraAngle::BirdEye),
    ("aerial", CameraAngle::BirdEye),
    ("dutch", CameraAngle::Dutch),
    ("tilted", CameraAngle::Dutch),
    ("eye level", CameraAngle::EyeLevel),
];

/// Framing phrases, checked in order. "wide" shadows "extreme wide", which
/// stays reachable through "establishing"; "medium" likewise shadows
/// "medium wide".
pub const FRAMING_KEYWORDS: &[(&str, Framing)] = &[
    ("extreme close", Framing::ExtremeCloseUp),
    ("close up", Framing::CloseUp),
    ("closeup", Framing::CloseUp),
    ("medium close", Framing::MediumClose),
    ("medium", Framing::Medium),
    ("medium wide", Framing::MediumWide),
    ("wide", Framing::Wide),
    ("extreme wide", Framing::ExtremeWide),
    ("establishing", Framing::ExtremeWide),
];

/// Movement keywords, checked in order.
pub const MOVEMENT_KEYWORDS: &[&str] = &[
    "dolly",
    "push in",
    "pull out",
    "track",
    "pan",
    "tilt",
    "crane",
    "steadicam",
    "handheld",
    "static",
    "follow",
    "orbit",
    "zoom",
];

/// Mood keywords, checked in order.
pub const MOOD_KEYWORDS: &[&str] = &[
    "dramatic",
    "tense",
    "romantic",
    "melancholic",
    "joyful",
    "mysterious",
    "ethereal",
    "gritty",
    "noir",
    "hopeful",
    "ominous",
    "serene",
    "chaotic",
];

/// Weather vocabulary; leftmost match wins.
pub static WEATHER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(rainy|rain|sunny|cloudy|foggy|snowy|stormy|overcast|clear)\b").unwrap()
});

/// Time-of-day vocabulary; leftmost match wins.
pub static TIME_OF_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(dawn|morning|day|afternoon|dusk|sunset|golden hour|night|midnight|evening)\b")
        .unwrap()
});

/// Focal length, e.g. "35mm".
pub static LENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)mm").unwrap());

/// Location extraction, tried in order against the original-case command:
/// a prepositional phrase first, then a typed-place compound.
pub static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)(?:in|at|on)\s+(?:a|the|an)?\s*([a-z\s]+?)(?:\s+scene|\s+shot|,|\.|$)")
            .unwrap(),
        Regex::new(r"(?i)([a-z]+\s+street|[a-z]+\s+room|[a-z]+\s+alley|[a-z]+\s+building)")
            .unwrap(),
    ]
});

const DRAMATIC_PALETTE: [&str; 4] = ["#1a1a2e", "#16213e", "#0f3460", "#e94560"];
const ROMANTIC_PALETTE: [&str; 4] = ["#f8b4b4", "#a855f7", "#ec4899", "#fce7f3"];
const MYSTERIOUS_PALETTE: [&str; 4] = ["#0d1b2a", "#1b263b", "#415a77", "#778da9"];
const NOIR_PALETTE: [&str; 4] = ["#000000", "#1a1a1a", "#333333", "#c9a227"];
const SERENE_PALETTE: [&str; 4] = ["#a8dadc", "#457b9d", "#1d3557", "#f1faee"];

/// Four-color grading palette for a capitalized mood label. Moods without a
/// dedicated palette fall back to the dramatic one.
pub fn palette_for_mood(mood: &str) -> [&'static str; 4] {
    match mood {
        "Romantic" => ROMANTIC_PALETTE,
        "Mysterious" => MYSTERIOUS_PALETTE,
        "Noir" => NOIR_PALETTE,
        "Serene" => SERENE_PALETTE,
        _ => DRAMATIC_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_phrases_precede_generic() {
        // "low angle" must be reachable before the bare "low" entry.
        let low_angle = ANGLE_KEYWORDS.iter().position(|(k, _)| *k == "low angle");
        let low = ANGLE_KEYWORDS.iter().position(|(k, _)| *k == "low");
        assert!(low_angle < low);

        let medium_close = FRAMING_KEYWORDS.iter().position(|(k, _)| *k == "medium close");
        let medium = FRAMING_KEYWORDS.iter().position(|(k, _)| *k == "medium");
        assert!(medium_close < medium);
    }

    #[test]
    fn test_weather_leftmost_match() {
        let caps = WEATHER_RE.captures("clear skies after rain").unwrap();
        assert_eq!(&caps[1], "clear");
        assert!(WEATHER_RE.captures("a dry afternoon").is_none());
    }

    #[test]
    fn test_time_respects_word_boundaries() {
        assert!(TIME_OF_DAY_RE.captures("midday traffic").is_none());
        let caps = TIME_OF_DAY_RE.captures("shot at golden hour today").unwrap();
        assert_eq!(&caps[1], "golden hour");
    }

    #[test]
    fn test_palette_fallback() {
        assert_eq!(palette_for_mood("Tense"), DRAMATIC_PALETTE);
        assert_eq!(palette_for_mood("Noir")[3], "#c9a227");
    }
}
