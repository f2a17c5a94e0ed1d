//! Parametric camera path synthesis.
//!
//! A path is classified from the command text and movement label, then
//! sampled at a fixed resolution of 21 points (t = i/20). The first and last
//! samples coincide with the start and end positions for every movement
//! type.

use std::f64::consts::PI;

use cine_models::{CameraPath, MovementType, PathSpeed, ShotPlan, Vec3};

/// Number of segments between samples; points run 0..=PATH_SEGMENTS.
const PATH_SEGMENTS: usize = 20;

/// Orbit distance from the subject.
const ORBIT_RADIUS: f64 = 5.0;

/// Fallback playback duration in seconds.
const DEFAULT_DURATION_SECS: f64 = 5.0;

/// Derive the camera path for a shot plan.
pub fn generate_path(plan: &ShotPlan) -> CameraPath {
    let command = plan.command.to_lowercase();
    let movement = plan.camera.movement.to_lowercase();

    let movement_type = classify_movement(&command, &movement);
    let speed = classify_speed(&command);
    let direction = classify_direction(&command);
    let (start, end, points) = sample_path(movement_type, direction);

    CameraPath {
        shot_plan_id: plan.id.clone(),
        movement_type,
        speed,
        direction: direction.to_string(),
        radius: (movement_type == MovementType::Orbit).then_some(ORBIT_RADIUS),
        start_position: start,
        end_position: end,
        path_points: points,
        duration: parse_duration_seconds(&plan.duration),
    }
}

/// Movement classification, by keyword priority: orbit beats crane beats
/// tracking beats dolly. Both the command text and the movement label are
/// consulted.
fn classify_movement(command: &str, movement: &str) -> MovementType {
    if command.contains("orbit") || movement.contains("orbit") {
        MovementType::Orbit
    } else if command.contains("crane") || movement.contains("crane") {
        MovementType::Crane
    } else if command.contains("track") || movement.contains("track") || movement.contains("follow")
    {
        MovementType::Tracking
    } else {
        // Dolly also covers push/pull phrasing and is the overall default.
        MovementType::Dolly
    }
}

fn classify_speed(command: &str) -> PathSpeed {
    if command.contains("slow") || command.contains("gentle") {
        PathSpeed::Slow
    } else if command.contains("fast") || command.contains("quick") || command.contains("rapid") {
        PathSpeed::Fast
    } else {
        PathSpeed::Medium
    }
}

fn classify_direction(command: &str) -> &'static str {
    if command.contains("backward") || command.contains("pull out") || command.contains("pull back")
    {
        "backward"
    } else if command.contains("left") {
        "left"
    } else if command.contains("right") {
        "right"
    } else if command.contains("up") || command.contains("rise") {
        "up"
    } else if command.contains("down") || command.contains("descend") {
        "down"
    } else {
        "forward"
    }
}

fn sample_path(movement_type: MovementType, direction: &str) -> (Vec3, Vec3, Vec<Vec3>) {
    match movement_type {
        MovementType::Dolly => {
            let (start_z, end_z) = if direction == "backward" { (3.0, 8.0) } else { (8.0, 3.0) };
            let start = Vec3::new(0.0, 1.5, start_z);
            let end = Vec3::new(0.0, 1.5, end_z);
            let points = sample(|t| start.lerp(&end, t));
            (start, end, points)
        }
        MovementType::Tracking => {
            let (start_x, end_x) = match direction {
                "left" => (5.0, -5.0),
                "right" => (-5.0, 5.0),
                _ => (0.0, 0.0),
            };
            let start = Vec3::new(start_x, 1.5, 5.0);
            let end = Vec3::new(end_x, 1.5, 5.0);
            // Lateral line with a slight bow in depth.
            let points = sample(|t| {
                Vec3::new(
                    start.x + (end.x - start.x) * t,
                    start.y,
                    start.z + (t * PI).sin() * 0.5,
                )
            });
            (start, end, points)
        }
        MovementType::Orbit => {
            let (start_angle, end_angle) = if direction == "left" { (0.0, PI) } else { (PI, 0.0) };
            let at = |angle: f64| {
                Vec3::new(angle.cos() * ORBIT_RADIUS, 2.0, angle.sin() * ORBIT_RADIUS)
            };
            let start = at(start_angle);
            let end = at(end_angle);
            let points = sample(|t| at(start_angle + (end_angle - start_angle) * t));
            (start, end, points)
        }
        MovementType::Crane => {
            let (start_y, end_y) = if direction == "down" { (6.0, 1.0) } else { (1.0, 6.0) };
            let start = Vec3::new(0.0, start_y, 5.0);
            let end = Vec3::new(0.0, end_y, 4.0);
            // Vertical travel is smoothstep-eased rather than linear.
            let points = sample(|t| {
                let eased = t * t * (3.0 - 2.0 * t);
                Vec3::new(
                    0.0,
                    start.y + (end.y - start.y) * eased,
                    start.z + (end.z - start.z) * eased,
                )
            });
            (start, end, points)
        }
    }
}

fn sample(f: impl Fn(f64) -> Vec3) -> Vec<Vec3> {
    (0..=PATH_SEGMENTS)
        .map(|i| f(i as f64 / PATH_SEGMENTS as f64))
        .collect()
}

/// Seconds parsed from a duration label like "8-12 seconds".
///
/// Every character that is not an ASCII digit or a dot is stripped before
/// parsing, so a range collapses into a single number ("3-5" reads as 35).
/// Empty, unparseable or zero results fall back to the default.
fn parse_duration_seconds(label: &str) -> f64 {
    let cleaned: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match leading_float(&cleaned) {
        Some(value) if value != 0.0 => value,
        _ => DEFAULT_DURATION_SECS,
    }
}

/// Longest numeric prefix (digits with at most one dot), if any.
fn leading_float(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for c in s.chars() {
        match c {
            '0'..='9' => end += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    s[..end].parse().ok()
}

/// Camera position at normalized playback progress, by piecewise-linear
/// interpolation between the two bracketing samples. Degenerate paths are
/// handled explicitly: an empty path returns the start position and a
/// single-sample path returns that sample.
pub fn position_at_progress(path: &CameraPath, progress: f64) -> Vec3 {
    let points = &path.path_points;
    if points.is_empty() {
        return path.start_position;
    }
    if points.len() == 1 {
        return points[0];
    }

    let scaled = progress.clamp(0.0, 1.0) * (points.len() - 1) as f64;
    let index = scaled.floor() as usize;
    let next = (index + 1).min(points.len() - 1);
    let local = scaled - index as f64;
    points[index].lerp(&points[next], local)
}

/// Look-at point for path playback. The subject is treated as stationary
/// near the world origin, so every movement type shares a fixed target.
pub fn look_at_target(_path: &CameraPath) -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_interpreter::interpret;

    const EPS: f64 = 1e-9;

    fn path_for(command: &str) -> CameraPath {
        generate_path(&interpret(command))
    }

    #[test]
    fn test_all_movement_types_sample_21_points() {
        for command in ["dolly in", "track left", "orbit the subject", "crane up"] {
            let path = path_for(command);
            assert_eq!(path.path_points.len(), 21, "command: {command}");
            assert!(path.path_points[0].approx_eq(&path.start_position, EPS));
            assert!(path.path_points[20].approx_eq(&path.end_position, EPS));
        }
    }

    #[test]
    fn test_classification_priority() {
        assert_eq!(path_for("orbit crane track dolly").movement_type, MovementType::Orbit);
        assert_eq!(path_for("crane track dolly").movement_type, MovementType::Crane);
        assert_eq!(path_for("track dolly").movement_type, MovementType::Tracking);
        assert_eq!(path_for("dolly").movement_type, MovementType::Dolly);
        // The movement label is consulted too: "follow" interprets as
        // Follow/Tracking, which classifies as tracking.
        assert_eq!(path_for("follow the actor").movement_type, MovementType::Tracking);
        // No movement keyword at all defaults to dolly.
        assert_eq!(path_for("").movement_type, MovementType::Dolly);
    }

    #[test]
    fn test_speed_classification() {
        assert_eq!(path_for("slow dolly").speed, PathSpeed::Slow);
        assert_eq!(path_for("gentle drift").speed, PathSpeed::Slow);
        assert_eq!(path_for("rapid push").speed, PathSpeed::Fast);
        assert_eq!(path_for("dolly in").speed, PathSpeed::Medium);
    }

    #[test]
    fn test_dolly_geometry() {
        let forward = path_for("dolly toward subject");
        assert!(forward.start_position.approx_eq(&Vec3::new(0.0, 1.5, 8.0), EPS));
        assert!(forward.end_position.approx_eq(&Vec3::new(0.0, 1.5, 3.0), EPS));
        assert_eq!(forward.radius, None);

        let backward = path_for("dolly backward");
        assert!(backward.start_position.approx_eq(&Vec3::new(0.0, 1.5, 3.0), EPS));
        assert!(backward.end_position.approx_eq(&Vec3::new(0.0, 1.5, 8.0), EPS));
    }

    #[test]
    fn test_tracking_bow() {
        let path = path_for("track right");
        assert!(path.start_position.approx_eq(&Vec3::new(-5.0, 1.5, 5.0), EPS));
        assert!(path.end_position.approx_eq(&Vec3::new(5.0, 1.5, 5.0), EPS));
        // Depth bows out by sin(t*pi) * 0.5, peaking mid-path.
        assert!((path.path_points[10].z - 5.5).abs() < 1e-9);
        // The trig perturbation leaves a sub-epsilon residue at the end.
        assert!(path.path_points[20].approx_eq(&path.end_position, 1e-9));
    }

    #[test]
    fn test_orbit_stays_on_circle() {
        let path = path_for("orbit around the statue");
        assert_eq!(path.radius, Some(5.0));
        for point in &path.path_points {
            let r2 = point.x * point.x + point.z * point.z;
            assert!((r2 - 25.0).abs() < 1e-9);
            assert_eq!(point.y, 2.0);
        }
    }

    #[test]
    fn test_orbit_direction_sets_sweep() {
        let left = path_for("orbit left");
        assert!(left.start_position.approx_eq(&Vec3::new(5.0, 2.0, 0.0), EPS));
        assert!(left.end_position.approx_eq(&Vec3::new(-5.0, 2.0, 0.0), EPS));

        let default = path_for("orbit");
        assert!(default.start_position.approx_eq(&Vec3::new(-5.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn test_crane_easing() {
        let path = path_for("crane rise");
        assert!(path.start_position.approx_eq(&Vec3::new(0.0, 1.0, 5.0), EPS));
        assert!(path.end_position.approx_eq(&Vec3::new(0.0, 6.0, 4.0), EPS));
        // Smoothstep at t = 0.25 is 0.15625, well short of linear.
        let quarter = path.path_points[5];
        assert!((quarter.y - (1.0 + 5.0 * 0.15625)).abs() < 1e-9);
        assert!((quarter.z - (5.0 - 1.0 * 0.15625)).abs() < 1e-9);
    }

    #[test]
    fn test_duration_parsing() {
        // Range labels collapse to one number once the dash is stripped.
        let static_plan = interpret("static portrait");
        assert_eq!(static_plan.duration, "3-5 seconds");
        assert_eq!(generate_path(&static_plan).duration, 35.0);

        let moving_plan = interpret("dolly in");
        assert_eq!(generate_path(&moving_plan).duration, 812.0);
    }

    #[test]
    fn test_duration_fallback() {
        let mut plan = interpret("dolly in");
        plan.duration = "brief".to_string();
        assert_eq!(generate_path(&plan).duration, 5.0);
        plan.duration = "0 seconds".to_string();
        assert_eq!(generate_path(&plan).duration, 5.0);
        plan.duration = "2.5 seconds".to_string();
        assert_eq!(generate_path(&plan).duration, 2.5);
    }

    #[test]
    fn test_position_at_progress_endpoints() {
        let path = path_for("dolly in");
        assert!(position_at_progress(&path, 0.0).approx_eq(&path.start_position, EPS));
        assert!(position_at_progress(&path, 1.0).approx_eq(&path.end_position, EPS));
        // Midway down the dolly line.
        let mid = position_at_progress(&path, 0.5);
        assert!(mid.approx_eq(&Vec3::new(0.0, 1.5, 5.5), EPS));
    }

    #[test]
    fn test_position_at_progress_degenerate_paths() {
        let mut path = path_for("dolly in");
        path.path_points = vec![Vec3::new(0.0, 1.5, 5.0)];
        assert_eq!(position_at_progress(&path, 0.7), Vec3::new(0.0, 1.5, 5.0));

        path.path_points.clear();
        assert_eq!(position_at_progress(&path, 0.7), path.start_position);
    }

    #[test]
    fn test_look_at_is_fixed() {
        let dolly = path_for("dolly in");
        let orbit = path_for("orbit left");
        assert_eq!(look_at_target(&dolly), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(look_at_target(&orbit), Vec3::new(0.0, 1.0, 0.0));
    }
}
