//! Helper functions

use crate::dual_quaternion::translation;
use crate::kinematic_traits::Pose;

/// Checks if all elements of the configuration are finite
pub fn is_valid(q: &[f64]) -> bool {
    q.iter().all(|&x| x.is_finite())
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(q: &[f64]) {
    println!("{}", format_joints(q));
}

/// Print the pose as translation and roll-pitch-yaw in degrees.
#[allow(dead_code)]
pub fn dump_pose(pose: &Pose) {
    println!("{}", format_pose(pose));
}

pub(crate) fn format_joints(q: &[f64]) -> String {
    let row_str: String = q
        .iter()
        .map(|x| format!("{:5.2} ", x.to_degrees()))
        .collect();
    format!("[{}]", row_str.trim_end())
}

pub(crate) fn format_pose(pose: &Pose) -> String {
    let t = translation(pose);
    let (roll, pitch, yaw) = pose.rotation().euler_angles();
    format!(
        "x: {:.4} y: {:.4} z: {:.4} roll: {:.2} pitch: {:.2} yaw: {:.2}",
        t.x, t.y, t.z,
        roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()
    )
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: &[i32]) -> Vec<f64> {
    degrees.iter().map(|&d| (d as f64).to_radians()).collect()
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", x.to_degrees())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;
    use crate::dual_quaternion::pure_translation;
    use nalgebra::Vector3;

    #[test]
    fn test_is_valid_with_all_finite() {
        let q = [0.0, 1.0, -1.0, 0.5, -0.5, PI];
        assert!(is_valid(&q));
    }

    #[test]
    fn test_is_valid_with_nan() {
        let q = [0.0, f64::NAN, 1.0];
        assert!(!is_valid(&q));
    }

    #[test]
    fn test_is_valid_with_infinity() {
        let q = [0.0, f64::INFINITY, 1.0];
        assert!(!is_valid(&q));
    }

    #[test]
    fn test_as_radians() {
        let q = as_radians(&[0, 90, -180]);
        let expected = [0.0, PI / 2.0, -PI];
        assert_eq!(q.len(), 3);
        for (a, b) in q.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1E-12);
        }
    }

    #[test]
    fn test_format_joints() {
        assert_eq!(format_joints(&[0.0, PI / 2.0]), "[ 0.00 90.00]");
    }

    #[test]
    fn test_format_pose() {
        let pose = pure_translation(Vector3::new(0.0, 0.0, 0.3));
        let text = format_pose(&pose);
        assert!(text.contains("z: 0.3000"), "unexpected: {}", text);
        assert!(text.contains("yaw:"));
    }

    #[test]
    fn test_deg() {
        assert_eq!(deg(&0.0), "0");
        assert_eq!(deg(&PI), "deg(180.0000)");
    }
}
