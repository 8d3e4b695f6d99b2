use nalgebra::Matrix4;

use crate::kinematic_traits::Kinematics;
use crate::parameters::dh::DhParameters;
use crate::serial_manipulator::SerialManipulator;
use crate::tests::test_utils::{assert_translation, dh_standard_matrix, random_arm, rng};

fn youbot_arm() -> SerialManipulator {
    SerialManipulator::new(DhParameters::kuka_youbot_arm())
}

/// Product of the textbook DH matrices for the first `links` joints.
fn reference_matrix(arm: &SerialManipulator, q: &[f64], links: usize) -> Matrix4<f64> {
    arm.parameters()
        .rows()
        .iter()
        .zip(q)
        .take(links)
        .fold(Matrix4::identity(), |acc, (row, &angle)| acc * dh_standard_matrix(row, angle))
}

fn assert_matrix_eq(actual: &Matrix4<f64>, expected: &Matrix4<f64>, tolerance: f64) {
    assert!(
        (actual - expected).abs().max() <= tolerance,
        "Matrices differ:{}{}",
        actual,
        expected
    );
}

#[test]
fn test_zero_configuration_tip() {
    let arm = youbot_arm();
    let q = [0.0; 5];
    let tip = arm.forward(&q).unwrap();

    // Arm stands upright, the wrist offset of the first link is the only sideways shift
    assert_translation(&tip, [0.033, 0.0, 0.655], 1E-9);
    let expected = Matrix4::new(
        -1.0, 0.0, 0.0, 0.033,
        0.0, -1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.655,
        0.0, 0.0, 0.0, 1.0,
    );
    assert_matrix_eq(&tip.to_homogeneous(), &expected, 1E-9);
}

#[test]
fn test_matches_homogeneous_product() {
    let arm = youbot_arm();
    let mut rng = rng();
    for _ in 0..32 {
        let q = random_arm(&mut rng, arm.dim_configuration_space());
        let tip = arm.forward(&q).unwrap();
        assert_matrix_eq(&tip.to_homogeneous(), &reference_matrix(&arm, &q, 5), 1E-9);
    }
}

#[test]
fn test_individual_links() {
    let arm = youbot_arm();
    let mut rng = rng();
    let q = random_arm(&mut rng, 5);
    let links = arm.link_poses(&q).unwrap();
    assert_eq!(links.len(), 5);

    for (i, link) in links.iter().enumerate() {
        assert_matrix_eq(&link.to_homogeneous(), &reference_matrix(&arm, &q, i + 1), 1E-9);
        let partial = arm.forward_to(&q, i + 1).unwrap();
        assert_matrix_eq(&partial.to_homogeneous(), &link.to_homogeneous(), 1E-12);
    }
}

#[test]
fn test_first_link_only_depends_on_first_joint() {
    let arm = youbot_arm();
    let a = arm.forward_to(&[0.4, 0.0, 0.0, 0.0, 0.0], 1).unwrap();
    let b = arm.forward_to(&[0.4, 1.0, -1.0, 2.0, 0.5], 1).unwrap();
    assert_matrix_eq(&a.to_homogeneous(), &b.to_homogeneous(), 1E-12);

    // Joint 1 turns about the vertical axis, so the link height does not change
    assert!((a.to_homogeneous()[(2, 3)] - 0.147).abs() < 1E-12);
}
