//! Forward kinematics of a serial arm described by a Denavit-Hartenberg table

use nalgebra::{DualQuaternion, Quaternion};
use crate::dual_quaternion::{rotation_x, rotation_z, translation_x, translation_z, vec8};
use crate::kinematic_traits::{Kinematics, Pose, PoseJacobian};
use crate::kinematics_error::{check_dimension, KinematicsError};
use crate::parameters::dh::{DhConvention, DhParameters, DhRow};

/// Serial chain of revolute joints. Holds only the parameter table; the joint angles are
/// passed on every call.
///
/// ```
/// use rs_dq_wholebody::kinematic_traits::Kinematics;
/// use rs_dq_wholebody::parameters::dh::DhParameters;
/// use rs_dq_wholebody::serial_manipulator::SerialManipulator;
///
/// let arm = SerialManipulator::new(DhParameters::kuka_youbot_arm());
/// assert_eq!(arm.dim_configuration_space(), 5);
///
/// let pose = arm.forward(&[0.0, 0.1, 0.2, 0.3, 0.4]).unwrap();
/// assert!(arm.forward(&[0.0; 4]).is_err()); // Wrong number of joints
/// println!("Arm tip: {:?}", pose.translation());
/// ```
#[derive(Debug, Clone)]
pub struct SerialManipulator {
    parameters: DhParameters,
}

impl SerialManipulator {
    pub fn new(parameters: DhParameters) -> Self {
        SerialManipulator { parameters }
    }

    pub fn parameters(&self) -> &DhParameters {
        &self.parameters
    }

    /// Pose of the link `to_link` (1-based, `to_link == dof` gives the tip) for the given
    /// joint angles. Only the first `to_link` angles are used, but the full configuration
    /// must still be supplied.
    pub fn forward_to(&self, q: &[f64], to_link: usize) -> Result<Pose, KinematicsError> {
        check_dimension(q, self.parameters.dof())?;
        if to_link > self.parameters.dof() {
            return Err(KinematicsError::SegmentOutOfRange {
                index: to_link,
                count: self.parameters.dof(),
            });
        }
        Ok(self.compose(q, to_link))
    }

    /// Poses of all links, the last one being the tip.
    pub fn link_poses(&self, q: &[f64]) -> Result<Vec<Pose>, KinematicsError> {
        check_dimension(q, self.parameters.dof())?;
        let mut pose = Pose::identity();
        Ok(self
            .parameters
            .rows()
            .iter()
            .zip(q.iter())
            .map(|(row, &angle)| {
                pose = pose * self.joint_pose(row, angle);
                pose
            })
            .collect())
    }

    fn compose(&self, q: &[f64], to_link: usize) -> Pose {
        self.parameters
            .rows()
            .iter()
            .zip(q.iter())
            .take(to_link)
            .fold(Pose::identity(), |pose, (row, &angle)| pose * self.joint_pose(row, angle))
    }

    /// Local pose of the joint for the given angle.
    fn joint_pose(&self, row: &DhRow, angle: f64) -> Pose {
        match self.parameters.convention() {
            DhConvention::Standard => {
                rotation_z(row.theta + angle) * translation_z(row.d)
                    * translation_x(row.a) * rotation_x(row.alpha)
            }
            DhConvention::Modified => {
                rotation_x(row.alpha) * translation_x(row.a)
                    * rotation_z(row.theta + angle) * translation_z(row.d)
            }
        }
    }

    /// Derivative of the local joint pose with respect to the joint angle. The angle enters
    /// only through `Rz`, whose derivative is `½ k̂ ⊗ Rz`.
    fn joint_pose_derivative(&self, row: &DhRow, angle: f64) -> DualQuaternion<f64> {
        let half_k = DualQuaternion::from_real_and_dual(
            Quaternion::new(0.0, 0.0, 0.0, 0.5),
            Quaternion::new(0.0, 0.0, 0.0, 0.0),
        );
        match self.parameters.convention() {
            DhConvention::Standard => half_k * self.joint_pose(row, angle).into_inner(),
            DhConvention::Modified => {
                let before = rotation_x(row.alpha) * translation_x(row.a);
                let after = rotation_z(row.theta + angle) * translation_z(row.d);
                before.into_inner() * half_k * after.into_inner()
            }
        }
    }
}

impl Kinematics for SerialManipulator {
    fn dim_configuration_space(&self) -> usize {
        self.parameters.dof()
    }

    fn forward(&self, q: &[f64]) -> Result<Pose, KinematicsError> {
        check_dimension(q, self.parameters.dof())?;
        Ok(self.compose(q, self.parameters.dof()))
    }

    fn pose_jacobian(&self, q: &[f64]) -> Result<PoseJacobian, KinematicsError> {
        check_dimension(q, self.parameters.dof())?;
        let rows = self.parameters.rows();
        let local: Vec<Pose> = rows
            .iter()
            .zip(q.iter())
            .map(|(row, &angle)| self.joint_pose(row, angle))
            .collect();

        let mut jacobian = PoseJacobian::zeros(8, rows.len());
        let mut before = Pose::identity();
        for (i, (row, &angle)) in rows.iter().zip(q.iter()).enumerate() {
            let after = local[i + 1..]
                .iter()
                .fold(Pose::identity(), |pose, joint| pose * *joint);
            let column = before.into_inner()
                * self.joint_pose_derivative(row, angle)
                * after.into_inner();
            jacobian.fixed_view_mut::<8, 1>(0, i).copy_from(&vec8(&column));
            before = before * local[i];
        }
        Ok(jacobian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{UnitQuaternion, Vector3};
    use std::f64::consts::PI;
    use crate::dual_quaternion::translation;
    use crate::jacobian::numerical_pose_jacobian;

    const SMALL: f64 = 1E-9;

    fn single_joint(row: DhRow, convention: DhConvention) -> SerialManipulator {
        SerialManipulator::new(DhParameters::new(vec![row], convention))
    }

    #[test]
    fn test_single_link_reaches_along_x() {
        let arm = single_joint(DhRow::new(0.0, 0.0, 1.0, 0.0), DhConvention::Standard);
        let tip = translation(&arm.forward(&[0.0]).unwrap());
        assert!((tip - Vector3::new(1.0, 0.0, 0.0)).norm() < SMALL);

        // Rotating the joint 90 degrees swings the link to y
        let tip = translation(&arm.forward(&[PI / 2.0]).unwrap());
        assert!((tip - Vector3::new(0.0, 1.0, 0.0)).norm() < SMALL);
    }

    #[test]
    fn test_link_offset_along_joint_axis() {
        let arm = single_joint(DhRow::new(0.0, 0.5, 0.0, 0.0), DhConvention::Standard);
        let pose = arm.forward(&[1.2]).unwrap();
        assert!((translation(&pose) - Vector3::new(0.0, 0.0, 0.5)).norm() < SMALL);
        let expected = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 1.2);
        assert!(pose.rotation().angle_to(&expected) < 1E-6);
    }

    #[test]
    fn test_angle_offset_adds_to_joint() {
        let arm = single_joint(DhRow::new(0.0, 0.0, 1.0, PI / 2.0), DhConvention::Standard);
        let tip = translation(&arm.forward(&[-PI / 2.0]).unwrap());
        assert!((tip - Vector3::new(1.0, 0.0, 0.0)).norm() < SMALL);
    }

    #[test]
    fn test_modified_convention_twists_first() {
        // Twist of 90 degrees about x before the joint: joint axis becomes -y
        let arm = single_joint(DhRow::new(PI / 2.0, 0.3, 0.2, 0.0), DhConvention::Modified);
        let tip = translation(&arm.forward(&[0.0]).unwrap());
        assert!((tip - Vector3::new(0.2, -0.3, 0.0)).norm() < SMALL);

        let standard = single_joint(DhRow::new(PI / 2.0, 0.3, 0.2, 0.0), DhConvention::Standard);
        let tip = translation(&standard.forward(&[0.0]).unwrap());
        assert!((tip - Vector3::new(0.2, 0.0, 0.3)).norm() < SMALL);
    }

    #[test]
    fn test_dimension_mismatch() {
        let arm = SerialManipulator::new(DhParameters::kuka_youbot_arm());
        assert_eq!(
            arm.forward(&[0.0; 4]).unwrap_err(),
            KinematicsError::DimensionMismatch { expected: 5, found: 4 }
        );
        assert_eq!(
            arm.pose_jacobian(&[0.0; 6]).unwrap_err(),
            KinematicsError::DimensionMismatch { expected: 5, found: 6 }
        );
        assert!(arm.link_poses(&[]).is_err());
    }

    #[test]
    fn test_link_poses_end_at_tip() {
        let arm = SerialManipulator::new(DhParameters::kuka_youbot_arm());
        let q = [0.3, -0.2, 0.5, 0.1, -0.7];
        let poses = arm.link_poses(&q).unwrap();
        assert_eq!(poses.len(), 5);
        let tip = arm.forward(&q).unwrap();
        assert!((vec8(&poses[4]) - vec8(&tip)).norm() < SMALL);
        for (i, pose) in poses.iter().enumerate() {
            let partial = arm.forward_to(&q, i + 1).unwrap();
            assert!((vec8(pose) - vec8(&partial)).norm() < SMALL);
        }
    }

    #[test]
    fn test_forward_to_out_of_range() {
        let arm = SerialManipulator::new(DhParameters::kuka_youbot_arm());
        assert_eq!(
            arm.forward_to(&[0.0; 5], 6).unwrap_err(),
            KinematicsError::SegmentOutOfRange { index: 6, count: 5 }
        );
        let base = arm.forward_to(&[0.0; 5], 0).unwrap();
        assert!((vec8(&base) - vec8(&Pose::identity())).norm() < SMALL);
    }

    #[test]
    fn test_jacobian_matches_numerical() {
        for convention in [DhConvention::Standard, DhConvention::Modified] {
            let rows = DhParameters::kuka_youbot_arm().rows().to_vec();
            let arm = SerialManipulator::new(DhParameters::new(rows, convention));
            let q = [0.4, -1.1, 0.7, 0.2, 1.5];
            let analytic = arm.pose_jacobian(&q).unwrap();
            let numerical = numerical_pose_jacobian(&arm, &q, 1E-6).unwrap();
            assert_eq!(analytic.shape(), (8, 5));
            assert!((analytic - numerical).norm() < 1E-6, "{:?}", convention);
        }
    }
}
