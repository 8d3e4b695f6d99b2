//! Planar holonomic base. The base can translate in x and y and rotate about z
//! independently; its configuration is `(x, y, φ)`.
//!
//! The frame displacement moves the reference frame of the base from its geometric
//! center to where the next segment (typically the arm) is mounted. It is composed on
//! the right of the raw base pose for every evaluation.
//!
//! ```
//! use nalgebra::Vector3;
//! use rs_dq_wholebody::dual_quaternion::{pure_translation, translation};
//! use rs_dq_wholebody::holonomic_base::HolonomicBase;
//! use rs_dq_wholebody::kinematic_traits::Kinematics;
//!
//! // Arm is mounted 20 cm in front of the base center, 10 cm up
//! let base = HolonomicBase::new()
//!     .with_frame_displacement(pure_translation(Vector3::new(0.2, 0.0, 0.1)));
//!
//! // Base driven 1 m along x, not rotated
//! let mount = base.forward(&[1.0, 0.0, 0.0]).unwrap();
//! assert!((translation(&mount) - Vector3::new(1.2, 0.0, 0.1)).norm() < 1E-12);
//! ```

use nalgebra::{DualQuaternion, Quaternion, Translation3, UnitQuaternion, Vector3};
use crate::dual_quaternion::vec8;
use crate::kinematic_traits::{Kinematics, Pose, PoseJacobian};
use crate::kinematics_error::{check_dimension, KinematicsError};

/// Number of configuration elements: x, y and heading.
pub const BASE_DOF: usize = 3;

/// Holonomic base with a constant frame displacement (identity unless set).
#[derive(Debug, Clone, Copy)]
pub struct HolonomicBase {
    frame_displacement: Pose,
}

impl Default for HolonomicBase {
    fn default() -> Self {
        HolonomicBase::new()
    }
}

impl HolonomicBase {
    pub fn new() -> Self {
        HolonomicBase { frame_displacement: Pose::identity() }
    }

    /// Returns the base with the frame displacement replaced. Set once while building the
    /// robot model, before the base is referenced by any chain.
    pub fn with_frame_displacement(self, frame_displacement: Pose) -> Self {
        HolonomicBase { frame_displacement }
    }

    pub fn frame_displacement(&self) -> Pose {
        self.frame_displacement
    }

    /// Pose of the base geometric center, `T(x, y, 0) ⊗ Rz(φ)`, without the frame displacement.
    pub fn raw_forward(&self, q: &[f64]) -> Result<Pose, KinematicsError> {
        check_dimension(q, BASE_DOF)?;
        Ok(Self::planar_pose(q[0], q[1], q[2]))
    }

    fn planar_pose(x: f64, y: f64, phi: f64) -> Pose {
        Pose::from_parts(
            Translation3::new(x, y, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), phi),
        )
    }
}

impl Kinematics for HolonomicBase {
    fn dim_configuration_space(&self) -> usize {
        BASE_DOF
    }

    fn forward(&self, q: &[f64]) -> Result<Pose, KinematicsError> {
        Ok(self.raw_forward(q)? * self.frame_displacement)
    }

    fn pose_jacobian(&self, q: &[f64]) -> Result<PoseJacobian, KinematicsError> {
        check_dimension(q, BASE_DOF)?;
        let (x, y, phi) = (q[0], q[1], q[2]);
        let pose = self.forward(q)?.into_inner();
        let displacement = self.frame_displacement.into_inner();

        // Translations enter on the left: d/dx = ½ε î ⊗ pose, d/dy = ½ε ĵ ⊗ pose
        let half_epsilon = |imag: Vector3<f64>| {
            DualQuaternion::from_real_and_dual(
                Quaternion::new(0.0, 0.0, 0.0, 0.0),
                Quaternion::from_imag(imag * 0.5),
            )
        };
        let d_x = half_epsilon(Vector3::x()) * pose;
        let d_y = half_epsilon(Vector3::y()) * pose;

        // Heading: T ⊗ (½ k̂ ⊗ Rz) ⊗ displacement
        let half_k = DualQuaternion::from_real_and_dual(
            Quaternion::new(0.0, 0.0, 0.0, 0.5),
            Quaternion::new(0.0, 0.0, 0.0, 0.0),
        );
        let planar = Self::planar_pose(x, y, 0.0).into_inner();
        let heading = Self::planar_pose(0.0, 0.0, phi).into_inner();
        let d_phi = planar * half_k * heading * displacement;

        let mut jacobian = PoseJacobian::zeros(8, BASE_DOF);
        for (i, column) in [d_x, d_y, d_phi].iter().enumerate() {
            jacobian.fixed_view_mut::<8, 1>(0, i).copy_from(&vec8(column));
        }
        Ok(jacobian)
    }
}
