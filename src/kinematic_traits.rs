//! Defines the Kinematics trait shared by all segments of the chain

extern crate nalgebra as na;

use na::{DMatrix, UnitDualQuaternion};
use crate::kinematics_error::KinematicsError;

/// Pose is the pose of a link or of the end effector, expressed as a unit dual quaternion.
/// The real part encodes the rotation, the dual part encodes the translation as
/// `½ t ⊗ real`.
/// ```
/// extern crate nalgebra as na;
/// use na::{Translation3, UnitDualQuaternion, UnitQuaternion, Vector3};
///
/// type Pose = UnitDualQuaternion<f64>;
///
/// let translation = Translation3::new(1.0, 0.0, 0.0);
/// let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.5);
/// let pose = Pose::from_parts(translation, rotation);
/// assert!((pose.translation().vector.x - 1.0).abs() < 1E-12);
/// ```
pub type Pose = UnitDualQuaternion<f64>;

/// Derivative of the pose (as vec8, rows `[w i j k | w i j k]`) with respect to each
/// element of the configuration vector (columns).
pub type PoseJacobian = DMatrix<f64>;

/// Configuration dependent pose evaluation. Implemented by the serial arm, the holonomic
/// base and the whole body chain itself, so chains may be nested.
///
/// Implementations hold no configuration state: the configuration is passed on every call
/// and evaluation does not mutate anything.
pub trait Kinematics: Send + Sync {
    /// Number of elements the configuration vector must have.
    fn dim_configuration_space(&self) -> usize;

    /// Pose of the segment end for the given configuration.
    fn forward(&self, q: &[f64]) -> Result<Pose, KinematicsError>;

    /// Analytic pose Jacobian, 8 rows by `dim_configuration_space()` columns.
    fn pose_jacobian(&self, q: &[f64]) -> Result<PoseJacobian, KinematicsError>;
}
