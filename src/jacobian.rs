//! Jacobian helpers: numerical pose Jacobian (used to cross-check the analytic ones) and
//! the translation Jacobian derived from a pose Jacobian.

extern crate nalgebra as na;

use na::{DMatrix, Vector4};
use rayon::prelude::*;
use crate::dual_quaternion::{c4, haminus4, hamiplus4, vec8, Vector8};
use crate::kinematic_traits::{Kinematics, Pose, PoseJacobian};
use crate::kinematics_error::{check_dimension, KinematicsError};

/// Function to compute the pose Jacobian by central differences for a given robot and
/// configuration.
///
/// # Arguments
///
/// * `robot` - A reference to the robot implementing the Kinematics trait
/// * `q` - Configuration, must match `robot.dim_configuration_space()`
/// * `epsilon` - A small value used for numerical differentiation
///
/// # Returns
///
/// An 8 x n matrix, same layout as `Kinematics::pose_jacobian`.
pub fn numerical_pose_jacobian<K: Kinematics + ?Sized>(
    robot: &K,
    q: &[f64],
    epsilon: f64,
) -> Result<PoseJacobian, KinematicsError> {
    let n = robot.dim_configuration_space();
    check_dimension(q, n)?;

    // Parallelize the loop using rayon
    let columns: Vec<Vector8> = (0..n)
        .into_par_iter()
        .map(|i| -> Result<Vector8, KinematicsError> {
            let mut ahead = q.to_vec();
            ahead[i] += epsilon;
            let mut behind = q.to_vec();
            behind[i] -= epsilon;
            let ahead = vec8(&*robot.forward(&ahead)?);
            let behind = vec8(&*robot.forward(&behind)?);
            Ok((ahead - behind) / (2.0 * epsilon))
        })
        .collect::<Result<_, KinematicsError>>()?;

    let mut jacobian = PoseJacobian::zeros(8, n);
    for (i, column) in columns.iter().enumerate() {
        jacobian.fixed_view_mut::<8, 1>(0, i).copy_from(column);
    }
    Ok(jacobian)
}

/// Translation Jacobian (4 x n, rows `[0 x y z]`) of the pose `pose` given its pose Jacobian.
///
/// The translation quaternion is `p = 2 D P*`, so
/// `dp = 2 haminus4(P*) dD + 2 hamiplus4(D) C4 dP`.
pub fn translation_jacobian(pose_jacobian: &PoseJacobian, pose: &Pose) -> DMatrix<f64> {
    let n = pose_jacobian.ncols();
    let by_dual = haminus4(&pose.real.conjugate()) * 2.0;
    let by_real = hamiplus4(&pose.dual) * c4() * 2.0;

    let mut jacobian = DMatrix::zeros(4, n);
    for i in 0..n {
        let column = pose_jacobian.column(i);
        let d_real = Vector4::new(column[0], column[1], column[2], column[3]);
        let d_dual = Vector4::new(column[4], column[5], column[6], column[7]);
        let d_translation = by_dual * d_dual + by_real * d_real;
        jacobian.fixed_view_mut::<4, 1>(0, i).copy_from(&d_translation);
    }
    jacobian
}

/// Rotation Jacobian (4 x n), the real part rows of the pose Jacobian.
pub fn rotation_jacobian(pose_jacobian: &PoseJacobian) -> DMatrix<f64> {
    pose_jacobian.rows(0, 4).into_owned()
}
