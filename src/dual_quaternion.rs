//! Dual quaternion helpers on top of nalgebra: pure translations, elementary rotations,
//! vec8 representation and the Hamilton operators used to compose Jacobians.

extern crate nalgebra as na;

use na::{DualQuaternion, Matrix4, Quaternion, SMatrix, SVector, UnitDualQuaternion,
         UnitQuaternion, Vector3, Vector4};
use crate::kinematic_traits::Pose;

pub type Vector8 = SVector<f64, 8>;
pub type Matrix8 = SMatrix<f64, 8, 8>;

/// Tolerance used when checking that a dual quaternion is a rigid transform.
pub const VALIDITY_TOLERANCE: f64 = 1E-9;

/// Builds the pure translation `1 + ε·½·t`. The real part is exactly the identity and the
/// dual part holds half of the offset, as the product algebra doubles it back when composing.
///
/// ```
/// use nalgebra::Vector3;
/// use rs_dq_wholebody::dual_quaternion::pure_translation;
///
/// let effector = pure_translation(Vector3::new(0.0, 0.0, 0.3));
/// assert_eq!(effector.real.w, 1.0);
/// assert_eq!(effector.dual.k, 0.5 * 0.3);
/// ```
pub fn pure_translation(offset: Vector3<f64>) -> Pose {
    UnitDualQuaternion::new_unchecked(DualQuaternion::from_real_and_dual(
        Quaternion::identity(),
        Quaternion::from_imag(offset * 0.5),
    ))
}

/// Rotation about the z axis, without translation.
pub fn rotation_z(angle: f64) -> Pose {
    UnitDualQuaternion::from_rotation(UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle))
}

/// Rotation about the x axis, without translation.
pub fn rotation_x(angle: f64) -> Pose {
    UnitDualQuaternion::from_rotation(UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle))
}

/// Translation along z.
pub fn translation_z(d: f64) -> Pose {
    pure_translation(Vector3::new(0.0, 0.0, d))
}

/// Translation along x.
pub fn translation_x(a: f64) -> Pose {
    pure_translation(Vector3::new(a, 0.0, 0.0))
}

/// The translation encoded in the pose, `2 · dual ⊗ real*`.
pub fn translation(pose: &Pose) -> Vector3<f64> {
    (pose.dual * pose.real.conjugate()).imag() * 2.0
}

/// True if the real part has unit norm and the dual part is orthogonal to it
/// (the dual quaternion is a rigid body transform).
pub fn is_rigid_transform(dq: &DualQuaternion<f64>, tolerance: f64) -> bool {
    (dq.real.norm() - 1.0).abs() <= tolerance && dq.real.dot(&dq.dual).abs() <= tolerance
}

/// True if the real part is exactly the identity rotation (bitwise, no tolerance).
pub fn has_identity_rotation(dq: &DualQuaternion<f64>) -> bool {
    dq.real == Quaternion::identity()
}

/// Coefficients as `[w i j k]` of the real part followed by `[w i j k]` of the dual part.
pub fn vec8(dq: &DualQuaternion<f64>) -> Vector8 {
    Vector8::from_column_slice(&[
        dq.real.w, dq.real.i, dq.real.j, dq.real.k,
        dq.dual.w, dq.dual.i, dq.dual.j, dq.dual.k,
    ])
}

/// Inverse of `vec8`.
pub fn from_vec8(v: &Vector8) -> DualQuaternion<f64> {
    DualQuaternion::from_real_and_dual(
        Quaternion::new(v[0], v[1], v[2], v[3]),
        Quaternion::new(v[4], v[5], v[6], v[7]),
    )
}

/// Left Hamilton operator: `vec4(a ⊗ b) = hamiplus4(a) · vec4(b)`.
pub fn hamiplus4(a: &Quaternion<f64>) -> Matrix4<f64> {
    Matrix4::new(
        a.w, -a.i, -a.j, -a.k,
        a.i, a.w, -a.k, a.j,
        a.j, a.k, a.w, -a.i,
        a.k, -a.j, a.i, a.w,
    )
}

/// Right Hamilton operator: `vec4(a ⊗ b) = haminus4(b) · vec4(a)`.
pub fn haminus4(b: &Quaternion<f64>) -> Matrix4<f64> {
    Matrix4::new(
        b.w, -b.i, -b.j, -b.k,
        b.i, b.w, b.k, -b.j,
        b.j, -b.k, b.w, b.i,
        b.k, b.j, -b.i, b.w,
    )
}

/// Left Hamilton operator for dual quaternions: `vec8(a ⊗ b) = hamiplus8(a) · vec8(b)`.
pub fn hamiplus8(a: &DualQuaternion<f64>) -> Matrix8 {
    let primary = hamiplus4(&a.real);
    let dual = hamiplus4(&a.dual);
    block_lower_triangular(&primary, &dual)
}

/// Right Hamilton operator for dual quaternions: `vec8(a ⊗ b) = haminus8(b) · vec8(a)`.
pub fn haminus8(b: &DualQuaternion<f64>) -> Matrix8 {
    let primary = haminus4(&b.real);
    let dual = haminus4(&b.dual);
    block_lower_triangular(&primary, &dual)
}

/// `[[P, 0], [D, P]]`
fn block_lower_triangular(primary: &Matrix4<f64>, dual: &Matrix4<f64>) -> Matrix8 {
    let mut m = Matrix8::zeros();
    m.fixed_view_mut::<4, 4>(0, 0).copy_from(primary);
    m.fixed_view_mut::<4, 4>(4, 0).copy_from(dual);
    m.fixed_view_mut::<4, 4>(4, 4).copy_from(primary);
    m
}

/// Conjugation matrix for quaternions: `vec4(q*) = C4 · vec4(q)`.
pub(crate) fn c4() -> Matrix4<f64> {
    Matrix4::from_diagonal(&Vector4::new(1.0, -1.0, -1.0, -1.0))
}
