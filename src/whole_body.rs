//! Composite kinematic chain: segments (mobile base, arm, ...) evaluated one after another
//! and composed into a single pose, followed by a fixed end-effector offset.
//!
//! The chain borrows its segments; the same segment may be used by several chains, and a
//! chain cannot outlive the segments it refers to. Once built, the chain is immutable.
//!
//! ```
//! use nalgebra::Vector3;
//! use rs_dq_wholebody::dual_quaternion::{pure_translation, translation};
//! use rs_dq_wholebody::holonomic_base::HolonomicBase;
//! use rs_dq_wholebody::kinematic_traits::Kinematics;
//! use rs_dq_wholebody::parameters::dh::DhParameters;
//! use rs_dq_wholebody::serial_manipulator::SerialManipulator;
//! use rs_dq_wholebody::whole_body::WholeBodyBuilder;
//!
//! let base = HolonomicBase::new()
//!     .with_frame_displacement(pure_translation(Vector3::new(0.165, 0.0, 0.11)));
//! let arm = SerialManipulator::new(DhParameters::kuka_youbot_arm());
//!
//! let robot = WholeBodyBuilder::new(&base)
//!     .add(&arm)
//!     .effector(pure_translation(Vector3::new(0.0, 0.0, 0.3)))
//!     .build();
//!
//! // Base (x, y, heading) followed by 5 arm joints
//! assert_eq!(robot.dim_configuration_space(), 8);
//! let tcp = robot.forward(&[1.0, 0.5, 0.0, 0.0, 0.2, -0.4, 0.3, 0.0]).unwrap();
//! println!("Gripper at: {:?}", translation(&tcp));
//! ```

use tracing::debug;
use crate::dual_quaternion::{haminus8, hamiplus8, Vector8};
use crate::kinematic_traits::{Kinematics, Pose, PoseJacobian};
use crate::kinematics_error::{check_dimension, KinematicsError};

/// Immutable chain of borrowed segments with an owned end-effector offset.
#[derive(Clone)]
pub struct WholeBody<'a> {
    chain: Vec<&'a dyn Kinematics>,
    effector: Pose,
}

/// Collects the segments in chain order and the effector offset, then freezes them into a
/// `WholeBody`.
pub struct WholeBodyBuilder<'a> {
    chain: Vec<&'a dyn Kinematics>,
    effector: Pose,
}

impl<'a> WholeBodyBuilder<'a> {
    /// Starts the chain with its most upstream segment (usually the mobile base).
    pub fn new(first: &'a dyn Kinematics) -> Self {
        WholeBodyBuilder {
            chain: vec![first],
            effector: Pose::identity(),
        }
    }

    /// Appends the segment mounted on the end of the current last segment.
    pub fn add(mut self, segment: &'a dyn Kinematics) -> Self {
        self.chain.push(segment);
        self
    }

    /// Fixed offset from the end of the last segment to the point of interest (tool tip).
    pub fn effector(mut self, effector: Pose) -> Self {
        self.effector = effector;
        self
    }

    pub fn build(self) -> WholeBody<'a> {
        debug!(
            segments = self.chain.len(),
            dofs = ?self.chain.iter().map(|s| s.dim_configuration_space()).collect::<Vec<_>>(),
            "whole body chain assembled"
        );
        WholeBody {
            chain: self.chain,
            effector: self.effector,
        }
    }
}

impl<'a> WholeBody<'a> {
    pub fn segment_count(&self) -> usize {
        self.chain.len()
    }

    pub fn segment(&self, index: usize) -> Option<&'a dyn Kinematics> {
        self.chain.get(index).copied()
    }

    pub fn effector(&self) -> Pose {
        self.effector
    }

    /// Splits the full configuration into the part each segment consumes.
    fn split<'q>(&self, q: &'q [f64]) -> Result<Vec<&'q [f64]>, KinematicsError> {
        check_dimension(q, self.dim_configuration_space())?;
        let mut rest = q;
        Ok(self
            .chain
            .iter()
            .map(|segment| {
                let (head, tail) = rest.split_at(segment.dim_configuration_space());
                rest = tail;
                head
            })
            .collect())
    }

    /// Pose at the end of segment `index` (0-based), without the effector offset.
    /// The full configuration must be supplied.
    pub fn forward_to_segment(&self, q: &[f64], index: usize) -> Result<Pose, KinematicsError> {
        if index >= self.chain.len() {
            return Err(KinematicsError::SegmentOutOfRange {
                index,
                count: self.chain.len(),
            });
        }
        let parts = self.split(q)?;
        self.chain
            .iter()
            .zip(parts)
            .take(index + 1)
            .try_fold(Pose::identity(), |pose, (segment, part)| {
                Ok(pose * segment.forward(part)?)
            })
    }
}

impl Kinematics for WholeBody<'_> {
    fn dim_configuration_space(&self) -> usize {
        self.chain.iter().map(|s| s.dim_configuration_space()).sum()
    }

    /// `pose(s1, q1) ⊗ pose(s2, q2) ⊗ ... ⊗ effector`, strictly in chain order.
    fn forward(&self, q: &[f64]) -> Result<Pose, KinematicsError> {
        let parts = self.split(q)?;
        let mut pose = Pose::identity();
        for (segment, part) in self.chain.iter().zip(parts) {
            pose = pose * segment.forward(part)?;
        }
        Ok(pose * self.effector)
    }

    /// Columns of segment i are `hamiplus8(before) · haminus8(after) · J_i`, where `before`
    /// is the product of upstream segment poses and `after` the product of downstream
    /// segment poses and the effector.
    fn pose_jacobian(&self, q: &[f64]) -> Result<PoseJacobian, KinematicsError> {
        let parts = self.split(q)?;
        let poses = self
            .chain
            .iter()
            .zip(parts.iter())
            .map(|(segment, part)| segment.forward(part))
            .collect::<Result<Vec<Pose>, KinematicsError>>()?;

        let mut jacobian = PoseJacobian::zeros(8, q.len());
        let mut before = Pose::identity();
        let mut column = 0;
        for (i, (segment, part)) in self.chain.iter().zip(parts.iter()).enumerate() {
            let after = poses[i + 1..]
                .iter()
                .fold(Pose::identity(), |pose, p| pose * *p)
                * self.effector;
            let operator = hamiplus8(&before) * haminus8(&after);
            let local = segment.pose_jacobian(part)?;
            for c in 0..local.ncols() {
                let local_column = Vector8::from_iterator(local.column(c).iter().copied());
                jacobian
                    .fixed_view_mut::<8, 1>(0, column)
                    .copy_from(&(operator * local_column));
                column += 1;
            }
            before = before * poses[i];
        }
        Ok(jacobian)
    }
}
