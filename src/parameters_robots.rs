//! Hardcoded parameters of the KUKA youBot mobile manipulator

pub mod dh {
    use crate::parameters::dh::{DhConvention, DhParameters, DhRow};
    use std::f64::consts::PI;

    impl DhParameters {
        /// The five joint arm of the youBot, standard convention.
        pub fn kuka_youbot_arm() -> Self {
            const PI2: f64 = PI / 2.0;
            DhParameters::new(
                vec![
                    //         alpha,     d,     a, theta
                    DhRow::new(PI2, 0.147, 0.033, 0.0),
                    DhRow::new(0.0, 0.0, 0.155, PI2),
                    DhRow::new(0.0, 0.0, 0.135, 0.0),
                    DhRow::new(PI2, 0.0, 0.0, PI2),
                    DhRow::new(0.0, 0.218, 0.0, 0.0),
                ],
                DhConvention::Standard,
            )
        }
    }
}

pub mod youbot {
    use nalgebra::Vector3;
    use crate::dual_quaternion::pure_translation;
    use crate::kinematic_traits::Pose;

    /// Device type token the scene model of this robot carries in its instance name.
    pub const DEVICE_LABEL: &str = "LBR4p";

    /// Number of joint names derived from the instance name.
    pub const JOINT_NAME_COUNT: usize = 7;

    /// Offset from the geometric center of the base to the arm mount point, meters.
    pub const ARM_MOUNT_OFFSET: [f64; 3] = [0.165, 0.0, 0.11];

    /// Distance from the last arm link to the gripper reference point along z, meters.
    pub const EFFECTOR_LENGTH: f64 = 0.3;

    /// `1 + ε·½·(0.165 î + 0.11 k̂)`
    pub fn frame_displacement() -> Pose {
        pure_translation(Vector3::from(ARM_MOUNT_OFFSET))
    }

    /// `1 + ε·½·0.3 k̂`
    pub fn effector_offset() -> Pose {
        pure_translation(Vector3::new(0.0, 0.0, EFFECTOR_LENGTH))
    }
}
