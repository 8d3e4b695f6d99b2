//! KUKA youBot: five joint arm mounted on a holonomic base.
//!
//! The robot owns its segments and hands out whole body chains that borrow them:
//! ```
//! use rs_dq_wholebody::kinematic_traits::Kinematics;
//! use rs_dq_wholebody::youbot::YouBotRobot;
//!
//! let robot = YouBotRobot::new("LBR4p#0").unwrap();
//! assert_eq!(robot.base_frame_name(), "LBR4p_joint1_0");
//!
//! let kinematics = robot.kinematics();
//! // Base x, y, heading and then the arm joints
//! let q = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let tcp = kinematics.forward(&q).unwrap();
//! println!("Gripper pose: {:?}", tcp);
//! ```

use anyhow::{Context, Result};
use tracing::debug;
use crate::device::DeviceIdentity;
use crate::holonomic_base::HolonomicBase;
use crate::kinematics_error::KinematicsError;
use crate::parameters::dh::DhParameters;
use crate::parameters_robots::youbot::{
    effector_offset, frame_displacement, DEVICE_LABEL, JOINT_NAME_COUNT,
};
use crate::serial_manipulator::SerialManipulator;
use crate::simulator_bridge::{OpMode, SimulatorBridge};
use crate::whole_body::{WholeBody, WholeBodyBuilder};

/// Robot model built once from the instance name. Immutable afterward.
#[derive(Debug, Clone)]
pub struct YouBotRobot {
    identity: DeviceIdentity,
    joint_names: Vec<String>,
    base_frame_name: String,
    base: HolonomicBase,
    arm: SerialManipulator,
}

impl YouBotRobot {
    /// Validates the instance name and derives the joint names. Fails before anything is
    /// derived if the label is not the expected device type.
    pub fn new(instance_name: &str) -> Result<Self, KinematicsError> {
        let identity = DeviceIdentity::parse(instance_name, DEVICE_LABEL)?;
        let joint_names = identity.joint_names(JOINT_NAME_COUNT);
        let base_frame_name = joint_names[0].clone();
        debug!(instance_name, base_frame = %base_frame_name, "youBot joint names derived");

        Ok(YouBotRobot {
            identity,
            joint_names,
            base_frame_name,
            base: HolonomicBase::new().with_frame_displacement(frame_displacement()),
            arm: SerialManipulator::new(DhParameters::kuka_youbot_arm()),
        })
    }

    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    pub fn base_frame_name(&self) -> &str {
        &self.base_frame_name
    }

    pub fn base(&self) -> &HolonomicBase {
        &self.base
    }

    pub fn arm(&self) -> &SerialManipulator {
        &self.arm
    }

    /// Base first, then the arm, then the gripper offset:
    /// `pose(base) ⊗ frame_displacement ⊗ pose(arm) ⊗ effector`.
    pub fn kinematics(&self) -> WholeBody<'_> {
        WholeBodyBuilder::new(&self.base)
            .add(&self.arm)
            .effector(effector_offset())
            .build()
    }

    /// Push joint positions to the simulator as a single non-blocking update.
    pub fn send_q(&self, bridge: &dyn SimulatorBridge, q: &[f64]) -> Result<()> {
        bridge
            .set_joint_positions(&self.joint_names, q, OpMode::OneShot)
            .with_context(|| format!("sending joint positions of {}", self.identity.label()))
    }

    /// Most recently buffered joint positions from the simulator.
    pub fn get_q(&self, bridge: &dyn SimulatorBridge) -> Result<Vec<f64>> {
        bridge
            .get_joint_positions(&self.joint_names, OpMode::Buffer)
            .with_context(|| format!("reading joint positions of {}", self.identity.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator_bridge::InMemoryBridge;

    #[test]
    fn test_example_names() {
        let robot = YouBotRobot::new("LBR4p#0").unwrap();
        let expected: Vec<String> = (1..=7).map(|i| format!("LBR4p_joint{}_0", i)).collect();
        assert_eq!(robot.joint_names(), expected.as_slice());
        assert_eq!(robot.base_frame_name(), "LBR4p_joint1_0");
    }

    #[test]
    fn test_wrong_label() {
        assert_eq!(
            YouBotRobot::new("WrongLabel").unwrap_err(),
            KinematicsError::IdentityMismatch {
                expected: "LBR4p".into(),
                found: "WrongLabel".into(),
            }
        );
        assert!(YouBotRobot::new("").is_err());
    }

    #[test]
    fn test_send_and_get_q() {
        let robot = YouBotRobot::new("LBR4p#1").unwrap();
        let bridge = InMemoryBridge::with_joints(robot.joint_names());
        let q = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        robot.send_q(&bridge, &q).unwrap();
        assert_eq!(robot.get_q(&bridge).unwrap(), q.to_vec());

        let err = robot.send_q(&bridge, &q[..3]).unwrap_err();
        assert!(format!("{:#}", err).contains("sending joint positions of LBR4p"));
    }
}
