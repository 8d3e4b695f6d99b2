//! Rust implementation of whole body forward kinematics for mobile manipulators, using
//! unit dual quaternions.
//!
//! A mobile manipulator is modelled as a chain of kinematic segments: a holonomic base
//! (configuration `x, y, φ`), followed by a serial arm described by a Denavit-Hartenberg
//! table. The pose of the gripper is the product, in chain order, of the segment poses,
//! followed by a fixed end-effector offset:
//!
//! `pose(base) ⊗ frame_displacement ⊗ pose(arm) ⊗ effector`
//!
//! # Features
//!
//! - Poses are [nalgebra](https://nalgebra.org) `UnitDualQuaternion<f64>`; pure translations
//!   are built exactly as `1 + ε·½·t`.
//! - Serial arms in both standard and modified DH conventions.
//! - Analytic pose Jacobians for every segment and for the whole chain, plus a numerical
//!   Jacobian to cross-check them and the translation Jacobian.
//! - Chains borrow their segments, so one base or arm may take part in several chains. Chains
//!   also implement the `Kinematics` trait and can be nested.
//! - Evaluation is stateless: the configuration is passed on every call, and a built chain
//!   can be evaluated from several threads.
//! - The KUKA youBot is provided as a ready model, including the joint names derived from
//!   the simulator instance name and a bridge interface for pushing and pulling joint positions.
//!
//! # Parameters
//!
//! Arm geometry is given as a table of (α, d, a, θ) rows, one per revolute joint, in meters
//! and radians. See `parameters_robots.rs` for the youBot table.

pub mod parameters;
pub mod parameters_robots;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematics_error;
pub mod kinematic_traits;
pub mod dual_quaternion;

pub mod serial_manipulator;
pub mod holonomic_base;
pub mod whole_body;

pub mod jacobian;

pub mod device;
pub mod simulator_bridge;
pub mod youbot;

#[cfg(test)]
mod tests;
