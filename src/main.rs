use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use rs_dq_wholebody::jacobian::translation_jacobian;
use rs_dq_wholebody::kinematic_traits::Kinematics;
use rs_dq_wholebody::simulator_bridge::{InMemoryBridge, OpMode, SimulatorBridge};
use rs_dq_wholebody::utils::{dump_joints, dump_pose, is_valid};
use rs_dq_wholebody::youbot::YouBotRobot;

/// Whole body forward kinematics of the youBot.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Instance name as assigned by the simulator, like LBR4p#0
    #[arg(short, long, default_value = "LBR4p")]
    name: String,

    /// Base configuration: x, y (meters) and heading (radians)
    #[arg(short, long, value_delimiter = ',', num_args = 3, default_values_t = [0.0, 0.0, 0.0])]
    base: Vec<f64>,

    /// Arm joint angles, radians
    #[arg(short, long, value_delimiter = ',', default_values_t = [0.0, 0.0, 0.0, 0.0, 0.0])]
    arm: Vec<f64>,

    /// Also print the translation Jacobian
    #[arg(short, long)]
    jacobian: bool,
}

/// Usage example.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let robot = YouBotRobot::new(&args.name)
        .with_context(|| format!("constructing robot {}", args.name))?;

    println!("Joints: {}", robot.joint_names().join(", "));
    println!("Base frame: {}", robot.base_frame_name());

    let q: Vec<f64> = args.base.iter().chain(args.arm.iter()).copied().collect();
    ensure!(is_valid(&q), "configuration must be finite: {:?}", q);
    println!("Configuration (degrees):");
    dump_joints(&q);

    let kinematics = robot.kinematics();
    let tcp = kinematics.forward(&q)?;
    println!("Gripper:");
    dump_pose(&tcp);

    if args.jacobian {
        let jt = translation_jacobian(&kinematics.pose_jacobian(&q)?, &tcp);
        println!("Translation Jacobian (rows 0, x, y, z):{}", jt);
    }

    // Offline bridge: arm angles go to the leading joint names, the rest stay untouched
    let bridge = InMemoryBridge::with_joints(robot.joint_names());
    let arm_joints = args.arm.len().min(robot.joint_names().len());
    bridge.set_joint_positions(
        &robot.joint_names()[..arm_joints],
        &args.arm[..arm_joints],
        OpMode::OneShot,
    )?;
    println!("Bridge holds:");
    dump_joints(&robot.get_q(&bridge)?);
    Ok(())
}
