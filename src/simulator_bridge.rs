//! Boundary to the simulator that owns the joints. Values are exchanged as vectors
//! positionally aligned with the joint names. The transport behind the trait is opaque:
//! no retry, batching or consistency guarantees are given.

use std::collections::HashMap;
use std::sync::Mutex;
use anyhow::{anyhow, bail, ensure, Result};
use tracing::debug;

/// How the simulator should treat the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Single non-blocking update, not repeated.
    OneShot,
    /// Return the most recently buffered values without waiting for a new sample.
    Buffer,
}

/// Joint position access of a simulator.
pub trait SimulatorBridge: Send + Sync {
    /// Write joint positions. `names` and `values` are aligned by position.
    fn set_joint_positions(&self, names: &[String], values: &[f64], mode: OpMode) -> Result<()>;

    /// Read joint positions, aligned with `names`.
    fn get_joint_positions(&self, names: &[String], mode: OpMode) -> Result<Vec<f64>>;
}

/// Bridge that keeps the joint positions in memory, for tests and offline use.
/// Every named joint reads as zero until it is first written. Names it does not know are
/// rejected on both push and pull.
#[derive(Debug, Default)]
pub struct InMemoryBridge {
    positions: Mutex<HashMap<String, f64>>,
}

impl InMemoryBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bridge that knows the given joints, all at zero.
    pub fn with_joints(names: &[String]) -> Self {
        let positions = names.iter().map(|name| (name.clone(), 0.0)).collect();
        InMemoryBridge { positions: Mutex::new(positions) }
    }
}

impl SimulatorBridge for InMemoryBridge {
    fn set_joint_positions(&self, names: &[String], values: &[f64], mode: OpMode) -> Result<()> {
        ensure!(
            names.len() == values.len(),
            "{} joint names but {} values",
            names.len(),
            values.len()
        );
        let mut positions = self
            .positions
            .lock()
            .map_err(|_| anyhow!("joint position store poisoned"))?;
        // All or nothing: check every name before writing any value
        if let Some(unknown) = names.iter().find(|name| !positions.contains_key(*name)) {
            bail!("unknown joint {}", unknown);
        }
        for (name, &value) in names.iter().zip(values) {
            positions.insert(name.clone(), value);
        }
        debug!(?mode, joints = names.len(), "joint positions set");
        Ok(())
    }

    fn get_joint_positions(&self, names: &[String], mode: OpMode) -> Result<Vec<f64>> {
        let positions = self
            .positions
            .lock()
            .map_err(|_| anyhow!("joint position store poisoned"))?;
        let values = names
            .iter()
            .map(|name| {
                positions
                    .get(name)
                    .copied()
                    .ok_or_else(|| anyhow!("unknown joint {}", name))
            })
            .collect::<Result<Vec<f64>>>()?;
        debug!(?mode, joints = names.len(), "joint positions read");
        Ok(values)
    }
}
