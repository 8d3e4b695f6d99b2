//! Device identity: instance names of the form `<Label>` or `<Label>#<Index>` as the
//! simulator assigns them, and the joint names derived from them.

use tracing::warn;
use crate::kinematics_error::KinematicsError;

/// Label and index parsed from an instance name. The label is validated against the
/// expected device type before anything is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    label: String,
    index: String,
}

impl DeviceIdentity {
    /// Splits the instance name on the first `#`. Without the delimiter the index is empty.
    ///
    /// ```
    /// use rs_dq_wholebody::device::DeviceIdentity;
    ///
    /// let identity = DeviceIdentity::parse("LBR4p#0", "LBR4p").unwrap();
    /// assert_eq!(identity.label(), "LBR4p");
    /// assert_eq!(identity.index(), "0");
    ///
    /// assert!(DeviceIdentity::parse("WrongLabel", "LBR4p").is_err());
    /// ```
    pub fn parse(instance_name: &str, expected_label: &str) -> Result<Self, KinematicsError> {
        let (label, index) = match instance_name.split_once('#') {
            Some((label, index)) => (label, index),
            None => (instance_name, ""),
        };
        if label.is_empty() {
            warn!(instance_name, "instance name has no device label");
            return Err(KinematicsError::MalformedIdentity(instance_name.to_string()));
        }
        if label != expected_label {
            warn!(instance_name, expected_label, "unexpected device label");
            return Err(KinematicsError::IdentityMismatch {
                expected: expected_label.to_string(),
                found: label.to_string(),
            });
        }
        Ok(DeviceIdentity {
            label: label.to_string(),
            index: index.to_string(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Instance index, empty for the first (unnumbered) instance.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// `<Label>_joint<N>` followed by `_<Index>` if the instance is numbered.
    pub fn joint_name(&self, joint: usize) -> String {
        if self.index.is_empty() {
            format!("{}_joint{}", self.label, joint)
        } else {
            format!("{}_joint{}_{}", self.label, joint, self.index)
        }
    }

    /// Names of joints 1 to `count`, in order.
    pub fn joint_names(&self, count: usize) -> Vec<String> {
        (1..=count).map(|joint| self.joint_name(joint)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_index() {
        let identity = DeviceIdentity::parse("LBR4p#12", "LBR4p").unwrap();
        assert_eq!(identity.label(), "LBR4p");
        assert_eq!(identity.index(), "12");
        assert_eq!(identity.joint_name(3), "LBR4p_joint3_12");
    }

    #[test]
    fn test_parse_without_index() {
        let identity = DeviceIdentity::parse("LBR4p", "LBR4p").unwrap();
        assert_eq!(identity.index(), "");
        assert_eq!(identity.joint_names(2), vec!["LBR4p_joint1", "LBR4p_joint2"]);
    }

    #[test]
    fn test_split_on_first_delimiter_only() {
        let identity = DeviceIdentity::parse("LBR4p#1#2", "LBR4p").unwrap();
        assert_eq!(identity.index(), "1#2");
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            DeviceIdentity::parse("", "LBR4p").unwrap_err(),
            KinematicsError::MalformedIdentity("".into())
        );
        assert_eq!(
            DeviceIdentity::parse("#0", "LBR4p").unwrap_err(),
            KinematicsError::MalformedIdentity("#0".into())
        );
    }

    #[test]
    fn test_label_mismatch() {
        assert_eq!(
            DeviceIdentity::parse("WrongLabel#0", "LBR4p").unwrap_err(),
            KinematicsError::IdentityMismatch {
                expected: "LBR4p".into(),
                found: "WrongLabel".into(),
            }
        );
        // Label comparison is exact
        assert!(DeviceIdentity::parse("lbr4p", "LBR4p").is_err());
    }
}
