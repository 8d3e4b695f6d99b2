//! Error handling for device identification and kinematic evaluation

/// Unified error to report failures during both device construction and kinematic evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// The label of the instance name does not match the expected device type.
    IdentityMismatch { expected: String, found: String },
    /// The instance name is empty or cannot be split into label and index.
    MalformedIdentity(String),
    /// Configuration vector has the wrong number of elements for the segment.
    DimensionMismatch { expected: usize, found: usize },
    /// Requested segment or link index does not exist in the chain.
    SegmentOutOfRange { index: usize, count: usize },
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::IdentityMismatch { ref expected, ref found } =>
                write!(f, "Identity Mismatch: expected {}, found {}", expected, found),
            KinematicsError::MalformedIdentity(ref name) =>
                write!(f, "Malformed Identity: '{}'", name),
            KinematicsError::DimensionMismatch { expected, found } =>
                write!(f, "Dimension Mismatch: expected {}, found {}", expected, found),
            KinematicsError::SegmentOutOfRange { index, count } =>
                write!(f, "Segment Out Of Range: index {}, chain has {}", index, count),
        }
    }
}

impl std::error::Error for KinematicsError {}

/// Returns DimensionMismatch unless the configuration has exactly `expected` elements.
pub(crate) fn check_dimension(q: &[f64], expected: usize) -> Result<(), KinematicsError> {
    if q.len() != expected {
        return Err(KinematicsError::DimensionMismatch { expected, found: q.len() });
    }
    Ok(())
}
