//! Defines the Denavit-Hartenberg parameter table of a serial arm

pub mod dh {
    use crate::utils::deg;

    /// How the four parameters of a row are composed into the local pose of the joint.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DhConvention {
        /// `Rz(θ + q) ⊗ Tz(d) ⊗ Tx(a) ⊗ Rx(α)`
        Standard,
        /// `Rx(α) ⊗ Tx(a) ⊗ Rz(θ + q) ⊗ Tz(d)`
        Modified,
    }

    impl DhConvention {
        pub fn name(&self) -> &'static str {
            match self {
                DhConvention::Standard => "standard",
                DhConvention::Modified => "modified",
            }
        }
    }

    /// Parameters of a single revolute joint. Lengths are in meters, angles in radians.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DhRow {
        /// Twist angle between the joint axes (α).
        pub alpha: f64,

        /// Link offset along the joint axis (d).
        pub d: f64,

        /// Link length along the common normal (a).
        pub a: f64,

        /// Constant added to the joint angle (θ), defines the zero of the joint.
        pub theta: f64,
    }

    impl DhRow {
        pub const fn new(alpha: f64, d: f64, a: f64, theta: f64) -> Self {
            DhRow { alpha, d, a, theta }
        }
    }

    /// Parameters for the arm. See [parameters_robots.rs](parameters_robots.rs) for the
    /// concrete device table. Fixed once constructed: rows cannot be added or altered later.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DhParameters {
        rows: Vec<DhRow>,
        convention: DhConvention,
    }

    impl DhParameters {
        pub fn new(rows: Vec<DhRow>, convention: DhConvention) -> Self {
            DhParameters { rows, convention }
        }

        pub fn rows(&self) -> &[DhRow] {
            &self.rows
        }

        pub fn convention(&self) -> DhConvention {
            self.convention
        }

        /// Number of revolute joints.
        pub fn dof(&self) -> usize {
            self.rows.len()
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            let column = |f: fn(&DhRow) -> f64, as_angle: bool| {
                self.rows
                    .iter()
                    .map(|row| if as_angle { deg(&f(row)) } else { f(row).to_string() })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            format!(
                "dh_parameters:\n  \
              convention: {}\n  \
              alpha: [{}]\n  \
              d: [{}]\n  \
              a: [{}]\n  \
              theta: [{}]\n\
            dof: {}\n",
                self.convention.name(),
                column(|r| r.alpha, true),
                column(|r| r.d, false),
                column(|r| r.a, false),
                column(|r| r.theta, true),
                self.dof()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::dh::*;
    use std::f64::consts::PI;

    #[test]
    fn test_to_yaml() {
        let parameters = DhParameters::new(
            vec![
                DhRow::new(PI / 2.0, 0.1, 0.0, 0.0),
                DhRow::new(0.0, 0.0, 0.25, PI / 2.0),
            ],
            DhConvention::Standard,
        );
        let yaml = parameters.to_yaml();
        assert!(yaml.contains("convention: standard"));
        assert!(yaml.contains("alpha: [deg(90.0000), 0]"));
        assert!(yaml.contains("d: [0.1, 0]"));
        assert!(yaml.contains("a: [0, 0.25]"));
        assert!(yaml.contains("theta: [0, deg(90.0000)]"));
        assert!(yaml.ends_with("dof: 2\n"));
    }
}
