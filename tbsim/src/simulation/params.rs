//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and step count,
//! - gravitational coefficient `G`
//!
//! The random seed is not a parameter: the RNG is built from
//! `EngineConfig::seed` before the scenario exists.

/// Gravity coefficient of the force law. A design constant, not SI gravity.
pub const DEFAULT_G: f64 = 9.8;
pub const DEFAULT_H0: f64 = 0.001;
pub const DEFAULT_STEPS: usize = 200_000;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub h0: f64, // step size
    pub steps: usize, // number of samples per trajectory
    pub G: f64, // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            h0: DEFAULT_H0,
            steps: DEFAULT_STEPS,
            G: DEFAULT_G,
        }
    }
}
