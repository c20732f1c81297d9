//! Core state types for the three-body simulation.
//!
//! Defines the 3D body/system structs:
//! - `Body3` / `System3` using `NVec3`
//!
//! The system holds exactly three bodies and the current simulation time `t`.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Number of bodies in every system
pub const N_BODIES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Body3 {
    pub x: NVec3, // 3d position
    pub v: NVec3, // 3d velocity
    pub m: f64, // mass, fixed after creation
}

#[derive(Debug, Clone, PartialEq)]
pub struct System3 {
    pub bodies: [Body3; N_BODIES], // the three bodies
    pub t: f64, // time
}

impl System3 {
    /// System at t = 0
    pub fn new(bodies: [Body3; N_BODIES]) -> Self {
        Self { bodies, t: 0.0 }
    }
}
