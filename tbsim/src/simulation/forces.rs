//! Force / acceleration contributors for the three-body engine
//!
//! Defines the 3D acceleration trait, the set that sums its terms, and the
//! unsoftened pairwise Newtonian gravity used by the integrator

use crate::simulation::states::{System3, NVec3};

/// Collection of 3D acceleration terms
/// Each term implements [`Acceleration3`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet3 {
    terms: Vec<Box<dyn Acceleration3 + Send + Sync>>,
}

impl AccelSet3 {
    /// Constructor
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration3 + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System3, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }

        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet3 {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for 3D acceleration sources operating on [`System3`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration3 {
    fn acceleration(&self, t: f64, sys: &System3, out: &mut [NVec3]);
}

/// Pairwise Newtonian gravity without softening
///
/// For body `i` the contribution of every other body `j` is
///
/// ```text
/// a_i += -G * m_j * (x_i - x_j) / |x_i - x_j|^3
/// ```
///
/// Partners are visited in cyclic order `i+1, i+2, ...` so the floating-point
/// summation order is fixed. Coincident bodies divide by zero and the
/// resulting non-finite values are left to propagate.
#[allow(non_snake_case)]
pub struct PairwiseGravity3 {
    pub G: f64,
}

impl Acceleration3 for PairwiseGravity3 {
    fn acceleration(&self, _t: f64, sys: &System3, out: &mut [NVec3]) {
        let n = sys.bodies.len();

        for i in 0..n {
            let xi = sys.bodies[i].x;

            for k in 1..n {
                let bj = &sys.bodies[(i + k) % n];

                // points from j to i, so the minus sign pulls i toward j
                let r = xi - bj.x;
                let dist = r.norm();

                out[i] += (-self.G * bj.m) * r / dist.powf(3.0);
            }
        }
    }
}

/// Total linear momentum `sum(m_i * v_i)` of the system
pub fn total_momentum(sys: &System3) -> NVec3 {
    sys.bodies
        .iter()
        .fold(NVec3::zeros(), |p, b| p + b.m * b.v)
}
