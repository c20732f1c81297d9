//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` and produces the runtime bundle `Scenario3D`
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System3` with bodies at t = 0)
//! - active force set (`AccelSet3`)
//! - render settings (`RenderConfig`)
//!
//! Bodies come from the config when given, otherwise they are drawn from the
//! shared random source.

use log::info;
use rand::Rng;

use crate::configuration::config::{BodyConfig, RenderConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::forces::{AccelSet3, PairwiseGravity3};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body3, NVec3, System3, N_BODIES};

/// Runtime bundle for one render: parameters, bodies at t = 0, forces and
/// output settings
pub struct Scenario3D {
    pub parameters: Parameters,
    pub system: System3,
    pub forces: AccelSet3,
    pub render: RenderConfig,
}

impl Scenario3D {
    /// Validate `cfg` and assemble the runtime scenario.
    ///
    /// `rng` is only consumed when `cfg.bodies` is `None`.
    pub fn build_scenario_3d<R: Rng + ?Sized>(cfg: ScenarioConfig, rng: &mut R) -> Result<Self, SimError> {
        cfg.render.validate()?;

        let bodies = match &cfg.bodies {
            Some(body_cfgs) => bodies_from_config(body_cfgs)?,
            None => random_bodies(rng),
        };
        let system = System3::new(bodies);

        // Parameters (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let parameters = Parameters {
            h0: e_cfg.h0,
            steps: e_cfg.steps,
            G: e_cfg.G,
        };

        let forces = AccelSet3::new().with(PairwiseGravity3 { G: parameters.G });

        for (i, b) in system.bodies.iter().enumerate() {
            info!("body {}: m = {:.6}, x = {:?}, v = {:?}", i, b.m, b.x.as_slice(), b.v.as_slice());
        }

        Ok(Self {
            parameters,
            system,
            forces,
            render: cfg.render,
        })
    }
}

/// Randomized initial conditions.
///
/// Draw order is fixed so a seeded run is reproducible: three masses in
/// `[10, 11)` for bodies 0, 1, 2, then one y offset in `[-10, 10)` for
/// body 0. Body 1 starts at rest at the origin, bodies 0 and 2 move apart
/// along x.
pub fn random_bodies<R: Rng + ?Sized>(rng: &mut R) -> [Body3; N_BODIES] {
    let m: [f64; N_BODIES] = std::array::from_fn(|_| 10.0 + rng.gen::<f64>());
    let y_offset = rng.gen::<f64>() * 20.0 - 10.0;

    [
        Body3 {
            x: NVec3::new(-10.0, 10.0 + y_offset, -11.0),
            v: NVec3::new(-3.0, 0.0, 0.0),
            m: m[0],
        },
        Body3 {
            x: NVec3::zeros(),
            v: NVec3::zeros(),
            m: m[1],
        },
        Body3 {
            x: NVec3::new(10.0, 10.0, 12.0),
            v: NVec3::new(3.0, 0.0, 0.0),
            m: m[2],
        },
    ]
}

/// Map `BodyConfig` -> runtime `Body3`, checking shape and mass
fn bodies_from_config(cfgs: &[BodyConfig]) -> Result<[Body3; N_BODIES], SimError> {
    if cfgs.len() != N_BODIES {
        return Err(SimError::InvalidBodyCount(cfgs.len()));
    }

    let mut bodies: [Body3; N_BODIES] = std::array::from_fn(|_| Body3 {
        x: NVec3::zeros(),
        v: NVec3::zeros(),
        m: 0.0,
    });

    for (index, (bc, slot)) in cfgs.iter().zip(bodies.iter_mut()).enumerate() {
        let x = vec3(&bc.x, index, "x")?;
        let v = vec3(&bc.v, index, "v")?;
        if !(bc.m.is_finite() && bc.m > 0.0) {
            return Err(SimError::InvalidBody {
                index,
                reason: format!("mass must be positive, got {}", bc.m),
            });
        }
        *slot = Body3 { x, v, m: bc.m };
    }

    Ok(bodies)
}

fn vec3(components: &[f64], index: usize, field: &str) -> Result<NVec3, SimError> {
    match components {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::InvalidBody {
            index,
            reason: format!("`{}` needs 3 components, got {}", field, components.len()),
        }),
    }
}
