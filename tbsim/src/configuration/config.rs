//! Configuration types for describing a three-body render.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. A scenario consists of:
//!
//! - [`EngineConfig`]   – step size, step count, gravity coefficient, seed
//! - [`RenderConfig`]   – canvas, stroke, which body to draw, output file
//! - [`BodyConfig`]     – initial state for each body (optional)
//! - [`ScenarioConfig`] – top-level wrapper
//!
//! The binary never reads a file: it runs [`ScenarioConfig::default`], which
//! is assembled from the compile-time constants below. YAML loading exists for
//! pinned, reproducible scenarios.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   h0: 0.001          # fixed step size
//!   steps: 200000      # samples per trajectory
//!   G: 9.8             # gravity coefficient
//!   seed: 42           # optional, omit for a different image every run
//!
//! render:
//!   width: 1000
//!   height: 1000
//!   stroke_width: 5.0
//!   body: 0            # which trajectory to draw (0..3)
//!   output: "res.png"
//!   log_every: 10000   # debug-log mapped coordinates every N segments
//!
//! bodies:              # optional, omit for randomized initial conditions
//!   - x: [-10.0, 12.5, -11.0]
//!     v: [-3.0, 0.0, 0.0]
//!     m: 10.5
//!   - x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 10.2
//!   - x: [10.0, 10.0, 12.0]
//!     v: [3.0, 0.0, 0.0]
//!     m: 10.7
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::params::{DEFAULT_G, DEFAULT_H0, DEFAULT_STEPS};
use crate::simulation::states::N_BODIES;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;
pub const DEFAULT_OUTPUT: &str = "res.png";
pub const DEFAULT_LOG_EVERY: usize = 10_000;

/// Integration settings
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub h0: f64,            // time step size
    pub steps: usize,       // samples per trajectory, including the initial state
    pub G: f64,             // gravity coefficient
    pub seed: Option<u64>,  // deterministic seed to make runs reproducible
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            h0: DEFAULT_H0,
            steps: DEFAULT_STEPS,
            G: DEFAULT_G,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// The shared random source for a run: seeded when `seed` is set,
    /// otherwise from OS entropy
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Output image settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,         // canvas width in pixels
    pub height: u32,        // canvas height in pixels
    pub stroke_width: f64,  // line width in pixels
    pub body: usize,        // index of the body whose (x, y) path is drawn
    pub output: PathBuf,    // PNG destination
    pub log_every: usize,   // segment interval for coordinate debug logs
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            stroke_width: DEFAULT_STROKE_WIDTH,
            body: 0,
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_every: DEFAULT_LOG_EVERY,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidRender(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(SimError::InvalidRender(format!(
                "stroke width must be positive, got {}",
                self.stroke_width
            )));
        }
        if self.body >= N_BODIES {
            return Err(SimError::InvalidRender(format!(
                "body index must be 0, 1 or 2, got {}",
                self.body
            )));
        }
        if self.log_every == 0 {
            return Err(SimError::InvalidRender("log_every must be at least 1".into()));
        }
        Ok(())
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
}

/// Top-level scenario configuration.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,       // Integration settings
    #[serde(default)]
    pub render: RenderConfig,       // Output image settings
    #[serde(default)]
    pub bodies: Option<Vec<BodyConfig>>, // Explicit initial state, or None for randomized
}

/// Read a scenario from a YAML file
pub fn load_scenario_from_yaml<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, SimError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}
