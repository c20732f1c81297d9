pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod error;

pub use simulation::states::{Body3, System3, NVec3, N_BODIES};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration3, AccelSet3, PairwiseGravity3, total_momentum};
pub use simulation::integrator::{euler_step_3d, integrate};
pub use simulation::trajectory::{Sample, Trajectory};
pub use simulation::scenario::{Scenario3D, random_bodies};
pub use configuration::config::{EngineConfig, RenderConfig, BodyConfig, ScenarioConfig, load_scenario_from_yaml};
pub use visualization::colors::{ColorPath, random_walk, random_walk_colors, normalize_walk};
pub use visualization::raster::{Bounds2, draw_segment};
pub use visualization::tbsim_png::{render, save_png, run_png};
pub use error::SimError;
