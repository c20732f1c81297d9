use tbsim::{ScenarioConfig, Scenario3D};
use tbsim::run_png;
use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // no arguments: every setting is a compile-time default
    let scenario_cfg = ScenarioConfig::default();

    // one random source for initial conditions and colors
    let mut rng = scenario_cfg.engine.rng();

    let scenario = Scenario3D::build_scenario_3d(scenario_cfg, &mut rng)
        .context("failed to build scenario")?;
    let output = run_png(scenario, &mut rng)
        .context("failed to render trajectory")?;

    log::info!("done: {}", output.display());
    Ok(())
}
