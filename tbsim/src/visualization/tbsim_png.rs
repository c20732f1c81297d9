//! Trajectory-to-PNG rendering
//!
//! Projects one body's path onto the (x, y) plane, fits it to the canvas using
//! the bounding box of the whole path, and draws it segment by segment with
//! the random-walk color path.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use log::{debug, info, warn};
use rand::Rng;

use crate::error::SimError;
use crate::simulation::integrator::integrate;
use crate::simulation::scenario::Scenario3D;
use crate::simulation::trajectory::Trajectory;
use crate::visualization::colors::ColorPath;
use crate::visualization::raster::{draw_segment, Bounds2};

/// Step whose y coordinate is logged as a quick sanity value
const PROBE_STEP: usize = 100;

/// Render the (x, y) projection of `trajectory` onto a black canvas.
///
/// Segment `i - 1 -> i` is drawn with `colors[i - 1]`. `colors` must have at
/// least one entry per segment.
pub fn render(
    trajectory: &Trajectory,
    colors: &ColorPath,
    width: u32,
    height: u32,
    stroke_width: f64,
) -> Result<RgbImage, SimError> {
    render_logged(trajectory, colors, width, height, stroke_width, usize::MAX)
}

fn render_logged(
    trajectory: &Trajectory,
    colors: &ColorPath,
    width: u32,
    height: u32,
    stroke_width: f64,
    log_every: usize,
) -> Result<RgbImage, SimError> {
    let segments = trajectory.segments();
    if colors.len() < segments {
        return Err(SimError::ColorPathTooShort { segments, colors: colors.len() });
    }

    let mut img = RgbImage::new(width, height);

    let Some(bounds) = Bounds2::from_points(trajectory.xy()) else {
        return Ok(img);
    };
    info!("x range: [{}, {}]", bounds.x_min, bounds.x_max);
    info!("y range: [{}, {}]", bounds.y_min, bounds.y_max);
    if !bounds.is_finite() {
        warn!("trajectory bounds are not finite, affected segments will be skipped");
    }

    let samples = trajectory.samples();
    for i in 1..samples.len() {
        let a = samples[i - 1].x;
        let b = samples[i].x;
        let p0 = bounds.map(a.x, a.y, width, height);
        let p1 = bounds.map(b.x, b.y, width, height);

        if i % log_every == 0 {
            debug!("segment {}: ({}, {}) -> ({}, {})", i, p0.0, p0.1, p1.0, p1.1);
        }

        // checked above: colors.len() >= segments
        let color = colors.as_slice()[i - 1];
        draw_segment(&mut img, p0, p1, stroke_width, color);
    }

    Ok(img)
}

/// Write `img` as PNG
pub fn save_png<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<(), SimError> {
    img.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}

/// Full pipeline for a scenario: integrate, draw colors, render, save.
///
/// `rng` should be the same source the scenario's bodies were drawn from so
/// a seeded run is reproducible end to end. Returns the written path.
pub fn run_png<R: Rng + ?Sized>(scenario: Scenario3D, rng: &mut R) -> Result<PathBuf, SimError> {
    let Scenario3D { parameters, system, forces, render: cfg } = scenario;

    info!("integrating {} steps with dt = {}", parameters.steps, parameters.h0);
    let trajectories = integrate(&system, &forces, &parameters);
    let path = &trajectories[cfg.body];
    info!("integration finished, drawing body {}", cfg.body);

    if let Some(s) = path.get(PROBE_STEP) {
        info!("y at step {}: {}", PROBE_STEP, s.x.y);
    }

    let colors = ColorPath::random_walk(path.segments(), rng);
    let img = render_logged(path, &colors, cfg.width, cfg.height, cfg.stroke_width, cfg.log_every)?;

    save_png(&img, &cfg.output)?;
    info!("wrote {}", cfg.output.display());
    Ok(cfg.output)
}
