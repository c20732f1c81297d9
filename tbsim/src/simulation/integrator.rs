//! Fixed-step explicit Euler integrator for the three-body system
//!
//! `euler_step_3d` advances a [`System3`] in place by one step and
//! `integrate` runs the full step count, recording every body's state into
//! a pre-sized [`Trajectory`]

use super::states::{System3, NVec3, N_BODIES};
use super::forces::AccelSet3;
use super::params::Parameters;
use super::trajectory::{Sample, Trajectory};

/// Advance the 3D system by one step using forward Euler.
///
/// Both updates read only the state at the start of the step:
///
/// ```text
/// v_n+1 = v_n + dt * a(x_n)
/// x_n+1 = x_n + dt * v_n
/// ```
///
/// The position update uses the old velocity, not the freshly kicked one.
/// Changing that order changes the discretization and therefore the image.
pub fn euler_step_3d(sys: &mut System3, forces: &AccelSet3, dt: f64) {
    // a_n from x_n at time t_n
    let mut a = [NVec3::zeros(); N_BODIES];
    forces.accumulate_accels(sys.t, &*sys, &mut a);

    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        let v_old = b.v;
        b.v += dt * *a;
        b.x += dt * v_old;
    }

    sys.t += dt;
}

/// Integrate `params.steps` samples starting from `initial`.
///
/// Sample 0 of each trajectory is the initial state, so `steps - 1` Euler
/// updates are applied. `steps == 0` gives three empty trajectories. The run
/// never stops early, even once the state has gone non-finite.
pub fn integrate(initial: &System3, forces: &AccelSet3, params: &Parameters) -> [Trajectory; N_BODIES] {
    let steps = params.steps;
    let mut trajectories: [Trajectory; N_BODIES] =
        std::array::from_fn(|_| Trajectory::with_capacity(steps));

    if steps == 0 {
        return trajectories;
    }

    let mut sys = initial.clone();
    record(&sys, &mut trajectories);

    for _ in 1..steps {
        euler_step_3d(&mut sys, forces, params.h0);
        record(&sys, &mut trajectories);
    }

    trajectories
}

fn record(sys: &System3, trajectories: &mut [Trajectory; N_BODIES]) {
    for (traj, b) in trajectories.iter_mut().zip(sys.bodies.iter()) {
        traj.push(Sample::from(b));
    }
}
