//! Dense per-step trajectory storage
//!
//! A [`Trajectory`] is a contiguous buffer of [`Sample`]s, one per step,
//! allocated once up front and indexed by step number.

use crate::simulation::states::{Body3, NVec3};

/// Position and velocity of one body at one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}

impl From<&Body3> for Sample {
    fn from(b: &Body3) -> Self {
        Self { x: b.x, v: b.v }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    /// Empty trajectory with room for `steps` samples
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            samples: Vec::with_capacity(steps),
        }
    }

    /// Trajectory from already recorded samples
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, step: usize) -> Option<&Sample> {
        self.samples.get(step)
    }

    /// Number of line segments between consecutive samples
    pub fn segments(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// (x, y) projection of every sample, in step order
    pub fn xy(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(|s| (s.x.x, s.x.y))
    }
}
