//! Random-walk color paths
//!
//! Each channel is a ±1 walk starting at 0, rescaled so its lowest point maps
//! to 0 and its highest to 255. Three channels drawn back to back from one
//! random source give the per-segment RGB colors of the rendered path.

use image::Rgb;
use rand::Rng;

/// One color per trajectory segment, in segment order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorPath {
    colors: Vec<Rgb<u8>>,
}

impl ColorPath {
    /// Draw `n` colors. Consumes `n` coin flips for red, then `n` for green,
    /// then `n` for blue.
    pub fn random_walk<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let r = random_walk_colors(n, rng);
        let g = random_walk_colors(n, rng);
        let b = random_walk_colors(n, rng);
        Self::from_channels(&r, &g, &b)
    }

    /// Zip three equally long channels into colors
    pub fn from_channels(r: &[u8], g: &[u8], b: &[u8]) -> Self {
        let colors = r
            .iter()
            .zip(g)
            .zip(b)
            .map(|((&r, &g), &b)| Rgb([r, g, b]))
            .collect();
        Self { colors }
    }

    pub fn from_colors(colors: Vec<Rgb<u8>>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Rgb<u8>> {
        self.colors.get(i).copied()
    }

    pub fn as_slice(&self) -> &[Rgb<u8>] {
        &self.colors
    }
}

/// One normalized channel of length `n`
pub fn random_walk_colors<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u8> {
    normalize_walk(&random_walk(n, rng))
}

/// Cumulative ±1 walk from 0, one fair coin per step. The starting 0 itself
/// is not recorded.
pub fn random_walk<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    let mut cur = 0i64;
    let mut walk = Vec::with_capacity(n);
    for _ in 0..n {
        cur += if rng.gen_range(0..2) == 1 { 1 } else { -1 };
        walk.push(cur);
    }
    walk
}

/// Rescale `walk` linearly from `[min, max]` to `[0, 255]`, truncating.
///
/// A flat walk (every value equal, which includes every walk of length 1)
/// has no range to rescale and maps to all zeros.
pub fn normalize_walk(walk: &[i64]) -> Vec<u8> {
    let (Some(&lo), Some(&hi)) = (walk.iter().min(), walk.iter().max()) else {
        return Vec::new();
    };
    if lo == hi {
        return vec![0; walk.len()];
    }

    let span = (hi - lo) as f64;
    walk.iter()
        .map(|&v| (255.0 * (v - lo) as f64 / span) as u8)
        .collect()
}
