//! Pixel-space mapping and thick line rasterization

use image::{Rgb, RgbImage};

/// Axis-aligned (x, y) bounding box of a projected path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds2 {
    /// Bounding box of `points`, or `None` when there are no points.
    /// NaN coordinates are ignored unless every value on an axis is NaN.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = points.into_iter();
        let (x0, y0) = iter.next()?;
        let init = Self { x_min: x0, x_max: x0, y_min: y0, y_max: y0 };

        Some(iter.fold(init, |b, (x, y)| Self {
            x_min: b.x_min.min(x),
            x_max: b.x_max.max(x),
            y_min: b.y_min.min(y),
            y_max: b.y_max.max(y),
        }))
    }

    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite() && self.x_max.is_finite() && self.y_min.is_finite() && self.y_max.is_finite()
    }

    /// Map (x, y) into `[0, width] x [0, height]`. An axis with zero extent
    /// maps to the middle of the canvas. Non-finite input maps to NaN.
    pub fn map(&self, x: f64, y: f64, width: u32, height: u32) -> (f64, f64) {
        (
            map_axis(x, self.x_min, self.x_max, width as f64),
            map_axis(y, self.y_min, self.y_max, height as f64),
        )
    }
}

fn map_axis(v: f64, lo: f64, hi: f64, size: f64) -> f64 {
    if hi == lo {
        return if v.is_finite() { 0.5 * size } else { f64::NAN };
    }
    size * ((v - lo) / (hi - lo))
}

/// Draw an opaque segment of `stroke` pixels width from `p0` to `p1`.
///
/// Pixel centers sit on integer coordinates. A pixel is painted when its
/// center projects inside the segment and is at most `stroke / 2` away from
/// it, so ends are cut flat. A zero-length segment paints a square dot.
/// Anything off the canvas is clipped, and non-finite endpoints draw nothing.
pub fn draw_segment(img: &mut RgbImage, p0: (f64, f64), p1: (f64, f64), stroke: f64, color: Rgb<u8>) {
    if !(p0.0.is_finite() && p0.1.is_finite() && p1.0.is_finite() && p1.1.is_finite()) {
        return;
    }

    let half = 0.5 * stroke;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }

    // Covered pixel range, clipped to the canvas
    let x_lo = (p0.0.min(p1.0) - half).ceil().max(0.0);
    let x_hi = (p0.0.max(p1.0) + half).floor().min((w - 1) as f64);
    let y_lo = (p0.1.min(p1.1) - half).ceil().max(0.0);
    let y_hi = (p0.1.max(p1.1) + half).floor().min((h - 1) as f64);
    if x_lo > x_hi || y_lo > y_hi {
        return;
    }

    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let len2 = dx * dx + dy * dy;

    for py in (y_lo as u32)..=(y_hi as u32) {
        for px in (x_lo as u32)..=(x_hi as u32) {
            let cx = px as f64 - p0.0;
            let cy = py as f64 - p0.1;

            let covered = if len2 == 0.0 {
                cx.abs() <= half && cy.abs() <= half
            } else {
                let along = cx * dx + cy * dy;
                let across = cx * dy - cy * dx;
                (0.0..=len2).contains(&along) && across * across <= half * half * len2
            };

            if covered {
                img.put_pixel(px, py, color);
            }
        }
    }
}
