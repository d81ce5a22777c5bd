//! Wave geometry
//!
//! Turns the flag rectangle and a phase into the closed outline of a cloth
//! rippling in the wind. Top and bottom edges share the same sine offset, so
//! every vertical slice of the flag keeps its full height.

use std::f32::consts::TAU;

use macroquad::math::{vec2, Vec2};

use super::FlagSize;
use crate::config::ConfigError;

/// Parameters of the sine ripple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    amplitude: f32,
    wave_length: f32,
    sample_step: f32,
}

impl WaveParams {
    /// Build wave parameters, rejecting values that would make the outline undefined
    pub fn new(amplitude: f32, wave_length: f32, sample_step: f32) -> Result<Self, ConfigError> {
        if !amplitude.is_finite() {
            return Err(ConfigError::InvalidWave(format!("amplitude {} is not finite", amplitude)));
        }
        if !(wave_length.is_finite() && wave_length > 0.0) {
            return Err(ConfigError::InvalidWave(format!(
                "wave length must be positive, got {}",
                wave_length
            )));
        }
        if !(sample_step.is_finite() && sample_step > 0.0) {
            return Err(ConfigError::InvalidWave(format!(
                "sample step must be positive, got {}",
                sample_step
            )));
        }
        Ok(Self { amplitude, wave_length, sample_step })
    }

    /// Reference ripple: amplitude 10, three waves across the width, 1px samples
    pub fn for_width(width: f32) -> Result<Self, ConfigError> {
        Self::new(10.0, width / 3.0, 1.0)
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn wave_length(&self) -> f32 {
        self.wave_length
    }
}

/// Vertical displacement of the cloth at `x`
#[inline]
pub fn wave_offset(x: f32, params: &WaveParams, phase: f32) -> f32 {
    ((x / params.wave_length) * TAU - phase).sin() * params.amplitude
}

/// Sample positions along the width: 0, step, 2*step, ... and always `width` last
fn sample_xs(width: f32, step: f32) -> Vec<f32> {
    let width = width.max(0.0);
    let mut xs = Vec::with_capacity((width / step) as usize + 2);
    let mut i = 0u32;
    loop {
        let x = i as f32 * step;
        if x >= width {
            break;
        }
        xs.push(x);
        i += 1;
    }
    xs.push(width);
    xs
}

/// Closed polygon outline of the waving flag
///
/// Point layout: `(0,0)`, `samples` top-edge points left to right, `(W,H)`,
/// `samples` bottom-edge points right to left, `(0,0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Vec2>,
    samples: usize,
}

impl Outline {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of samples along each edge
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Top edge, left to right
    pub fn top_edge(&self) -> &[Vec2] {
        &self.points[1..1 + self.samples]
    }

    /// Bottom edge, right to left (path order)
    pub fn bottom_edge(&self) -> &[Vec2] {
        let start = self.samples + 2;
        &self.points[start..start + self.samples]
    }

    /// First and last points coincide
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Vertical slices: `(x, top_y, bottom_y)` left to right
    pub fn columns(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        self.top_edge()
            .iter()
            .zip(self.bottom_edge().iter().rev())
            .map(|(top, bottom)| (top.x, top.y, bottom.y))
    }

    /// Interior span `(top, bottom)` at `x`, linearly interpolated between samples
    pub fn span_at(&self, x: f32) -> Option<(f32, f32)> {
        let top = self.top_edge();
        let bottom = self.bottom_edge();
        let n = self.samples;
        if n == 0 || x < top[0].x || x > top[n - 1].x {
            return None;
        }
        // Samples are evenly spaced except the last one
        let i = top.partition_point(|p| p.x <= x).saturating_sub(1).min(n - 1);
        if i + 1 >= n {
            return Some((top[n - 1].y, bottom[0].y));
        }
        let (a, b) = (top[i], top[i + 1]);
        let t = if b.x > a.x { (x - a.x) / (b.x - a.x) } else { 0.0 };
        // bottom edge is reversed: column i lives at bottom[n - 1 - i]
        let bottom_a = bottom[n - 1 - i].y;
        let bottom_b = bottom[n - 2 - i].y;
        Some((a.y + (b.y - a.y) * t, bottom_a + (bottom_b - bottom_a) * t))
    }

    /// Whether a point lies inside the outline (edges included)
    pub fn contains(&self, p: Vec2) -> bool {
        match self.span_at(p.x) {
            Some((top, bottom)) => p.y >= top && p.y <= bottom,
            None => false,
        }
    }

    /// Axis-aligned bounds `(min, max)`
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }
}

/// Outline of the flag at `phase`
pub fn outline(size: FlagSize, params: &WaveParams, phase: f32) -> Outline {
    let xs = sample_xs(size.width, params.sample_step);
    let samples = xs.len();
    let mut points = Vec::with_capacity(samples * 2 + 3);

    points.push(Vec2::ZERO);
    for &x in &xs {
        points.push(vec2(x, wave_offset(x, params, phase)));
    }
    points.push(vec2(size.width, size.height));
    for &x in xs.iter().rev() {
        points.push(vec2(x, size.height + wave_offset(x, params, phase)));
    }
    points.push(Vec2::ZERO);

    Outline { points, samples }
}
