//! Emblem: a stroked rim with 24 evenly spaced spokes

use std::f32::consts::TAU;

use macroquad::math::{vec2, Vec2};

use crate::config::EmblemStyle;

/// Number of spokes around the rim
pub const SPOKE_COUNT: usize = 24;

/// Angle between neighbouring spokes, in degrees
pub const SPOKE_STEP_DEGREES: f32 = 360.0 / SPOKE_COUNT as f32;

/// One spoke, relative to the emblem center (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    /// Rotation from straight up, clockwise on screen, in degrees
    pub angle_degrees: f32,
    pub inner: Vec2,
    pub outer: Vec2,
}

impl Spoke {
    pub fn length(&self) -> f32 {
        (self.outer - self.inner).length()
    }
}

/// Spoke set plus rim, centered on the origin
#[derive(Debug, Clone, PartialEq)]
pub struct Emblem {
    spokes: Vec<Spoke>,
    rim_radius: f32,
    rim_width: f32,
    spoke_width: f32,
}

impl Emblem {
    pub fn new(style: &EmblemStyle) -> Self {
        let inner_r = style.spoke_distance - style.spoke_length * 0.5;
        let outer_r = style.spoke_distance + style.spoke_length * 0.5;

        let spokes = (0..SPOKE_COUNT)
            .map(|i| {
                let angle_degrees = i as f32 * SPOKE_STEP_DEGREES;
                let dir = direction(angle_degrees);
                Spoke {
                    angle_degrees,
                    inner: dir * inner_r,
                    outer: dir * outer_r,
                }
            })
            .collect();

        Self {
            spokes,
            rim_radius: style.rim_radius,
            rim_width: style.rim_width,
            spoke_width: style.spoke_width,
        }
    }

    /// Uniformly scaled copy (stroke widths included)
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            spokes: self
                .spokes
                .iter()
                .map(|s| Spoke {
                    angle_degrees: s.angle_degrees,
                    inner: s.inner * factor,
                    outer: s.outer * factor,
                })
                .collect(),
            rim_radius: self.rim_radius * factor,
            rim_width: self.rim_width * factor,
            spoke_width: self.spoke_width * factor,
        }
    }

    pub fn spokes(&self) -> &[Spoke] {
        &self.spokes
    }

    pub fn rim_radius(&self) -> f32 {
        self.rim_radius
    }

    pub fn rim_width(&self) -> f32 {
        self.rim_width
    }

    pub fn spoke_width(&self) -> f32 {
        self.spoke_width
    }

    /// Furthest extent from the center, strokes included
    pub fn extent(&self) -> f32 {
        let spokes = self
            .spokes
            .iter()
            .map(|s| s.outer.length() + self.spoke_width * 0.5)
            .fold(0.0f32, f32::max);
        spokes.max(self.rim_radius + self.rim_width * 0.5)
    }

    /// Closed rim polyline with `segments` sides (first point repeated at the end)
    pub fn rim_points(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(3);
        (0..=segments)
            .map(|i| {
                let a = i as f32 / segments as f32 * TAU;
                vec2(a.sin(), -a.cos()) * self.rim_radius
            })
            .collect()
    }
}

/// Unit vector `degrees` clockwise from straight up (screen coordinates)
fn direction(degrees: f32) -> Vec2 {
    let r = degrees.to_radians();
    vec2(r.sin(), -r.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emblem() -> Emblem {
        Emblem::new(&EmblemStyle::default())
    }

    #[test]
    fn test_has_24_spokes() {
        assert_eq!(emblem().spokes().len(), 24);
        assert_eq!(SPOKE_STEP_DEGREES, 15.0);
    }

    #[test]
    fn test_spokes_evenly_spaced() {
        let e = emblem();
        let spokes = e.spokes();
        for i in 0..spokes.len() {
            let a = spokes[i];
            let b = spokes[(i + 1) % spokes.len()];
            let cos = a.outer.normalize().dot(b.outer.normalize());
            let degrees = cos.clamp(-1.0, 1.0).acos().to_degrees();
            assert!((degrees - 15.0).abs() < 0.01, "spoke {} -> {}", i, degrees);
        }
    }

    #[test]
    fn test_spoke_geometry() {
        let e = emblem();
        for spoke in e.spokes() {
            assert!((spoke.length() - 15.0).abs() < 1e-3);
            let mid = (spoke.inner + spoke.outer) * 0.5;
            assert!((mid.length() - 25.0).abs() < 1e-3);
        }
        // First spoke points straight up
        let first = e.spokes()[0];
        assert!(first.outer.x.abs() < 1e-5);
        assert!(first.outer.y < 0.0);
        // Quarter turn lands on the right
        let quarter = e.spokes()[6];
        assert!(quarter.outer.x > 0.0);
        assert!(quarter.outer.y.abs() < 1e-4);
    }

    #[test]
    fn test_rim_points_closed() {
        let rim = emblem().rim_points(48);
        assert_eq!(rim.len(), 49);
        assert!((rim[0] - rim[48]).length() < 1e-4);
        assert!(rim.iter().all(|p| (p.length() - 25.0).abs() < 1e-3));
    }

    #[test]
    fn test_scaled() {
        let e = emblem().scaled(2.0);
        assert_eq!(e.rim_radius(), 50.0);
        assert_eq!(e.spoke_width(), 4.0);
        assert!((e.spokes()[3].length() - 30.0).abs() < 1e-3);
        assert!((e.extent() - (65.0 + 2.0)).abs() < 1e-3);
    }
}
