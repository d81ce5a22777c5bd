//! Flag rendering
//!
//! Draws composed flag geometry with macroquad. Geometry stays in flag-local
//! logical pixels; a [`Placement`] maps it onto the screen.

use macroquad::prelude::*;

use super::{ComposedFlag, FlagSize, Outline};
use crate::ui::rgba;

/// Shadow blur approximation: number of stacked silhouettes
const SHADOW_LAYERS: usize = 4;

/// Where flag-local coordinates land on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: Vec2,
    pub scale: f32,
}

impl Placement {
    pub fn new(origin: Vec2, scale: f32) -> Self {
        Self { origin, scale }
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.origin + p * self.scale
    }
}

/// Visible cloth per column: the outline span clamped to the flag rect
pub fn silhouette_columns(size: FlagSize, outline: &Outline) -> Vec<(f32, f32, f32)> {
    outline
        .columns()
        .map(|(x, top, bottom)| {
            let top = top.clamp(0.0, size.height);
            let bottom = bottom.clamp(top, size.height);
            (x, top, bottom)
        })
        .collect()
}

fn draw_quad(corners: [Vec2; 4], color: Color) {
    draw_triangle(corners[0], corners[1], corners[2], color);
    draw_triangle(corners[0], corners[2], corners[3], color);
}

/// Bands and emblem
pub fn draw_flag(flag: &ComposedFlag, at: Placement, opacity: f32) {
    for strip in &flag.strips {
        let corners = strip.corners().map(|p| at.apply(p));
        draw_quad(corners, rgba(strip.color, opacity));
    }

    let emblem_color = rgba(flag.emblem_color, opacity);
    for line in &flag.emblem_lines {
        let from = at.apply(line.from);
        let to = at.apply(line.to);
        draw_line(from.x, from.y, to.x, to.y, line.width * at.scale, emblem_color);
    }
}

/// Stroke the full outline path
pub fn draw_border(outline: &Outline, at: Placement, width: f32, color: Color) {
    for seg in outline.points().windows(2) {
        let a = at.apply(seg[0]);
        let b = at.apply(seg[1]);
        draw_line(a.x, a.y, b.x, b.y, width * at.scale, color);
    }
}

/// Soft shadow around the visible cloth
///
/// Stacks progressively larger, fainter silhouettes; total opacity matches `color.a`.
pub fn draw_shadow(size: FlagSize, outline: &Outline, at: Placement, radius: f32, color: Color) {
    let columns = silhouette_columns(size, outline);
    let layer_alpha = color.a / SHADOW_LAYERS as f32;
    let layer_color = Color::new(color.r, color.g, color.b, layer_alpha);

    for layer in 1..=SHADOW_LAYERS {
        let spread = radius * layer as f32 / SHADOW_LAYERS as f32;
        let last = columns.len().saturating_sub(2);
        for (i, pair) in columns.windows(2).enumerate() {
            let (x0, top0, bottom0) = pair[0];
            let (x1, top1, bottom1) = pair[1];
            let left = if i == 0 { x0 - spread } else { x0 };
            let right = if i == last { x1 + spread } else { x1 };
            let corners = [
                vec2(left, top0 - spread),
                vec2(right, top1 - spread),
                vec2(right, bottom1 + spread),
                vec2(left, bottom0 + spread),
            ];
            draw_quad(corners.map(|p| at.apply(p)), layer_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::{outline, WaveParams};

    #[test]
    fn test_placement() {
        let at = Placement::new(vec2(100.0, 50.0), 0.5);
        assert_eq!(at.apply(vec2(20.0, 10.0)), vec2(110.0, 55.0));
    }

    #[test]
    fn test_silhouette_inside_rect() {
        let size = FlagSize::new(280.0, 180.0);
        let params = WaveParams::for_width(size.width).unwrap();
        let o = outline(size, &params, 0.7);
        let columns = silhouette_columns(size, &o);
        assert_eq!(columns.len(), o.samples());
        for (_, top, bottom) in columns {
            assert!(top >= 0.0 && bottom <= size.height);
            // The wave trims at most one amplitude off the cloth
            assert!(bottom - top >= size.height - params.amplitude() - 1e-3);
        }
    }
}
