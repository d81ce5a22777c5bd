//! Flag composition
//!
//! Three equal bands with the emblem centered in the middle one, clipped to
//! the wave outline. The result is plain geometry in flag-local coordinates
//! (origin at the top-left of the flag rect) so it can be checked without a
//! window and drawn by `render`.

use macroquad::math::{vec2, Vec2};

use super::{Emblem, FlagSize, Outline};
use crate::config::{EmblemStyle, Palette};

/// Flag height the emblem style is tuned for
const REFERENCE_HEIGHT: f32 = 180.0;

/// Pieces per spoke when clipping against the outline
const SPOKE_PIECES: usize = 4;

/// Rim polyline resolution
const RIM_SEGMENTS: usize = 48;

/// One clipped band trapezoid between two adjacent outline columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandStrip {
    pub x0: f32,
    pub x1: f32,
    pub top0: f32,
    pub bottom0: f32,
    pub top1: f32,
    pub bottom1: f32,
    pub color: [u8; 3],
}

impl BandStrip {
    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            vec2(self.x0, self.top0),
            vec2(self.x1, self.top1),
            vec2(self.x1, self.bottom1),
            vec2(self.x0, self.bottom0),
        ]
    }
}

/// A stroked piece of the emblem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmblemLine {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
}

/// Bands and emblem after clipping
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedFlag {
    pub strips: Vec<BandStrip>,
    pub emblem_lines: Vec<EmblemLine>,
    pub emblem_color: [u8; 3],
}

/// Vertical extent `(top, bottom)` of each band, top to bottom
pub fn band_bounds(size: FlagSize) -> [(f32, f32); 3] {
    let third = size.height / 3.0;
    [(0.0, third), (third, third * 2.0), (third * 2.0, size.height)]
}

/// Emblem center: middle of the middle band
pub fn emblem_center(size: FlagSize) -> Vec2 {
    let [_, (top, bottom), _] = band_bounds(size);
    vec2(size.width * 0.5, (top + bottom) * 0.5)
}

/// Emblem sized for this flag
///
/// Fixed logical size unless the style asks to follow the flag height.
pub fn emblem_for(size: FlagSize, style: &EmblemStyle) -> Emblem {
    let emblem = Emblem::new(style);
    if style.scale_with_flag {
        emblem.scaled(size.height / REFERENCE_HEIGHT)
    } else {
        emblem
    }
}

/// Clip the bands and emblem to `outline`
pub fn compose(size: FlagSize, outline: &Outline, emblem: &Emblem, palette: &Palette) -> ComposedFlag {
    let bands = band_bounds(size);
    let colors = [palette.band_top, palette.band_middle, palette.band_bottom];

    let columns: Vec<(f32, f32, f32)> = outline.columns().collect();
    let mut strips = Vec::with_capacity(columns.len() * 3);

    for pair in columns.windows(2) {
        let (x0, col_top0, col_bottom0) = pair[0];
        let (x1, col_top1, col_bottom1) = pair[1];
        if x1 <= x0 {
            continue;
        }

        for (&(band_top, band_bottom), &color) in bands.iter().zip(colors.iter()) {
            let top0 = band_top.max(col_top0);
            let bottom0 = band_bottom.min(col_bottom0);
            let top1 = band_top.max(col_top1);
            let bottom1 = band_bottom.min(col_bottom1);

            if top0 >= bottom0 && top1 >= bottom1 {
                continue;
            }

            strips.push(BandStrip {
                x0,
                x1,
                top0,
                bottom0: bottom0.max(top0),
                top1,
                bottom1: bottom1.max(top1),
                color,
            });
        }
    }

    ComposedFlag {
        strips,
        emblem_lines: clip_emblem(size, outline, emblem),
        emblem_color: palette.emblem,
    }
}

/// Emblem strokes as short pieces; pieces leaving the outline are dropped
fn clip_emblem(size: FlagSize, outline: &Outline, emblem: &Emblem) -> Vec<EmblemLine> {
    let center = emblem_center(size);
    let mut lines = Vec::with_capacity(emblem.spokes().len() * SPOKE_PIECES + RIM_SEGMENTS);

    let mut push_piece = |from: Vec2, to: Vec2, width: f32| {
        let (from, to) = (from + center, to + center);
        if outline.contains((from + to) * 0.5) {
            lines.push(EmblemLine { from, to, width });
        }
    };

    let rim = emblem.rim_points(RIM_SEGMENTS);
    for seg in rim.windows(2) {
        push_piece(seg[0], seg[1], emblem.rim_width());
    }

    for spoke in emblem.spokes() {
        let step = (spoke.outer - spoke.inner) / SPOKE_PIECES as f32;
        for i in 0..SPOKE_PIECES {
            let from = spoke.inner + step * i as f32;
            push_piece(from, from + step, emblem.spoke_width());
        }
    }

    lines
}
