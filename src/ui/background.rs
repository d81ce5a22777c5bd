//! Vertical three-stop gradient behind the scene

use macroquad::prelude::*;

use super::{mix, rgb, Rect};
use crate::config::Palette;

/// Height of one gradient row in screen pixels
const ROW_HEIGHT: f32 = 2.0;

/// Gradient stops top to bottom, taken from the flag bands
pub fn gradient_stops(palette: &Palette) -> [Color; 3] {
    [rgb(palette.band_top), rgb(palette.band_middle), rgb(palette.band_bottom)]
}

/// Color at `t` (0 = top, 1 = bottom), stops evenly spaced
pub fn gradient_color_at(stops: &[Color; 3], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        mix(stops[0], stops[1], t * 2.0)
    } else {
        mix(stops[1], stops[2], (t - 0.5) * 2.0)
    }
}

/// Fill `rect` with the gradient
pub fn draw_gradient(rect: Rect, stops: &[Color; 3]) {
    if rect.h <= 0.0 {
        return;
    }
    let mut y = rect.y;
    while y < rect.bottom() {
        let h = ROW_HEIGHT.min(rect.bottom() - y);
        let t = (y + h * 0.5 - rect.y) / rect.h;
        draw_rectangle(rect.x, y, rect.w, h, gradient_color_at(stops, t));
        y += ROW_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_stops() {
        let stops = gradient_stops(&Palette::default());
        assert_eq!(gradient_color_at(&stops, 0.0), stops[0]);
        assert_eq!(gradient_color_at(&stops, 0.5), stops[1]);
        let bottom = gradient_color_at(&stops, 1.0);
        assert!((bottom.g - stops[2].g).abs() < 1e-5);
        assert!((bottom.r - stops[2].r).abs() < 1e-5);
        assert_eq!(gradient_color_at(&stops, -3.0), stops[0]);
    }
}
