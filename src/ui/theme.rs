//! Scene theme - shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Flag decoration
// =============================================================================

/// Faint border stroked along the outline
pub const BORDER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.1);

/// Border stroke width (logical pixels)
pub const BORDER_WIDTH: f32 = 1.0;

/// Drop shadow color at full strength
pub const SHADOW_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.33);

/// Drop shadow blur radius (logical pixels)
pub const SHADOW_RADIUS: f32 = 4.0;

// =============================================================================
// Caption
// =============================================================================

/// Mini flags next to the caption, relative to the caption font size
pub const CAPTION_FLAG_HEIGHT: f32 = 0.8;

/// Gap between the caption and each mini flag, relative to the font size
pub const CAPTION_FLAG_GAP: f32 = 0.35;

// =============================================================================
// Helpers
// =============================================================================

/// Palette RGB triple to a macroquad color
pub fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Palette RGB triple with opacity
pub fn rgba(c: [u8; 3], alpha: f32) -> Color {
    let mut color = rgb(c);
    color.a = alpha.clamp(0.0, 1.0);
    color
}

/// Linear blend between two colors
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_clamps_alpha() {
        assert_eq!(rgba([255, 0, 0], 2.0).a, 1.0);
        assert_eq!(rgba([255, 0, 0], 0.7).a, 0.7);
        assert_eq!(rgb([0, 0, 255]).b, 1.0);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color::new(1.0, 0.0, 0.0, 1.0);
        let b = Color::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert!((mix(a, b, 0.5).r - 0.5).abs() < 1e-6);
    }
}
