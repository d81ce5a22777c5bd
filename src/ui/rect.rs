//! Rectangle type for scene layout

use macroquad::math::{vec2, Vec2};

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Rectangle of the given size centered on a point
    pub fn centered_at(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w * 0.5, center.y - h * 0.5, w, h)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.center_x(), self.center_y())
    }

    pub fn top_left(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// Check if another rectangle lies fully inside (edges included)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right() + 1e-3
            && other.bottom() <= self.bottom() + 1e-3
    }

    /// Map into another space: `origin + self * scale`
    pub fn transformed(&self, origin: Vec2, scale: f32) -> Self {
        Self::new(
            origin.x + self.x * scale,
            origin.y + self.y * scale,
            self.w * scale,
            self.h * scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_at() {
        let r = Rect::centered_at(vec2(50.0, 40.0), 20.0, 10.0);
        assert_eq!(r, Rect::new(40.0, 35.0, 20.0, 10.0));
        assert_eq!(r.center(), vec2(50.0, 40.0));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 90.0, 40.0)));
        assert!(!outer.contains_rect(&Rect::new(-1.0, 10.0, 10.0, 10.0)));
        assert!(!outer.contains_rect(&Rect::new(10.0, 10.0, 10.0, 41.0)));
    }

    #[test]
    fn test_transformed() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0).transformed(vec2(5.0, 5.0), 0.5);
        assert_eq!(r, Rect::new(10.0, 15.0, 15.0, 20.0));
    }
}
