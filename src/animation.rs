//! Repeating animation cycles
//!
//! A [`Cycle`] maps elapsed seconds to a value between `from` and `to`.
//! Nothing is stored per frame: the scene asks for the value at the current
//! frame time and derives every visual from it.

use std::f32::consts::TAU;

/// How a cycle continues after reaching `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Jump back to `from` and run again
    Restart,
    /// Run backwards to `from`, then forwards again
    Reverse,
}

/// Timing curve applied to linear progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.42, 0, 0.58, 1)
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a unit cubic Bézier timing curve at x = `t`
///
/// Solves x(s) = t with Newton steps, falling back to bisection when the
/// slope is too flat, then returns y(s).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    let mut s = t;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            return bezier(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bezier(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier(y1, y2, s)
}

/// An endlessly repeating animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    pub from: f32,
    pub to: f32,
    /// Seconds from `from` to `to`
    pub duration: f32,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Cycle {
    /// Cloth wave phase: linear 0 -> 2π, restarting
    pub fn wave(duration: f32) -> Self {
        Self {
            from: 0.0,
            to: TAU,
            duration,
            easing: Easing::Linear,
            repeat: Repeat::Restart,
        }
    }

    /// Caption pulse: eased 0 -> 1, reversing
    pub fn pulse(duration: f32) -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            duration,
            easing: Easing::EaseInOut,
            repeat: Repeat::Reverse,
        }
    }

    /// Linear progress through the current leg, 0..1
    pub fn progress(&self, elapsed: f32) -> f32 {
        if !(self.duration > 0.0) {
            return 1.0;
        }
        let cycles = elapsed.max(0.0) / self.duration;
        let leg = cycles.floor();
        let t = cycles - leg;
        match self.repeat {
            Repeat::Restart => t,
            Repeat::Reverse => {
                if (leg as u64) % 2 == 1 {
                    1.0 - t
                } else {
                    t
                }
            }
        }
    }

    pub fn value(&self, elapsed: f32) -> f32 {
        let t = self.easing.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * t
    }
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_wave_phase_linear() {
        let wave = Cycle::wave(2.0);
        assert_eq!(wave.value(0.0), 0.0);
        assert!((wave.value(1.0) - PI).abs() < 1e-5);
        assert!((wave.value(0.5) - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_wave_restarts() {
        let wave = Cycle::wave(2.0);
        assert!(wave.value(2.0).abs() < 1e-5);
        assert!((wave.value(3.0) - PI).abs() < 1e-4);
        assert!(wave.value(1.999) < TAU);
    }

    #[test]
    fn test_pulse_reverses() {
        let pulse = Cycle::pulse(1.5);
        assert_eq!(pulse.value(0.0), 0.0);
        assert!((pulse.value(1.5) - 1.0).abs() < 1e-5);
        // Peak just before the turn, back at rest after two legs
        assert!(pulse.value(1.49) > 0.99);
        assert!(pulse.value(1.51) > 0.99);
        assert!(pulse.value(3.0) < 1e-4);
        assert!((pulse.value(0.75) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_reverse_is_symmetric() {
        let pulse = Cycle::pulse(1.0);
        for i in 0..10 {
            let t = i as f32 * 0.1;
            assert!((pulse.value(t) - pulse.value(2.0 - t)).abs() < 1e-4, "t = {}", t);
        }
    }

    #[test]
    fn test_negative_time_clamped() {
        let wave = Cycle::wave(2.0);
        assert_eq!(wave.value(-5.0), 0.0);
    }

    #[test]
    fn test_ease_in_out_shape() {
        let e = Easing::EaseInOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-4);
        // Slow start
        assert!(e.apply(0.1) < 0.1);
        // Monotonic and symmetric
        let mut last = 0.0;
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let v = e.apply(t);
            assert!(v >= last - 1e-6);
            assert!((v + e.apply(1.0 - t) - 1.0).abs() < 1e-3);
            last = v;
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.7, 1.0, 0.0), 0.7);
        assert!((lerp(1.0, 1.1, 0.5) - 1.05).abs() < 1e-6);
    }
}
