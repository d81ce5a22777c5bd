//! Scene driver
//!
//! Owns the two animation cycles (cloth wave and caption pulse) and draws the
//! whole screen each frame: gradient, pole, shadowed waving flag, pulsing
//! caption. Everything visible is re-derived from the current frame time, so
//! there is no retained per-frame state beyond the clock.

use macroquad::prelude::*;

use crate::animation::{lerp, Cycle};
use crate::config::{ConfigError, SceneConfig};
use crate::flag::{
    compose, draw_border, draw_flag, draw_shadow, emblem_for, outline, ComposedFlag, Emblem,
    FlagSize, Outline, Placement, WaveParams,
};
use crate::ui::{
    draw_gradient, gradient_stops, rgb, rgba, Rect, BORDER_COLOR, BORDER_WIDTH,
    CAPTION_FLAG_GAP, CAPTION_FLAG_HEIGHT, SHADOW_COLOR, SHADOW_RADIUS,
};

/// A flag at one size: geometry inputs that never change at runtime
#[derive(Debug, Clone)]
struct FlagModel {
    size: FlagSize,
    wave: WaveParams,
    emblem: Emblem,
}

impl FlagModel {
    fn frame(&self, config: &SceneConfig, phase: f32) -> SceneFrame {
        let outline = outline(self.size, &self.wave, phase);
        let flag = compose(self.size, &outline, &self.emblem, &config.palette);
        SceneFrame { outline, flag }
    }
}

/// Flag geometry for one frame
#[derive(Debug, Clone)]
pub struct SceneFrame {
    pub outline: Outline,
    pub flag: ComposedFlag,
}

/// Screen placement of every scene element
///
/// Content is laid out in logical pixels, centered, and uniformly scaled down
/// when the window is too small for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub scale: f32,
    #[allow(dead_code)]
    pub content: Rect,
    pub pole: Rect,
    pub flag: Rect,
    /// Center of the caption line (text plus mini flags) at rest
    pub caption_center: Vec2,
}

impl SceneLayout {
    /// `caption` is the caption line size in logical pixels at rest scale
    pub fn compute(screen: Rect, config: &SceneConfig, caption: Vec2) -> Self {
        let peak = config.pulse_scale.0.max(config.pulse_scale.1).max(1.0);
        let row_w = config.pole_width + config.flag_width;
        let row_h = config.pole_height.max(config.flag_height);

        let content_w = row_w.max(caption.x * peak);
        let content_h = row_h + config.caption_gap + caption.y * peak;

        let fit_w = if content_w > 0.0 { screen.w / content_w } else { 1.0 };
        let fit_h = if content_h > 0.0 { screen.h / content_h } else { 1.0 };
        let scale = fit_w.min(fit_h).min(1.0).max(0.0);

        let content = Rect::centered_at(screen.center(), content_w * scale, content_h * scale);
        let origin = content.top_left();

        // Pole + flag row is centered horizontally within the content
        let row_x = (content_w - row_w) * 0.5;
        let pole = Rect::new(row_x, 0.0, config.pole_width, config.pole_height);
        let flag = Rect::new(pole.right(), 0.0, config.flag_width, config.flag_height);
        let caption_center = vec2(content_w * 0.5, row_h + config.caption_gap + caption.y * peak * 0.5);

        Self {
            scale,
            content,
            pole: pole.transformed(origin, scale),
            flag: flag.transformed(origin, scale),
            caption_center: origin + caption_center * scale,
        }
    }
}

/// Drives the scene: both animation cycles plus everything drawn from them
pub struct SceneDriver {
    config: SceneConfig,
    flag: FlagModel,
    mini_flag: FlagModel,
    cloth: Cycle,
    pulse: Cycle,
    start: Option<f64>,
    elapsed: f32,
    caption_font: Option<Font>,
}

impl SceneDriver {
    /// Build a scene with both cycles at phase zero
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let size = FlagSize::new(config.flag_width, config.flag_height);
        let wave = WaveParams::new(config.wave_amplitude, config.wave_length(), config.sample_step)?;
        let flag = FlagModel {
            size,
            wave,
            emblem: emblem_for(size, &config.emblem),
        };

        // Caption flags: same proportions and ripple, shrunk to text height
        let mini_h = config.caption_size * CAPTION_FLAG_HEIGHT;
        let k = mini_h / config.flag_height;
        let mini_size = FlagSize::new(config.flag_width * k, mini_h);
        let mini_flag = FlagModel {
            size: mini_size,
            wave: WaveParams::new(
                config.wave_amplitude * k,
                config.wave_length() * k,
                (config.sample_step * k).max(0.25),
            )?,
            emblem: emblem_for(size, &config.emblem).scaled(k),
        };

        println!(
            "Scene: flag {}x{}, wave length {:.1}, amplitude {}",
            size.width,
            size.height,
            wave.wave_length(),
            wave.amplitude()
        );

        Ok(Self {
            cloth: Cycle::wave(config.wave_duration),
            pulse: Cycle::pulse(config.pulse_duration),
            config,
            flag,
            mini_flag,
            start: None,
            elapsed: 0.0,
            caption_font: None,
        })
    }

    /// Use a custom font for the caption
    pub fn with_caption_font(mut self, font: Option<Font>) -> Self {
        self.caption_font = font;
        self
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Advance the clock; the first call marks time zero
    pub fn update(&mut self, now: f64) {
        let start = *self.start.get_or_insert(now);
        self.elapsed = (now - start).max(0.0) as f32;
    }

    /// Seconds since the first update
    #[allow(dead_code)]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Cloth wave phase, 0..2π
    pub fn cloth_phase(&self) -> f32 {
        self.cloth.value(self.elapsed)
    }

    /// Caption pulse position, 0 (rest) ..1 (peak)
    pub fn pulse_value(&self) -> f32 {
        self.pulse.value(self.elapsed)
    }

    pub fn caption_scale(&self) -> f32 {
        let (rest, peak) = self.config.pulse_scale;
        lerp(rest, peak, self.pulse_value())
    }

    pub fn caption_opacity(&self) -> f32 {
        let (rest, peak) = self.config.pulse_opacity;
        lerp(rest, peak, self.pulse_value())
    }

    /// Main flag geometry at the current phase
    pub fn frame(&self) -> SceneFrame {
        self.flag.frame(&self.config, self.cloth_phase())
    }

    fn caption_font_size(&self, scale: f32) -> u16 {
        (self.config.caption_size * scale).round().max(1.0) as u16
    }

    /// Caption line size (logical pixels, rest scale): text plus a mini flag on each side
    fn caption_line_size(&self) -> Vec2 {
        let dims = measure_text(
            &self.config.caption,
            self.caption_font.as_ref(),
            self.caption_font_size(1.0),
            1.0,
        );
        let gap = self.config.caption_size * CAPTION_FLAG_GAP;
        let mini = self.mini_flag.size;
        let width = dims.width + 2.0 * (gap + mini.width);
        let height = dims.height.max(mini.height);
        vec2(width, height)
    }

    /// Draw the whole screen
    pub fn draw(&self, screen: Rect) {
        let caption_size = self.caption_line_size();
        let layout = SceneLayout::compute(screen, &self.config, caption_size);
        let palette = &self.config.palette;

        draw_gradient(screen, &gradient_stops(palette));

        draw_rectangle(layout.pole.x, layout.pole.y, layout.pole.w, layout.pole.h, rgb(palette.pole));

        let frame = self.frame();
        let at = Placement::new(layout.flag.top_left(), layout.scale);
        draw_shadow(self.flag.size, &frame.outline, at, SHADOW_RADIUS, SHADOW_COLOR);
        draw_flag(&frame.flag, at, 1.0);
        draw_border(&frame.outline, at, BORDER_WIDTH, BORDER_COLOR);

        self.draw_caption(&layout);
    }

    /// Pulsing caption, scaled about its center
    fn draw_caption(&self, layout: &SceneLayout) {
        let pulse_scale = self.caption_scale();
        let opacity = self.caption_opacity();
        let scale = layout.scale * pulse_scale;

        let font_size = self.caption_font_size(layout.scale);
        let dims = measure_text(&self.config.caption, self.caption_font.as_ref(), font_size, pulse_scale);

        let gap = self.config.caption_size * CAPTION_FLAG_GAP * scale;
        let mini = self.mini_flag.size;
        let mini_w = mini.width * scale;
        let mini_h = mini.height * scale;
        let line_w = dims.width + 2.0 * (gap + mini_w);

        let center = layout.caption_center;
        let left = center.x - line_w * 0.5;
        let baseline = center.y - dims.height * 0.5 + dims.offset_y;

        draw_text_ex(
            &self.config.caption,
            (left + mini_w + gap).round(),
            baseline.round(),
            TextParams {
                font: self.caption_font.as_ref(),
                font_size,
                font_scale: pulse_scale,
                color: rgba(self.config.palette.caption, opacity),
                ..Default::default()
            },
        );

        let mini_frame = self.mini_flag.frame(&self.config, self.cloth_phase());
        let mini_top = center.y - mini_h * 0.5;
        for x in [left, left + line_w - mini_w] {
            let at = Placement::new(vec2(x, mini_top), scale);
            draw_flag(&mini_frame.flag, at, opacity);
        }
    }
}
