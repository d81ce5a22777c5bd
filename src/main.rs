//! Tiranga: a waving flag for Republic Day
//!
//! A single full-screen scene:
//! - Saffron / white / green gradient background
//! - Flag on a pole, the cloth rippling with a sine wave
//! - 24-spoke emblem in the middle band
//! - Pulsing "Happy Republic Day" caption

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod animation;
mod config;
mod flag;
mod scene;
mod ui;

use macroquad::prelude::*;
use config::SceneConfig;
use scene::SceneDriver;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Tiranga v{}", VERSION),
        window_width: 600,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Load the caption font named in the config, if any
async fn load_caption_font(config: &SceneConfig) -> Option<Font> {
    let path = config.caption_font.as_ref()?;
    match load_ttf_font(&path.to_string_lossy()).await {
        Ok(font) => {
            println!("Loaded caption font {}", path.display());
            Some(font)
        }
        Err(e) => {
            println!("Failed to load caption font {}: {}, using default font", path.display(), e);
            None
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = config::load_or_default();
    let font = load_caption_font(&config).await;

    let driver = match SceneDriver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Invalid scene config: {}, falling back to defaults", e);
            match SceneDriver::new(SceneConfig::default()) {
                Ok(driver) => driver,
                Err(e) => {
                    eprintln!("Default scene config rejected: {}", e);
                    return;
                }
            }
        }
    };
    let mut driver = driver.with_caption_font(font);

    println!("=== TIRANGA v{} ===", VERSION);
    println!("Caption: {}", driver.config().caption);

    loop {
        driver.update(get_time());
        driver.draw(ui::Rect::screen(screen_width(), screen_height()));
        next_frame().await;
    }
}
