//! Scene configuration
//!
//! Every tunable of the scene lives in [`SceneConfig`]. The defaults reproduce
//! the reference layout (280x180 flag on a 12x400 pole, 2s wave, 1.5s pulse).
//! A RON file can override any subset of fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "tiranga.ron";

/// Configuration error types
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Config file not found
    NotFound(String),
    /// I/O error while reading or writing
    Io(String),
    /// RON (de)serialization error
    Parse(String),
    /// Wave parameters that would make the outline undefined
    InvalidWave(String),
    /// Non-positive or non-finite size
    InvalidSize { what: &'static str, value: f32 },
    /// Non-positive or non-finite animation duration
    InvalidDuration { what: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(f, "config not found: {}", path),
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "failed to parse config: {}", msg),
            ConfigError::InvalidWave(msg) => write!(f, "invalid wave parameters: {}", msg),
            ConfigError::InvalidSize { what, value } => {
                write!(f, "invalid {}: {} (must be positive)", what, value)
            }
            ConfigError::InvalidDuration { what, value } => {
                write!(f, "invalid {} duration: {}s (must be positive)", what, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(e.to_string()),
            _ => ConfigError::Io(e.to_string()),
        }
    }
}

/// Flag colors (RGB 0-255)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Top band (saffron)
    pub band_top: [u8; 3],
    /// Middle band (white)
    pub band_middle: [u8; 3],
    /// Bottom band (green)
    pub band_bottom: [u8; 3],
    /// Emblem spokes and rim (navy)
    pub emblem: [u8; 3],
    /// Flag pole
    pub pole: [u8; 3],
    /// Caption text
    pub caption: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            band_top: [255, 149, 0],
            band_middle: [255, 255, 255],
            band_bottom: [52, 199, 89],
            emblem: [0, 122, 255],
            pole: [162, 132, 94],
            caption: [255, 255, 255],
        }
    }
}

/// Emblem geometry, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmblemStyle {
    /// Rim circle radius
    pub rim_radius: f32,
    /// Rim stroke width
    pub rim_width: f32,
    /// Length of one spoke
    pub spoke_length: f32,
    /// Distance from the emblem center to the middle of each spoke
    pub spoke_distance: f32,
    /// Spoke stroke width
    pub spoke_width: f32,
    /// Scale the emblem with the flag height instead of keeping it fixed
    pub scale_with_flag: bool,
}

impl Default for EmblemStyle {
    fn default() -> Self {
        Self {
            rim_radius: 25.0,
            rim_width: 4.0,
            spoke_length: 15.0,
            spoke_distance: 25.0,
            spoke_width: 2.0,
            scale_with_flag: false,
        }
    }
}

/// Full scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Flag cloth width
    pub flag_width: f32,
    /// Flag cloth height
    pub flag_height: f32,
    /// Vertical wave displacement
    pub wave_amplitude: f32,
    /// Number of full wave periods across the flag width
    pub waves_per_flag: f32,
    /// Horizontal distance between outline samples
    pub sample_step: f32,
    /// Pole width
    pub pole_width: f32,
    /// Pole height (also the height of the flag row)
    pub pole_height: f32,
    /// Caption text
    pub caption: String,
    /// Caption font size at rest
    pub caption_size: f32,
    /// Gap between the flag row and the caption
    pub caption_gap: f32,
    /// Optional TTF font for the caption
    pub caption_font: Option<PathBuf>,
    /// Seconds for one full cloth wave (phase 0 -> 2π)
    pub wave_duration: f32,
    /// Seconds for one caption pulse (rest -> peak)
    pub pulse_duration: f32,
    /// Caption scale at rest and peak
    pub pulse_scale: (f32, f32),
    /// Caption opacity at rest and peak
    pub pulse_opacity: (f32, f32),
    pub palette: Palette,
    pub emblem: EmblemStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            flag_width: 280.0,
            flag_height: 180.0,
            wave_amplitude: 10.0,
            waves_per_flag: 3.0,
            sample_step: 1.0,
            pole_width: 12.0,
            pole_height: 400.0,
            caption: "Happy Republic Day".to_string(),
            caption_size: 28.0,
            caption_gap: 20.0,
            caption_font: None,
            wave_duration: 2.0,
            pulse_duration: 1.5,
            pulse_scale: (1.0, 1.1),
            pulse_opacity: (0.7, 1.0),
            palette: Palette::default(),
            emblem: EmblemStyle::default(),
        }
    }
}

fn positive(what: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize { what, value })
    }
}

fn positive_duration(what: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration { what, value })
    }
}

impl SceneConfig {
    /// Wave length in logical pixels
    pub fn wave_length(&self) -> f32 {
        self.flag_width / self.waves_per_flag
    }

    /// Reject configurations the scene cannot render
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("flag width", self.flag_width)?;
        positive("flag height", self.flag_height)?;
        positive("pole width", self.pole_width)?;
        positive("pole height", self.pole_height)?;
        positive("caption size", self.caption_size)?;
        positive("emblem rim radius", self.emblem.rim_radius)?;
        positive_duration("wave", self.wave_duration)?;
        positive_duration("pulse", self.pulse_duration)?;

        if !(self.waves_per_flag.is_finite() && self.waves_per_flag > 0.0) {
            return Err(ConfigError::InvalidWave(format!(
                "waves_per_flag must be positive, got {}",
                self.waves_per_flag
            )));
        }
        if !self.wave_amplitude.is_finite() {
            return Err(ConfigError::InvalidWave(format!(
                "amplitude must be finite, got {}",
                self.wave_amplitude
            )));
        }
        if !(self.sample_step.is_finite() && self.sample_step > 0.0) {
            return Err(ConfigError::InvalidWave(format!(
                "sample_step must be positive, got {}",
                self.sample_step
            )));
        }
        Ok(())
    }
}

/// Save a config to a file in RON format
#[allow(dead_code)]
pub fn save_config(config: &SceneConfig, path: &Path) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Load and validate a config from a RON file
pub fn load_config(path: &Path) -> Result<SceneConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::NotFound(path.display().to_string()),
        _ => ConfigError::from(e),
    })?;

    load_config_from_str(&contents)
}

/// Load and validate a config from a RON string
pub fn load_config_from_str(contents: &str) -> Result<SceneConfig, ConfigError> {
    let config: SceneConfig =
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Candidate config locations, most specific first
#[cfg(not(target_arch = "wasm32"))]
fn config_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("tiranga").join(CONFIG_FILE_NAME));
    }
    paths
}

#[cfg(target_arch = "wasm32")]
fn config_candidates() -> Vec<PathBuf> {
    Vec::new()
}

/// Load the first config found, falling back to defaults
///
/// Never fails: a broken file is reported and skipped so the scene always starts.
pub fn load_or_default() -> SceneConfig {
    for path in config_candidates() {
        match load_config(&path) {
            Ok(config) => {
                println!("Loaded scene config from {}", path.display());
                return config;
            }
            Err(ConfigError::NotFound(_)) => continue,
            Err(e) => {
                eprintln!("Ignoring {}: {}", path.display(), e);
            }
        }
    }
    println!("Using default scene config");
    SceneConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_is_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.wave_length() - 280.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = SceneConfig::default();
        config.caption = "Jai Hind".to_string();
        config.wave_amplitude = 6.0;
        config.palette.pole = [10, 20, 30];

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = load_config_from_str("(flag_width: 360.0, pulse_duration: 3.0)").unwrap();
        assert_eq!(config.flag_width, 360.0);
        assert_eq!(config.pulse_duration, 3.0);
        assert_eq!(config.flag_height, 180.0);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config(&dir.path().join("nope.ron"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not valid ron data").unwrap();

        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_zero_wave_length() {
        let result = load_config_from_str("(waves_per_flag: 0.0)");
        assert!(matches!(result, Err(ConfigError::InvalidWave(_))));
    }

    #[test]
    fn test_rejects_bad_durations() {
        let mut config = SceneConfig::default();
        config.wave_duration = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDuration { what: "wave", .. })
        ));

        let mut config = SceneConfig::default();
        config.pulse_duration = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDuration { what: "pulse", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let mut config = SceneConfig::default();
        config.flag_height = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSize { what: "flag height", .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidDuration { what: "wave", value: 0.0 };
        assert_eq!(err.to_string(), "invalid wave duration: 0s (must be positive)");
    }
}
