// src/config.rs
use crate::error::{CvError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// A 24-bit color, written as `RRGGBB` in WordprocessingML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl TryFrom<String> for RgbColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("expected a RRGGBB color, got '{}'", value));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(RgbColor(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Branding and typography of the generated CV.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub header_color: RgbColor,
    pub text_color: RgbColor,
    pub heading_font: String,
    pub body_font: String,
    pub title_size_pt: f32,
    pub section_size_pt: f32,
    pub body_size_pt: f32,
    pub table_body_size_pt: f32,
    pub disclaimer_size_pt: f32,
    /// Numbering definition shared by every bullet; must exist in the template.
    pub bullet_num_id: u32,
    pub rule_width_pt: f32,
    pub rule_height_pt: f32,
    pub table_header_fill: RgbColor,
    pub table_zebra_fill: RgbColor,
    pub table_border_color: RgbColor,
    /// Column widths in twentieths of a point.
    pub table_column_widths: [u32; 2],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            header_color: RgbColor(225, 79, 79),
            text_color: RgbColor(55, 53, 53),
            heading_font: "Montserrat SemiBold".to_string(),
            body_font: "Montserrat".to_string(),
            title_size_pt: 24.0,
            section_size_pt: 14.0,
            body_size_pt: 10.0,
            table_body_size_pt: 9.0,
            disclaimer_size_pt: 5.0,
            bullet_num_id: 1,
            rule_width_pt: 448.6,
            rule_height_pt: 2.0,
            table_header_fill: RgbColor(0xE8, 0xE8, 0xE8),
            table_zebra_fill: RgbColor(0xF8, 0xF8, 0xF8),
            table_border_color: RgbColor(0xCC, 0xCC, 0xCC),
            // 1.8in and 5.0in
            table_column_widths: [2592, 7200],
        }
    }
}

/// Process-wide settings, loaded once in `main` and shared by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub style: StyleConfig,
    pub scratch_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            scratch_dir: std::env::temp_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `CV_SCRATCH_DIR` and `CV_STYLE_CONFIG`.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("CV_SCRATCH_DIR") {
            config.scratch_dir = PathBuf::from(dir);
        }

        if let Ok(style_path) = std::env::var("CV_STYLE_CONFIG") {
            config.style = Self::load_style(Path::new(&style_path))?;
        }

        info!(
            "Loaded configuration (scratch dir: {})",
            config.scratch_dir.display()
        );
        Ok(config)
    }

    pub fn with_scratch_dir(mut self, dir: PathBuf) -> Self {
        self.scratch_dir = dir;
        self
    }

    fn load_style(path: &Path) -> Result<StyleConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CvError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let style: StyleConfig = serde_yaml::from_str(&content).map_err(|e| {
            CvError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        info!("Loaded style overrides from {}", path.display());
        Ok(style)
    }
}

/// Font size in half-points, the unit of `w:sz`.
pub fn half_points(pt: f32) -> u32 {
    (pt * 2.0).round() as u32
}

/// Length in twentieths of a point, the unit of `w:spacing`.
pub fn twips(pt: f32) -> u32 {
    (pt * 20.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!(RgbColor::try_from("#e14f4f".to_string()), Ok(RgbColor(225, 79, 79)));
        assert_eq!(RgbColor(55, 53, 53).hex(), "373535");
        assert!(RgbColor::try_from("red".to_string()).is_err());
        assert!(RgbColor::try_from("12345G".to_string()).is_err());
    }

    #[test]
    fn test_partial_style_override() {
        let style: StyleConfig =
            serde_yaml::from_str("header_color: \"003366\"\nbody_size_pt: 11\n").unwrap();
        assert_eq!(style.header_color, RgbColor(0x00, 0x33, 0x66));
        assert_eq!(style.body_size_pt, 11.0);
        assert_eq!(style.body_font, "Montserrat");
        assert_eq!(style.bullet_num_id, 1);
    }

    #[test]
    fn test_units() {
        assert_eq!(half_points(24.0), 48);
        assert_eq!(half_points(5.0), 10);
        assert_eq!(twips(4.0), 80);
        assert_eq!(twips(1.5), 30);
    }
}
