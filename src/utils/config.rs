use serde::{Deserialize, Serialize};

use crate::render::Rgba;
use crate::types::{RenderError, Result};

/// Simple, focused configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chart style settings
    pub style: StyleConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Colors and stroke metrics of the rendered chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Label text size in pixels
    pub text_size: u32,

    /// Stroke width for axes and arrows
    pub line_width: f64,

    /// Stroke width for the hyperbola itself
    pub curve_width: f64,

    /// Radius of the reserve-point markers
    pub marker_radius: f64,

    pub axis_color: Rgba,
    pub curve_color: Rgba,
    pub text_color: Rgba,

    /// Fill for the current-state point
    pub current_marker_color: Rgba,

    /// Muted fill for the projected post-swap point
    pub projected_marker_color: Rgba,

    pub arrow_color: Rgba,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text_size: 12,
            line_width: 1.0,
            curve_width: 2.0,
            marker_radius: 5.0,
            axis_color: Rgba::BLACK,
            curve_color: Rgba::BLACK,
            text_color: Rgba::BLACK,
            current_marker_color: Rgba::rgb(0, 0, 255),
            projected_marker_color: Rgba::rgb(187, 187, 187),
            arrow_color: Rgba::rgb(0, 153, 0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

impl Config {
    pub fn style_config(&self) -> &StyleConfig {
        &self.style
    }

    pub fn logging_config(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Load config from file or use defaults
    pub fn load() -> Result<Self> {
        if let Ok(config) = Self::load_from_file("curve.toml") {
            return Ok(config);
        }

        let mut config = Self::default();
        config.apply_env_vars();
        Ok(config)
    }

    /// Load from TOML file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_vars(&mut self) {
        if let Ok(level) = std::env::var("CURVE_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.style.text_size == 0 {
            return Err(RenderError::Config("text_size must be positive".into()));
        }
        if self.style.marker_radius <= 0.0 {
            return Err(RenderError::Config("marker_radius must be positive".into()));
        }
        if self.style.line_width < 1.0 || self.style.curve_width < 1.0 {
            return Err(RenderError::Config(
                "stroke widths must be at least one pixel".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.style.text_size, 12);
        assert_eq!(config.style.current_marker_color, Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn test_style_round_trips_through_toml() -> Result<()> {
        let config = Config::default();
        let Ok(encoded) = toml::to_string(&config) else {
            panic!("encode failed");
        };
        let decoded: Config = toml::from_str(&encoded)?;
        assert_eq!(decoded.style.projected_marker_color, Rgba::rgb(187, 187, 187));
        assert_eq!(decoded.style.arrow_color.to_string(), "#009900");
        Ok(())
    }

    #[test]
    fn test_colors_parse_from_hex_strings() -> Result<()> {
        let config: Config = toml::from_str(
            r##"
            [style]
            text_size = 10
            line_width = 1.0
            curve_width = 2.0
            marker_radius = 4.0
            axis_color = "#000000"
            curve_color = "#000000"
            text_color = "#000000"
            current_marker_color = "#0000ff"
            projected_marker_color = "#bbbbbb"
            arrow_color = "#009900"

            [logging]
            level = "debug"
            "##,
        )?;
        assert_eq!(config.style.current_marker_color, Rgba::rgb(0, 0, 255));
        assert_eq!(config.logging.level, "debug");
        Ok(())
    }

    #[test]
    fn test_bad_metrics_rejected() {
        let mut config = Config::default();
        config.style.marker_radius = 0.0;
        assert!(config.validate().is_err());
        config = Config::default();
        config.style.curve_width = 0.5;
        assert!(config.validate().is_err());
    }
}
