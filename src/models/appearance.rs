//! Appearance model
//!
//! The translator treats [`Appearance`] as an opaque value and hands it to
//! the SDK untouched. Hosts usually describe it with hex color strings, so
//! [`AppearanceConfig`] resolves those into concrete colors.

use serde::{Deserialize, Serialize};

/// Opaque RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };
    pub const WHITE: Color = Color {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Build an opaque color from a packed `0xRRGGBB` value
    pub fn from_rgb(rgb: u32) -> Self {
        let mask = 0xff;
        Color {
            red: ((rgb >> 16) & mask) as f64 / 255.0,
            green: ((rgb >> 8) & mask) as f64 / 255.0,
            blue: (rgb & mask) as f64 / 255.0,
            alpha: 1.0,
        }
    }

    /// Parse a hex color such as `#353FF4` or `353FF4`.
    ///
    /// `None` yields `fallback`. Leading hex digits are consumed until the
    /// first non-hex character; text with no hex digits yields black, and
    /// values wider than 32 bits saturate.
    pub fn from_hex(hex: Option<&str>, fallback: Color) -> Color {
        let Some(hex) = hex else {
            return fallback;
        };

        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let hex = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);

        let mut value: u32 = 0;
        for digit in hex.chars().map_while(|c| c.to_digit(16)) {
            value = match value.checked_mul(16).and_then(|v| v.checked_add(digit)) {
                Some(v) => v,
                None => u32::MAX,
            };
        }

        Color::from_rgb(value)
    }

    /// Packed `0xRRGGBB` representation
    pub fn to_rgb(&self) -> u32 {
        let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u32;
        (channel(self.red) << 16) | (channel(self.green) << 8) | channel(self.blue)
    }
}

/// Resolved appearance passed through to the SDK
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub primary_color: Color,
    pub primary_title_color: Color,
    pub primary_background_pressed_color: Color,
    pub secondary_title_color: Color,
    pub secondary_background_pressed_color: Color,
    pub button_corner_radius: f64,
    pub font_regular: Option<String>,
    pub font_bold: Option<String>,
    pub support_dark_mode: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance {
            primary_color: Color::from_rgb(0x353FF4),
            primary_title_color: Color::WHITE,
            primary_background_pressed_color: Color::from_rgb(0x232AAD),
            secondary_title_color: Color::BLACK,
            secondary_background_pressed_color: Color::from_rgb(0xE8E9F5),
            button_corner_radius: 5.0,
            font_regular: None,
            font_bold: None,
            support_dark_mode: true,
        }
    }
}

/// Host-provided appearance description using hex strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceConfig {
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub primary_title_color: Option<String>,
    #[serde(default)]
    pub primary_background_pressed_color: Option<String>,
    #[serde(default)]
    pub secondary_title_color: Option<String>,
    #[serde(default)]
    pub secondary_background_pressed_color: Option<String>,
    #[serde(default)]
    pub button_corner_radius: Option<f64>,
    #[serde(default)]
    pub font_regular: Option<String>,
    #[serde(default)]
    pub font_bold: Option<String>,
    #[serde(default)]
    pub support_dark_mode: Option<bool>,
}

impl AppearanceConfig {
    /// Resolve hex strings into colors, falling back to [`Appearance::default`]
    pub fn resolve(&self) -> Appearance {
        let defaults = Appearance::default();
        Appearance {
            primary_color: Color::from_hex(self.primary_color.as_deref(), defaults.primary_color),
            primary_title_color: Color::from_hex(
                self.primary_title_color.as_deref(),
                defaults.primary_title_color,
            ),
            primary_background_pressed_color: Color::from_hex(
                self.primary_background_pressed_color.as_deref(),
                defaults.primary_background_pressed_color,
            ),
            secondary_title_color: Color::from_hex(
                self.secondary_title_color.as_deref(),
                defaults.secondary_title_color,
            ),
            secondary_background_pressed_color: Color::from_hex(
                self.secondary_background_pressed_color.as_deref(),
                defaults.secondary_background_pressed_color,
            ),
            button_corner_radius: self
                .button_corner_radius
                .unwrap_or(defaults.button_corner_radius),
            font_regular: self.font_regular.clone(),
            font_bold: self.font_bold.clone(),
            support_dark_mode: self.support_dark_mode.unwrap_or(defaults.support_dark_mode),
        }
    }
}
