//! Page background composition: color, opacity, and image layers.
//!
//! The color and opacity controls always compose into a single rgba value;
//! the image layer sits independently underneath it and is either a data URI
//! or the literal `"none"` after a clear (never an empty string, which the
//! host surface would ignore).

use crate::style::{InlineStyle, Rgb};

/// Default page background color.
pub const DEFAULT_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Default opacity percentage.
pub const DEFAULT_OPACITY: u8 = 100;

/// Accumulated background state for the page.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundState {
    pub color: Rgb,
    /// Opacity percentage, clamped to 0..=100.
    pub opacity: u8,
    /// Active image data URI, if any.
    pub image: Option<String>,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            opacity: DEFAULT_OPACITY,
            image: None,
        }
    }
}

impl BackgroundState {
    /// The composed rgba background color.
    pub fn composite(&self) -> String {
        self.color.rgba(f64::from(self.opacity) / 100.0)
    }

    /// The readout text for the opacity control, e.g. `"50%"`.
    pub fn opacity_label(&self) -> String {
        format!("{}%", self.opacity)
    }

    /// Apply color/opacity control values and produce the page patch.
    ///
    /// Each input is applied only when present and valid; either way the
    /// patch re-emits the composed color so both controls stay in sync.
    pub fn adjust(&mut self, color_raw: Option<&str>, opacity_raw: Option<&str>) -> InlineStyle {
        if let Some(color) = color_raw.and_then(Rgb::parse_hex) {
            self.color = color;
        }
        if let Some(opacity) = opacity_raw.and_then(|s| s.trim().parse::<i64>().ok()) {
            self.opacity = opacity.clamp(0, 100) as u8;
        }

        let mut patch = InlineStyle::new();
        patch.background_color = Some(self.composite());
        patch
    }

    /// Install a background image and produce the page patch.
    ///
    /// The image always covers the page and is centered.
    pub fn set_image(&mut self, data_uri: impl Into<String>) -> InlineStyle {
        let data_uri = data_uri.into();
        let mut patch = InlineStyle::new();
        patch.background_image = Some(format!("url({data_uri})"));
        patch.background_size = Some("cover".to_owned());
        patch.background_position = Some("center".to_owned());
        self.image = Some(data_uri);
        patch
    }

    /// Remove the background image.
    ///
    /// Emits the literal `"none"` so the patch overrides the previously set
    /// `url(...)` value instead of leaving it in place.
    pub fn clear_image(&mut self) -> InlineStyle {
        self.image = None;
        let mut patch = InlineStyle::new();
        patch.background_image = Some("none".to_owned());
        patch
    }
}
