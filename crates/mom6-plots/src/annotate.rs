//! The credit mark stamped onto finished plots.

use plot_common::Color;
use renderer::{HAlign, Surface, TextArtist, TextCoords, VAlign};
use serde::{Deserialize, Serialize};

pub const CREDIT_TEXT: &str = "Made with ❤️ at m2lines";

/// Text and placement of the credit mark.
///
/// Position is in axes-relative coordinates; the default sits below and to
/// the left of the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f32,
    #[serde(with = "crate::config::color_spec")]
    pub color: Color,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            text: CREDIT_TEXT.to_string(),
            x: -0.1,
            y: -0.2,
            font_size: 10.0,
            color: Color::BLACK,
        }
    }
}

/// Add the credit mark to a surface.
pub fn stamp_credit(surface: &Surface, config: &BrandingConfig) {
    surface.borrow_mut().add_text(TextArtist {
        x: config.x,
        y: config.y,
        text: config.text.clone(),
        coords: TextCoords::Axes,
        ha: HAlign::Left,
        va: VAlign::Bottom,
        font_size: config.font_size,
        color: config.color,
    });
}

/// True when the surface carries a text artist with the configured credit.
pub fn has_credit(surface: &Surface, config: &BrandingConfig) -> bool {
    surface
        .borrow()
        .texts()
        .any(|t| t.text == config.text && t.coords == TextCoords::Axes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mark() {
        let surface = Surface::default();
        let config = BrandingConfig::default();
        stamp_credit(&surface, &config);

        let axes = surface.borrow();
        let text = axes.texts().next().unwrap();
        assert_eq!(text.text, "Made with ❤️ at m2lines");
        assert_eq!((text.x, text.y), (-0.1, -0.2));
        assert_eq!((text.ha, text.va), (HAlign::Left, VAlign::Bottom));
        assert_eq!(text.font_size, 10.0);
        drop(axes);
        assert!(has_credit(&surface, &config));
    }

    #[test]
    fn test_custom_text() {
        let surface = Surface::default();
        let config = BrandingConfig {
            text: "lab".into(),
            ..Default::default()
        };
        stamp_credit(&surface, &config);
        assert!(has_credit(&surface, &config));
        assert!(!has_credit(&surface, &BrandingConfig::default()));
    }
}
