//! Text drawing with an embedded font.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use plot_common::{Color, PlotError, PlotResult};
use rusttype::{point, Font, Scale};

use crate::axes::{HAlign, VAlign};

/// Embedded font data - DejaVu Sans Mono
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

pub fn load_font() -> PlotResult<Font<'static>> {
    Font::try_from_bytes(FONT_DATA)
        .ok_or_else(|| PlotError::RenderError("embedded font could not be parsed".to_string()))
}

/// Pixel scale for a font size given in points.
pub fn scale_for(font_size: f32, dpi: f32) -> Scale {
    Scale::uniform((font_size * dpi / 72.0).max(1.0))
}

/// Advance width and line height of one line of text, in pixels.
pub fn text_extent(font: &Font, scale: Scale, text: &str) -> (i32, i32) {
    let v_metrics = font.v_metrics(scale);
    let width = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);
    (
        width.ceil() as i32,
        (v_metrics.ascent - v_metrics.descent).ceil() as i32,
    )
}

pub fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

/// Draw a line of text with its alignment point at pixel (x, y).
#[allow(clippy::too_many_arguments)]
pub fn draw_aligned(
    img: &mut RgbaImage,
    font: &Font,
    scale: Scale,
    text: &str,
    x: f32,
    y: f32,
    ha: HAlign,
    va: VAlign,
    color: Color,
) {
    if text.is_empty() || !x.is_finite() || !y.is_finite() {
        return;
    }

    let (width, height) = text_extent(font, scale, text);
    let left = match ha {
        HAlign::Left => x,
        HAlign::Center => x - width as f32 / 2.0,
        HAlign::Right => x - width as f32,
    };
    // draw_text_mut places the top of the line box at y
    let top = match va {
        VAlign::Top => y,
        VAlign::Center => y - height as f32 / 2.0,
        VAlign::Bottom => y - height as f32,
        VAlign::Baseline => y - font.v_metrics(scale).ascent,
    };

    draw_text_mut(
        img,
        rgba(color),
        left.round() as i32,
        top.round() as i32,
        scale,
        font,
        text,
    );
}
