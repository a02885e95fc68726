//! RGBA colors and matplotlib-style color specifications.

use serde::{Deserialize, Serialize};

/// Color value in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Opaque gray from a 0..1 level (0 = black, 1 = white).
    pub fn gray(level: f64) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(v, v, v, 255)
    }

    /// Parse a color specification.
    ///
    /// Accepts:
    /// - gray levels as decimal strings: `"0.3"`
    /// - hex strings: `"#RRGGBB"` or `"#RRGGBBAA"`
    /// - a small set of named colors: `"black"`, `"white"`, `"red"`, ...
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();

        if spec.starts_with('#') {
            return parse_hex_color(spec);
        }

        if let Ok(level) = spec.parse::<f64>() {
            if (0.0..=1.0).contains(&level) {
                return Some(Self::gray(level));
            }
            return None;
        }

        named_color(&spec.to_lowercase())
    }

    /// Linear interpolation between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp_u8 =
            |a: u8, b: u8| -> u8 { ((a as f64) * (1.0 - t) + (b as f64) * t).round() as u8 };

        Color::new(
            lerp_u8(self.r, other.r),
            lerp_u8(self.g, other.g),
            lerp_u8(self.b, other.b),
            lerp_u8(self.a, other.a),
        )
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim_start_matches('#');
    let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();

    match s.len() {
        6 => Some(Color::new(channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some(Color::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let rgb = match name {
        "black" | "k" => (0, 0, 0),
        "white" | "w" => (255, 255, 255),
        "red" | "r" => (255, 0, 0),
        "green" | "g" => (0, 128, 0),
        "blue" | "b" => (0, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "orange" => (255, 165, 0),
        "navy" => (0, 0, 128),
        "tab:blue" => (31, 119, 180),
        "tab:orange" => (255, 127, 14),
        "tab:green" => (44, 160, 44),
        "tab:red" => (214, 39, 40),
        "tab:purple" => (148, 103, 189),
        "tab:brown" => (140, 86, 75),
        "tab:pink" => (227, 119, 194),
        "tab:gray" => (127, 127, 127),
        "tab:olive" => (188, 189, 34),
        "tab:cyan" => (23, 190, 207),
        _ => return None,
    };
    Some(Color::new(rgb.0, rgb.1, rgb.2, 255))
}

/// Default line color cycle, matching matplotlib's `tab10`.
pub const COLOR_CYCLE: [&str; 10] = [
    "tab:blue",
    "tab:orange",
    "tab:green",
    "tab:red",
    "tab:purple",
    "tab:brown",
    "tab:pink",
    "tab:gray",
    "tab:olive",
    "tab:cyan",
];

/// Color for the n-th line drawn on a surface.
pub fn cycle_color(index: usize) -> Color {
    named_color(COLOR_CYCLE[index % COLOR_CYCLE.len()]).unwrap_or(Color::BLACK)
}
