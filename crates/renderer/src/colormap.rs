//! Color mapping for quad mesh values.

use ndarray::{ArrayBase, Data, Dimension};
use plot_common::Color;

/// A piecewise-linear colormap over normalized values in 0..1.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    /// (position, color) with positions ascending in 0..1
    stops: Vec<(f64, Color)>,
}

impl Colormap {
    /// Build a colormap from stops. Stops are sorted by position.
    pub fn new(name: impl Into<String>, mut stops: Vec<(f64, Color)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Look up one of the built-in colormaps.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "viridis" => Some(Self::viridis()),
            "gray" | "grey" => Some(Self::gray()),
            "RdBu_r" => Some(Self::rdbu_r()),
            "thermal" => Some(Self::thermal()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sampled approximation of matplotlib's viridis.
    pub fn viridis() -> Self {
        Self::new(
            "viridis",
            vec![
                (0.0, Color::new(68, 1, 84, 255)),
                (0.25, Color::new(59, 82, 139, 255)),
                (0.5, Color::new(33, 145, 140, 255)),
                (0.75, Color::new(94, 201, 98, 255)),
                (1.0, Color::new(253, 231, 37, 255)),
            ],
        )
    }

    pub fn gray() -> Self {
        Self::new("gray", vec![(0.0, Color::BLACK), (1.0, Color::WHITE)])
    }

    /// Diverging blue-white-red, for anomalies.
    pub fn rdbu_r() -> Self {
        Self::new(
            "RdBu_r",
            vec![
                (0.0, Color::new(5, 48, 97, 255)),
                (0.25, Color::new(67, 147, 195, 255)),
                (0.5, Color::new(247, 247, 247, 255)),
                (0.75, Color::new(214, 96, 77, 255)),
                (1.0, Color::new(103, 0, 31, 255)),
            ],
        )
    }

    /// Ocean temperature style ramp (deep blue to yellow).
    pub fn thermal() -> Self {
        Self::new(
            "thermal",
            vec![
                (0.0, Color::new(4, 35, 51, 255)),
                (0.3, Color::new(60, 56, 154, 255)),
                (0.55, Color::new(168, 65, 131, 255)),
                (0.8, Color::new(240, 122, 70, 255)),
                (1.0, Color::new(232, 250, 91, 255)),
            ],
        )
    }

    /// Color at a normalized position. Positions are clamped to 0..1.
    pub fn at(&self, t: f64) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::transparent();
        };
        if t.is_nan() {
            return Color::transparent();
        }
        let t = t.clamp(0.0, 1.0);

        if t <= first.0 {
            return first.1;
        }

        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                if p1 <= p0 {
                    return c1;
                }
                return c0.lerp(&c1, (t - p0) / (p1 - p0));
            }
        }

        self.stops[self.stops.len() - 1].1
    }

    /// Color for a data value scaled between vmin and vmax. NaN maps to transparent.
    pub fn map_value(&self, value: f64, vmin: f64, vmax: f64) -> Color {
        if !value.is_finite() {
            return Color::transparent();
        }
        let span = vmax - vmin;
        let t = if span > 0.0 { (value - vmin) / span } else { 0.5 };
        self.at(t)
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::viridis()
    }
}

/// Min and max over the finite values of an array.
pub fn finite_range<S, D>(values: &ArrayBase<S, D>) -> Option<(f64, f64)>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
