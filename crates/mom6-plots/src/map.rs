//! Map-only stages: the projected-surface check and coastline overlay.

use plot_common::{Color, PlotError, PlotResult};
use renderer::{Feature, Surface};
use serde::{Deserialize, Serialize};

/// Styling and optional geometry of the coastline overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoastlineConfig {
    #[serde(with = "crate::config::color_spec")]
    pub edge_color: Color,
    #[serde(with = "crate::config::color_spec")]
    pub face_color: Color,
    pub line_width: f32,
    /// Also fill land underneath the coastline
    pub land: bool,
    /// Coastline polylines in (lon, lat) degrees
    pub geometry: Vec<Vec<(f64, f64)>>,
}

impl Default for CoastlineConfig {
    fn default() -> Self {
        Self {
            edge_color: Color::gray(0.3),
            face_color: Color::gray(0.2),
            line_width: 1.0,
            land: false,
            geometry: Vec::new(),
        }
    }
}

/// Fail unless the surface is map-projected.
pub fn require_geo(surface: &Surface) -> PlotResult<()> {
    if surface.is_geo() {
        Ok(())
    } else {
        Err(PlotError::MissingProjectedSurface)
    }
}

/// Overlay coastlines (and land, if configured) on a map-projected surface.
pub fn add_coastline(surface: &Surface, config: &CoastlineConfig) -> PlotResult<()> {
    let mut axes = surface.borrow_mut();

    if config.land {
        axes.add_feature(Feature::land().with_geometry(config.geometry.clone()))?;
    }

    axes.add_feature(
        Feature::coastline()
            .with_edge_color(config.edge_color)
            .with_face_color(config.face_color)
            .with_line_width(config.line_width)
            .with_geometry(config.geometry.clone()),
    )
}
