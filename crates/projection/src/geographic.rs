//! Plate Carrée (equirectangular) projection.
//!
//! Projected coordinates are longitude/latitude in degrees, shifted so that
//! the central longitude maps to x = 0. This is also the CRS that gridded
//! model output is expressed in.

use serde::{Deserialize, Serialize};

use crate::wrap_longitude;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlateCarree {
    /// Longitude that maps to x = 0 (degrees)
    #[serde(default)]
    pub central_longitude: f64,
}

impl PlateCarree {
    pub fn new(central_longitude: f64) -> Self {
        Self { central_longitude }
    }

    /// Geodetic (lon, lat) in degrees to projected (x, y).
    pub fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !lon.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return None;
        }
        Some((wrap_longitude(lon - self.central_longitude), lat))
    }

    /// Projected (x, y) back to geodetic (lon, lat) in degrees.
    pub fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !x.is_finite() || !(-90.0..=90.0).contains(&y) {
            return None;
        }
        Some((wrap_longitude(x + self.central_longitude), y))
    }
}
