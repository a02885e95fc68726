//! Spherical Mercator projection.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{wrap_longitude, EARTH_RADIUS};

/// Latitude limit beyond which Mercator y diverges (degrees).
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Mercator {
    /// Central meridian (degrees)
    #[serde(default)]
    pub central_longitude: f64,
}

impl Mercator {
    pub fn new(central_longitude: f64) -> Self {
        Self { central_longitude }
    }

    /// Geodetic (lon, lat) in degrees to meters. Latitudes are clipped to ±MAX_LATITUDE.
    pub fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !lon.is_finite() || !lat.is_finite() {
            return None;
        }
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let dlon = wrap_longitude(lon - self.central_longitude).to_radians();

        let x = EARTH_RADIUS * dlon;
        let y = EARTH_RADIUS * (PI / 4.0 + lat / 2.0).tan().ln();
        Some((x, y))
    }

    /// Meters back to geodetic (lon, lat) in degrees.
    pub fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let lon = wrap_longitude((x / EARTH_RADIUS).to_degrees() + self.central_longitude);
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        Some((lon, lat))
    }
}
