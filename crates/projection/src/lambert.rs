//! Lambert Conformal Conic projection.
//!
//! Maps a cone tangent or secant to the sphere onto a flat plane. Useful for
//! regional mid-latitude ocean domains.
//!
//! The projection parameters include:
//! - Central longitude (lon0): the meridian that maps to x = 0
//! - Central latitude (lat0): the latitude that maps to y = 0
//! - Standard parallel(s): latin1 and latin2 (equal for a tangent cone)

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{wrap_longitude, EARTH_RADIUS};

/// User-facing Lambert parameters, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LambertParams {
    #[serde(default = "default_central_longitude")]
    pub central_longitude: f64,
    #[serde(default = "default_central_latitude")]
    pub central_latitude: f64,
    #[serde(default = "default_standard_parallels")]
    pub standard_parallels: (f64, f64),
}

fn default_central_longitude() -> f64 {
    -96.0
}

fn default_central_latitude() -> f64 {
    39.0
}

fn default_standard_parallels() -> (f64, f64) {
    (33.0, 45.0)
}

impl Default for LambertParams {
    fn default() -> Self {
        Self {
            central_longitude: default_central_longitude(),
            central_latitude: default_central_latitude(),
            standard_parallels: default_standard_parallels(),
        }
    }
}

/// Lambert Conformal Conic projection with precomputed cone constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LambertParams", into = "LambertParams")]
pub struct LambertConformal {
    params: LambertParams,
    /// Central meridian in radians
    lon0: f64,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the central latitude
    rho0: f64,
}

impl LambertConformal {
    /// Create a projection from degrees.
    pub fn new(central_longitude: f64, central_latitude: f64, standard_parallels: (f64, f64)) -> Self {
        Self::from(LambertParams {
            central_longitude,
            central_latitude,
            standard_parallels,
        })
    }

    pub fn params(&self) -> LambertParams {
        self.params
    }

    /// Cone constant.
    pub fn cone_constant(&self) -> f64 {
        self.n
    }

    fn rho(&self, lat: f64) -> f64 {
        EARTH_RADIUS * self.f / (PI / 4.0 + lat / 2.0).tan().powf(self.n)
    }

    /// Geodetic (lon, lat) in degrees to projected meters.
    ///
    /// Returns `None` at the pole opposite the cone apex, where rho diverges.
    pub fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !lon.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return None;
        }
        let dlon = wrap_longitude(lon - self.params.central_longitude).to_radians();
        let rho = self.rho(lat.to_radians());
        if !rho.is_finite() {
            return None;
        }

        let theta = self.n * dlon;
        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();
        Some((x, y))
    }

    /// Projected meters back to geodetic (lon, lat) in degrees.
    pub fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let dy = self.rho0 - y;
        let mut rho = (x * x + dy * dy).sqrt();
        let theta = if self.n < 0.0 {
            rho = -rho;
            (-x).atan2(-dy)
        } else {
            x.atan2(dy)
        };

        let lat = if rho == 0.0 {
            PI / 2.0 * self.n.signum()
        } else {
            2.0 * (EARTH_RADIUS * self.f / rho).powf(1.0 / self.n).atan() - PI / 2.0
        };
        let lon = self.lon0 + theta / self.n;

        Some((wrap_longitude(lon.to_degrees()), lat.to_degrees()))
    }
}

impl Default for LambertConformal {
    fn default() -> Self {
        Self::from(LambertParams::default())
    }
}

impl From<LambertParams> for LambertConformal {
    fn from(params: LambertParams) -> Self {
        let lon0 = params.central_longitude.to_radians();
        let lat0 = params.central_latitude.to_radians();
        let latin1 = params.standard_parallels.0.to_radians();
        let latin2 = params.standard_parallels.1.to_radians();

        // Compute cone constant n
        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            let ln_ratio = (latin1.cos() / latin2.cos()).ln();
            let tan_ratio =
                ((PI / 4.0 + latin2 / 2.0).tan() / (PI / 4.0 + latin1 / 2.0).tan()).ln();
            ln_ratio / tan_ratio
        };

        let f = (latin1.cos() * (PI / 4.0 + latin1 / 2.0).tan().powf(n)) / n;
        let rho0 = EARTH_RADIUS * f / (PI / 4.0 + lat0 / 2.0).tan().powf(n);

        Self {
            params,
            lon0,
            n,
            f,
            rho0,
        }
    }
}

impl From<LambertConformal> for LambertParams {
    fn from(proj: LambertConformal) -> Self {
        proj.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_zero() {
        let proj = LambertConformal::default();
        let (x, y) = proj.project(-96.0, 39.0).unwrap();
        assert!(x.abs() < 1e-6, "x should be ~0, got {}", x);
        assert!(y.abs() < 1e-6, "y should be ~0, got {}", y);
    }

    #[test]
    fn test_roundtrip() {
        let proj = LambertConformal::new(-70.0, 40.0, (35.0, 45.0));
        for (lon, lat) in [(-75.0, 38.0), (-60.0, 50.0), (-80.0, 25.0)] {
            let (x, y) = proj.project(lon, lat).unwrap();
            let (lon2, lat2) = proj.unproject(x, y).unwrap();
            assert!((lon - lon2).abs() < 1e-6, "lon roundtrip failed: {} vs {}", lon, lon2);
            assert!((lat - lat2).abs() < 1e-6, "lat roundtrip failed: {} vs {}", lat, lat2);
        }
    }

    #[test]
    fn test_tangent_cone_constant() {
        let proj = LambertConformal::new(0.0, 38.5, (38.5, 38.5));
        assert!((proj.cone_constant() - 38.5_f64.to_radians().sin()).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_pole_is_unprojectable() {
        let proj = LambertConformal::default();
        assert!(proj.project(0.0, -90.0).is_none());
    }

    #[test]
    fn test_east_is_positive_x() {
        let proj = LambertConformal::default();
        let (x_east, _) = proj.project(-90.0, 39.0).unwrap();
        let (x_west, _) = proj.project(-100.0, 39.0).unwrap();
        assert!(x_east > 0.0);
        assert!(x_west < 0.0);
    }
}
