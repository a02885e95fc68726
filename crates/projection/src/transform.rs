//! Projection dispatch and point transforms between projections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{LambertConformal, Mercator, PlateCarree};

/// A map projection a surface or a data transform can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapProjection {
    PlateCarree(PlateCarree),
    Mercator(Mercator),
    LambertConformal(LambertConformal),
}

impl MapProjection {
    /// Plate Carrée centered on the prime meridian, the CRS of lon/lat data.
    pub fn plate_carree() -> Self {
        MapProjection::PlateCarree(PlateCarree::default())
    }

    pub fn mercator(central_longitude: f64) -> Self {
        MapProjection::Mercator(Mercator::new(central_longitude))
    }

    pub fn lambert_conformal(
        central_longitude: f64,
        central_latitude: f64,
        standard_parallels: (f64, f64),
    ) -> Self {
        MapProjection::LambertConformal(LambertConformal::new(
            central_longitude,
            central_latitude,
            standard_parallels,
        ))
    }

    /// Geodetic (lon, lat) in degrees to this projection's coordinates.
    pub fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        match self {
            MapProjection::PlateCarree(p) => p.project(lon, lat),
            MapProjection::Mercator(p) => p.project(lon, lat),
            MapProjection::LambertConformal(p) => p.project(lon, lat),
        }
    }

    /// This projection's coordinates back to geodetic (lon, lat) in degrees.
    pub fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        match self {
            MapProjection::PlateCarree(p) => p.unproject(x, y),
            MapProjection::Mercator(p) => p.unproject(x, y),
            MapProjection::LambertConformal(p) => p.unproject(x, y),
        }
    }

    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            MapProjection::PlateCarree(_) => "PlateCarree",
            MapProjection::Mercator(_) => "Mercator",
            MapProjection::LambertConformal(_) => "LambertConformal",
        }
    }
}

impl Default for MapProjection {
    fn default() -> Self {
        Self::plate_carree()
    }
}

impl fmt::Display for MapProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Transform a point from one projection to another through geodetic lon/lat.
pub fn transform_point(
    src: &MapProjection,
    dst: &MapProjection,
    x: f64,
    y: f64,
) -> Option<(f64, f64)> {
    if src == dst {
        return Some((x, y));
    }
    let (lon, lat) = src.unproject(x, y)?;
    dst.project(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_projection_is_identity() {
        let pc = MapProjection::plate_carree();
        assert_eq!(transform_point(&pc, &pc, 500.0, 1.0), Some((500.0, 1.0)));
    }

    #[test]
    fn test_plate_carree_to_mercator() {
        let pc = MapProjection::plate_carree();
        let merc = MapProjection::mercator(0.0);
        let (x, y) = transform_point(&pc, &merc, 0.0, 0.0).unwrap();
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);

        let (_, y_north) = transform_point(&pc, &merc, 0.0, 45.0).unwrap();
        assert!(y_north > 0.0);
    }

    #[test]
    fn test_projection_from_yaml_like_json() {
        let proj: MapProjection =
            serde_json::from_str(r#"{"type":"lambert_conformal","central_longitude":-70.0}"#)
                .unwrap();
        match proj {
            MapProjection::LambertConformal(p) => {
                assert_eq!(p.params().central_longitude, -70.0);
                assert_eq!(p.params().standard_parallels, (33.0, 45.0));
            }
            other => panic!("unexpected projection {}", other),
        }
    }
}
