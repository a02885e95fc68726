//! Map projections for geospatial drawing surfaces.
//!
//! Implements the projections from scratch without external dependencies.
//! All projections work on a sphere; geodetic coordinates are (lon, lat) in
//! degrees, projected coordinates are in meters except for Plate Carrée,
//! which stays in degrees.

pub mod geographic;
pub mod lambert;
pub mod mercator;
pub mod transform;

pub use geographic::PlateCarree;
pub use lambert::LambertConformal;
pub use mercator::Mercator;
pub use transform::{transform_point, MapProjection};

/// Sphere radius used by the projected (meter-based) projections.
pub const EARTH_RADIUS: f64 = 6_371_229.0;

/// Wrap a longitude difference into [-180, 180).
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
