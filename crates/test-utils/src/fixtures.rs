//! Common test fixtures for MOM6 plotting tests.

/// Regional domain extents as (min_lon, min_lat, max_lon, max_lat).
pub mod domain {
    /// Northwest Atlantic regional domain
    pub const NORTHWEST_ATLANTIC: (f64, f64, f64, f64) = (-98.0, 5.0, -36.0, 58.0);
}

/// Legacy MOM6 names and the canonical names they are plotted under.
pub const MOM6_NAME_PAIRS: [(&str, &str); 4] = [
    ("xh", "x"),
    ("yh", "y"),
    ("geolon", "lon"),
    ("geolat", "lat"),
];

/// A closed square ring in lon/lat, usable as stand-in coastline geometry.
pub fn square_ring(lon0: f64, lat0: f64, size: f64) -> Vec<(f64, f64)> {
    vec![
        (lon0, lat0),
        (lon0 + size, lat0),
        (lon0 + size, lat0 + size),
        (lon0, lat0 + size),
        (lon0, lat0),
    ]
}
