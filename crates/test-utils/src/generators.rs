//! Synthetic MOM6-like labeled arrays.
//!
//! These generators create predictable data with the dimension and
//! coordinate names MOM6 writes (`xh`, `yh`, `geolon`, `geolat`, `time`),
//! so tests can exercise renaming and plotting without real model output.

use chrono::{Duration, TimeZone, Utc};
use ndarray::{Array1, Array2, Array3};
use plot_common::{Coordinate, LabeledArray};

use crate::fixtures::domain;

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.dim(), (5, 10));
/// assert_eq!(grid[[0, 1]], 1000.0); // col=1, row=0
/// assert_eq!(grid[[1, 0]], 1.0);    // col=0, row=1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Array2<f64> {
    Array2::from_shape_fn((height, width), |(row, col)| (col * 1000 + row) as f64)
}

/// Sea-surface-temperature-like values in degC, warm in the south-west.
pub fn create_sst_grid(width: usize, height: usize) -> Array2<f64> {
    Array2::from_shape_fn((height, width), |(row, col)| {
        let x_factor = col as f64 / width.max(1) as f64;
        let y_factor = row as f64 / height.max(1) as f64;
        28.0 - 10.0 * x_factor - 15.0 * y_factor
    })
}

fn lon_lat_axes(nx: usize, ny: usize) -> (Array1<f64>, Array1<f64>) {
    let (min_lon, min_lat, max_lon, max_lat) = domain::NORTHWEST_ATLANTIC;
    let lon = Array1::linspace(min_lon, max_lon, nx.max(1));
    let lat = Array1::linspace(min_lat, max_lat, ny.max(1));
    (lon, lat)
}

/// A 2-D surface field as MOM6 writes it: dims `(yh, xh)` with 1-D `xh`/`yh`
/// and 2-D `geolon`/`geolat` coordinates over the Northwest Atlantic.
pub fn mom6_surface_field(nx: usize, ny: usize) -> LabeledArray {
    let (lon, lat) = lon_lat_axes(nx, ny);
    let geolon = Array2::from_shape_fn((ny, nx), |(_, i)| lon[i]);
    let geolat = Array2::from_shape_fn((ny, nx), |(j, _)| lat[j]);

    LabeledArray::new(["yh", "xh"], create_sst_grid(nx, ny))
        .unwrap()
        .with_name("tos")
        .with_attr("long_name", "Sea Surface Temperature")
        .with_attr("units", "degC")
        .with_coord("xh", Coordinate::numeric(["xh"], lon.clone()))
        .unwrap()
        .with_coord("yh", Coordinate::numeric(["yh"], lat.clone()))
        .unwrap()
        .with_coord(
            "geolon",
            Coordinate::numeric(["yh", "xh"], geolon)
                .with_attr("long_name", "Longitude")
                .with_attr("units", "degrees_east"),
        )
        .unwrap()
        .with_coord(
            "geolat",
            Coordinate::numeric(["yh", "xh"], geolat)
                .with_attr("long_name", "Latitude")
                .with_attr("units", "degrees_north"),
        )
        .unwrap()
}

/// A 3-D field with dims `(zl, yh, xh)`.
pub fn mom6_volume_field(nz: usize, ny: usize, nx: usize) -> LabeledArray {
    LabeledArray::new(
        ["zl", "yh", "xh"],
        Array3::from_shape_fn((nz, ny, nx), |(k, j, i)| (k * 100 + j * 10 + i) as f64),
    )
    .unwrap()
    .with_name("thetao")
}

/// A daily timeseries starting 2000-01-01 with dims `(time,)`.
pub fn mom6_timeseries(n: usize, phase: f64) -> LabeledArray {
    let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let times = (0..n).map(|d| start + Duration::days(d as i64)).collect();
    let values = Array1::from_shape_fn(n, |d| (d as f64 / 10.0 + phase).sin());

    LabeledArray::new(["time"], values)
        .unwrap()
        .with_name("tos_mean")
        .with_attr("units", "degC")
        .with_coord("time", Coordinate::time("time", times))
        .unwrap()
}

/// A 1-D array along `xh` with no time axis.
pub fn mom6_zonal_profile(nx: usize) -> LabeledArray {
    let (lon, _) = lon_lat_axes(nx, 1);
    LabeledArray::new(["xh"], Array1::from_shape_fn(nx, |i| i as f64))
        .unwrap()
        .with_coord("xh", Coordinate::numeric(["xh"], lon))
        .unwrap()
}

/// A 2-D `(time, xh)` field, the shape of a Hovmöller diagram.
pub fn mom6_hovmoeller_field(nt: usize, nx: usize) -> LabeledArray {
    LabeledArray::new(["time", "xh"], create_test_grid(nx, nt)).unwrap()
}
