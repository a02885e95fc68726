//! Tests for plotting labeled arrays onto surfaces.

use plot_common::{LabeledArray, PlotError};
use projection::MapProjection;
use renderer::{plot_array, Axes, Figure, PlotKwargs, RasterOptions, Surface};
use test_utils::{assert_approx_eq, mom6_surface_field, mom6_timeseries, mom6_volume_field};

fn kwargs(x: &str, y: &str) -> PlotKwargs {
    PlotKwargs {
        x: Some(x.into()),
        y: Some(y.into()),
        ..Default::default()
    }
}

// ============================================================================
// 2-D fields
// ============================================================================

#[test]
fn test_geolon_geolat_mesh() {
    let da = mom6_surface_field(5, 4);
    let mut axes = Axes::new();
    plot_array(&da, &mut axes, &kwargs("geolon", "geolat")).unwrap();

    let mesh = axes.meshes().next().unwrap();
    assert_eq!(mesh.x.dim(), (4, 5));
    assert_approx_eq!(mesh.x[[0, 0]], -98.0, 1e-9);
    assert_approx_eq!(mesh.y[[3, 0]], 58.0, 1e-9);
    assert_eq!(axes.title(), Some("tos"));
    assert_eq!(axes.ylabel(), Some("Latitude [degrees_north]"));
}

#[test]
fn test_index_dims_default() {
    let da = mom6_surface_field(3, 2);
    let mut axes = Axes::new();
    plot_array(&da, &mut axes, &PlotKwargs::default()).unwrap();

    // xh/yh carry 1-D coordinates, broadcast over the grid
    let mesh = axes.meshes().next().unwrap();
    assert_eq!(mesh.x.row(0), mesh.x.row(1));
}

#[test]
fn test_swapped_1d_axes() {
    let da = mom6_surface_field(3, 2);
    let mut axes = Axes::new();
    plot_array(&da, &mut axes, &kwargs("yh", "xh")).unwrap();

    let mesh = axes.meshes().next().unwrap();
    assert_eq!(mesh.x.column(0), mesh.x.column(2));
}

#[test]
fn test_3d_rejected() {
    let mut axes = Axes::new();
    let volume = mom6_volume_field(2, 2, 2);
    assert!(matches!(
        plot_array(&volume, &mut axes, &PlotKwargs::default()),
        Err(PlotError::InvalidArray(_))
    ));
}

// ============================================================================
// 1-D series
// ============================================================================

#[test]
fn test_time_axis_in_seconds() {
    let da = mom6_timeseries(3, 0.0);
    let mut axes = Axes::new();
    plot_array(
        &da,
        &mut axes,
        &PlotKwargs {
            x: Some("time".into()),
            label: Some("mean".into()),
            ..Default::default()
        },
    )
    .unwrap();

    let line = axes.lines().next().unwrap();
    assert_approx_eq!(line.x[1] - line.x[0], 86_400.0, 1e-6);
    assert_eq!(line.label.as_deref(), Some("mean"));
    assert_eq!(axes.ylabel(), Some("tos_mean [degC]"));
}

#[test]
fn test_series_against_missing_coordinate() {
    let da = LabeledArray::new(["xh"], ndarray::arr1(&[1.0, 2.0])).unwrap();
    let mut axes = Axes::new();
    let err = plot_array(
        &da,
        &mut axes,
        &PlotKwargs {
            x: Some("time".into()),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::MissingCoordinate { .. }));
    assert!(axes.is_empty());
}

// ============================================================================
// Figures and output
// ============================================================================

#[test]
fn test_figure_save_png() {
    let mut figure = Figure::new();
    let surface: Surface = figure.add_geo_axes(MapProjection::plate_carree());
    plot_array(
        &mom6_surface_field(10, 8),
        &mut surface.borrow_mut(),
        &PlotKwargs {
            transform: Some(MapProjection::plate_carree()),
            ..kwargs("geolon", "geolat")
        },
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.png");
    let options = RasterOptions {
        width: 64,
        height: 48,
        ..Default::default()
    };
    figure.save_png(&path, &options).unwrap();
    assert!(std::fs::read(&path).unwrap().starts_with(&[137, 80, 78, 71]));
}

#[test]
fn test_empty_figure_cannot_save() {
    let dir = tempfile::tempdir().unwrap();
    let figure = Figure::new();
    assert!(figure
        .save_png(dir.path().join("none.png"), &RasterOptions::default())
        .is_err());
}
