//! Tests for labeled arrays: construction, coordinates and renaming.

use ndarray::{arr1, Array2};
use plot_common::{Coordinate, LabeledArray, PlotError};
use test_utils::{mom6_surface_field, mom6_timeseries, MOM6_NAME_PAIRS};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_rank_must_match_dims() {
    let err = LabeledArray::new(["x"], Array2::<f64>::zeros((2, 2))).unwrap_err();
    assert!(matches!(err, PlotError::InvalidArray(_)));
}

#[test]
fn test_duplicate_dims_rejected() {
    assert!(LabeledArray::new(["x", "x"], Array2::<f64>::zeros((2, 2))).is_err());
}

#[test]
fn test_coordinate_size_checked() {
    let da = LabeledArray::new(["x"], arr1(&[1.0, 2.0, 3.0])).unwrap();
    let err = da
        .clone()
        .with_coord("x", Coordinate::numeric(["x"], arr1(&[0.0, 1.0])))
        .unwrap_err();
    assert!(err.to_string().contains("length 2 along 'x'"));

    let err = da
        .with_coord("t", Coordinate::numeric(["time"], arr1(&[0.0, 1.0, 2.0])))
        .unwrap_err();
    assert!(err.to_string().contains("unknown dimension 'time'"));
}

// ============================================================================
// Renaming
// ============================================================================

#[test]
fn test_rename_mom6_names() {
    let da = mom6_surface_field(4, 3);
    let renamed = da.rename(MOM6_NAME_PAIRS);

    assert_eq!(renamed.dims(), &["y".to_string(), "x".to_string()]);
    let lon = renamed.coord("lon").unwrap();
    assert_eq!(lon.dims(), &["y".to_string(), "x".to_string()]);
    assert_eq!(lon.attrs().get("units").map(String::as_str), Some("degrees_east"));
    assert_eq!(renamed.data(), da.data());
}

#[test]
fn test_rename_skips_absent_and_taken_names() {
    let da = LabeledArray::new(["xh"], arr1(&[1.0, 2.0]))
        .unwrap()
        .with_coord("x", Coordinate::numeric(["xh"], arr1(&[5.0, 6.0])))
        .unwrap();

    // "x" is already a coordinate, so xh keeps its name
    let renamed = da.rename([("xh", "x"), ("geolon", "lon")]);
    assert_eq!(renamed, da);
}

#[test]
fn test_rename_is_a_copy() {
    let da = mom6_surface_field(2, 2);
    let _ = da.rename(MOM6_NAME_PAIRS);
    assert!(da.has_dim("xh"));
}

// ============================================================================
// Axis values and labels
// ============================================================================

#[test]
fn test_bare_dimension_yields_positions() {
    let da = LabeledArray::new(["zl"], arr1(&[7.0, 8.0, 9.0])).unwrap();
    let (dims, values) = da.axis_values("zl").unwrap();
    assert_eq!(dims, vec!["zl".to_string()]);
    assert_eq!(values.iter().copied().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
    assert!(da.axis_values("missing").is_none());
}

#[test]
fn test_time_coordinate_values() {
    let da = mom6_timeseries(2, 0.0);
    let time = da.coord("time").unwrap();
    assert!(time.is_time());
    // 2000-01-01T00:00:00Z
    assert_eq!(time.to_f64()[[0]], 946_684_800.0);
}

#[test]
fn test_labels_from_attrs() {
    let da = mom6_surface_field(2, 2);
    assert_eq!(da.label_for("geolat"), "Latitude [degrees_north]");
    assert_eq!(da.label_for("xh"), "xh");
    assert_eq!(da.value_label(), "Sea Surface Temperature [degC]");
}
