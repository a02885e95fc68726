//! Loading plot configuration from files and applying it.

use std::io::Write;

use mom6_plots::{ErrorKind, PlotConfig, PlotOptions, Plotter};
use plot_common::Color;
use projection::MapProjection;
use tempfile::NamedTempFile;
use test_utils::{mom6_surface_field, square_ring};

fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn test_load_yaml_file() {
    let file = write_config(
        ".yaml",
        r##"
branding:
  text: "Made at the lab"
  x: 0.0
  y: -0.1
coastline:
  edge_color: "#ff0000"
  land: true
"##,
    );

    let config = PlotConfig::from_file(file.path()).unwrap();
    assert_eq!(config.branding.text, "Made at the lab");
    assert_eq!(config.branding.font_size, 10.0);
    assert_eq!(config.coastline.edge_color, Color::new(255, 0, 0, 255));
    assert!(config.coastline.land);
}

#[test]
fn test_load_json_file() {
    let file = write_config(".json", r#"{"branding": {"font_size": 8}}"#);
    let config = PlotConfig::from_file(file.path()).unwrap();
    assert_eq!(config.branding.font_size, 8.0);
}

#[test]
fn test_unknown_extension() {
    let file = write_config(".toml", "");
    let err = PlotConfig::from_file(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_missing_file() {
    let err = PlotConfig::from_file("/nonexistent/plots.yaml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

// ============================================================================
// Applying configuration
// ============================================================================

#[test]
fn test_config_drives_credit_and_coastline() {
    let mut config = PlotConfig::default();
    config.branding.text = "custom credit".into();
    config.coastline.geometry = vec![square_ring(-70.0, 40.0, 2.0)];

    let mut plotter = Plotter::new().with_config(config);
    let surface = plotter
        .context_mut()
        .add_geo_axes(MapProjection::plate_carree());

    plotter
        .map_plot(
            vec![mom6_surface_field(4, 4).into()],
            PlotOptions::new().surface(&surface),
        )
        .unwrap();

    let axes = surface.borrow();
    assert_eq!(axes.texts().next().unwrap().text, "custom credit");
    assert_eq!(axes.features().next().unwrap().geometry.len(), 1);
}
