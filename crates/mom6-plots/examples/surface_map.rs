//! Render a synthetic MOM6 sea surface temperature map and a timeseries.
//!
//! Run with `RUST_LOG=debug` to see renames and raster output.
//!
//! ```sh
//! cargo run -p mom6-plots --example surface_map -- [config.yaml] [output_dir]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use mom6_plots::{PlotConfig, PlotOptions, Plotter};
use projection::MapProjection;
use test_utils::{mom6_surface_field, mom6_timeseries};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => PlotConfig::from_file(&path)
            .with_context(|| format!("Failed to load plot config from {}", path))?,
        None => PlotConfig::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    let mut plotter = Plotter::new().with_config(config);
    let raster = plotter.config().raster.clone();

    let map = plotter
        .context_mut()
        .add_geo_axes(MapProjection::lambert_conformal(-70.0, 35.0, (25.0, 45.0)));
    plotter
        .map_plot(
            vec![mom6_surface_field(120, 100).into()],
            PlotOptions::new().surface(&map).cmap("thermal"),
        )
        .context("map_plot failed")?;

    let map_path = out_dir.join("sst_map.png");
    map.borrow()
        .save_png(&map_path, &raster)
        .with_context(|| format!("Failed to write {}", map_path.display()))?;
    tracing::info!(path = %map_path.display(), "Wrote map");

    // No surface given: the figure's current surface (the map) is reused,
    // so start a fresh plain one first.
    plotter.context_mut().add_axes();
    let series = plotter
        .timeseries_plot(
            vec![mom6_timeseries(365, 0.0).into(), mom6_timeseries(365, 1.5).into()],
            PlotOptions::new().labels(["control", "perturbed"]),
        )
        .context("timeseries_plot failed")?;

    let series_path = out_dir.join("sst_timeseries.png");
    series
        .borrow()
        .save_png(&series_path, &raster)
        .with_context(|| format!("Failed to write {}", series_path.display()))?;
    tracing::info!(path = %series_path.display(), "Wrote timeseries");

    Ok(())
}
