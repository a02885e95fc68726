//! Plotting helpers for MOM6 ocean model output.
//!
//! Each entry point of [`Plotter`] validates its inputs, renames MOM6
//! coordinates (`xh`, `yh`, `geolon`, `geolat`) to the names plots use
//! (`x`, `y`, `lon`, `lat`), resolves the drawing surface, draws, and stamps
//! a credit mark. Maps additionally require a map-projected surface and get
//! a coastline overlay.
//!
//! ```ignore
//! use mom6_plots::{PlotOptions, Plotter};
//! use projection::MapProjection;
//!
//! let mut plotter = Plotter::new();
//! let surface = plotter.context_mut().add_geo_axes(MapProjection::plate_carree());
//! plotter.map_plot(vec![tos.into()], PlotOptions::new().surface(&surface))?;
//! ```

pub mod annotate;
pub mod args;
pub mod config;
pub mod map;
pub mod options;
pub mod plots;
pub mod rename;
pub mod surface;
pub mod validate;

pub use annotate::{has_credit, stamp_credit, BrandingConfig, CREDIT_TEXT};
pub use args::{check_kinds, PlotArg};
pub use config::PlotConfig;
pub use map::{add_coastline, require_geo, CoastlineConfig};
pub use options::{PlotOptions, RenderOptions};
pub use plots::{Plotter, HOVMOELLER_PLOT, MAP_PLOT, SECTION_PLOT, TIMESERIES_PLOT};
pub use rename::{rename_coords, RENAME_TABLE};
pub use surface::{resolve_existing_surface, resolve_surface, CurrentSurface};
pub use validate::{check_all_1d, check_single_2d};

pub use plot_common::{ErrorKind, LabeledArray, PlotError, PlotResult};
pub use renderer::{Figure, Surface};
