//! The four plotting entry points.
//!
//! Every entry point runs the same ordered stages:
//!
//! 1. input kind check
//! 2. dimensionality check (one 2-D array, or any number of 1-D arrays)
//! 3. MOM6 coordinate renaming
//! 4. surface resolution, falling back to the context's current surface
//! 5. (map) projected-surface check
//! 6. core render, which never sees the logo flag
//! 7. credit mark, unless `logo` is false
//! 8. (map) coastline overlay
//!
//! Stages 1-5 do not touch the surface, and core renders validate their
//! inputs before drawing, so a failed call leaves the surface as it was.

use plot_common::{LabeledArray, PlotError, PlotResult};
use projection::MapProjection;
use renderer::{plot_array, CurrentSurface, Figure, Surface};

use crate::annotate::stamp_credit;
use crate::args::{check_kinds, PlotArg};
use crate::config::PlotConfig;
use crate::map::{add_coastline, require_geo};
use crate::options::{PlotOptions, RenderOptions};
use crate::rename::rename_coords;
use crate::surface::{resolve_existing_surface, resolve_surface};
use crate::validate::{check_all_1d, check_single_2d};

/// Entry point names, as used in error messages.
pub const MAP_PLOT: &str = "map_plot";
pub const SECTION_PLOT: &str = "section_plot";
pub const HOVMOELLER_PLOT: &str = "hovmoeller_plot";
pub const TIMESERIES_PLOT: &str = "timeseries_plot";

/// Plots MOM6 output onto surfaces supplied by a plotting context.
///
/// The context provides the current surface for calls that do not name one.
#[derive(Debug)]
pub struct Plotter<C: CurrentSurface = Figure> {
    context: C,
    config: PlotConfig,
}

impl Plotter<Figure> {
    /// A plotter over a new, empty figure.
    pub fn new() -> Self {
        Self::with_context(Figure::new())
    }
}

impl Default for Plotter<Figure> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CurrentSurface> Plotter<C> {
    pub fn with_context(context: C) -> Self {
        Self {
            context,
            config: PlotConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    /// Draw a 2-D field on a map-projected surface, with coastlines.
    ///
    /// `x`/`y` default to `lon`/`lat`; data coordinates are taken as
    /// Plate Carrée.
    pub fn map_plot(
        &mut self,
        args: Vec<PlotArg>,
        mut options: PlotOptions,
    ) -> PlotResult<Surface> {
        let array = check_single_2d(MAP_PLOT, check_kinds(args)?)?;
        let array = rename_coords(&array);

        // a plain surface created here would be rejected anyway
        let surface = resolve_existing_surface(options.surface.take(), &self.context)
            .ok_or(PlotError::MissingProjectedSurface)?;
        require_geo(&surface)?;

        let (logo, render) = options.into_render(surface);
        let surface = render_map(&array, render)?;

        self.finish(&surface, logo);
        add_coastline(&surface, &self.config.coastline)?;
        Ok(surface)
    }

    /// Vertical section of a 2-D field. Validates its input, then fails:
    /// sections are not implemented.
    pub fn section_plot(
        &mut self,
        args: Vec<PlotArg>,
        options: PlotOptions,
    ) -> PlotResult<Surface> {
        self.unimplemented_2d(SECTION_PLOT, args, options)
    }

    /// Time-longitude (or time-latitude) diagram. Validates its input, then
    /// fails: Hovmöller diagrams are not implemented.
    pub fn hovmoeller_plot(
        &mut self,
        args: Vec<PlotArg>,
        options: PlotOptions,
    ) -> PlotResult<Surface> {
        self.unimplemented_2d(HOVMOELLER_PLOT, args, options)
    }

    /// Draw any number of 1-D series onto one surface and attach a legend.
    ///
    /// `x` defaults to `time`. When `labels` is non-empty it must hold one
    /// label per array.
    pub fn timeseries_plot(
        &mut self,
        args: Vec<PlotArg>,
        mut options: PlotOptions,
    ) -> PlotResult<Surface> {
        let arrays = check_kinds(args)?;
        check_all_1d(&arrays)?;
        let arrays: Vec<LabeledArray> = arrays.iter().map(rename_coords).collect();

        let surface = resolve_surface(options.surface.take(), &mut self.context);

        let (logo, render) = options.into_render(surface);
        let surface = render_timeseries(&arrays, render)?;

        self.finish(&surface, logo);
        Ok(surface)
    }

    fn unimplemented_2d(
        &mut self,
        entry_point: &str,
        args: Vec<PlotArg>,
        mut options: PlotOptions,
    ) -> PlotResult<Surface> {
        let array = check_single_2d(entry_point, check_kinds(args)?)?;
        let array = rename_coords(&array);

        let surface = resolve_surface(options.surface.take(), &mut self.context);
        let (_, render) = options.into_render(surface);

        render_unimplemented(entry_point, &array, render)
    }

    fn finish(&self, surface: &Surface, logo: bool) {
        if logo {
            stamp_credit(surface, &self.config.branding);
        }
    }
}

fn render_map(array: &LabeledArray, render: RenderOptions) -> PlotResult<Surface> {
    let render = render.with_default_axes(Some("lon"), Some("lat"));
    let mut kwargs = render.kwargs(None);
    kwargs.transform = Some(MapProjection::plate_carree());

    plot_array(array, &mut render.surface.borrow_mut(), &kwargs)?;
    Ok(render.surface)
}

fn render_unimplemented(
    entry_point: &str,
    _array: &LabeledArray,
    _render: RenderOptions,
) -> PlotResult<Surface> {
    Err(PlotError::NotImplemented(entry_point.to_string()))
}

fn render_timeseries(arrays: &[LabeledArray], render: RenderOptions) -> PlotResult<Surface> {
    let render = render.with_default_axes(Some("time"), None);

    let labels: Vec<Option<String>> = match render.labels.as_deref() {
        None | Some([]) => vec![None; arrays.len()],
        Some(labels) if labels.len() != arrays.len() => {
            return Err(PlotError::LabelCountMismatch {
                arrays: arrays.len(),
                labels: labels.len(),
            })
        }
        Some(labels) => labels.iter().cloned().map(Some).collect(),
    };

    // Draw on a copy so a failing series leaves the surface untouched.
    let mut scratch = render.surface.borrow().clone();
    for (array, label) in arrays.iter().zip(labels) {
        plot_array(array, &mut scratch, &render.kwargs(label))?;
    }
    scratch.legend();

    *render.surface.borrow_mut() = scratch;
    Ok(render.surface)
}
