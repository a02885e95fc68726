//! Plotting labeled arrays onto a surface.
//!
//! 1-D arrays become lines, 2-D arrays become quad meshes. Coordinate names
//! are resolved against the array before anything is drawn, so a failed call
//! leaves the surface as it was.

use ndarray::{Array2, Ix1, Ix2};
use plot_common::color::cycle_color;
use plot_common::{Color, LabeledArray, PlotError, PlotResult};
use projection::MapProjection;

use crate::axes::{Axes, Line, QuadMesh};
use crate::colormap::{finite_range, Colormap};

/// Styling forwarded from the caller to the artists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistStyle {
    /// Colormap name for meshes
    pub cmap: Option<String>,
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    /// Line color; defaults to the next color in the cycle
    pub color: Option<Color>,
    pub line_width: Option<f32>,
}

/// Options of a single `plot_array` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotKwargs {
    /// Coordinate or dimension for the horizontal axis
    pub x: Option<String>,
    /// Coordinate or dimension for the vertical axis (2-D only)
    pub y: Option<String>,
    /// Projection the coordinates are expressed in
    pub transform: Option<MapProjection>,
    pub label: Option<String>,
    pub style: ArtistStyle,
}

const DEFAULT_LINE_WIDTH: f32 = 1.5;

/// Draw a labeled array onto a surface.
pub fn plot_array(array: &LabeledArray, axes: &mut Axes, kwargs: &PlotKwargs) -> PlotResult<()> {
    match array.ndim() {
        1 => plot_line(array, axes, kwargs),
        2 => plot_mesh(array, axes, kwargs),
        n => Err(PlotError::InvalidArray(format!(
            "plotting supports 1-D and 2-D arrays, got {}-D with dims {:?}",
            n,
            array.dims()
        ))),
    }
}

fn missing_coordinate(array: &LabeledArray, name: &str) -> PlotError {
    PlotError::MissingCoordinate {
        name: name.to_string(),
        available: array.names().into_iter().collect(),
    }
}

fn plot_line(array: &LabeledArray, axes: &mut Axes, kwargs: &PlotKwargs) -> PlotResult<()> {
    let dim = &array.dims()[0];
    let x_name = kwargs.x.clone().unwrap_or_else(|| dim.clone());

    let (x_dims, x_values) = array
        .axis_values(&x_name)
        .ok_or_else(|| missing_coordinate(array, &x_name))?;

    if x_dims.as_slice() != std::slice::from_ref(dim) {
        return Err(PlotError::CoordinateShape {
            name: x_name,
            message: format!("expected a coordinate along '{}', found dims {:?}", dim, x_dims),
        });
    }

    let x: Vec<f64> = x_values.iter().copied().collect();
    let y: Vec<f64> = array.data().iter().copied().collect();

    let color = kwargs
        .style
        .color
        .unwrap_or_else(|| cycle_color(axes.lines().count()));

    axes.add_line(Line {
        x,
        y,
        label: kwargs.label.clone(),
        color,
        line_width: kwargs.style.line_width.unwrap_or(DEFAULT_LINE_WIDTH),
        transform: kwargs.transform,
    });

    if axes.xlabel().is_none() {
        axes.set_xlabel(array.label_for(&x_name));
    }
    let value_label = array.value_label();
    if axes.ylabel().is_none() && !value_label.is_empty() {
        axes.set_ylabel(value_label);
    }

    Ok(())
}

fn plot_mesh(array: &LabeledArray, axes: &mut Axes, kwargs: &PlotKwargs) -> PlotResult<()> {
    let dims = array.dims();
    let x_name = kwargs.x.clone().unwrap_or_else(|| dims[1].clone());
    let y_name = kwargs.y.clone().unwrap_or_else(|| dims[0].clone());

    let x = broadcast_coordinate(array, &x_name)?;
    let y = broadcast_coordinate(array, &y_name)?;

    let values = array
        .data()
        .clone()
        .into_dimensionality::<Ix2>()
        .map_err(|e| PlotError::InvalidArray(e.to_string()))?;

    let colormap = match kwargs.style.cmap.as_deref() {
        Some(name) => Colormap::by_name(name)
            .ok_or_else(|| PlotError::RenderError(format!("Unknown colormap '{}'", name)))?,
        None => Colormap::default(),
    };

    let (auto_min, auto_max) = finite_range(&values).unwrap_or((0.0, 1.0));
    let vmin = kwargs.style.vmin.unwrap_or(auto_min);
    let vmax = kwargs.style.vmax.unwrap_or(auto_max);

    axes.add_mesh(QuadMesh {
        x,
        y,
        values,
        colormap,
        vmin,
        vmax,
        transform: kwargs.transform,
        label: kwargs.label.clone(),
    });

    if axes.xlabel().is_none() {
        axes.set_xlabel(array.label_for(&x_name));
    }
    if axes.ylabel().is_none() {
        axes.set_ylabel(array.label_for(&y_name));
    }
    if axes.title().is_none() {
        if let Some(name) = array.name() {
            axes.set_title(name);
        }
    }

    Ok(())
}

/// Resolve a coordinate to one position per data cell.
///
/// 1-D coordinates along either data dim are broadcast; 2-D coordinates
/// must lie over the data dims, in either order.
fn broadcast_coordinate(array: &LabeledArray, name: &str) -> PlotResult<Array2<f64>> {
    let dims = array.dims();
    let shape = array.shape();
    let (ny, nx) = (shape[0], shape[1]);

    let (coord_dims, values) = array
        .axis_values(name)
        .ok_or_else(|| missing_coordinate(array, name))?;

    let shape_error = |message: String| PlotError::CoordinateShape {
        name: name.to_string(),
        message,
    };

    match coord_dims.len() {
        1 => {
            let v = values
                .into_dimensionality::<Ix1>()
                .map_err(|e| shape_error(e.to_string()))?;
            if coord_dims[0] == dims[1] {
                Ok(Array2::from_shape_fn((ny, nx), |(_, j)| v[j]))
            } else if coord_dims[0] == dims[0] {
                Ok(Array2::from_shape_fn((ny, nx), |(i, _)| v[i]))
            } else {
                Err(shape_error(format!(
                    "lies along '{}', which is not one of {:?}",
                    coord_dims[0], dims
                )))
            }
        }
        2 => {
            let v = values
                .into_dimensionality::<Ix2>()
                .map_err(|e| shape_error(e.to_string()))?;
            if coord_dims.as_slice() == dims {
                Ok(v)
            } else if coord_dims[0] == dims[1] && coord_dims[1] == dims[0] {
                Ok(v.reversed_axes())
            } else {
                Err(shape_error(format!(
                    "lies over {:?}, data lies over {:?}",
                    coord_dims, dims
                )))
            }
        }
        n => Err(shape_error(format!("{}-D coordinates cannot be plotted", n))),
    }
}
