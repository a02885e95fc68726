//! The drawing surface.
//!
//! An [`Axes`] is a 2D canvas region holding an ordered list of artists.
//! When it carries a [`MapProjection`] it is a map-projected (geospatial)
//! surface and accepts map features such as coastlines.
//!
//! Surfaces are shared between the caller, the figure that tracks the
//! current surface, and the plotting pipeline, so they are handed around as
//! a cheap-to-clone [`Surface`] handle. Plotting is single-threaded.

use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;
use std::rc::Rc;

use ndarray::Array2;
use plot_common::{BoundingBox, Color, PlotError, PlotResult};
use projection::{transform_point, MapProjection};

use crate::colormap::Colormap;
use crate::feature::Feature;
use crate::raster::{self, RasterOptions};

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
    Baseline,
}

/// Coordinate system a text anchor is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCoords {
    /// Data coordinates of the surface
    Data,
    /// Axes-relative coordinates: (0, 0) is the lower-left corner of the
    /// plot area and (1, 1) the upper-right. Values outside 0..1 lie outside.
    Axes,
}

/// A text annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextArtist {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub coords: TextCoords,
    pub ha: HAlign,
    pub va: VAlign,
    pub font_size: f32,
    pub color: Color,
}

/// A polyline, typically one 1-D series.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub label: Option<String>,
    pub color: Color,
    pub line_width: f32,
    /// Projection the x/y values are expressed in, when drawn on a map.
    pub transform: Option<MapProjection>,
}

/// A quadrilateral mesh of cell-centered values (pcolormesh).
#[derive(Debug, Clone, PartialEq)]
pub struct QuadMesh {
    /// Cell-center x positions, same shape as `values`
    pub x: Array2<f64>,
    /// Cell-center y positions, same shape as `values`
    pub y: Array2<f64>,
    pub values: Array2<f64>,
    pub colormap: Colormap,
    pub vmin: f64,
    pub vmax: f64,
    /// Projection the x/y positions are expressed in, when drawn on a map.
    pub transform: Option<MapProjection>,
    pub label: Option<String>,
}

/// Anything drawn on a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Mesh(QuadMesh),
    Line(Line),
    Text(TextArtist),
    Feature(Feature),
}

/// One legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Legend attached to a surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

/// A drawing surface.
#[derive(Debug, Clone, Default)]
pub struct Axes {
    projection: Option<MapProjection>,
    artists: Vec<Artist>,
    legend: Option<Legend>,
    xlabel: Option<String>,
    ylabel: Option<String>,
    title: Option<String>,
}

impl Axes {
    /// A plain (non-geospatial) surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map-projected surface.
    pub fn with_projection(projection: MapProjection) -> Self {
        Self {
            projection: Some(projection),
            ..Self::default()
        }
    }

    pub fn projection(&self) -> Option<&MapProjection> {
        self.projection.as_ref()
    }

    /// True when this surface is map-projected.
    pub fn is_geo(&self) -> bool {
        self.projection.is_some()
    }

    pub fn add_mesh(&mut self, mesh: QuadMesh) {
        self.artists.push(Artist::Mesh(mesh));
    }

    pub fn add_line(&mut self, line: Line) {
        self.artists.push(Artist::Line(line));
    }

    pub fn add_text(&mut self, text: TextArtist) {
        self.artists.push(Artist::Text(text));
    }

    /// Overlay a map feature. Only map-projected surfaces accept features.
    pub fn add_feature(&mut self, feature: Feature) -> PlotResult<()> {
        if !self.is_geo() {
            return Err(PlotError::MissingProjectedSurface);
        }
        self.artists.push(Artist::Feature(feature));
        Ok(())
    }

    /// Build and attach a legend from the labelled lines on this surface.
    pub fn legend(&mut self) -> &Legend {
        let entries: Vec<LegendEntry> = self
            .lines()
            .filter_map(|line| {
                line.label.as_ref().map(|label| LegendEntry {
                    label: label.clone(),
                    color: line.color,
                })
            })
            .collect();

        if entries.is_empty() {
            tracing::warn!("No artists with labels found to put in legend");
        }

        self.legend.insert(Legend { entries })
    }

    pub fn legend_entries(&self) -> Option<&[LegendEntry]> {
        self.legend.as_ref().map(|l| l.entries.as_slice())
    }

    pub fn has_legend(&self) -> bool {
        self.legend.is_some()
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = Some(label.into());
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = Some(label.into());
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.legend.is_none()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn meshes(&self) -> impl Iterator<Item = &QuadMesh> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Mesh(m) => Some(m),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextArtist> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Feature(f) => Some(f),
            _ => None,
        })
    }

    /// Map a point given in `transform` coordinates onto this surface.
    ///
    /// On a plain surface, and for points without a transform, coordinates
    /// pass through unchanged.
    pub fn to_surface(
        &self,
        transform: Option<&MapProjection>,
        x: f64,
        y: f64,
    ) -> Option<(f64, f64)> {
        match (self.projection.as_ref(), transform) {
            (Some(dst), Some(src)) => transform_point(src, dst, x, y),
            _ => Some((x, y)),
        }
    }

    /// Extent of meshes and lines in surface coordinates.
    ///
    /// Features and text do not take part in autoscaling.
    pub fn data_extent(&self) -> BoundingBox {
        let mut bbox = BoundingBox::empty();

        for artist in &self.artists {
            match artist {
                Artist::Mesh(mesh) => {
                    for (x, y) in mesh.x.iter().zip(mesh.y.iter()) {
                        if let Some((sx, sy)) = self.to_surface(mesh.transform.as_ref(), *x, *y) {
                            bbox.expand(sx, sy);
                        }
                    }
                }
                Artist::Line(line) => {
                    for (x, y) in line.x.iter().zip(&line.y) {
                        if let Some((sx, sy)) = self.to_surface(line.transform.as_ref(), *x, *y) {
                            bbox.expand(sx, sy);
                        }
                    }
                }
                Artist::Text(_) | Artist::Feature(_) => {}
            }
        }

        bbox
    }

    /// Rasterize this surface and write it as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>, options: &RasterOptions) -> PlotResult<()> {
        let bytes = raster::render_png(self, options)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Shared handle to a drawing surface.
///
/// Cloning the handle does not copy the surface; all clones observe the
/// same artists.
#[derive(Debug, Clone)]
pub struct Surface(Rc<RefCell<Axes>>);

impl Surface {
    pub fn new(axes: Axes) -> Self {
        Self(Rc::new(RefCell::new(axes)))
    }

    /// Shared handle to a new map-projected surface.
    pub fn geo(projection: MapProjection) -> Self {
        Self::new(Axes::with_projection(projection))
    }

    pub fn borrow(&self) -> Ref<'_, Axes> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Axes> {
        self.0.borrow_mut()
    }

    /// True when both handles point at the same surface.
    pub fn ptr_eq(&self, other: &Surface) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_geo(&self) -> bool {
        self.0.borrow().is_geo()
    }
}

impl From<Axes> for Surface {
    fn from(axes: Axes) -> Self {
        Surface::new(axes)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Surface::new(Axes::new())
    }
}
