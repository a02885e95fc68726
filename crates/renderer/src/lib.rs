//! Drawing surfaces and rendering for labeled array plots.
//!
//! - [`axes`]: the drawing surface, its artists and the shared [`Surface`] handle
//! - [`figure`]: owner of surfaces and of the ambient "current" surface
//! - [`xplot`]: plotting a labeled array onto a surface (lines and quad meshes)
//! - [`feature`]: map decorations such as coastlines
//! - [`colormap`]: value to color mapping
//! - [`raster`] and [`png`]: rasterization and PNG encoding
//! - [`text`]: text drawing with the embedded font

pub mod axes;
pub mod colormap;
pub mod feature;
pub mod figure;
pub mod png;
pub mod raster;
pub mod text;
pub mod xplot;

pub use axes::{
    Artist, Axes, HAlign, Legend, LegendEntry, Line, QuadMesh, Surface, TextArtist, TextCoords,
    VAlign,
};
pub use colormap::Colormap;
pub use feature::{Feature, FeatureKind};
pub use figure::{CurrentSurface, Figure};
pub use raster::RasterOptions;
pub use xplot::{plot_array, ArtistStyle, PlotKwargs};
