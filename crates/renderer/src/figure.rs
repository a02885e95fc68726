//! Figures own surfaces and track which one is current.

use std::path::Path;

use plot_common::{PlotError, PlotResult};
use projection::MapProjection;

use crate::axes::{Axes, Surface};
use crate::raster::{self, RasterOptions};

/// Supplies the ambient "current" drawing surface.
///
/// Plotting calls that receive no surface fall back to whatever this
/// provider reports as current.
pub trait CurrentSurface {
    /// The current surface, created if there is none yet.
    fn current_surface(&mut self) -> Surface;

    /// The current surface if one exists. Never creates a surface.
    fn existing_surface(&self) -> Option<Surface>;
}

/// A collection of surfaces with one current slot.
#[derive(Debug, Default)]
pub struct Figure {
    surfaces: Vec<Surface>,
    current: Option<usize>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain surface and make it current.
    pub fn add_axes(&mut self) -> Surface {
        self.push(Surface::new(Axes::new()))
    }

    /// Add a map-projected surface and make it current.
    pub fn add_geo_axes(&mut self, projection: MapProjection) -> Surface {
        self.push(Surface::geo(projection))
    }

    fn push(&mut self, surface: Surface) -> Surface {
        self.surfaces.push(surface.clone());
        self.current = Some(self.surfaces.len() - 1);
        surface
    }

    /// Make a surface of this figure current. Returns false if it does not belong here.
    pub fn set_current(&mut self, surface: &Surface) -> bool {
        match self.surfaces.iter().position(|s| s.ptr_eq(surface)) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    /// The current surface, if any, without creating one.
    pub fn current(&self) -> Option<Surface> {
        self.current.map(|i| self.surfaces[i].clone())
    }

    /// The current surface, creating a plain one when the figure is empty.
    pub fn gca(&mut self) -> Surface {
        match self.current() {
            Some(surface) => surface,
            None => self.add_axes(),
        }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Rasterize the current surface to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>, options: &RasterOptions) -> PlotResult<()> {
        let surface = self
            .current()
            .ok_or_else(|| PlotError::RenderError("figure has no surfaces".to_string()))?;
        let bytes = raster::render_png(&surface.borrow(), options)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl CurrentSurface for Figure {
    fn current_surface(&mut self) -> Surface {
        self.gca()
    }

    fn existing_surface(&self) -> Option<Surface> {
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gca_creates_once() {
        let mut fig = Figure::new();
        assert!(fig.current().is_none());

        let first = fig.gca();
        let second = fig.gca();
        assert!(first.ptr_eq(&second));
        assert_eq!(fig.len(), 1);
        assert!(!first.is_geo());
    }

    #[test]
    fn test_latest_added_is_current() {
        let mut fig = Figure::new();
        let plain = fig.add_axes();
        let geo = fig.add_geo_axes(MapProjection::plate_carree());
        assert!(fig.gca().ptr_eq(&geo));

        assert!(fig.set_current(&plain));
        assert!(fig.current_surface().ptr_eq(&plain));
    }

    #[test]
    fn test_existing_surface_never_creates() {
        let mut fig = Figure::new();
        assert!(fig.existing_surface().is_none());
        assert!(fig.is_empty());

        let geo = fig.add_geo_axes(MapProjection::plate_carree());
        assert!(fig.existing_surface().unwrap().ptr_eq(&geo));
        assert_eq!(fig.len(), 1);
    }

    #[test]
    fn test_set_current_rejects_foreign_surface() {
        let mut fig = Figure::new();
        fig.add_axes();
        assert!(!fig.set_current(&Surface::default()));
    }
}
