//! Map features overlaid on map-projected surfaces.

use plot_common::Color;

/// What a feature represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureKind {
    Coastline,
    Land,
    Other(String),
}

/// A styled map decoration.
///
/// Geometry is a list of polylines in geodetic (lon, lat) degrees. A feature
/// without geometry is still recorded on the surface; it is drawn only
/// where geometry has been supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub kind: FeatureKind,
    pub edge_color: Color,
    pub face_color: Color,
    pub line_width: f32,
    pub geometry: Vec<Vec<(f64, f64)>>,
}

impl Feature {
    /// Coastlines: black edges, no fill.
    pub fn coastline() -> Self {
        Self {
            kind: FeatureKind::Coastline,
            edge_color: Color::BLACK,
            face_color: Color::transparent(),
            line_width: 1.0,
            geometry: Vec::new(),
        }
    }

    /// Land polygons: pale fill, no edge.
    pub fn land() -> Self {
        Self {
            kind: FeatureKind::Land,
            edge_color: Color::transparent(),
            face_color: Color::new(240, 240, 220, 255),
            line_width: 0.0,
            geometry: Vec::new(),
        }
    }

    pub fn with_edge_color(mut self, color: Color) -> Self {
        self.edge_color = color;
        self
    }

    pub fn with_face_color(mut self, color: Color) -> Self {
        self.face_color = color;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_geometry(mut self, geometry: Vec<Vec<(f64, f64)>>) -> Self {
        self.geometry = geometry;
        self
    }

    /// Closed rings (first point equals last) are filled with the face color.
    pub fn is_closed(ring: &[(f64, f64)]) -> bool {
        ring.len() > 2 && ring.first() == ring.last()
    }
}
