//! Error types for the MOM6 plotting crates.

use thiserror::Error;

/// Result type alias using PlotError.
pub type PlotResult<T> = Result<T, PlotError>;

/// Primary error type for plotting operations.
#[derive(Debug, Error)]
pub enum PlotError {
    // === Input Validation Errors ===
    #[error("Input to plotting function can only be a labeled array. Got {kind}")]
    InvalidInputKind { kind: String },

    #[error("{entry_point} takes exactly one positional argument. Got {count}")]
    ArgumentCount { entry_point: String, count: usize },

    #[error("Can only plot data arrays with {expected} dimension(s). Got {dims:?}")]
    Dimensionality { expected: usize, dims: Vec<String> },

    #[error(
        "Surface has to be a map-projected surface. Create it with a projection \
         (e.g. `Figure::add_geo_axes(MapProjection::plate_carree())`)"
    )]
    MissingProjectedSurface,

    #[error(
        "If labels are provided there must be one label per input array. \
         Got {arrays} arrays and {labels} labels"
    )]
    LabelCountMismatch { arrays: usize, labels: usize },

    #[error("{0} is not implemented")]
    NotImplemented(String),

    // === Data Errors ===
    #[error("Invalid labeled array: {0}")]
    InvalidArray(String),

    #[error("Coordinate '{name}' not found. Available: {available:?}")]
    MissingCoordinate { name: String, available: Vec<String> },

    #[error("Coordinate '{name}' cannot be used: {message}")]
    CoordinateShape { name: String, message: String },

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Tagged classification of a [`PlotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInputKind,
    DimensionalityMismatch,
    MissingProjectedSurface,
    LabelCountMismatch,
    NotImplemented,
    Data,
    Render,
    Config,
}

impl PlotError {
    /// Get the tagged kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlotError::InvalidInputKind { .. } => ErrorKind::InvalidInputKind,
            PlotError::ArgumentCount { .. } | PlotError::Dimensionality { .. } => {
                ErrorKind::DimensionalityMismatch
            }
            PlotError::MissingProjectedSurface => ErrorKind::MissingProjectedSurface,
            PlotError::LabelCountMismatch { .. } => ErrorKind::LabelCountMismatch,
            PlotError::NotImplemented(_) => ErrorKind::NotImplemented,
            PlotError::InvalidArray(_)
            | PlotError::MissingCoordinate { .. }
            | PlotError::CoordinateShape { .. } => ErrorKind::Data,
            PlotError::RenderError(_) => ErrorKind::Render,
            PlotError::ConfigError(_) => ErrorKind::Config,
        }
    }
}

impl From<std::io::Error> for PlotError {
    fn from(err: std::io::Error) -> Self {
        PlotError::RenderError(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionality_kinds() {
        let count = PlotError::ArgumentCount {
            entry_point: "map_plot".into(),
            count: 2,
        };
        let dims = PlotError::Dimensionality {
            expected: 2,
            dims: vec!["time".into(), "y".into(), "x".into()],
        };
        assert_eq!(count.kind(), ErrorKind::DimensionalityMismatch);
        assert_eq!(dims.kind(), ErrorKind::DimensionalityMismatch);
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = PlotError::Dimensionality {
            expected: 2,
            dims: vec!["time".into(), "yh".into(), "xh".into()],
        };
        assert_eq!(
            err.to_string(),
            r#"Can only plot data arrays with 2 dimension(s). Got ["time", "yh", "xh"]"#
        );

        let err = PlotError::InvalidInputKind {
            kind: "float".into(),
        };
        assert!(err.to_string().ends_with("Got float"));

        let err = PlotError::LabelCountMismatch {
            arrays: 2,
            labels: 3,
        };
        assert!(err.to_string().contains("Got 2 arrays and 3 labels"));
    }
}
