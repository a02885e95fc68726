//! Common types shared across the MOM6 plotting crates.

pub mod array;
pub mod bbox;
pub mod color;
pub mod error;

pub use array::{Coordinate, CoordinateValues, LabeledArray};
pub use bbox::BoundingBox;
pub use color::Color;
pub use error::{ErrorKind, PlotError, PlotResult};
