//! N-dimensional arrays with named dimensions and coordinates.
//!
//! A [`LabeledArray`] is the unit of input for every plotting entry point.
//! Dimensions are named, and coordinates map a name to values laid out over
//! one or more of those dimensions. MOM6 output typically carries
//! `xh`/`yh` index-space dimensions alongside 2-D `geolon`/`geolat`
//! coordinates.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use ndarray::{Array, ArrayD, Dimension, IxDyn};

use crate::error::{PlotError, PlotResult};

/// Values held by a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateValues {
    /// Numeric values laid out over the coordinate's dims.
    Numeric(ArrayD<f64>),
    /// Timestamps along a single dim.
    Time(Vec<DateTime<Utc>>),
}

/// A coordinate variable attached to a labeled array.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    dims: Vec<String>,
    values: CoordinateValues,
    attrs: BTreeMap<String, String>,
}

impl Coordinate {
    /// Numeric coordinate over the given dims.
    pub fn numeric<D, S>(dims: impl IntoIterator<Item = S>, values: Array<f64, D>) -> Self
    where
        D: Dimension,
        S: Into<String>,
    {
        Self {
            dims: dims.into_iter().map(Into::into).collect(),
            values: CoordinateValues::Numeric(values.into_dyn()),
            attrs: BTreeMap::new(),
        }
    }

    /// Time coordinate along a single dim.
    pub fn time(dim: impl Into<String>, times: Vec<DateTime<Utc>>) -> Self {
        Self {
            dims: vec![dim.into()],
            values: CoordinateValues::Time(times),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn values(&self) -> &CoordinateValues {
        &self.values
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    pub fn shape(&self) -> Vec<usize> {
        match &self.values {
            CoordinateValues::Numeric(a) => a.shape().to_vec(),
            CoordinateValues::Time(t) => vec![t.len()],
        }
    }

    pub fn is_time(&self) -> bool {
        matches!(self.values, CoordinateValues::Time(_))
    }

    /// Numeric view of the values. Timestamps become seconds since the Unix epoch.
    pub fn to_f64(&self) -> ArrayD<f64> {
        match &self.values {
            CoordinateValues::Numeric(a) => a.clone(),
            CoordinateValues::Time(times) => {
                let secs: Vec<f64> = times
                    .iter()
                    .map(|t| t.timestamp() as f64 + t.timestamp_subsec_nanos() as f64 * 1e-9)
                    .collect();
                ArrayD::from_shape_vec(IxDyn(&[secs.len()]), secs)
                    .unwrap_or_else(|_| ArrayD::zeros(IxDyn(&[0])))
            }
        }
    }

    fn renamed_dims(&self, mapping: &BTreeMap<String, String>) -> Self {
        let mut out = self.clone();
        for dim in out.dims.iter_mut() {
            if let Some(to) = mapping.get(dim) {
                *dim = to.clone();
            }
        }
        out
    }
}

/// An N-dimensional numeric array with named dimensions and coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray {
    name: Option<String>,
    dims: Vec<String>,
    data: ArrayD<f64>,
    coords: BTreeMap<String, Coordinate>,
    attrs: BTreeMap<String, String>,
}

impl LabeledArray {
    /// Create an array from data and one name per axis.
    pub fn new<D, S>(dims: impl IntoIterator<Item = S>, data: Array<f64, D>) -> PlotResult<Self>
    where
        D: Dimension,
        S: Into<String>,
    {
        let dims: Vec<String> = dims.into_iter().map(Into::into).collect();
        let data = data.into_dyn();

        if dims.len() != data.ndim() {
            return Err(PlotError::InvalidArray(format!(
                "{} dimension names given for data of rank {}",
                dims.len(),
                data.ndim()
            )));
        }

        let unique: BTreeSet<&String> = dims.iter().collect();
        if unique.len() != dims.len() {
            return Err(PlotError::InvalidArray(format!(
                "dimension names must be unique, got {:?}",
                dims
            )));
        }

        Ok(Self {
            name: None,
            dims,
            data,
            coords: BTreeMap::new(),
            attrs: BTreeMap::new(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Attach a coordinate, checking it lies over existing dims with matching sizes.
    pub fn with_coord(mut self, name: impl Into<String>, coord: Coordinate) -> PlotResult<Self> {
        let name = name.into();
        let shape = coord.shape();

        if shape.len() != coord.dims.len() {
            return Err(PlotError::InvalidArray(format!(
                "coordinate '{}' has {} dims but values of rank {}",
                name,
                coord.dims.len(),
                shape.len()
            )));
        }

        for (dim, len) in coord.dims.iter().zip(&shape) {
            match self.dim_size(dim) {
                Some(size) if size == *len => {}
                Some(size) => {
                    return Err(PlotError::InvalidArray(format!(
                        "coordinate '{}' has length {} along '{}', array has {}",
                        name, len, dim, size
                    )))
                }
                None => {
                    return Err(PlotError::InvalidArray(format!(
                        "coordinate '{}' uses unknown dimension '{}'",
                        name, dim
                    )))
                }
            }
        }

        self.coords.insert(name, coord);
        Ok(self)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    pub fn coords(&self) -> &BTreeMap<String, Coordinate> {
        &self.coords
    }

    pub fn coord(&self, name: &str) -> Option<&Coordinate> {
        self.coords.get(name)
    }

    pub fn has_dim(&self, name: &str) -> bool {
        self.dims.iter().any(|d| d == name)
    }

    /// Length of a named dimension.
    pub fn dim_size(&self, name: &str) -> Option<usize> {
        self.dims
            .iter()
            .position(|d| d == name)
            .map(|axis| self.data.shape()[axis])
    }

    /// All dimension and coordinate names.
    pub fn names(&self) -> BTreeSet<String> {
        self.dims
            .iter()
            .cloned()
            .chain(self.coords.keys().cloned())
            .collect()
    }

    /// Return a copy with dimensions and coordinates renamed.
    ///
    /// Pairs whose source name is absent are ignored. A pair whose target is
    /// already taken by another dimension or coordinate is skipped, so the
    /// result never holds two variables under one name.
    pub fn rename<'a>(&self, mapping: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let names = self.names();
        let mut effective: BTreeMap<String, String> = BTreeMap::new();

        for (from, to) in mapping {
            if from == to || !names.contains(from) || names.contains(to) {
                continue;
            }
            if effective.values().any(|v| v == to) {
                continue;
            }
            effective.insert(from.to_string(), to.to_string());
        }

        if effective.is_empty() {
            return self.clone();
        }

        let dims = self
            .dims
            .iter()
            .map(|d| effective.get(d).cloned().unwrap_or_else(|| d.clone()))
            .collect();

        let coords = self
            .coords
            .iter()
            .map(|(name, coord)| {
                let key = effective.get(name).cloned().unwrap_or_else(|| name.clone());
                (key, coord.renamed_dims(&effective))
            })
            .collect();

        Self {
            name: self.name.clone(),
            dims,
            data: self.data.clone(),
            coords,
            attrs: self.attrs.clone(),
        }
    }

    /// Values to plot along a named axis, and the dims they lie over.
    ///
    /// A coordinate wins over a dimension of the same name; a dimension
    /// without a coordinate yields its integer positions.
    pub fn axis_values(&self, name: &str) -> Option<(Vec<String>, ArrayD<f64>)> {
        if let Some(coord) = self.coords.get(name) {
            return Some((coord.dims.clone(), coord.to_f64()));
        }

        let size = self.dim_size(name)?;
        let positions: Vec<f64> = (0..size).map(|i| i as f64).collect();
        let values = ArrayD::from_shape_vec(IxDyn(&[size]), positions).ok()?;
        Some((vec![name.to_string()], values))
    }

    /// Human-readable axis label for a dimension or coordinate.
    ///
    /// Uses `long_name`, then `standard_name`, then the name itself, and
    /// appends `[units]` when a `units` attribute exists.
    pub fn label_for(&self, name: &str) -> String {
        label_from_attrs(name, self.coords.get(name).map(|c| &c.attrs))
    }

    /// Label for the array values themselves.
    pub fn value_label(&self) -> String {
        label_from_attrs(self.name.as_deref().unwrap_or(""), Some(&self.attrs))
    }
}

fn label_from_attrs(name: &str, attrs: Option<&BTreeMap<String, String>>) -> String {
    let Some(attrs) = attrs else {
        return name.to_string();
    };

    let base = attrs
        .get("long_name")
        .or_else(|| attrs.get("standard_name"))
        .map(String::as_str)
        .unwrap_or(name);

    match attrs.get("units") {
        Some(units) if !units.is_empty() => format!("{} [{}]", base, units),
        _ => base.to_string(),
    }
}
