//! Positional plot arguments and the input kind check.

use plot_common::{LabeledArray, PlotError, PlotResult};
use renderer::Surface;

/// One positional argument of a plotting call.
///
/// Entry points accept labeled arrays only. The other variants exist so a
/// caller building arguments dynamically gets a precise error instead of a
/// silent conversion.
#[derive(Debug, Clone)]
pub enum PlotArg {
    Array(LabeledArray),
    Scalar(f64),
    Integer(i64),
    Text(String),
    Flag(bool),
    Surface(Surface),
}

impl PlotArg {
    /// Name of the argument's kind, as shown in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PlotArg::Array(_) => "LabeledArray",
            PlotArg::Scalar(_) => "float",
            PlotArg::Integer(_) => "int",
            PlotArg::Text(_) => "str",
            PlotArg::Flag(_) => "bool",
            PlotArg::Surface(_) => "Surface",
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, PlotArg::Array(_))
    }
}

impl From<LabeledArray> for PlotArg {
    fn from(array: LabeledArray) -> Self {
        PlotArg::Array(array)
    }
}

impl From<&LabeledArray> for PlotArg {
    fn from(array: &LabeledArray) -> Self {
        PlotArg::Array(array.clone())
    }
}

impl From<f64> for PlotArg {
    fn from(value: f64) -> Self {
        PlotArg::Scalar(value)
    }
}

impl From<i64> for PlotArg {
    fn from(value: i64) -> Self {
        PlotArg::Integer(value)
    }
}

impl From<&str> for PlotArg {
    fn from(value: &str) -> Self {
        PlotArg::Text(value.to_string())
    }
}

impl From<String> for PlotArg {
    fn from(value: String) -> Self {
        PlotArg::Text(value)
    }
}

impl From<bool> for PlotArg {
    fn from(value: bool) -> Self {
        PlotArg::Flag(value)
    }
}

impl From<Surface> for PlotArg {
    fn from(surface: Surface) -> Self {
        PlotArg::Surface(surface)
    }
}

/// Require every argument to be a labeled array.
///
/// Fails on the first argument of another kind, naming that kind.
pub fn check_kinds(args: Vec<PlotArg>) -> PlotResult<Vec<LabeledArray>> {
    if let Some(bad) = args.iter().find(|arg| !arg.is_array()) {
        return Err(PlotError::InvalidInputKind {
            kind: bad.kind().to_string(),
        });
    }

    Ok(args
        .into_iter()
        .filter_map(|arg| match arg {
            PlotArg::Array(array) => Some(array),
            _ => None,
        })
        .collect())
}
