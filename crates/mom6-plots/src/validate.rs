//! Dimensionality checks run before any renaming or drawing.

use plot_common::{LabeledArray, PlotError, PlotResult};

/// Accept exactly one argument, and only if it is two dimensional.
pub fn check_single_2d(entry_point: &str, arrays: Vec<LabeledArray>) -> PlotResult<LabeledArray> {
    let [array]: [LabeledArray; 1] =
        arrays
            .try_into()
            .map_err(|arrays: Vec<LabeledArray>| PlotError::ArgumentCount {
                entry_point: entry_point.to_string(),
                count: arrays.len(),
            })?;

    require_ndim(&array, 2)?;
    Ok(array)
}

/// Accept any number of arguments, each one dimensional.
pub fn check_all_1d(arrays: &[LabeledArray]) -> PlotResult<()> {
    arrays.iter().try_for_each(|array| require_ndim(array, 1))
}

fn require_ndim(array: &LabeledArray, expected: usize) -> PlotResult<()> {
    if array.ndim() == expected {
        Ok(())
    } else {
        Err(PlotError::Dimensionality {
            expected,
            dims: array.dims().to_vec(),
        })
    }
}
