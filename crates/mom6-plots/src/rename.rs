//! Mapping of MOM6 dimension and coordinate names onto plotting names.

use plot_common::LabeledArray;

/// MOM6 names and the canonical names plots refer to.
pub const RENAME_TABLE: [(&str, &str); 4] = [
    ("xh", "x"),
    ("yh", "y"),
    ("geolon", "lon"),
    ("geolat", "lat"),
];

/// Rename the known MOM6 names present on an array.
///
/// Names the array does not carry are ignored, so arrays that already use
/// canonical names come back unchanged. A MOM6 name whose canonical name is
/// already taken on the array is left in place: an array with both `xh` and
/// `x` keeps `xh`, and later lookups of `x` find the existing variable.
pub fn rename_coords(array: &LabeledArray) -> LabeledArray {
    let names = array.names();
    let applicable: Vec<(&str, &str)> = RENAME_TABLE
        .iter()
        .copied()
        .filter(|(from, _)| names.contains(*from))
        .collect();

    if applicable.is_empty() {
        return array.clone();
    }

    tracing::debug!(renames = ?applicable, "Renaming MOM6 coordinates");
    array.rename(applicable)
}
