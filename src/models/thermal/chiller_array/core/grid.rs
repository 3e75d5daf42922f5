//! Projection of a matched row onto the target grid.

use uom::si::f64::ThermodynamicTemperature;

use super::{BASE_COLUMNS, BASE_SLOTS, DatasetRow};

/// Returns the native layout slot that feeds a target grid cell.
///
/// Cells are addressed row-major in both layouts. Cells past the last
/// native slot reuse it rather than tiling or interpolating.
pub(super) fn base_slot(index: usize, columns: usize) -> usize {
    let row = index / columns;
    let col = index % columns;
    (row * BASE_COLUMNS + col).min(BASE_SLOTS - 1)
}

/// Assigns a source intake temperature to every cell of a `rows x columns` grid.
pub(super) fn project(
    row: &DatasetRow,
    rows: usize,
    columns: usize,
) -> Vec<ThermodynamicTemperature> {
    (0..rows * columns)
        .map(|i| row.temperatures[base_slot(i, columns)])
        .collect()
}
