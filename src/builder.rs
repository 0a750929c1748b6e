//! Grid construction from geometry + serialized value.

use crate::config::Geometry;
use crate::error::{GridFieldError, Result};
use crate::serialize;
use crate::types::{Cell, Grid, Row};

/// Build a live grid from validated geometry and a serialized value.
///
/// Preload rows beyond the configured row count grow the grid; fewer
/// preload rows leave the remainder blank. Lock flags are resolved here,
/// once, and never change afterwards.
///
/// # Errors
/// `InvalidSerialization` when the value is malformed JSON or any preload
/// row's width differs from the configured column count. Nothing
/// partially built escapes on failure.
pub fn build(geometry: &Geometry, serialized: &str) -> Result<Grid> {
    let preload = serialize::parse_preload(serialized)?;

    for (idx, row) in preload.iter().enumerate() {
        if row.len() != geometry.column_count() {
            return Err(GridFieldError::InvalidSerialization(format!(
                "row {idx} has {} values, expected {}",
                row.len(),
                geometry.column_count()
            )));
        }
    }

    let required_rows = geometry.initial_row_count().max(preload.len());
    let display_cols = geometry.display_column_count();

    let mut rows = Vec::with_capacity(required_rows);
    for r in 0..required_rows {
        let mut cells = Vec::with_capacity(display_cols);
        for display_col in 0..display_cols {
            if geometry.is_label_column(display_col) {
                cells.push(Cell::label(geometry.row_label(r)));
            } else {
                let value = geometry
                    .data_column(display_col)
                    .and_then(|data_col| preload.get(r).and_then(|pr| pr.get(data_col)))
                    .cloned()
                    .unwrap_or_default();
                cells.push(Cell::data(value, geometry.is_locked(r, display_col)));
            }
        }
        rows.push(Row { cells });
    }

    Ok(Grid::new(
        rows,
        geometry.column_count(),
        geometry.has_row_labels(),
        geometry.initial_row_count(),
        geometry.dynamic_rows(),
    ))
}
