//! Live-grid mutations.
//!
//! The row mutator and the cell-edit event. These operate on the built
//! grid only; geometry is never re-interpreted here.

use crate::error::{GridFieldError, Result};
use crate::types::{Cell, CellKind, Grid, Row};

/// Apply a user edit to the cell at `(row, display_col)`.
///
/// The value is stored verbatim; content validation is the host's
/// business.
///
/// # Errors
/// `EditRejected` for out-of-range addresses, label cells, and locked
/// cells.
pub fn apply_cell_edit(
    grid: &mut Grid,
    row: usize,
    display_col: usize,
    value: &str,
) -> Result<()> {
    let cell = grid.cell_mut(row, display_col).ok_or_else(|| {
        GridFieldError::EditRejected(format!("no cell at ({row}, {display_col})"))
    })?;

    match cell.kind {
        CellKind::Label => Err(GridFieldError::EditRejected(
            "label cells are display-only".to_string(),
        )),
        CellKind::Data if cell.locked => Err(GridFieldError::EditRejected(format!(
            "cell ({row}, {display_col}) is locked"
        ))),
        CellKind::Data => {
            cell.value = value.to_string();
            Ok(())
        }
    }
}

/// Append one row, cloned structurally from the last existing row.
///
/// Data cells are reset to the empty string; lock flags are copied
/// positionally from the template row, not looked up again.
///
/// # Errors
/// `EditRejected` when the grid was not built with dynamic rows.
pub fn add_row(grid: &mut Grid) -> Result<()> {
    if !grid.is_dynamic() {
        return Err(GridFieldError::EditRejected(
            "rows are not dynamic".to_string(),
        ));
    }

    // A built grid always has at least one row to use as template.
    let cells = grid.rows().last().map_or_else(Vec::new, |template| {
        template
            .cells
            .iter()
            .map(|cell| match cell.kind {
                CellKind::Label => Cell::label(cell.value.clone()),
                CellKind::Data => Cell::data(String::new(), cell.locked),
            })
            .collect()
    });

    grid.rows_mut().push(Row { cells });
    Ok(())
}

/// Remove the last row, if the grid is above its row-count floor.
///
/// Returns `true` when a row was removed, `false` when the grid is
/// already at the configured minimum.
///
/// # Errors
/// `EditRejected` when the grid was not built with dynamic rows.
pub fn remove_row(grid: &mut Grid) -> Result<bool> {
    if !grid.is_dynamic() {
        return Err(GridFieldError::EditRejected(
            "rows are not dynamic".to_string(),
        ));
    }

    if grid.row_count() <= grid.min_rows() {
        return Ok(false);
    }

    grid.rows_mut().pop();
    Ok(true)
}
