//! The live grid model.

use super::cell::Cell;

/// One display row: exactly `display_columns` cells, the first of which
/// is a label cell when the grid has a label column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// The live, mutable editing surface.
///
/// Carries the shape facts mutation and serialization need so neither
/// has to consult the configuration again.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Row>,
    data_columns: usize,
    label_column: bool,
    min_rows: usize,
    dynamic: bool,
}

impl Grid {
    pub(crate) fn new(
        rows: Vec<Row>,
        data_columns: usize,
        label_column: bool,
        min_rows: usize,
        dynamic: bool,
    ) -> Self {
        Grid {
            rows,
            data_columns,
            label_column,
            min_rows,
            dynamic,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of data columns (always equals the configured column count).
    #[must_use]
    pub fn data_columns(&self) -> usize {
        self.data_columns
    }

    #[must_use]
    pub fn has_label_column(&self) -> bool {
        self.label_column
    }

    /// Rendered columns per row.
    #[must_use]
    pub fn display_columns(&self) -> usize {
        self.data_columns + usize::from(self.label_column)
    }

    /// Row-count floor; removal never goes below this.
    #[must_use]
    pub fn min_rows(&self) -> usize {
        self.min_rows
    }

    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Whether the remove affordance should currently be enabled.
    #[must_use]
    pub fn can_remove_row(&self) -> bool {
        self.dynamic && self.rows.len() > self.min_rows
    }

    #[must_use]
    pub fn cell(&self, row: usize, display_col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(display_col))
    }

    pub(crate) fn cell_mut(&mut self, row: usize, display_col: usize) -> Option<&mut Cell> {
        self.rows
            .get_mut(row)
            .and_then(|r| r.cells.get_mut(display_col))
    }

    /// Data-cell values in row-major order (label cells excluded).
    #[must_use]
    pub fn data_values(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .filter(|c| c.is_data())
                    .map(|c| c.value.clone())
                    .collect()
            })
            .collect()
    }

    /// True when every data cell holds the empty string.
    #[must_use]
    pub fn is_all_empty(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|c| c.is_data())
            .all(|c| c.value.is_empty())
    }
}
