//! Configuration parsing and geometry derivation.
//!
//! `GridConfig` is the serde view of the plain configuration object the
//! host supplies; `Geometry` is the validated shape every other component
//! works from. Interpretation is pure: no DOM, no store access.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{GridFieldError, Result};

/// Raw configuration as supplied by the host.
///
/// All keys are external; unknown keys are ignored so hosts can pass
/// richer objects. `columnCount` and `rowCount` are required but modeled
/// as `Option` so their absence is reportable rather than a deserialize
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Number of data columns (required, >= 1).
    pub column_count: Option<usize>,
    /// Initial number of rows (required, >= 1).
    pub row_count: Option<usize>,
    /// Header text per data column.
    pub column_headers: Option<Vec<String>>,
    /// Display-only label per row, rendered in an extra leading column.
    pub row_labels: Option<Vec<String>>,
    /// Whether the host allows adding/removing rows.
    pub dynamic_rows: Option<bool>,
    /// `[row, col]` pairs, 0-indexed against data columns.
    pub locked_cells: Option<Vec<(usize, usize)>>,
    /// Width percents per display column (label column included when
    /// row labels are present).
    pub column_width_percents: Option<Vec<f64>>,
}

/// Validated grid geometry derived from a `GridConfig`.
#[derive(Debug, Clone)]
pub struct Geometry {
    column_count: usize,
    initial_row_count: usize,
    has_header: bool,
    has_row_labels: bool,
    dynamic_rows: bool,
    column_headers: Vec<String>,
    row_labels: Vec<String>,
    locked: HashSet<(usize, usize)>,
    widths: Option<Vec<f64>>,
}

impl Geometry {
    /// Validate a raw configuration and derive the grid geometry.
    ///
    /// # Errors
    /// `MissingParameter` when `columnCount` or `rowCount` is absent or
    /// zero.
    pub fn interpret(config: &GridConfig) -> Result<Self> {
        // The header row is gated on the *presence* of the columnCount
        // key, not on header text being supplied.
        let has_header = config.column_count.is_some();

        let column_count = match config.column_count {
            Some(n) if n > 0 => n,
            _ => {
                return Err(GridFieldError::MissingParameter(
                    "columnCount".to_string(),
                ))
            }
        };
        let initial_row_count = match config.row_count {
            Some(n) if n > 0 => n,
            _ => return Err(GridFieldError::MissingParameter("rowCount".to_string())),
        };

        Ok(Geometry {
            column_count,
            initial_row_count,
            has_header,
            has_row_labels: config.row_labels.is_some(),
            dynamic_rows: config.dynamic_rows.unwrap_or(false),
            column_headers: config.column_headers.clone().unwrap_or_default(),
            row_labels: config.row_labels.clone().unwrap_or_default(),
            locked: config
                .locked_cells
                .as_deref()
                .unwrap_or_default()
                .iter()
                .copied()
                .collect(),
            widths: config.column_width_percents.clone(),
        })
    }

    /// Number of data columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Minimum (and initial) number of rows.
    #[must_use]
    pub fn initial_row_count(&self) -> usize {
        self.initial_row_count
    }

    #[must_use]
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    #[must_use]
    pub fn has_row_labels(&self) -> bool {
        self.has_row_labels
    }

    #[must_use]
    pub fn dynamic_rows(&self) -> bool {
        self.dynamic_rows
    }

    /// Rendered columns: data columns plus the label column when present.
    #[must_use]
    pub fn display_column_count(&self) -> usize {
        self.column_count + usize::from(self.has_row_labels)
    }

    /// Width used for every column when no explicit width list is given.
    #[must_use]
    pub fn default_width_percent(&self) -> f64 {
        // Integer division floors, matching the original widget.
        (100 / self.display_column_count()) as f64
    }

    /// Width percent for a display column.
    #[must_use]
    pub fn width_percent(&self, display_col: usize) -> f64 {
        self.widths
            .as_ref()
            .and_then(|w| w.get(display_col).copied())
            .unwrap_or_else(|| self.default_width_percent())
    }

    /// True for the leading label column, when row labels are configured.
    #[must_use]
    pub fn is_label_column(&self, display_col: usize) -> bool {
        self.has_row_labels && display_col == 0
    }

    /// Map a display column to its data column, if it has one.
    #[must_use]
    pub fn data_column(&self, display_col: usize) -> Option<usize> {
        let data_col = if self.has_row_labels {
            display_col.checked_sub(1)?
        } else {
            display_col
        };
        (data_col < self.column_count).then_some(data_col)
    }

    /// Whether the cell at `(row, display_col)` is locked.
    ///
    /// Locked-cell pairs in the configuration are addressed against data
    /// columns, so the label column (if any) is skipped before the
    /// membership test. Label columns are never "locked" in this sense.
    #[must_use]
    pub fn is_locked(&self, row: usize, display_col: usize) -> bool {
        self.data_column(display_col)
            .is_some_and(|data_col| self.locked.contains(&(row, data_col)))
    }

    /// Header text for a data column; blank past the end of the list.
    #[must_use]
    pub fn header_text(&self, data_col: usize) -> &str {
        self.column_headers.get(data_col).map_or("", String::as_str)
    }

    /// Label for a row; blank past the end of the list.
    #[must_use]
    pub fn row_label(&self, row: usize) -> &str {
        self.row_labels.get(row).map_or("", String::as_str)
    }
}
