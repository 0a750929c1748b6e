//! A single display cell.

/// Cell role: display-only row label, or editable data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Row-label column cell; never editable, never serialized.
    Label,
    /// Data cell; serialized, editable unless locked.
    Data,
}

/// A single cell in the live grid.
///
/// The `locked` flag is fixed when the grid is built (or, for appended
/// rows, copied positionally from the template row) and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    pub kind: CellKind,
    pub locked: bool,
}

impl Cell {
    /// A display-only label cell.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Cell {
            value: text.into(),
            kind: CellKind::Label,
            locked: true,
        }
    }

    /// An editable data cell.
    #[must_use]
    pub fn data(value: impl Into<String>, locked: bool) -> Self {
        Cell {
            value: value.into(),
            kind: CellKind::Data,
            locked,
        }
    }

    /// Whether this cell participates in serialization.
    #[must_use]
    pub fn is_data(&self) -> bool {
        self.kind == CellKind::Data
    }

    /// Whether the end user may change this cell's value.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.is_data() && !self.locked
    }
}
