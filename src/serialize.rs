//! The wire codec: live grid content <-> canonical serialized value.
//!
//! The canonical form is either the empty string (when every data cell is
//! empty) or compact JSON: one array per data row, one string per data
//! column. Label and header content never appears on the wire.

use serde_json::Value;

use crate::error::{GridFieldError, Result};
use crate::types::Grid;

/// Serialize the grid's data cells to the canonical wire form.
///
/// An all-empty grid serializes to `""`, not to JSON of empty strings --
/// hosts depend on the empty string as the canonical "no content" value.
#[must_use]
pub fn to_wire(grid: &Grid) -> String {
    if grid.is_all_empty() {
        return String::new();
    }

    let rows: Vec<Value> = grid
        .data_values()
        .into_iter()
        .map(|row| Value::Array(row.into_iter().map(Value::String).collect()))
        .collect();
    Value::Array(rows).to_string()
}

/// Parse a serialized value into preload rows.
///
/// The empty string yields an empty preload (no rows predefined from
/// data).
///
/// # Errors
/// `InvalidSerialization` when the string is non-empty and not a JSON
/// array of arrays of strings.
pub fn parse_preload(serialized: &str) -> Result<Vec<Vec<String>>> {
    if serialized.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(serialized)
        .map_err(|e| GridFieldError::InvalidSerialization(format!("malformed JSON: {e}")))
}
