//! Structured error types for gridfield.
//!
//! Build failures carry one of the two identifiers the host checks for
//! (`MissingParameter`, `InvalidSerialization`); edit rejections are
//! ordinary results returned to the caller and never put the widget into
//! a failed state.

/// All errors that can occur while building or editing a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridFieldError {
    /// A required configuration key is absent or zero.
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    /// The serialized value is malformed JSON or does not match the
    /// configured row/column shape.
    #[error("invalid serialized value: {0}")]
    InvalidSerialization(String),

    /// A cell edit or row mutation was refused (locked cell, label cell,
    /// out-of-range address, static grid).
    #[error("edit rejected: {0}")]
    EditRejected(String),
}

impl GridFieldError {
    /// Stable identifier surfaced to the host.
    ///
    /// Build failures can only ever be `MissingParameter` or
    /// `InvalidSerialization`; `EditRejected` never reaches the widget's
    /// failed state.
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "MissingParameter",
            Self::InvalidSerialization(_) => "InvalidSerialization",
            Self::EditRejected(_) => "EditRejected",
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridFieldError>;

#[cfg(target_arch = "wasm32")]
impl From<GridFieldError> for wasm_bindgen::JsValue {
    fn from(e: GridFieldError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
