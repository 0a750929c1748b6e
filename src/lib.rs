//! gridfield - spreadsheet-like grid editing bound to a form field
//!
//! Binds a structured 2-D value grid to a flat serialized text value:
//! - fixed column headers and row labels
//! - per-cell lock state, fixed at build time
//! - dynamically growable rows with a configured minimum
//! - lossless, canonical serialization (`""` for all-empty grids)
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridFieldElement } from 'gridfield';
//! await init();
//! const widget = new GridFieldElement(textarea, container, config);
//! if (widget.failed()) showFallback(widget.fail_message());
//! ```
//!
//! # Usage (Rust host)
//!
//! ```
//! use gridfield::{GridConfig, GridField, MemoryStore};
//!
//! let config = GridConfig {
//!     column_count: Some(2),
//!     row_count: Some(2),
//!     ..GridConfig::default()
//! };
//! let mut widget = GridField::new(MemoryStore::default(), "", config);
//! assert!(!widget.failed());
//! widget.commit_edit(0, 0, "hello").unwrap();
//! widget.sync();
//! assert_eq!(widget.store().value(), r#"[["hello",""],["",""]]"#);
//! ```

// Model + build pipeline
pub mod builder;
pub mod config;
pub mod error;
pub mod mutation;
pub mod serialize;
pub mod types;

// Surface + widget shell
pub mod render;
pub mod widget;

use wasm_bindgen::prelude::*;

pub use config::{Geometry, GridConfig};
pub use error::{GridFieldError, Result};
pub use types::{Cell, CellKind, Grid, Row};
pub use widget::{GridField, MemoryStore, Surface, ValueStore};

#[cfg(target_arch = "wasm32")]
pub use widget::GridFieldElement;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
