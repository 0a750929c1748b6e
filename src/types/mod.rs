//! Core grid model types.

mod cell;
mod grid;

pub use cell::{Cell, CellKind};
pub use grid::{Grid, Row};
