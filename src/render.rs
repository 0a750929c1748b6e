//! Surface rendering: grid -> HTML table markup.
//!
//! The widget's surface is plain markup, so the core stays independent of
//! any rendering technology: the WASM wrapper mounts it into a container,
//! other hosts may write it anywhere. Cell inputs carry `data-row` /
//! `data-col` (display column) attributes for event delegation.

use std::fmt::Write;

use crate::config::Geometry;
use crate::types::{CellKind, Grid, Row};

/// Render the full surface for a grid: the table plus, for dynamic grids,
/// the add/remove row controls.
#[must_use]
pub fn render_surface(grid: &Grid, geometry: &Geometry) -> String {
    let mut html = String::new();

    let _ = write!(html, r#"<table class="gridfield"><colgroup>"#);
    for display_col in 0..geometry.display_column_count() {
        let _ = write!(
            html,
            r#"<col style="width:{}%">"#,
            geometry.width_percent(display_col)
        );
    }
    let _ = write!(html, "</colgroup>");

    if geometry.has_header() {
        render_header(&mut html, geometry);
    }

    let _ = write!(html, "<tbody>");
    for (row_idx, row) in grid.rows().iter().enumerate() {
        render_row(&mut html, row_idx, row);
    }
    let _ = write!(html, "</tbody></table>");

    if grid.is_dynamic() {
        render_controls(&mut html, grid);
    }

    html
}

/// Header row: blank cell over the label column, configured text (blank
/// past the end of the list) over data columns.
fn render_header(html: &mut String, geometry: &Geometry) {
    let _ = write!(html, "<thead><tr>");
    for display_col in 0..geometry.display_column_count() {
        let text = geometry
            .data_column(display_col)
            .map_or("", |data_col| geometry.header_text(data_col));
        let _ = write!(html, "<th>{}</th>", escape_text(text));
    }
    let _ = write!(html, "</tr></thead>");
}

fn render_row(html: &mut String, row_idx: usize, row: &Row) {
    let _ = write!(html, "<tr>");
    for (display_col, cell) in row.cells.iter().enumerate() {
        match cell.kind {
            CellKind::Label => {
                let _ = write!(
                    html,
                    r#"<th class="gridfield-label" scope="row">{}</th>"#,
                    escape_text(&cell.value)
                );
            }
            CellKind::Data => {
                let disabled = if cell.locked { " disabled" } else { "" };
                let _ = write!(
                    html,
                    r#"<td><input type="text" class="gridfield-cell" data-row="{row_idx}" data-col="{display_col}" value="{}"{disabled}></td>"#,
                    escape_attr(&cell.value)
                );
            }
        }
    }
    let _ = write!(html, "</tr>");
}

fn render_controls(html: &mut String, grid: &Grid) {
    let remove_disabled = if grid.can_remove_row() { "" } else { " disabled" };
    let _ = write!(
        html,
        r#"<div class="gridfield-controls"><button type="button" class="gridfield-add" data-action="add-row">+</button><button type="button" class="gridfield-remove" data-action="remove-row"{remove_disabled}>&#8722;</button></div>"#
    );
}

/// Escape text content for element bodies.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for a double-quoted attribute value.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
