//! Tests for row add/remove invariants and cell-edit rejection.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use gridfield::config::{Geometry, GridConfig};
    use gridfield::{builder, mutation, Grid};

    fn dynamic_config() -> GridConfig {
        GridConfig {
            column_count: Some(2),
            row_count: Some(2),
            dynamic_rows: Some(true),
            locked_cells: Some(vec![(0, 1), (1, 0)]),
            ..GridConfig::default()
        }
    }

    fn build(config: &GridConfig, wire: &str) -> Grid {
        let geometry = Geometry::interpret(config).unwrap();
        builder::build(&geometry, wire).unwrap()
    }

    #[test]
    fn test_add_row_appends_blank_row() {
        let mut grid = build(&dynamic_config(), r#"[["a","b"],["c","d"]]"#);
        mutation::add_row(&mut grid).unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.cell(2, 0).unwrap().value, "");
        assert_eq!(grid.cell(2, 1).unwrap().value, "");
    }

    #[test]
    fn test_add_row_copies_locks_positionally() {
        // Template row (row 1) has data column 0 locked; the appended row
        // inherits that position, not the value.
        let mut grid = build(&dynamic_config(), "");
        mutation::add_row(&mut grid).unwrap();
        assert!(grid.cell(2, 0).unwrap().locked);
        assert!(!grid.cell(2, 1).unwrap().locked);
    }

    #[test]
    fn test_remove_row_floors_at_minimum() {
        let mut grid = build(&dynamic_config(), "");
        assert!(!grid.can_remove_row());
        assert!(!mutation::remove_row(&mut grid).unwrap());
        assert_eq!(grid.row_count(), 2);

        mutation::add_row(&mut grid).unwrap();
        assert!(grid.can_remove_row());
        assert!(mutation::remove_row(&mut grid).unwrap());
        assert_eq!(grid.row_count(), 2);
        assert!(!grid.can_remove_row());
    }

    #[test]
    fn test_minimum_row_invariant_over_sequences() {
        let mut grid = build(&dynamic_config(), "");
        let ops: &[bool] = &[
            true, true, false, false, false, false, true, false, false, true,
        ];
        for &add in ops {
            if add {
                mutation::add_row(&mut grid).unwrap();
            } else {
                let _ = mutation::remove_row(&mut grid).unwrap();
            }
            assert!(grid.row_count() >= grid.min_rows());
        }
    }

    #[test]
    fn test_locks_survive_mutations_of_other_rows() {
        let mut grid = build(&dynamic_config(), "");
        let before: Vec<Vec<bool>> = grid
            .rows()
            .iter()
            .map(|r| r.cells.iter().map(|c| c.locked).collect())
            .collect();

        mutation::add_row(&mut grid).unwrap();
        mutation::add_row(&mut grid).unwrap();
        let _ = mutation::remove_row(&mut grid).unwrap();

        let after: Vec<Vec<bool>> = grid
            .rows()
            .iter()
            .take(before.len())
            .map(|r| r.cells.iter().map(|c| c.locked).collect())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_add_remove_symmetry() {
        let mut grid = build(&dynamic_config(), r#"[["a","b"],["c","d"]]"#);
        let before = grid.data_values();

        mutation::add_row(&mut grid).unwrap();
        assert!(mutation::remove_row(&mut grid).unwrap());

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.data_values(), before);
    }

    #[test]
    fn test_static_grid_rejects_row_mutations() {
        let config = GridConfig {
            dynamic_rows: None,
            ..dynamic_config()
        };
        let mut grid = build(&config, "");
        assert!(mutation::add_row(&mut grid).is_err());
        assert!(mutation::remove_row(&mut grid).is_err());
        assert_eq!(grid.row_count(), 2);
    }

    #[test]
    fn test_edit_locked_cell_rejected() {
        let mut grid = build(&dynamic_config(), "");
        let err = mutation::apply_cell_edit(&mut grid, 0, 1, "nope").unwrap_err();
        assert_eq!(err.identifier(), "EditRejected");
        assert_eq!(grid.cell(0, 1).unwrap().value, "");
    }

    #[test]
    fn test_edit_label_cell_rejected() {
        let config = GridConfig {
            column_count: Some(2),
            row_count: Some(1),
            row_labels: Some(vec!["L".into()]),
            ..GridConfig::default()
        };
        let mut grid = build(&config, "");
        assert!(mutation::apply_cell_edit(&mut grid, 0, 0, "nope").is_err());
        assert_eq!(grid.cell(0, 0).unwrap().value, "L");
    }

    #[test]
    fn test_edit_out_of_range_rejected() {
        let mut grid = build(&dynamic_config(), "");
        assert!(mutation::apply_cell_edit(&mut grid, 5, 0, "x").is_err());
        assert!(mutation::apply_cell_edit(&mut grid, 0, 9, "x").is_err());
    }

    #[test]
    fn test_edit_unlocked_cell_stored_verbatim() {
        let mut grid = build(&dynamic_config(), "");
        mutation::apply_cell_edit(&mut grid, 0, 0, "  raw value ").unwrap();
        assert_eq!(grid.cell(0, 0).unwrap().value, "  raw value ");
    }

    #[test]
    fn test_added_row_label_copies_template() {
        // Dynamic grid with a label column: the appended row clones the
        // template's label cell.
        let config = GridConfig {
            column_count: Some(1),
            row_count: Some(1),
            dynamic_rows: Some(true),
            row_labels: Some(vec!["Only".into()]),
            ..GridConfig::default()
        };
        let mut grid = build(&config, "");
        mutation::add_row(&mut grid).unwrap();
        let label = grid.cell(1, 0).unwrap();
        assert_eq!(label.value, "Only");
        assert!(!label.is_editable());
    }
}
