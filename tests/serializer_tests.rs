//! Tests for the wire codec and the build/serialize round-trip contract.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use gridfield::config::{Geometry, GridConfig};
    use gridfield::{builder, mutation, serialize};
    use test_case::test_case;

    fn build(cols: usize, rows: usize, wire: &str) -> gridfield::Grid {
        let config = GridConfig {
            column_count: Some(cols),
            row_count: Some(rows),
            ..GridConfig::default()
        };
        let geometry = Geometry::interpret(&config).unwrap();
        builder::build(&geometry, wire).unwrap()
    }

    #[test]
    fn test_blank_grid_serializes_to_empty_string() {
        let grid = build(3, 2, "");
        assert_eq!(serialize::to_wire(&grid), "");
    }

    #[test]
    fn test_all_empty_cells_canonicalize_to_empty_string() {
        // JSON of empty strings is not the canonical all-empty form.
        let grid = build(2, 2, r#"[["",""],["",""]]"#);
        assert_eq!(serialize::to_wire(&grid), "");
    }

    #[test]
    fn test_serialize_is_compact_json() {
        let grid = build(2, 1, r#"[["a","b"]]"#);
        assert_eq!(serialize::to_wire(&grid), r#"[["a","b"]]"#);
    }

    #[test]
    fn test_single_value_keeps_full_shape() {
        let mut grid = build(2, 2, "");
        mutation::apply_cell_edit(&mut grid, 1, 0, "x").unwrap();
        assert_eq!(serialize::to_wire(&grid), r#"[["",""],["x",""]]"#);
    }

    // Round-trip law: serialize(build(C, S)) == canonicalize(S).
    #[test_case(r#"[["a","b"],["c","d"]]"# ; "full preload")]
    #[test_case(r#"[["a",""],["","d"]]"# ; "sparse preload")]
    #[test_case(r#"[["a","b"],["c","d"],["e","f"]]"# ; "overflowing preload")]
    fn test_round_trip_identity(wire: &str) {
        let grid = build(2, 2, wire);
        assert_eq!(serialize::to_wire(&grid), wire);
    }

    #[test_case("" ; "empty string")]
    #[test_case(r#"[["",""],["",""]]"# ; "all empty cells")]
    #[test_case("[]" ; "empty array")]
    fn test_round_trip_canonicalizes_empty(wire: &str) {
        let grid = build(2, 2, wire);
        assert_eq!(serialize::to_wire(&grid), "");
    }

    #[test]
    fn test_labels_never_reach_the_wire() {
        let config = GridConfig {
            column_count: Some(2),
            row_count: Some(1),
            row_labels: Some(vec!["Label".into()]),
            ..GridConfig::default()
        };
        let geometry = Geometry::interpret(&config).unwrap();
        let mut grid = builder::build(&geometry, "").unwrap();
        mutation::apply_cell_edit(&mut grid, 0, 1, "a").unwrap();
        assert_eq!(serialize::to_wire(&grid), r#"[["a",""]]"#);
    }

    #[test]
    fn test_values_with_quotes_and_unicode_round_trip() {
        let mut grid = build(2, 1, "");
        mutation::apply_cell_edit(&mut grid, 0, 0, r#"say "hi""#).unwrap();
        mutation::apply_cell_edit(&mut grid, 0, 1, "héllo\nwörld").unwrap();
        let wire = serialize::to_wire(&grid);
        let reparsed = serialize::parse_preload(&wire).unwrap();
        assert_eq!(reparsed[0][0], r#"say "hi""#);
        assert_eq!(reparsed[0][1], "héllo\nwörld");
    }
}
