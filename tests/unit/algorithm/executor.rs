//! Tests for pipeline orchestration and stage error propagation

#[cfg(test)]
mod tests {
    use crate::fixtures::{GRID_2X2, GRID_3X3};
    use tilestitch::SolverError;
    use tilestitch::algorithm::executor::solve_input;

    // The fixed search pattern is 20 pixels wide; a composite smaller than
    // that assembles cleanly but cannot contain a match
    #[test]
    fn test_small_composite_reaches_pattern_search() {
        let err = solve_input(GRID_2X2).unwrap_err();
        assert!(matches!(
            err,
            SolverError::PatternNotFound { orientations: 8 }
        ));

        let larger = solve_input(GRID_3X3).unwrap_err();
        assert!(matches!(larger, SolverError::PatternNotFound { .. }));
    }

    #[test]
    fn test_malformed_header_is_a_parse_error() {
        let err = solve_input("Tile abc:\n###\n###\n###\n").unwrap_err();
        assert!(matches!(err, SolverError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_non_square_tile_count_is_structural() {
        let blocks: Vec<&str> = GRID_3X3.split("\n\n").take(2).collect();
        let err = solve_input(&blocks.join("\n\n")).unwrap_err();
        assert!(matches!(err, SolverError::Structure { .. }));
    }

    #[test]
    fn test_empty_input_is_structural() {
        assert!(matches!(
            solve_input(""),
            Err(SolverError::Structure { .. })
        ));
    }
}
