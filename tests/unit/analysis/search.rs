//! Tests for the eight-orientation pattern search and residual counting

#[cfg(test)]
mod tests {
    use crate::fixtures::{COMPOSITE_3X3, EMBEDDED_PATTERN, GRID_3X3, pixels_from_rows, placed};
    use tilestitch::analysis::pattern::Pattern;
    use tilestitch::analysis::search::{coverage, scan, search_oriented};
    use tilestitch::io::error::SolverError;
    use tilestitch::spatial::composite::{
        count_set_pixels, flip_vertical, rotate_clockwise, stitch,
    };

    // The embedded composite is exactly what assembling the tile fixture
    // produces, so searching either is equivalent
    #[test]
    fn test_assembled_fixture_matches_embedded_composite() {
        let (mut tiles, grid) = placed(GRID_3X3);
        tiles.strip_borders();
        let image = stitch(&tiles, &grid).unwrap();
        assert_eq!(image, pixels_from_rows(&COMPOSITE_3X3));

        let pattern = Pattern::from_rows(&EMBEDDED_PATTERN).unwrap();
        let outcome = search_oriented(&image, &pattern).unwrap();
        assert_eq!(outcome.matches, vec![[3, 4]]);
    }

    #[test]
    fn test_scan_finds_the_embedded_instance() {
        let image = pixels_from_rows(&COMPOSITE_3X3);
        let pattern = Pattern::from_rows(&EMBEDDED_PATTERN).unwrap();
        assert_eq!(scan(&image, &pattern), vec![[3, 4]]);
    }

    // The fixture embeds the pattern once; no other orientation may contain
    // a spurious hit
    #[test]
    fn test_exactly_one_orientation_matches() {
        let image = pixels_from_rows(&COMPOSITE_3X3);
        let pattern = Pattern::from_rows(&EMBEDDED_PATTERN).unwrap();

        let mut rotated = image.clone();
        let mut orientations_with_hits = 0;
        for _ in 0..4 {
            if !scan(&rotated, &pattern).is_empty() {
                orientations_with_hits += 1;
            }
            if !scan(&flip_vertical(&rotated), &pattern).is_empty() {
                orientations_with_hits += 1;
            }
            rotated = rotate_clockwise(&rotated);
        }
        assert_eq!(orientations_with_hits, 1);
    }

    #[test]
    fn test_search_reports_first_matching_orientation() {
        let image = pixels_from_rows(&COMPOSITE_3X3);
        let pattern = Pattern::from_rows(&EMBEDDED_PATTERN).unwrap();

        let outcome = search_oriented(&image, &pattern).unwrap();
        assert_eq!(outcome.orientation, 0);
        assert_eq!(outcome.matches, vec![[3, 4]]);
        assert_eq!(outcome.roughness, 82);
        assert_eq!(count_set_pixels(&outcome.image), 87);
    }

    // Reorienting the input image must not change the result; the search
    // walks all eight orientations itself
    #[test]
    fn test_search_is_orientation_invariant() {
        let image = pixels_from_rows(&COMPOSITE_3X3);
        let pattern = Pattern::from_rows(&EMBEDDED_PATTERN).unwrap();

        let reoriented = rotate_clockwise(&flip_vertical(&image));
        let outcome = search_oriented(&reoriented, &pattern).unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.roughness, 82);
    }

    #[test]
    fn test_no_match_reports_all_orientations() {
        let image = pixels_from_rows(&["....", "....", "....", "...."]);
        let pattern = Pattern::from_rows(&EMBEDDED_PATTERN).unwrap();
        let err = search_oriented(&image, &pattern).unwrap_err();
        assert!(matches!(
            err,
            SolverError::PatternNotFound { orientations: 8 }
        ));
    }

    // Anchors include the last row and column where the bounding box fits
    #[test]
    fn test_scan_bounds_are_inclusive() {
        let image = pixels_from_rows(&["##"]);
        let pattern = Pattern::from_rows(&["##"]).unwrap();
        assert_eq!(scan(&image, &pattern), vec![[0, 0]]);
    }

    #[test]
    fn test_scan_skips_oversized_patterns() {
        let image = pixels_from_rows(&["##"]);
        let pattern = Pattern::from_rows(&["###"]).unwrap();
        assert!(scan(&image, &pattern).is_empty());
    }

    // Overlapping matches share a pixel; the shared pixel is subtracted once
    #[test]
    fn test_residual_subtracts_overlaps_once() {
        let image = pixels_from_rows(&["###..#"]);
        let pattern = Pattern::from_rows(&["##"]).unwrap();

        let outcome = search_oriented(&image, &pattern).unwrap();
        assert_eq!(outcome.matches, vec![[0, 0], [1, 0]]);
        assert_eq!(outcome.roughness, 1);
    }

    #[test]
    fn test_coverage_marks_matched_pixels_only() {
        let image = pixels_from_rows(&COMPOSITE_3X3);
        let pattern = Pattern::from_rows(&EMBEDDED_PATTERN).unwrap();
        let mask = coverage(&image, &pattern, &[[3, 4]]);

        assert_eq!(mask.marked(), pattern.pixel_count());
        assert!(mask.contains(3, 4));
        assert!(!mask.contains(0, 0));
    }
}
