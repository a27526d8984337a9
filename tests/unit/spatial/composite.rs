//! Tests for composite stitching and whole-image transforms

#[cfg(test)]
mod tests {
    use crate::fixtures::{COMPOSITE_2X2, GRID_2X2, pixels_from_rows, placed};
    use tilestitch::spatial::composite::{
        count_set_pixels, flip_vertical, rotate_clockwise, stitch,
    };

    // The fixture was generated by scrambling a known master image, so the
    // stitched result is known pixel-for-pixel
    #[test]
    fn test_stitch_reproduces_expected_composite() {
        let (mut tiles, grid) = placed(GRID_2X2);
        tiles.strip_borders();

        let image = stitch(&tiles, &grid).unwrap();
        assert_eq!(image, pixels_from_rows(&COMPOSITE_2X2));
    }

    #[test]
    fn test_composite_dimensions() {
        let (mut tiles, grid) = placed(GRID_2X2);
        let tile_side = tiles.side();
        tiles.strip_borders();

        let image = stitch(&tiles, &grid).unwrap();
        let expected_side = grid.side() * (tile_side - 2);
        assert_eq!(image.dim(), (expected_side, expected_side));
    }

    #[test]
    fn test_rotate_clockwise_known_values() {
        let image = pixels_from_rows(&["##.", "..."]);
        assert_eq!(rotate_clockwise(&image), pixels_from_rows(&[".#", ".#", ".."]));
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let image = pixels_from_rows(&["#..", ".#.", "..#"]);
        let mut rotated = image.clone();
        for _ in 0..4 {
            rotated = rotate_clockwise(&rotated);
        }
        assert_eq!(rotated, image);
    }

    #[test]
    fn test_flip_vertical_mirrors_rows() {
        let image = pixels_from_rows(&["##.", "...", ".#."]);
        assert_eq!(flip_vertical(&image), pixels_from_rows(&[".#.", "...", "##."]));
        assert_eq!(flip_vertical(&flip_vertical(&image)), image);
    }

    #[test]
    fn test_count_set_pixels() {
        let image = pixels_from_rows(&["##.", "..#"]);
        assert_eq!(count_set_pixels(&image), 3);
        assert_eq!(count_set_pixels(&pixels_from_rows(&["...."])), 0);
    }
}
