//! Tests for orientation resolution and the join invariant

#[cfg(test)]
mod tests {
    use crate::fixtures::{GRID_2X2, GRID_3X3, oriented};
    use tilestitch::algorithm::adjacency::AdjacencyGraph;
    use tilestitch::algorithm::orientation;
    use tilestitch::io::parser::parse_tiles;
    use tilestitch::spatial::tile::{TileSet, opposite};

    // Every resolved edge must satisfy the join condition: a tile's border
    // reads as the reverse of its neighbor's opposite border
    fn assert_join_invariant(tiles: &TileSet) {
        for (index, tile) in tiles.iter().enumerate() {
            let borders = tile.borders();
            for (direction, neighbor) in tile.neighbors().iter().enumerate() {
                let Some(other_index) = *neighbor else {
                    continue;
                };
                let other = tiles.get(other_index).unwrap();
                let other_border = other
                    .borders()
                    .get(opposite(direction))
                    .cloned()
                    .unwrap();

                let own = borders.get(direction).cloned().unwrap();
                assert!(
                    own.iter().eq(other_border.iter().rev()),
                    "join invariant broken between tiles {index} and {other_index} at direction {direction}"
                );
            }
        }
    }

    #[test]
    fn test_align_satisfies_join_invariant_2x2() {
        let (tiles, _) = oriented(GRID_2X2);
        assert_join_invariant(&tiles);
    }

    #[test]
    fn test_align_satisfies_join_invariant_3x3() {
        let (tiles, _) = oriented(GRID_3X3);
        assert_join_invariant(&tiles);
    }

    #[test]
    fn test_align_links_both_directions() {
        let (tiles, graph) = oriented(GRID_3X3);

        for (index, tile) in tiles.iter().enumerate() {
            // Every adjacency graph edge became a neighbor map entry
            assert_eq!(tile.neighbor_count(), graph.neighbors(index).len());

            for (direction, neighbor) in tile.neighbors().iter().enumerate() {
                if let Some(other_index) = *neighbor {
                    let back = tiles.get(other_index).unwrap().neighbors();
                    assert_eq!(back[opposite(direction)], Some(index));
                }
            }
        }
    }

    #[test]
    fn test_corner_edge_center_neighbor_counts() {
        let (tiles, _) = oriented(GRID_3X3);
        let mut counts: Vec<usize> = tiles.iter().map(|tile| tile.neighbor_count()).collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![2, 2, 2, 2, 3, 3, 3, 3, 4]);
    }

    #[test]
    fn test_disconnected_graph_is_rejected() {
        let input = "\
Tile 1:
#..
...
...

Tile 2:
###
###
###
";
        let mut tiles = parse_tiles(input).unwrap();
        let graph = AdjacencyGraph::resolve(&tiles);
        assert!(graph.neighbors(0).is_empty());

        let err = orientation::align(&mut tiles, &graph).unwrap_err();
        assert!(err.to_string().contains("disconnected"));
    }

    #[test]
    fn test_align_is_stable_once_oriented() {
        let (mut tiles, graph) = oriented(GRID_2X2);
        let before: Vec<_> = tiles.iter().map(|tile| tile.borders()).collect();

        // A second pass only re-registers existing links
        orientation::align(&mut tiles, &graph).unwrap();
        let after: Vec<_> = tiles.iter().map(|tile| tile.borders()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let mut empty = TileSet::default();
        let empty_graph = AdjacencyGraph::resolve(&empty);
        assert!(empty_graph.is_empty());
        assert!(orientation::align(&mut empty, &empty_graph).is_err());
    }
}
