//! Tests for blast propagation along the four axis directions

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bomb_arena::algorithm::blast::{Direction, blast_arm, compute_blast_tiles};
    use bomb_arena::spatial::{GridPos, TileGrid, TileKind};
    use proptest::prelude::*;

    fn grid_from(text: &str) -> TileGrid {
        let width = text.lines().map(str::len).max().unwrap_or(1);
        let height = text.lines().count();
        let mut grid = TileGrid::new(width, height);
        grid.load_from_str(text);
        grid
    }

    // Tests a destructible block is hit and stops its arm before a wall
    // Verified by continuing past destructible blocks
    #[test]
    fn test_destructible_stops_arm() {
        let grid = grid_from(".x#..");

        let tiles = compute_blast_tiles(GridPos::new(0, 0), 3, &grid);

        assert_eq!(tiles, vec![GridPos::new(0, 0), GridPos::new(1, 0)]);
    }

    // Tests walls stop an arm before they are reached
    // Verified by pushing the wall cell before breaking
    #[test]
    fn test_wall_excluded_from_blast() {
        let grid = grid_from("..#..");

        let tiles = compute_blast_tiles(GridPos::new(1, 0), 4, &grid);

        assert_eq!(tiles, vec![GridPos::new(1, 0), GridPos::new(0, 0)]);
    }

    // Tests arm ordering: east, west, south, north
    // Verified by reordering SCAN_ORDER
    #[test]
    fn test_open_floor_cross_order() {
        let grid = TileGrid::new(5, 5);
        let origin = GridPos::new(2, 2);

        let tiles = compute_blast_tiles(origin, 1, &grid);

        assert_eq!(
            tiles,
            vec![
                origin,
                GridPos::new(3, 2),
                GridPos::new(1, 2),
                GridPos::new(2, 3),
                GridPos::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_range_zero_covers_only_origin() {
        let grid = TileGrid::new(3, 3);

        let tiles = compute_blast_tiles(GridPos::new(1, 1), 0, &grid);

        assert_eq!(tiles, vec![GridPos::new(1, 1)]);
    }

    // Tests arms stop at the grid border since outside reads as wall
    #[test]
    fn test_arm_stops_at_border() {
        let grid = TileGrid::new(3, 3);

        let east = blast_arm(GridPos::new(1, 1), Direction::East, 10, &grid);
        let north = blast_arm(GridPos::new(1, 1), Direction::North, 10, &grid);

        assert_eq!(east, vec![GridPos::new(2, 1)]);
        assert_eq!(north, vec![GridPos::new(1, 0)]);
    }

    #[test]
    fn test_computation_leaves_grid_untouched() {
        let grid = grid_from("x.x\n...\nx.x");
        let before = grid.clone();

        let _ = compute_blast_tiles(GridPos::new(1, 1), 5, &grid);

        assert_eq!(grid, before);
    }

    #[test]
    fn test_direction_deltas_are_unit_steps() {
        for direction in Direction::SCAN_ORDER {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{direction:?}");
        }
    }

    fn tile_from(code: u8) -> TileKind {
        match code {
            0 => TileKind::Wall,
            1 => TileKind::Destructible,
            _ => TileKind::Floor,
        }
    }

    fn arb_grid() -> impl Strategy<Value = TileGrid> {
        (1usize..10, 1usize..10).prop_flat_map(|(width, height)| {
            prop::collection::vec(0u8..4, width * height).prop_map(move |codes| {
                let mut grid = TileGrid::new(width, height);
                for (index, &code) in codes.iter().enumerate() {
                    let pos = GridPos::new((index % width) as i32, (index / width) as i32);
                    grid.set_tile(pos, tile_from(code));
                }
                grid
            })
        })
    }

    proptest! {
        // Tests origin-first ordering, size bound and that no wall or
        // out-of-range cell other than the origin is ever reported
        #[test]
        fn prop_blast_shape(grid in arb_grid(), x in -2i32..12, y in -2i32..12, range in 0u32..6) {
            let origin = GridPos::new(x, y);
            let tiles = compute_blast_tiles(origin, range, &grid);

            prop_assert_eq!(tiles.first(), Some(&origin));
            prop_assert!(tiles.len() <= 1 + 4 * range as usize);

            let unique: HashSet<GridPos> = tiles.iter().copied().collect();
            prop_assert_eq!(unique.len(), tiles.len());

            for &pos in tiles.iter().skip(1) {
                prop_assert!(grid.contains(pos));
                prop_assert_ne!(grid.tile(pos), TileKind::Wall);
                prop_assert!(pos.x == origin.x || pos.y == origin.y);
            }
        }
    }
}
