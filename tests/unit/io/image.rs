//! Tests for PNG rendering of arena state

#[cfg(test)]
mod tests {
    use bomb_arena::ArenaError;
    use bomb_arena::entities::PowerUpKind;
    use bomb_arena::io::configuration::{
        BOMB_COLOR, DESTRUCTIBLE_COLOR, FLOOR_COLOR, PLAYER_COLOR, POWER_UP_COLOR, WALL_COLOR,
    };
    use bomb_arena::io::image::{Marker, arena_markers, export_grid_as_png, render_grid};
    use bomb_arena::simulation::Arena;
    use bomb_arena::spatial::{GridPos, TileGrid, TileKind};
    use tempfile::TempDir;

    fn pixel(img: &image::RgbaImage, x: u32, y: u32) -> Option<[u8; 4]> {
        img.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }

    // Tests each tile kind is painted with its palette colour
    // Verified by painting destructible blocks with the wall colour
    #[test]
    fn test_render_tile_colours() -> bomb_arena::Result<()> {
        let mut grid = TileGrid::new(3, 1);
        grid.set_tile(GridPos::new(1, 0), TileKind::Wall);
        grid.set_tile(GridPos::new(2, 0), TileKind::Destructible);

        let img = render_grid(&grid, &[], 4)?;

        assert_eq!(img.dimensions(), (12, 4));
        assert_eq!(pixel(&img, 0, 0), Some(FLOOR_COLOR));
        assert_eq!(pixel(&img, 5, 3), Some(WALL_COLOR));
        assert_eq!(pixel(&img, 11, 2), Some(DESTRUCTIBLE_COLOR));
        Ok(())
    }

    // Tests markers are inset so the tile colour frames them
    #[test]
    fn test_markers_are_inset() -> bomb_arena::Result<()> {
        let grid = TileGrid::new(2, 2);
        let marker = Marker {
            pos: GridPos::new(1, 1),
            color: PLAYER_COLOR,
        };

        let img = render_grid(&grid, &[marker], 8)?;

        assert_eq!(pixel(&img, 8, 8), Some(FLOOR_COLOR));
        assert_eq!(pixel(&img, 12, 12), Some(PLAYER_COLOR));
        assert_eq!(pixel(&img, 4, 4), Some(FLOOR_COLOR));
        Ok(())
    }

    #[test]
    fn test_out_of_range_markers_skipped() -> bomb_arena::Result<()> {
        let grid = TileGrid::new(1, 1);
        let marker = Marker {
            pos: GridPos::new(-1, 3),
            color: BOMB_COLOR,
        };

        let img = render_grid(&grid, &[marker], 2)?;

        assert!(img.pixels().all(|pixel| pixel.0 == FLOOR_COLOR));
        Ok(())
    }

    // Tests scales whose image size overflows are rejected before allocating
    // Verified by multiplying the dimensions unchecked
    #[test]
    fn test_render_rejects_overflowing_scale() {
        let wide = render_grid(&TileGrid::new(3, 3), &[], u32::MAX);
        assert!(matches!(wide, Err(ArenaError::InvalidParameter { parameter: "scale", .. })));

        // Each side fits in u32 but the RGBA buffer does not
        let huge = render_grid(&TileGrid::new(1, 1), &[], u32::MAX);
        assert!(matches!(huge, Err(ArenaError::InvalidParameter { parameter: "scale", .. })));
    }

    // Tests markers follow arena contents and skip dead players
    #[test]
    fn test_arena_markers() {
        let mut arena = Arena::new(TileGrid::new(5, 5));
        arena.spawn_player(GridPos::new(4, 4));
        arena.spawn_power_up(PowerUpKind::Kick, GridPos::new(0, 4));
        arena.drop_bomb(GridPos::new(2, 2), 1);

        let markers = arena_markers(&arena);

        assert_eq!(
            markers,
            vec![
                Marker {
                    pos: GridPos::new(0, 4),
                    color: POWER_UP_COLOR
                },
                Marker {
                    pos: GridPos::new(2, 2),
                    color: BOMB_COLOR
                },
                Marker {
                    pos: GridPos::new(4, 4),
                    color: PLAYER_COLOR
                },
            ]
        );
    }

    // Tests PNG export writes a decodable file of the expected size
    // Verified by skipping the save call
    #[test]
    fn test_export_creates_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("out").join("arena.png");
        let grid = TileGrid::new(4, 3);

        export_grid_as_png(&grid, &[], &path, 2)?;

        let img = image::open(&path)?;
        assert_eq!((img.width(), img.height()), (8, 6));
        Ok(())
    }

    #[test]
    fn test_export_zero_scale_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("arena.png");

        let result = export_grid_as_png(&TileGrid::new(2, 2), &[], &path, 0);

        assert!(matches!(result, Err(ArenaError::InvalidParameter { .. })));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_export_overflowing_scale_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("arena.png");

        let result = export_grid_as_png(&TileGrid::new(70_000, 1), &[], &path, 70_000);

        assert!(matches!(result, Err(ArenaError::InvalidParameter { .. })));
        assert!(!path.exists());
        Ok(())
    }
}
