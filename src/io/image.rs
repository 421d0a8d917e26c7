//! PNG rendering of arena state

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{
    BOMB_COLOR, DESTRUCTIBLE_COLOR, FLOOR_COLOR, PLAYER_COLOR, POWER_UP_COLOR, WALL_COLOR,
};
use crate::io::error::{ArenaError, Result, invalid_parameter};
use crate::simulation::Arena;
use crate::spatial::{GridPos, TileGrid, TileKind};

/// Coloured square drawn over a cell, inset from its edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Cell to mark
    pub pos: GridPos,
    /// RGBA fill
    pub color: [u8; 4],
}

const fn tile_color(kind: TileKind) -> [u8; 4] {
    match kind {
        TileKind::Floor => FLOOR_COLOR,
        TileKind::Wall => WALL_COLOR,
        TileKind::Destructible => DESTRUCTIBLE_COLOR,
    }
}

/// Markers for the live players, armed bombs and power-ups of an arena
///
/// Later markers are drawn on top: power-ups, then bombs, then players.
pub fn arena_markers(arena: &Arena) -> Vec<Marker> {
    let power_ups = arena.power_ups().iter().map(|power_up| Marker {
        pos: power_up.position,
        color: POWER_UP_COLOR,
    });
    let bombs = arena.bombs().iter().map(|bomb| Marker {
        pos: bomb.origin(),
        color: BOMB_COLOR,
    });
    let players = arena
        .players()
        .iter()
        .filter(|player| player.is_alive())
        .map(|player| Marker {
            pos: player.position(),
            color: PLAYER_COLOR,
        });
    power_ups.chain(bombs).chain(players).collect()
}

/// Paint the grid into an image with `scale x scale` pixels per cell
///
/// Markers outside the grid are skipped. A zero scale is treated as one.
///
/// # Errors
///
/// Returns an error if the scaled image would not fit in memory-addressable
/// dimensions.
pub fn render_grid(grid: &TileGrid, markers: &[Marker], scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let (width, height) = scaled_dimensions(grid, scale)
        .ok_or_else(|| invalid_parameter("scale", &scale, &"image dimensions overflow"))?;
    let mut img = ImageBuffer::new(width, height);

    for (pos, kind) in grid.cells() {
        fill_cell(&mut img, pos, scale, 0, tile_color(kind));
    }

    let inset = scale / 4;
    for marker in markers.iter().filter(|marker| grid.contains(marker.pos)) {
        fill_cell(&mut img, marker.pos, scale, inset, marker.color);
    }

    Ok(img)
}

/// Pixel dimensions of the rendered grid, if its RGBA buffer is addressable
fn scaled_dimensions(grid: &TileGrid, scale: u32) -> Option<(u32, u32)> {
    let width = u32::try_from(grid.width()).ok()?.checked_mul(scale)?;
    let height = u32::try_from(grid.height()).ok()?.checked_mul(scale)?;
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))?
        .checked_mul(4)?;
    usize::try_from(bytes).ok()?;
    Some((width, height))
}

fn fill_cell(img: &mut RgbaImage, pos: GridPos, scale: u32, inset: u32, color: [u8; 4]) {
    let (Ok(x), Ok(y)) = (u32::try_from(pos.x), u32::try_from(pos.y)) else {
        return;
    };
    let left = x * scale;
    let top = y * scale;
    for py in top + inset..top + scale - inset {
        for px in left + inset..left + scale - inset {
            if px < img.width() && py < img.height() {
                img.put_pixel(px, py, Rgba(color));
            }
        }
    }
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero
/// - The scaled image dimensions overflow
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &TileGrid,
    markers: &[Marker],
    output_path: &Path,
    scale: u32,
) -> Result<()> {
    if scale == 0 {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &"cells need at least one pixel",
        ));
    }

    let img = render_grid(grid, markers, scale)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| ArenaError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| ArenaError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
