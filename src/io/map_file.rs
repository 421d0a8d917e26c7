//! Map text files
//!
//! A map file is plain text, one grid row per line: `#` for walls, `x` or `X`
//! for destructible blocks and any other character for floor. Lines are
//! trimmed and blank lines ignored. Loading sizes the grid to the text: as many
//! rows as there are non-blank lines, as many columns as the widest of them.

use std::path::Path;

use log::{debug, warn};

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{ArenaError, Result, invalid_map_data};
use crate::spatial::TileGrid;

/// Dimensions `(width, height)` the map text describes
pub fn map_dimensions(text: &str) -> (usize, usize) {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold((0, 0), |(width, height), line| {
            (width.max(line.chars().count()), height + 1)
        })
}

/// Build a grid sized to fit map text
///
/// Rows shorter than the widest one are padded with floor.
///
/// # Errors
///
/// Returns an error if:
/// - The text holds no non-blank line
/// - The described grid exceeds [`MAX_GRID_DIMENSION`] in either direction
pub fn parse_map(text: &str) -> Result<TileGrid> {
    let (width, height) = map_dimensions(text);
    if width == 0 || height == 0 {
        return Err(invalid_map_data(&"map contains no rows"));
    }
    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(invalid_map_data(&format!(
            "map is {width}x{height}, limit is {MAX_GRID_DIMENSION} per side"
        )));
    }

    let ragged = text
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && line.chars().count() != width);
    if ragged {
        warn!("map rows have uneven lengths, padding short rows with floor");
    }

    let mut grid = TileGrid::new(width, height);
    grid.load_from_str(text);
    debug!("parsed {width}x{height} map");
    Ok(grid)
}

/// Read and parse a map file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not a
/// usable map (see [`parse_map`])
pub fn load_map(path: &Path) -> Result<TileGrid> {
    let text = std::fs::read_to_string(path).map_err(|e| ArenaError::MapRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_map(&text)
}

/// Write a grid as map text, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn save_map(grid: &TileGrid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ArenaError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, grid.to_string()).map_err(|e| ArenaError::FileSystem {
        path: path.to_path_buf(),
        operation: "write map",
        source: e,
    })
}
