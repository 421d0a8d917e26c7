//! Tile storage and grid/world coordinate conversion
//!
//! The grid is a dense `height x width` array of [`TileKind`] addressed by
//! [`GridPos`]. Every query accepts any coordinate: cells outside the grid read
//! as [`TileKind::Wall`] and writes to them are ignored, so callers never need
//! to bounds-check before asking.

use std::fmt;

use log::{debug, trace};
use ndarray::Array2;

use crate::io::configuration::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TILE_SIZE};
use crate::simulation::events::{ArenaEvent, EventSink};
use crate::spatial::coords::{GridPos, WorldPos};

/// Type of a single arena cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    /// Open ground, the only walkable kind
    #[default]
    Floor,
    /// Indestructible block; stops movement and blasts
    Wall,
    /// Breakable block; stops movement, absorbs a blast and turns into floor
    Destructible,
}

impl TileKind {
    /// Map text character for a tile
    ///
    /// `#` is a wall, `x`/`X` a destructible block, anything else floor.
    pub const fn from_map_char(c: char) -> Self {
        match c {
            '#' => Self::Wall,
            'x' | 'X' => Self::Destructible,
            _ => Self::Floor,
        }
    }

    /// Character used when rendering the tile back to map text
    pub const fn map_char(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Destructible => 'x',
        }
    }
}

/// Arena tile grid with world-space placement
///
/// World coordinates are `f64`; cell round trips hold for origin offsets up
/// to around 1e8.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    /// Tile kinds indexed by `[row, col]`, i.e. `[y, x]`
    tiles: Array2<TileKind>,
    tile_size: f64,
    origin_offset: WorldPos,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}

impl TileGrid {
    /// Create an all-floor grid
    ///
    /// Zero dimensions are raised to one so the grid always holds a cell.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: Array2::from_elem((height.max(1), width.max(1)), TileKind::Floor),
            tile_size: DEFAULT_TILE_SIZE,
            origin_offset: WorldPos::default(),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// World units per cell edge
    pub const fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// World position of the grid's top-left corner
    pub const fn origin_offset(&self) -> WorldPos {
        self.origin_offset
    }

    /// Change the grid dimensions
    ///
    /// Ignored when either dimension is not positive. Otherwise every cell is
    /// reset to floor; previous tile data is not carried over, even when the
    /// dimensions are unchanged.
    pub fn resize(&mut self, width: i32, height: i32) {
        let (Ok(width), Ok(height)) = (usize::try_from(width), usize::try_from(height)) else {
            return;
        };
        if width == 0 || height == 0 {
            return;
        }
        self.tiles = Array2::from_elem((height, width), TileKind::Floor);
        debug!("grid resized to {width}x{height}");
    }

    /// Change the world size of a cell, ignoring non-positive values
    pub fn set_tile_size(&mut self, size: f64) {
        if size.is_nan() || size <= 0.0 {
            return;
        }
        self.tile_size = size;
    }

    /// Move the grid's top-left corner in world space
    pub const fn set_origin_offset(&mut self, offset: WorldPos) {
        self.origin_offset = offset;
    }

    /// World position of the centre of a cell
    ///
    /// Defined for every coordinate, including ones outside the grid.
    pub const fn grid_to_world(&self, pos: GridPos) -> WorldPos {
        WorldPos {
            x: (pos.x as f64 + 0.5) * self.tile_size + self.origin_offset.x,
            y: (pos.y as f64 + 0.5) * self.tile_size + self.origin_offset.y,
        }
    }

    /// Cell containing a world position (not bounds-checked)
    pub fn world_to_grid(&self, world: WorldPos) -> GridPos {
        let rel_x = world.x - self.origin_offset.x;
        let rel_y = world.y - self.origin_offset.y;
        GridPos {
            x: (rel_x / self.tile_size).floor() as i32,
            y: (rel_y / self.tile_size).floor() as i32,
        }
    }

    /// Whether a cell lies inside the grid
    pub fn contains(&self, pos: GridPos) -> bool {
        self.cell_index(pos).is_some()
    }

    /// Tile kind at a cell; out-of-range cells read as walls
    pub fn tile(&self, pos: GridPos) -> TileKind {
        self.cell_index(pos)
            .and_then(|index| self.tiles.get(index))
            .copied()
            .unwrap_or(TileKind::Wall)
    }

    /// Overwrite a cell; out-of-range cells are ignored
    pub fn set_tile(&mut self, pos: GridPos, kind: TileKind) {
        if let Some(cell) = self
            .cell_index(pos)
            .and_then(|index| self.tiles.get_mut(index))
        {
            *cell = kind;
        }
    }

    /// Whether a player may stand on a cell
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.contains(pos) && self.tile(pos) == TileKind::Floor
    }

    /// Whether a cell holds a destructible block
    pub fn is_destructible(&self, pos: GridPos) -> bool {
        self.contains(pos) && self.tile(pos) == TileKind::Destructible
    }

    /// Turn a destructible block into floor
    ///
    /// Emits [`ArenaEvent::TileDestroyed`] and returns `true` only when the
    /// cell actually held a destructible block.
    pub fn destroy_tile(&mut self, pos: GridPos, sink: &mut impl EventSink) -> bool {
        if !self.is_destructible(pos) {
            return false;
        }
        self.set_tile(pos, TileKind::Floor);
        debug!("tile destroyed at {pos}");
        sink.emit(ArenaEvent::TileDestroyed { pos });
        true
    }

    /// Overwrite cells from newline-delimited map text
    ///
    /// Lines are trimmed and blank lines skipped without consuming a row.
    /// Rows past the grid height and columns past its width are dropped;
    /// cells not covered by the text keep their current kind.
    pub fn load_from_str(&mut self, text: &str) {
        let width = self.width();
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(self.height());

        for (y, line) in rows.enumerate() {
            for (x, c) in line.chars().take(width).enumerate() {
                if let Some(cell) = self.tiles.get_mut([y, x]) {
                    *cell = TileKind::from_map_char(c);
                }
            }
        }
        trace!("loaded map text into {}x{} grid", width, self.height());
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, TileKind)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((y, x), &kind)| (GridPos::new(x as i32, y as i32), kind))
    }

    /// Number of cells holding a given kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    fn cell_index(&self, pos: GridPos) -> Option<[usize; 2]> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width() && y < self.height()).then_some([y, x])
    }
}

/// Renders the grid as map text that [`TileGrid::load_from_str`] reads back
impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            let line: String = row.iter().map(|tile| tile.map_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
