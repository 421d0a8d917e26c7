//! Blast propagation from a detonating bomb
//!
//! A blast always covers its origin and then travels independently along the
//! four axis directions. A wall stops a direction before it is reached; a
//! destructible block is hit and then stops that direction. There is no
//! diagonal spread.

use crate::spatial::{GridPos, TileGrid, TileKind};

/// Axis direction a blast arm travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards increasing `x`
    East,
    /// Towards decreasing `x`
    West,
    /// Towards increasing `y`
    South,
    /// Towards decreasing `y`
    North,
}

impl Direction {
    /// Scan order used by [`compute_blast_tiles`]: +X, -X, +Y, -Y
    pub const SCAN_ORDER: [Self; 4] = [Self::East, Self::West, Self::South, Self::North];

    /// Unit step `(dx, dy)` for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::South => (0, 1),
            Self::North => (0, -1),
        }
    }
}

/// Cells reached by a single blast arm, nearest first
pub fn blast_arm(origin: GridPos, direction: Direction, range: u32, grid: &TileGrid) -> Vec<GridPos> {
    let (dx, dy) = direction.delta();
    let mut cells = Vec::new();
    let mut current = origin;

    for _ in 0..range {
        current = current.offset(dx, dy);
        match grid.tile(current) {
            TileKind::Wall => break,
            TileKind::Destructible => {
                cells.push(current);
                break;
            }
            TileKind::Floor => cells.push(current),
        }
    }

    cells
}

/// Every cell affected by a blast of `range` centred on `origin`
///
/// The origin is always the first element; the arms follow in
/// [`Direction::SCAN_ORDER`]. The result holds at most `1 + 4 * range` cells
/// and the grid is left untouched.
pub fn compute_blast_tiles(origin: GridPos, range: u32, grid: &TileGrid) -> Vec<GridPos> {
    let mut tiles = vec![origin];
    for direction in Direction::SCAN_ORDER {
        tiles.extend(blast_arm(origin, direction, range, grid));
    }
    tiles
}
