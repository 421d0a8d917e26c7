//! Grid and world coordinate types

use std::fmt;

/// Integer cell address on the arena grid
///
/// Coordinates are signed so that neighbours of border cells can be expressed;
/// anything outside the grid simply reads as a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct GridPos {
    /// Column, growing rightwards
    pub x: i32,
    /// Row, growing downwards
    pub y: i32,
}

impl GridPos {
    /// Create a cell address
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by stepping `(dx, dy)` from this one
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Continuous position in host world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPos {
    /// Horizontal world coordinate
    pub x: f64,
    /// Vertical world coordinate
    pub y: f64,
}

impl WorldPos {
    /// Create a world position
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
