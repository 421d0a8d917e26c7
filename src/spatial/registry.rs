//! Host-owned storage for arena grids
//!
//! Bombs and players never own the grid they act on. They keep a [`GridId`]
//! handed out by the registry and resolve it on each call, so an entity
//! created without a grid, or holding a stale handle, sees `None` instead of
//! dereferencing something that is not there.

use crate::spatial::grid::TileGrid;

/// Non-owning handle to a grid stored in a [`GridRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    /// Position of the grid inside its registry
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Collection of grids addressed by [`GridId`]
#[derive(Debug, Clone, Default)]
pub struct GridRegistry {
    grids: Vec<TileGrid>,
}

impl GridRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { grids: Vec::new() }
    }

    /// Store a grid and return its handle
    pub fn insert(&mut self, grid: TileGrid) -> GridId {
        self.grids.push(grid);
        GridId(self.grids.len() - 1)
    }

    /// Resolve a handle
    pub fn get(&self, id: GridId) -> Option<&TileGrid> {
        self.grids.get(id.0)
    }

    /// Resolve a handle for mutation
    pub fn get_mut(&mut self, id: GridId) -> Option<&mut TileGrid> {
        self.grids.get_mut(id.0)
    }

    /// Resolve an optional association
    pub fn resolve(&self, id: Option<GridId>) -> Option<&TileGrid> {
        id.and_then(|id| self.get(id))
    }

    /// Resolve an optional association for mutation
    pub fn resolve_mut(&mut self, id: Option<GridId>) -> Option<&mut TileGrid> {
        id.and_then(|id| self.get_mut(id))
    }

    /// Number of stored grids
    pub const fn len(&self) -> usize {
        self.grids.len()
    }

    /// Whether no grid has been stored
    pub const fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
