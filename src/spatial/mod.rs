//! Spatial data structures for the arena
//!
//! This module contains:
//! - Cell and world coordinate types
//! - The tile grid and its coordinate conversion
//! - The registry that owns grids on behalf of the host

/// Grid and world coordinate types
pub mod coords;
/// Tile storage, map text loading and coordinate conversion
pub mod grid;
/// Host-owned grid storage and non-owning handles
pub mod registry;

pub use coords::{GridPos, WorldPos};
pub use grid::{TileGrid, TileKind};
pub use registry::{GridId, GridRegistry};
