//! Deterministic simulation core for grid-based bomb arena games
//!
//! The core tracks a tile grid, player movement and bomb capacity, bomb fuses
//! and blast propagation, and power-up pickup rules. It performs no rendering,
//! input handling or collision detection: the host drives it once per tick and
//! reacts to the [`ArenaEvent`]s it emits.

#![forbid(unsafe_code)]

/// Blast propagation and bomb fuse handling
pub mod algorithm;
/// Players, power-ups and the pickup gate
pub mod entities;
/// Map files, image export, command-line interface and error handling
pub mod io;
/// Event notifications and the reference arena host
pub mod simulation;
/// Tile grid, coordinates and grid registry
pub mod spatial;

pub use io::error::{ArenaError, Result};
pub use simulation::events::ArenaEvent;
