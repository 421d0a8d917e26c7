//! Grid-aligned player state
//!
//! Movement is validated against the player's associated grid only; bomb
//! entities are created by the host, the player merely reserves and releases
//! capacity for them.

use std::fmt;

use log::{debug, trace};

use crate::io::configuration::{DEFAULT_BOMB_CAPACITY, DEFAULT_FLAME_RANGE, DEFAULT_MOVE_SPEED};
use crate::simulation::events::{ArenaEvent, EventSink};
use crate::spatial::{GridId, GridPos, GridRegistry, WorldPos};

/// Opaque player identifier assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Position, health and bomb bookkeeping for one player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: PlayerId,
    position: GridPos,
    alive: bool,
    active_bombs: u32,
    grid: Option<GridId>,
    /// Movement speed in tiles per second, used by the host for interpolation
    pub move_speed: f64,
    /// Maximum number of bombs the player may have armed at once
    pub bomb_capacity: u32,
    /// Blast arm reach of bombs this player places
    pub flame_range: u32,
    /// Granted by the kick power-up
    pub can_kick: bool,
    /// Granted by the remote detonator power-up
    pub has_remote_detonator: bool,
}

impl Player {
    /// Create a live player at `position` with default stats and no grid
    pub const fn new(id: PlayerId, position: GridPos) -> Self {
        Self {
            id,
            position,
            alive: true,
            active_bombs: 0,
            grid: None,
            move_speed: DEFAULT_MOVE_SPEED,
            bomb_capacity: DEFAULT_BOMB_CAPACITY,
            flame_range: DEFAULT_FLAME_RANGE,
            can_kick: false,
            has_remote_detonator: false,
        }
    }

    /// Associate the grid used for movement checks
    #[must_use]
    pub const fn with_grid(mut self, grid: GridId) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Host-assigned identifier
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Current cell
    pub const fn position(&self) -> GridPos {
        self.position
    }

    /// Associated grid, if any
    pub const fn grid(&self) -> Option<GridId> {
        self.grid
    }

    /// Whether the player is still in the game
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Bombs placed and not yet resolved
    pub const fn active_bombs(&self) -> u32 {
        self.active_bombs
    }

    /// Centre of the player's cell in world space
    pub fn world_position(&self, grids: &GridRegistry) -> Option<WorldPos> {
        grids
            .resolve(self.grid)
            .map(|grid| grid.grid_to_world(self.position))
    }

    /// Whether the associated grid lets the player stand on `pos`
    pub fn can_move_to(&self, pos: GridPos, grids: &GridRegistry) -> bool {
        grids
            .resolve(self.grid)
            .is_some_and(|grid| grid.is_walkable(pos))
    }

    /// Step by `(dx, dy)` cells
    ///
    /// Callers pass unit steps. Fails without changing anything when the
    /// player is dead, has no grid, or the destination is not walkable.
    pub fn move_direction(
        &mut self,
        dx: i32,
        dy: i32,
        grids: &GridRegistry,
        sink: &mut impl EventSink,
    ) -> bool {
        if !self.alive {
            return false;
        }
        let target = self.position.offset(dx, dy);
        if !self.can_move_to(target, grids) {
            return false;
        }
        self.position = target;
        trace!("{} moved to {target}", self.id);
        sink.emit(ArenaEvent::PlayerMoved {
            player: self.id,
            pos: target,
        });
        true
    }

    /// Place the player on a cell without any walkability check
    pub fn set_grid_position(&mut self, pos: GridPos, sink: &mut impl EventSink) {
        self.position = pos;
        sink.emit(ArenaEvent::PlayerMoved {
            player: self.id,
            pos,
        });
    }

    /// Whether another bomb may be placed right now
    pub const fn can_place_bomb(&self) -> bool {
        self.alive && self.active_bombs < self.bomb_capacity
    }

    /// Reserve one bomb slot
    ///
    /// Returns `false` and changes nothing when [`Self::can_place_bomb`] is false.
    pub const fn place_bomb(&mut self) -> bool {
        if !self.can_place_bomb() {
            return false;
        }
        self.active_bombs += 1;
        true
    }

    /// Release the slot of a bomb this player owned once it has exploded
    pub const fn notify_bomb_resolved(&mut self) {
        self.active_bombs = self.active_bombs.saturating_sub(1);
    }

    /// Kill the player; no-op when already dead
    pub fn die(&mut self, sink: &mut impl EventSink) {
        if !self.alive {
            return;
        }
        self.alive = false;
        debug!("{} died at {}", self.id, self.position);
        sink.emit(ArenaEvent::PlayerDied { player: self.id });
    }

    /// Apply a lethal hit
    ///
    /// Returns `true` when this call killed the player.
    pub fn take_damage(&mut self, sink: &mut impl EventSink) -> bool {
        if !self.alive {
            return false;
        }
        self.die(sink);
        true
    }
}
