//! Bomb countdown and detonation
//!
//! A bomb is a two-state machine: it starts [`BombState::Armed`] and moves to
//! [`BombState::Exploded`] exactly once, either when its fuse runs out during
//! [`Bomb::tick`] or when [`Bomb::explode`] is called directly. Detonation runs
//! synchronously inside the triggering call: blast cells are computed, every
//! destructible block among them is cleared, and a single
//! [`ArenaEvent::BombExploded`] is emitted.

use log::{debug, trace};

use crate::algorithm::blast::compute_blast_tiles;
use crate::entities::player::PlayerId;
use crate::io::configuration::{DEFAULT_EXPLOSION_TIME, DEFAULT_FLAME_RANGE};
use crate::simulation::events::{ArenaEvent, EventSink};
use crate::spatial::{GridId, GridPos, GridRegistry};

/// Lifecycle state of a bomb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BombState {
    /// Fuse still burning
    Armed,
    /// Terminal state; the bomb no longer reacts to ticks or detonation requests
    Exploded,
}

/// Outcome of a detonation, returned to the caller alongside the emitted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detonation {
    /// Cell the bomb sat on
    pub origin: GridPos,
    /// Player that placed the bomb, if any
    pub owner: Option<PlayerId>,
    /// Affected cells, origin first
    pub blast_tiles: Vec<GridPos>,
    /// Affected cells whose destructible block was cleared
    pub destroyed: Vec<GridPos>,
}

/// A placed bomb and its fuse
#[derive(Debug, Clone, PartialEq)]
pub struct Bomb {
    origin: GridPos,
    explosion_time: f64,
    fuse_remaining: f64,
    flame_range: u32,
    owner: Option<PlayerId>,
    grid: Option<GridId>,
    state: BombState,
}

impl Bomb {
    /// Arm a bomb at `origin` with the default fuse and flame range
    ///
    /// Without a grid association the bomb still detonates, but its blast
    /// covers only the origin and no tile is destroyed.
    pub const fn new(origin: GridPos, grid: Option<GridId>) -> Self {
        Self {
            origin,
            explosion_time: DEFAULT_EXPLOSION_TIME,
            fuse_remaining: DEFAULT_EXPLOSION_TIME,
            flame_range: DEFAULT_FLAME_RANGE,
            owner: None,
            grid,
            state: BombState::Armed,
        }
    }

    /// Set the fuse length in seconds and restart the countdown
    #[must_use]
    pub const fn with_fuse(mut self, seconds: f64) -> Self {
        self.explosion_time = seconds;
        self.fuse_remaining = seconds;
        self
    }

    /// Set how many cells each blast arm may travel
    #[must_use]
    pub const fn with_flame_range(mut self, range: u32) -> Self {
        self.flame_range = range;
        self
    }

    /// Record the player that placed the bomb
    #[must_use]
    pub const fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Cell the bomb sits on
    pub const fn origin(&self) -> GridPos {
        self.origin
    }

    /// Player that placed the bomb
    pub const fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Grid the bomb detonates against
    pub const fn grid(&self) -> Option<GridId> {
        self.grid
    }

    /// Reach of each blast arm in cells
    pub const fn flame_range(&self) -> u32 {
        self.flame_range
    }

    /// Full fuse length in seconds
    pub const fn explosion_time(&self) -> f64 {
        self.explosion_time
    }

    /// Seconds left before detonation; zero or negative once due
    pub const fn fuse_remaining(&self) -> f64 {
        self.fuse_remaining
    }

    /// Current lifecycle state
    pub const fn state(&self) -> BombState {
        self.state
    }

    /// Whether the bomb has reached its terminal state
    pub const fn has_exploded(&self) -> bool {
        matches!(self.state, BombState::Exploded)
    }

    /// Cells the bomb would affect if it went off now
    pub fn blast_tiles(&self, grids: &GridRegistry) -> Vec<GridPos> {
        grids.resolve(self.grid).map_or_else(
            || vec![self.origin],
            |grid| compute_blast_tiles(self.origin, self.flame_range, grid),
        )
    }

    /// Advance the fuse by `delta` seconds
    ///
    /// Returns the detonation when the fuse runs out during this call.
    /// Exploded bombs ignore ticks.
    pub fn tick(
        &mut self,
        delta: f64,
        grids: &mut GridRegistry,
        sink: &mut impl EventSink,
    ) -> Option<Detonation> {
        if self.has_exploded() {
            return None;
        }
        self.fuse_remaining -= delta;
        trace!("bomb at {} fuse {:.3}s", self.origin, self.fuse_remaining);
        if self.fuse_remaining <= 0.0 {
            self.explode(grids, sink)
        } else {
            None
        }
    }

    /// Detonate immediately, whatever the fuse says
    ///
    /// Returns `None` when the bomb had already exploded; a bomb detonates and
    /// notifies exactly once.
    pub fn explode(
        &mut self,
        grids: &mut GridRegistry,
        sink: &mut impl EventSink,
    ) -> Option<Detonation> {
        if self.has_exploded() {
            return None;
        }
        self.state = BombState::Exploded;

        let mut destroyed = Vec::new();
        let blast_tiles = match grids.resolve_mut(self.grid) {
            Some(grid) => {
                let tiles = compute_blast_tiles(self.origin, self.flame_range, grid);
                for &pos in &tiles {
                    if grid.destroy_tile(pos, sink) {
                        destroyed.push(pos);
                    }
                }
                tiles
            }
            None => {
                debug!("bomb at {} has no grid, blast limited to origin", self.origin);
                vec![self.origin]
            }
        };

        debug!(
            "bomb exploded at {} covering {} cells, {} destroyed",
            self.origin,
            blast_tiles.len(),
            destroyed.len()
        );
        sink.emit(ArenaEvent::BombExploded {
            origin: self.origin,
            owner: self.owner,
            blast_tiles: blast_tiles.clone(),
        });

        Some(Detonation {
            origin: self.origin,
            owner: self.owner,
            blast_tiles,
            destroyed,
        })
    }
}
