//! Collectible power-ups and their effect on players

use std::fmt;

use crate::entities::player::Player;
use crate::io::configuration::{
    MAX_BOMB_CAPACITY, MAX_FLAME_RANGE, MAX_MOVE_SPEED, SPEED_UP_STEP,
};
use crate::spatial::GridPos;

/// Kind of a power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// One more cell of blast reach
    FlameUp,
    /// One more simultaneous bomb
    BombUp,
    /// Faster movement
    SpeedUp,
    /// Ability to kick bombs
    Kick,
    /// Ability to detonate own bombs on demand
    RemoteDetonator,
}

impl PowerUpKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 5] = [
        Self::FlameUp,
        Self::BombUp,
        Self::SpeedUp,
        Self::Kick,
        Self::RemoteDetonator,
    ];

    /// Grant this power-up's effect to a player
    ///
    /// Stat upgrades saturate at the configured caps.
    pub fn apply(self, player: &mut Player) {
        match self {
            Self::FlameUp => {
                player.flame_range = player.flame_range.saturating_add(1).min(MAX_FLAME_RANGE);
            }
            Self::BombUp => {
                player.bomb_capacity = player.bomb_capacity.saturating_add(1).min(MAX_BOMB_CAPACITY);
            }
            Self::SpeedUp => {
                player.move_speed = (player.move_speed + SPEED_UP_STEP).min(MAX_MOVE_SPEED);
            }
            Self::Kick => player.can_kick = true,
            Self::RemoteDetonator => player.has_remote_detonator = true,
        }
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FlameUp => "flame up",
            Self::BombUp => "bomb up",
            Self::SpeedUp => "speed up",
            Self::Kick => "kick",
            Self::RemoteDetonator => "remote detonator",
        };
        f.write_str(name)
    }
}

/// A power-up lying on the arena
///
/// Not `Clone`: collecting one consumes it, so it can only be granted once.
#[derive(Debug, PartialEq, Eq)]
pub struct PowerUp {
    /// What the power-up grants
    pub kind: PowerUpKind,
    /// Cell it lies on
    pub position: GridPos,
}

impl PowerUp {
    /// Create a power-up on a cell
    pub const fn new(kind: PowerUpKind, position: GridPos) -> Self {
        Self { kind, position }
    }
}
