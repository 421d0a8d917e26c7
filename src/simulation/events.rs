//! Notifications delivered from the simulation core to the host
//!
//! Every state transition the host has to react to is reported as an
//! [`ArenaEvent`] pushed into an [`EventSink`] handed to the triggering call.
//! Delivery is synchronous: the event is in the sink before the call returns.

use crate::entities::player::PlayerId;
use crate::entities::power_up::PowerUpKind;
use crate::spatial::GridPos;

/// A single notification raised by the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaEvent {
    /// A destructible tile was turned into floor
    TileDestroyed {
        /// Cell that was cleared
        pos: GridPos,
    },
    /// A bomb reached its terminal state
    BombExploded {
        /// Cell the bomb sat on
        origin: GridPos,
        /// Player that placed the bomb, if any
        owner: Option<PlayerId>,
        /// Affected cells, origin first
        blast_tiles: Vec<GridPos>,
    },
    /// A player changed cell
    PlayerMoved {
        /// Player that moved
        player: PlayerId,
        /// New cell
        pos: GridPos,
    },
    /// A player went from alive to dead
    PlayerDied {
        /// Player that died
        player: PlayerId,
    },
    /// A power-up was granted to a player and removed from the world
    PowerUpCollected {
        /// Collecting player
        player: PlayerId,
        /// Kind of the collected power-up
        kind: PowerUpKind,
        /// Cell the power-up occupied
        pos: GridPos,
    },
}

/// Receiver for core notifications
pub trait EventSink {
    /// Deliver one event
    fn emit(&mut self, event: ArenaEvent);
}

impl EventSink for Vec<ArenaEvent> {
    fn emit(&mut self, event: ArenaEvent) {
        self.push(event);
    }
}

/// Sink that drops every event
///
/// Useful for hosts that only care about the returned values of an operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardEvents;

impl EventSink for DiscardEvents {
    fn emit(&mut self, _event: ArenaEvent) {}
}
