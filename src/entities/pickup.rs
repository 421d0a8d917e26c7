//! Pickup gate deciding whether a power-up may be collected
//!
//! The host reports which body overlapped a power-up; only a live player may
//! take it. A granted pickup consumes the [`PowerUp`] value, which is how the
//! gate guarantees a single collection per power-up without tracking state.

use log::debug;

use crate::entities::player::Player;
use crate::entities::power_up::{PowerUp, PowerUpKind};
use crate::simulation::events::{ArenaEvent, EventSink};

/// Body the host found overlapping a power-up
#[derive(Debug, Clone, Copy)]
pub enum Collider<'a> {
    /// A player entity
    Player(&'a Player),
    /// Anything else: bombs, flames, scenery
    Other,
}

/// Whether a body is allowed to collect power-ups
pub const fn can_collect(body: Collider<'_>) -> bool {
    match body {
        Collider::Player(player) => player.is_alive(),
        Collider::Other => false,
    }
}

/// Attempt to collect a power-up
///
/// On success the power-up is consumed, [`ArenaEvent::PowerUpCollected`] is
/// emitted and its kind returned so the host can apply it. On refusal the
/// untouched power-up is handed back.
pub fn try_collect(
    power_up: PowerUp,
    body: Collider<'_>,
    sink: &mut impl EventSink,
) -> Result<PowerUpKind, PowerUp> {
    let Collider::Player(player) = body else {
        return Err(power_up);
    };
    if !player.is_alive() {
        return Err(power_up);
    }

    debug!(
        "{} collected {} at {}",
        player.id(),
        power_up.kind,
        power_up.position
    );
    sink.emit(ArenaEvent::PowerUpCollected {
        player: player.id(),
        kind: power_up.kind,
        pos: power_up.position,
    });
    Ok(power_up.kind)
}
