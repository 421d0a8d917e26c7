//! Game entities acting on the arena grid

/// Pickup gate for power-up collection
pub mod pickup;
/// Player position, health and bomb capacity
pub mod player;
/// Power-up kinds and their effects
pub mod power_up;

pub use player::{Player, PlayerId};
pub use power_up::{PowerUp, PowerUpKind};
