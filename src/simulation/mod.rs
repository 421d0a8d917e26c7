//! Event plumbing and the reference host

/// Headless arena host applying blast consequences
pub mod arena;
/// Notifications emitted by the core
pub mod events;

pub use arena::{Arena, ArenaConfig};
pub use events::{ArenaEvent, DiscardEvents, EventSink};
