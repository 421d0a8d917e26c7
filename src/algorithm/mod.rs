/// Blast propagation along the four axis directions
pub mod blast;
/// Bomb fuse state machine and detonation
pub mod bomb;
