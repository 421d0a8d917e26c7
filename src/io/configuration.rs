//! Arena constants and runtime configuration defaults

// Grid defaults
/// Columns of a freshly created grid
pub const DEFAULT_GRID_WIDTH: usize = 15;
/// Rows of a freshly created grid
pub const DEFAULT_GRID_HEIGHT: usize = 13;
/// World units per cell edge
pub const DEFAULT_TILE_SIZE: f64 = 32.0;

// Safety limit to keep map files from allocating absurd grids
/// Maximum allowed grid dimension when loading a map file
pub const MAX_GRID_DIMENSION: usize = 1_000;

// Bomb defaults
/// Fuse length in seconds
pub const DEFAULT_EXPLOSION_TIME: f64 = 2.0;
/// Blast arm reach in cells
pub const DEFAULT_FLAME_RANGE: u32 = 1;

// Player defaults
/// Movement speed in tiles per second
pub const DEFAULT_MOVE_SPEED: f64 = 3.0;
/// Simultaneous bombs a new player may place
pub const DEFAULT_BOMB_CAPACITY: u32 = 1;

// Power-up caps
/// Highest flame range reachable through flame-up pickups
pub const MAX_FLAME_RANGE: u32 = 8;
/// Highest bomb capacity reachable through bomb-up pickups
pub const MAX_BOMB_CAPACITY: u32 = 8;
/// Speed gained per speed-up pickup
pub const SPEED_UP_STEP: f64 = 0.5;
/// Highest movement speed reachable through speed-up pickups
pub const MAX_MOVE_SPEED: f64 = 6.0;

// Default values for command-line parameters
/// Simulated seconds per tick
pub const DEFAULT_TICK_SECONDS: f64 = 0.1;
/// Ticks after which a run stops even with bombs still armed
pub const DEFAULT_MAX_TICKS: usize = 1_000;
/// Fixed seed for reproducible random bomb drops
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Edge length in pixels of one cell in exported images
pub const PNG_CELL_SCALE: u32 = 16;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Image palette (RGBA)
/// Floor colour
pub const FLOOR_COLOR: [u8; 4] = [46, 125, 50, 255];
/// Wall colour
pub const WALL_COLOR: [u8; 4] = [66, 66, 66, 255];
/// Destructible block colour
pub const DESTRUCTIBLE_COLOR: [u8; 4] = [141, 110, 99, 255];
/// Live player marker colour
pub const PLAYER_COLOR: [u8; 4] = [30, 136, 229, 255];
/// Armed bomb marker colour
pub const BOMB_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Power-up marker colour
pub const POWER_UP_COLOR: [u8; 4] = [255, 202, 40, 255];
