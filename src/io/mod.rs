/// Command-line interface and batch runner
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of arena state
pub mod image;
/// Logger installation for the binary
pub mod logging;
/// Map file loading and saving
pub mod map_file;
/// Tick progress display
pub mod progress;
