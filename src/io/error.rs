//! Error types for map loading, export and command-line operations
//!
//! The simulation core itself never fails; these errors only arise at the
//! boundary where files are read or written and user parameters are checked.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible arena operations
#[derive(Debug)]
pub enum ArenaError {
    /// Failed to read a map file from the filesystem
    MapRead {
        /// Path to the map file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Map text that cannot describe an arena
    InvalidMapData {
        /// Description of what's wrong with the map
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered arena image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MapRead { path, source } => {
                write!(f, "Failed to read map '{}': {source}", path.display())
            }
            Self::InvalidMapData { reason } => {
                write!(f, "Invalid map data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ArenaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MapRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvalidMapData { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for arena results
pub type Result<T> = std::result::Result<T, ArenaError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ArenaError {
    ArenaError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid map data error
pub fn invalid_map_data(reason: &impl ToString) -> ArenaError {
    ArenaError::InvalidMapData {
        reason: reason.to_string(),
    }
}
