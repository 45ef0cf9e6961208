//! Error types for configuration loading, board manipulation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all game operations
#[derive(Debug)]
pub enum GameError {
    /// Failed to read the game data file from disk
    ConfigLoad {
        /// Path to the data file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Game data file is not valid JSON or has the wrong shape
    ConfigParse {
        /// Path to the data file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A level definition cannot produce a playable board
    InvalidLevel {
        /// Zero-based index of the level in the data file
        level: usize,
        /// Description of what's wrong with the level
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

    /// Position does not address a cell of the board
    InvalidPosition {
        /// Requested row
        row: i32,
        /// Requested column
        col: i32,
        /// Board dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Asset referenced by the data file does not exist
    MissingAsset {
        /// Asset name from the manifest
        name: String,
        /// Resolved path that was checked
        path: PathBuf,
    },

    /// No arrangement with an available match was found
    ///
    /// Occurs when repeated reshuffles of the remaining tiles all leave
    /// the board without a connectable pair.
    Deadlock {
        /// Number of reshuffles attempted
        attempts: usize,
        /// Tiles left on the board
        remaining_tiles: usize,
    },

    /// Failed to save an exported image to disk
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

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigLoad { path, source } => {
                write!(f, "Failed to read game data '{}': {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse game data '{}': {source}", path.display())
            }
            Self::InvalidLevel { level, reason } => {
                write!(f, "Invalid level {level}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidPosition {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({row}, {col}) is outside the {}x{} board",
                    dimensions.0, dimensions.1
                )
            }
            Self::MissingAsset { name, path } => {
                write!(f, "Asset '{name}' not found at '{}'", path.display())
            }
            Self::Deadlock {
                attempts,
                remaining_tiles,
            } => {
                write!(
                    f,
                    "No match available after {attempts} reshuffles ({remaining_tiles} tiles left)"
                )
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

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;

impl From<image::ImageError> for GameError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid level error
pub fn invalid_level(level: usize, reason: &impl ToString) -> GameError {
    GameError::InvalidLevel {
        level,
        reason: reason.to_string(),
    }
}
