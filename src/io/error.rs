//! Error types for all solver operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// A header or pixel row does not match the expected shape
    Parse {
        /// 1-based input line where parsing failed
        line: usize,
        /// Description of what was expected
        reason: String,
    },

    /// The tiles do not describe a valid square tiling
    ///
    /// Raised when the tile count is not a perfect square, the adjacency
    /// graph is disconnected, the corner count is not four, or placement
    /// does not fill an exact square.
    Structure {
        /// Description of the structural defect
        reason: String,
    },

    /// No image orientation contains the search pattern
    PatternNotFound {
        /// Number of orientations examined
        orientations: usize,
    },

    /// The CLI target is not a usable input
    InvalidTarget {
        /// Path given on the command line
        path: PathBuf,
        /// Explanation of why the target was rejected
        reason: &'static str,
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

    /// Failed to save the rendered composite to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, reason } => {
                write!(f, "Parse error at line {line}: {reason}")
            }
            Self::Structure { reason } => {
                write!(f, "Invalid tile structure: {reason}")
            }
            Self::PatternNotFound { orientations } => {
                write!(
                    f,
                    "No pattern match found in any of {orientations} image orientations"
                )
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a parse error for an input line
pub fn parse_error(line: usize, reason: &impl ToString) -> SolverError {
    SolverError::Parse {
        line,
        reason: reason.to_string(),
    }
}

/// Create a structural error
pub fn structure_error(reason: &impl ToString) -> SolverError {
    SolverError::Structure {
        reason: reason.to_string(),
    }
}
