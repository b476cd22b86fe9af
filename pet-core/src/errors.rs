use std::path::PathBuf;
use thiserror::Error;

/// Error type for model operations.
///
/// Every BMI call reports failure through one of these variants instead of a
/// bare status code.
#[derive(Error, Debug)]
pub enum PetError {
    #[error("Configuration file '{}' could not be opened", path.display())]
    ConfigOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Configured forcing file '{}' could not be opened for reading", path.display())]
    ForcingOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid header-only forcing file '{}'", path.display())]
    ForcingHeaderOnly { path: PathBuf },
    #[error("Forcing file '{}' disappeared between the line count and the read", path.display())]
    ForcingDisappeared {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed reading forcing file '{}'", path.display())]
    ForcingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse forcing record on line {line}: {message}")]
    ForcingParse { line: usize, message: String },
    #[error("Unrecognized variable '{0}'")]
    UnrecognizedVariable(String),
    #[error("Grid query '{query}' is not supported for grid {grid}")]
    UnsupportedGridQuery { grid: i32, query: &'static str },
    #[error("Cannot {operation} a model that is {status}")]
    InvalidState {
        operation: &'static str,
        status: String,
    },
    #[error("Index {index} is out of range for '{name}' with {item_count} item(s)")]
    IndexOutOfRange {
        name: String,
        index: usize,
        item_count: usize,
    },
    #[error("Buffer for '{name}' holds {actual} value(s) but {required} are required")]
    BufferSize {
        name: String,
        required: usize,
        actual: usize,
    },
}

/// Convenience type for `Result<T, PetError>`.
pub type PetResult<T> = Result<T, PetError>;
