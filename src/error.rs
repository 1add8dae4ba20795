//! Error types for the gridnav crate

use thiserror::Error;

use crate::grid::Position;

/// Main error type for the gridnav crate
///
/// Only construction, configuration and I/O can fail. Environment
/// transitions and value updates are total over their legal inputs.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid layout has no rows or no columns")]
    EmptyLayout,

    #[error("ragged grid layout: row {row} has {got} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid cell code {code} at row {row}, column {col} (expected 1 or -1)")]
    InvalidCellCode { code: i64, row: usize, col: usize },

    #[error("grid layout has no free cells")]
    NoFreeCells,

    #[error("{role} position {position} is outside the {rows}x{cols} grid")]
    PositionOutOfBounds {
        role: String,
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("{role} position {position} is a wall")]
    PositionOnWall { role: String, position: Position },

    #[error("state table is {got_rows}x{got_cols}, layout is {rows}x{cols}")]
    StateMapShape {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },

    #[error("state table disagrees with layout at {position}: expected {expected}, got {got}")]
    StateMapMismatch {
        position: Position,
        expected: i64,
        got: i64,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
