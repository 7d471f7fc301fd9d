use thiserror::Error;

use crate::cell::CellId;
use crate::maze::MazeState;

/// Convenient result alias for the donjon-maze library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a maze is constructed with a zero-sized dimension.
    #[error("invalid maze dimensions {width}x{height}; both sides must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// Raised when generation is requested outside the default state.
    #[error("maze generation requires the default state, but the maze is {state}")]
    GenerationUnavailable { state: MazeState },

    /// Raised when a reset is requested before generation has finished.
    #[error("maze reset requires a generated maze, but the maze is {state}")]
    ResetUnavailable { state: MazeState },

    /// Raised when a routing graph is requested from an ungenerated maze.
    #[error("routing graph requires a generated maze, but the maze is {state}")]
    GraphUnavailable { state: MazeState },

    /// Raised when an operation names a cell outside the grid.
    #[error("unknown cell index {cell}; the grid holds {cell_count} cells")]
    UnknownCell { cell: CellId, cell_count: usize },

    /// Raised when a maze is too large for the snapshot wire format.
    #[error("failed to encode maze snapshot: {message}")]
    SnapshotEncode { message: String },

    /// Raised when snapshot bytes cannot be decoded.
    #[error("failed to decode maze snapshot: {message}")]
    SnapshotDecode { message: String },
}
