//! Error types for agora-grid.

use thiserror::Error;

use agora_core::AgentId;

/// Violations of the grid's occupancy contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is already occupied by {occupant}")]
    CellOccupied { x: u32, y: u32, occupant: AgentId },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Alias for `Result<T, GridError>`.
pub type GridResult<T> = Result<T, GridError>;
