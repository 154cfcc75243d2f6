//! Common types for sea battle: board errors and shot results.

use crate::bitboard::BitBoardError;

/// Outcome of a shot fired at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot damaged a ship that still has intact segments.
    Hit { ship: usize },
    /// Shot destroyed the last intact segment of a ship.
    Sink { ship: usize },
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by placement, drift and board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying shot mask error (e.g., grid too large for the mask).
    BitBoardError(BitBoardError),
    /// Grid size is zero or otherwise unusable.
    InvalidGridSize(usize),
    /// Ship length is zero.
    InvalidLength,
    /// Segment list does not match the ship's length.
    SegmentMismatch { length: usize, segments: usize },
    /// Ship can never fit on the grid.
    ShipTooLong { length: usize, grid_size: usize },
    /// No valid random anchor was found within the attempt budget.
    PlacementExhausted { ship_index: usize, attempts: usize },
    /// Specified ship index is out of range.
    InvalidIndex(usize),
    /// Ship has no anchor yet.
    ShipNotPlaced(usize),
    /// Ship extends past the grid edge.
    ShipOutOfBounds(usize),
    /// Two ships touch or overlap.
    ShipCollides { first: usize, second: usize },
    /// Coordinate is malformed or outside the grid.
    InvalidCoordinate,
    /// A shot was already fired at this cell.
    AlreadyShot { x: usize, y: usize },
    /// Every cell of the opponent grid has been shot at.
    NoFreeCells,
    /// The game has already ended.
    GameOver,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidGridSize(n) => write!(f, "Invalid grid size {}", n),
            BoardError::InvalidLength => write!(f, "Ship length must be positive"),
            BoardError::SegmentMismatch { length, segments } => write!(
                f,
                "Ship of length {} carries {} segments",
                length, segments
            ),
            BoardError::ShipTooLong { length, grid_size } => write!(
                f,
                "Ship of length {} does not fit on a {}x{} grid",
                length, grid_size, grid_size
            ),
            BoardError::PlacementExhausted {
                ship_index,
                attempts,
            } => write!(
                f,
                "Unable to place ship {} after {} attempts",
                ship_index, attempts
            ),
            BoardError::InvalidIndex(i) => write!(f, "Ship index {} is out of range", i),
            BoardError::ShipNotPlaced(i) => write!(f, "Ship {} has not been placed", i),
            BoardError::ShipOutOfBounds(i) => write!(f, "Ship {} is out of bounds", i),
            BoardError::ShipCollides { first, second } => {
                write!(f, "Ships {} and {} touch or overlap", first, second)
            }
            BoardError::InvalidCoordinate => write!(f, "Invalid coordinate"),
            BoardError::AlreadyShot { x, y } => {
                write!(f, "Cell ({}, {}) has already been shot at", x, y)
            }
            BoardError::NoFreeCells => write!(f, "No cells left to shoot at"),
            BoardError::GameOver => write!(f, "The game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
