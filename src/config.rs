use crate::common::BoardError;

/// Side length of the standard square field.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Largest field the `u128` shot masks can track (11×11 = 121 bits).
pub const MAX_GRID_SIZE: usize = 11;

pub const NUM_SHIPS: usize = 10;

/// Ship lengths of the classic fleet: one 4-decker, two 3-deckers,
/// three 2-deckers and four single-deck boats.
pub const STANDARD_FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Random anchors tried for a single ship before the run is abandoned.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Whole-layout reruns attempted by [`crate::place_with_retries`] callers
/// that use the defaults.
pub const DEFAULT_LAYOUT_RETRIES: usize = 16;

/// Parameters of a placement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
}

impl PlacementConfig {
    pub const fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.grid_size == 0 {
            return Err(BoardError::InvalidGridSize(self.grid_size));
        }
        Ok(())
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}
