//! One-cell drift of placed ships along their own axis.

use alloc::vec::Vec;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::collision::first_collision;
use crate::common::BoardError;
use crate::ship::{Direction, Position, Ship};

/// What happened to a ship during a drift step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftOutcome {
    /// The anchor moved exactly one cell along the ship's axis.
    Moved { from: Position, to: Position },
    /// Neither direction was in bounds and clear of other ships.
    Blocked,
    /// The ship has taken a hit and is pinned in place.
    Immobile,
}

/// Try to nudge `fleet[index]` one cell forward or backward, in random
/// order, against the current positions of the rest of the fleet.
pub fn drift<R: Rng + ?Sized>(
    index: usize,
    fleet: &mut [Ship],
    grid_size: usize,
    rng: &mut R,
) -> Result<DriftOutcome, BoardError> {
    let ship = fleet.get(index).ok_or(BoardError::InvalidIndex(index))?;
    let from = ship.anchor().ok_or(BoardError::ShipNotPlaced(index))?;
    if !ship.is_mobile() {
        return Ok(DriftOutcome::Immobile);
    }
    let spec = ship.spec();
    let candidates = {
        let mut directions = [Direction::Forward, Direction::Backward];
        directions.shuffle(rng);
        directions.map(|d| ship.shifted(d))
    };

    for to in candidates.into_iter().flatten() {
        let candidate = Ship::placed(spec, to);
        if candidate.is_out_of_bounds(grid_size) {
            continue;
        }
        if first_collision(&candidate, fleet, Some(index)).is_some() {
            continue;
        }
        fleet[index].set_anchor(to);
        debug!("ship {} drifted {} -> {}", index, from, to);
        return Ok(DriftOutcome::Moved { from, to });
    }
    Ok(DriftOutcome::Blocked)
}

/// Drift every ship in order. Each ship sees the positions the earlier ones
/// already moved to.
pub fn drift_all<R: Rng + ?Sized>(
    fleet: &mut [Ship],
    grid_size: usize,
    rng: &mut R,
) -> Result<Vec<DriftOutcome>, BoardError> {
    (0..fleet.len())
        .map(|index| drift(index, fleet, grid_size, rng))
        .collect()
}
