//! Random constrained ship placement.
//!
//! Ships are placed one after another in input order by rejection sampling:
//! draw a random anchor, keep the ship's own orientation, and accept the
//! candidate only if it lies on the field and keeps clear of every ship
//! already placed. There is no backtracking across ships. A run that cannot
//! seat a ship within `max_attempts` draws is abandoned as a whole.

use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::Rng;

use crate::collision::first_collision;
use crate::common::BoardError;
use crate::config::PlacementConfig;
use crate::ship::{Position, Ship, ShipSpec};

/// Place every ship of `specs` on a `config.grid_size` field.
///
/// Either all ships come back anchored, or the run fails with
/// [`BoardError::PlacementExhausted`] and nothing is returned.
pub fn place<R: Rng + ?Sized>(
    specs: &[ShipSpec],
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Vec<Ship>, BoardError> {
    config.validate()?;
    let grid_size = config.grid_size;
    if let Some(spec) = specs.iter().find(|s| s.length() > grid_size) {
        return Err(BoardError::ShipTooLong {
            length: spec.length(),
            grid_size,
        });
    }

    let mut fleet: Vec<Ship> = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let ship = place_one(index, *spec, &fleet, config, rng)?;
        fleet.push(ship);
    }
    info!("placed {} ships on a {}x{} grid", fleet.len(), grid_size, grid_size);
    Ok(fleet)
}

/// Run [`place`] up to `layout_retries` times from scratch, returning the
/// first complete layout or the last failure.
pub fn place_with_retries<R: Rng + ?Sized>(
    specs: &[ShipSpec],
    config: &PlacementConfig,
    layout_retries: usize,
    rng: &mut R,
) -> Result<Vec<Ship>, BoardError> {
    let mut last = BoardError::PlacementExhausted {
        ship_index: 0,
        attempts: 0,
    };
    for run in 0..layout_retries.max(1) {
        match place(specs, config, rng) {
            Ok(fleet) => return Ok(fleet),
            Err(err @ BoardError::PlacementExhausted { .. }) => {
                debug!("layout run {} abandoned: {}", run + 1, err);
                last = err;
            }
            Err(err) => return Err(err),
        }
    }
    Err(last)
}

fn place_one<R: Rng + ?Sized>(
    index: usize,
    spec: ShipSpec,
    placed: &[Ship],
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Ship, BoardError> {
    let grid_size = config.grid_size;
    let mut candidate = Ship::new(spec);
    for attempt in 1..=config.max_attempts {
        let anchor = Position::new(rng.random_range(0..grid_size), rng.random_range(0..grid_size));
        candidate.set_anchor(anchor);
        if candidate.is_out_of_bounds(grid_size) {
            continue;
        }
        if first_collision(&candidate, placed, None).is_some() {
            continue;
        }
        debug!(
            "ship {} (length {}) anchored at {} after {} attempts",
            index,
            spec.length(),
            anchor,
            attempt
        );
        return Ok(candidate);
    }
    warn!(
        "ship {} (length {}) could not be placed in {} attempts",
        index,
        spec.length(),
        config.max_attempts
    );
    Err(BoardError::PlacementExhausted {
        ship_index: index,
        attempts: config.max_attempts,
    })
}
