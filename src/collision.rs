//! Collision and adjacency checks between ships.
//!
//! A ship's footprint is its body plus every cell touching it, diagonals
//! included. Two ships collide when the body of one falls inside the
//! footprint of the other, which keeps a one-cell gap of open water between
//! distinct ships.

use alloc::collections::BTreeSet;

use crate::ship::{Position, Ship};

/// Inclusive bounding box of a placed ship's body.
#[derive(Debug, Clone, Copy)]
struct Span {
    min: Position,
    max: Position,
}

impl Span {
    fn of(ship: &Ship) -> Option<Self> {
        Some(Span {
            min: ship.anchor()?,
            max: ship.end()?,
        })
    }

    /// Chebyshev distance between the two boxes is at most one.
    fn touches(&self, other: &Span) -> bool {
        self.min.x <= other.max.x + 1
            && other.min.x <= self.max.x + 1
            && self.min.y <= other.max.y + 1
            && other.min.y <= self.max.y + 1
    }
}

/// Body cells of `ship` plus all 8 neighbours of each. Neighbours with a
/// negative coordinate are left out.
pub fn footprint(ship: &Ship) -> BTreeSet<Position> {
    let mut cells = BTreeSet::new();
    for cell in ship.cells() {
        for y in cell.y.saturating_sub(1)..=cell.y + 1 {
            for x in cell.x.saturating_sub(1)..=cell.x + 1 {
                cells.insert(Position::new(x, y));
            }
        }
    }
    cells
}

/// [`footprint`] clipped to a `grid_size`×`grid_size` field.
pub fn footprint_within(ship: &Ship, grid_size: usize) -> BTreeSet<Position> {
    footprint(ship)
        .into_iter()
        .filter(|p| p.in_bounds(grid_size))
        .collect()
}

/// Whether two ships overlap or touch, including diagonally.
///
/// Symmetric and side-effect free. Unplaced ships never collide.
pub fn collides(a: &Ship, b: &Ship) -> bool {
    match (Span::of(a), Span::of(b)) {
        (Some(a), Some(b)) => a.touches(&b),
        _ => false,
    }
}

/// Index of the first ship in `fleet` that collides with `ship`, skipping
/// the entry at `skip` (the ship's own slot, when it is part of `fleet`).
pub fn first_collision(ship: &Ship, fleet: &[Ship], skip: Option<usize>) -> Option<usize> {
    fleet
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != skip)
        .find(|(_, other)| collides(ship, other))
        .map(|(i, _)| i)
}

impl Ship {
    /// See [`collides`].
    pub fn collides_with(&self, other: &Ship) -> bool {
        collides(self, other)
    }
}
