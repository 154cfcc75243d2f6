//! Game field: a fleet of ships plus the grid projected from it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::common::{BoardError, ShotResult};
use crate::config::{PlacementConfig, DEFAULT_LAYOUT_RETRIES};
use crate::drift::{drift_all, DriftOutcome};
use crate::placement::place_with_retries;
use crate::ship::{Position, SegmentState, Ship, ShipSpec};

/// Occupancy of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship(SegmentState),
}

/// `size×size` occupancy matrix derived from a fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Project `fleet` onto an empty grid. Cells outside the grid are dropped.
    pub fn project(fleet: &[Ship], size: usize) -> Self {
        let mut grid = Grid {
            size,
            cells: vec![Cell::Empty; size * size],
        };
        for ship in fleet {
            for (pos, state) in ship.cells().zip(ship.segments().iter()) {
                if pos.in_bounds(size) {
                    grid.cells[pos.y * size + pos.x] = Cell::Ship(*state);
                }
            }
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.in_bounds(self.size)
            .then(|| self.cells[pos.y * self.size + pos.x])
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}

/// A player's field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid_size: usize,
    fleet: Vec<Ship>,
    grid: Grid,
}

impl Board {
    /// Wrap an already placed fleet, checking that every ship is anchored,
    /// inside the field and clear of its neighbours.
    pub fn new(fleet: Vec<Ship>, grid_size: usize) -> Result<Self, BoardError> {
        if grid_size == 0 {
            return Err(BoardError::InvalidGridSize(grid_size));
        }
        for (i, ship) in fleet.iter().enumerate() {
            if ship.anchor().is_none() {
                return Err(BoardError::ShipNotPlaced(i));
            }
            if ship.is_out_of_bounds(grid_size) {
                return Err(BoardError::ShipOutOfBounds(i));
            }
            if let Some(j) = fleet[..i].iter().position(|other| ship.collides_with(other)) {
                return Err(BoardError::ShipCollides { first: j, second: i });
            }
        }
        let grid = Grid::project(&fleet, grid_size);
        Ok(Self {
            grid_size,
            fleet,
            grid,
        })
    }

    /// Lay out `specs` at random, rerunning the whole layout when a run is
    /// exhausted.
    pub fn random<R: Rng + ?Sized>(
        specs: &[ShipSpec],
        config: &PlacementConfig,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let fleet = place_with_retries(specs, config, DEFAULT_LAYOUT_RETRIES, rng)?;
        Self::new(fleet, config.grid_size)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Recompute the grid from the current ship positions and damage.
    pub fn rebuild_grid(&mut self) {
        self.grid = Grid::project(&self.fleet, self.grid_size);
    }

    /// Index of the ship covering `pos`.
    pub fn ship_at(&self, pos: Position) -> Option<usize> {
        self.fleet
            .iter()
            .position(|ship| ship.segment_index(pos).is_some())
    }

    /// Resolve a shot at `pos`: damage the ship there, if any, and pin it.
    pub fn receive_shot(&mut self, pos: Position) -> Result<ShotResult, BoardError> {
        if !pos.in_bounds(self.grid_size) {
            return Err(BoardError::InvalidCoordinate);
        }
        let Some(index) = self.ship_at(pos) else {
            return Ok(ShotResult::Miss);
        };
        let ship = &mut self.fleet[index];
        let was_alive = ship.is_alive();
        ship.hit(pos);
        let result = if was_alive && ship.is_sunk() {
            ShotResult::Sink { ship: index }
        } else {
            ShotResult::Hit { ship: index }
        };
        self.rebuild_grid();
        debug!("shot at {} -> {:?}", pos, result);
        Ok(result)
    }

    /// Number of ships with no intact segment left.
    pub fn dead_ships(&self) -> usize {
        self.fleet.iter().filter(|s| s.is_sunk()).count()
    }

    pub fn all_sunk(&self) -> bool {
        self.fleet.iter().all(|s| s.is_sunk())
    }

    /// Drift the whole fleet one step and refresh the grid.
    pub fn drift_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<DriftOutcome>, BoardError> {
        let outcomes = drift_all(&mut self.fleet, self.grid_size, rng)?;
        self.rebuild_grid();
        Ok(outcomes)
    }
}

/// Column label for `x`: `a`, `b`, ...
pub fn column_label(x: usize) -> char {
    (b'a' + (x % 26) as u8) as char
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.grid_size {
            write!(f, " {}", column_label(x))?;
        }
        writeln!(f)?;
        for (y, row) in self.grid.rows().enumerate() {
            write!(f, "{:2} ", y + 1)?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship(SegmentState::Intact) => '#',
                    Cell::Ship(SegmentState::Hit) => 'X',
                };
                write!(f, " {}", ch)?;
            }
            if y + 1 < self.grid_size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
