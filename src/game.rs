use log::info;
use rand::seq::IndexedRandom;
use rand::Rng;

use alloc::vec::Vec;

use crate::{
    bitboard::ShotMask,
    board::Board,
    common::{BoardError, ShotResult},
    config::PlacementConfig,
    drift::DriftOutcome,
    ship::{standard_fleet, Position},
};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Side),
    /// Both fleets went down together, or neither side has a cell left to
    /// fire at.
    Draw,
}

/// Shots fired and hits landed by one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub shots: usize,
    pub hits: usize,
    pub sunk: usize,
}

/// Two boards and the shot history of each side.
///
/// `shots[side]` and `hits[side]` record where `side` has fired on the
/// opponent's field; hits are kept separately because intact ships drift
/// and the opponent grid no longer tells where a past hit landed.
pub struct SeaBattle {
    boards: [Board; 2],
    shots: [ShotMask; 2],
    hits: [ShotMask; 2],
    scores: [Scoreboard; 2],
    rounds: usize,
}

impl SeaBattle {
    /// New game with a random standard fleet on each side.
    pub fn new<R: Rng + ?Sized>(config: &PlacementConfig, rng: &mut R) -> Result<Self, BoardError> {
        let specs = standard_fleet(rng);
        let human = Board::random(&specs, config, rng)?;
        let specs = standard_fleet(rng);
        let computer = Board::random(&specs, config, rng)?;
        Self::with_boards(human, computer)
    }

    /// Start a game from two prepared boards of the same size.
    pub fn with_boards(human: Board, computer: Board) -> Result<Self, BoardError> {
        let size = human.grid_size();
        if computer.grid_size() != size {
            return Err(BoardError::InvalidGridSize(computer.grid_size()));
        }
        let empty = ShotMask::try_new(size)?;
        Ok(Self {
            boards: [human, computer],
            shots: [empty; 2],
            hits: [empty; 2],
            scores: [Scoreboard::default(); 2],
            rounds: 0,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.boards[0].grid_size()
    }

    /// The field owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Cells `side` has fired at.
    pub fn shots(&self, side: Side) -> &ShotMask {
        &self.shots[side.index()]
    }

    /// Cells where `side` scored a hit.
    pub fn hits(&self, side: Side) -> &ShotMask {
        &self.hits[side.index()]
    }

    pub fn score(&self, side: Side) -> Scoreboard {
        self.scores[side.index()]
    }

    /// Completed rounds.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Fire from `shooter` at `pos` on the opponent's field.
    pub fn fire(&mut self, shooter: Side, pos: Position) -> Result<ShotResult, BoardError> {
        if self.status() != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        if !pos.in_bounds(self.grid_size()) {
            return Err(BoardError::InvalidCoordinate);
        }
        let s = shooter.index();
        if self.shots[s].get(pos.x, pos.y)? {
            return Err(BoardError::AlreadyShot { x: pos.x, y: pos.y });
        }
        let result = self.boards[shooter.opponent().index()].receive_shot(pos)?;
        self.shots[s].set(pos.x, pos.y)?;
        let score = &mut self.scores[s];
        score.shots += 1;
        if result.is_hit() {
            self.hits[s].set(pos.x, pos.y)?;
            score.hits += 1;
        }
        if let ShotResult::Sink { .. } = result {
            score.sunk += 1;
        }
        if let GameStatus::Won(side) = self.status() {
            info!("{:?} wins after {} shots", side, self.scores[side.index()].shots);
        }
        Ok(result)
    }

    /// Fire from `shooter` at a uniformly random cell it has not tried yet.
    pub fn fire_random<R: Rng + ?Sized>(
        &mut self,
        shooter: Side,
        rng: &mut R,
    ) -> Result<(Position, ShotResult), BoardError> {
        let free: Vec<Position> = self.shots[shooter.index()]
            .iter_unset()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        let pos = *free.choose(rng).ok_or(BoardError::NoFreeCells)?;
        let result = self.fire(shooter, pos)?;
        Ok((pos, result))
    }

    /// Close a round: both fleets drift one step.
    pub fn end_round<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<[Vec<DriftOutcome>; 2], BoardError> {
        self.rounds += 1;
        let human = self.boards[0].drift_ships(rng)?;
        let computer = self.boards[1].drift_ships(rng)?;
        Ok([human, computer])
    }

    pub fn status(&self) -> GameStatus {
        let human_lost = self.boards[Side::Human.index()].all_sunk();
        let computer_lost = self.boards[Side::Computer.index()].all_sunk();
        match (human_lost, computer_lost) {
            (true, true) => GameStatus::Draw,
            (false, true) => GameStatus::Won(Side::Human),
            (true, false) => GameStatus::Won(Side::Computer),
            (false, false) if self.shots.iter().all(|m| m.is_full()) => GameStatus::Draw,
            (false, false) => GameStatus::InProgress,
        }
    }
}
