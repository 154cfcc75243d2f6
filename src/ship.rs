//! Ship definitions: orientation, segment state and anchor arithmetic.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::BoardError;
use crate::config::STANDARD_FLEET;

/// A cell on the field. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies inside a `grid_size`×`grid_size` field.
    pub fn in_bounds(&self, grid_size: usize) -> bool {
        self.x < grid_size && self.y < grid_size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Segments extend along +x.
    Horizontal,
    /// Segments extend along +y.
    Vertical,
}

impl Orientation {
    /// Pick an orientation uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Cell `offset` steps from `anchor` along this axis.
    pub fn offset(self, anchor: Position, offset: usize) -> Position {
        match self {
            Orientation::Horizontal => Position::new(anchor.x + offset, anchor.y),
            Orientation::Vertical => Position::new(anchor.x, anchor.y + offset),
        }
    }
}

/// One-cell step along a ship's own axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// State of a single ship segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentState {
    Intact,
    Hit,
}

/// Length and orientation of a ship that is yet to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipSpec {
    length: usize,
    orientation: Orientation,
}

impl ShipSpec {
    pub fn new(length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        Ok(Self {
            length,
            orientation,
        })
    }

    /// Spec with a uniformly random orientation.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, BoardError> {
        Self::new(length, Orientation::random(rng))
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// The classic ten-ship fleet with random orientations.
pub fn standard_fleet<R: Rng + ?Sized>(rng: &mut R) -> Vec<ShipSpec> {
    STANDARD_FLEET
        .iter()
        .map(|&length| ShipSpec {
            length,
            orientation: Orientation::random(rng),
        })
        .collect()
}

/// A ship with position, per-segment damage and mobility.
///
/// The anchor is the position of the first segment; every other segment
/// follows from the orientation. It stays `None` until the ship is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    spec: ShipSpec,
    anchor: Option<Position>,
    segments: Vec<SegmentState>,
    mobile: bool,
}

impl Ship {
    /// Unplaced ship with every segment intact.
    pub fn new(spec: ShipSpec) -> Self {
        Self {
            spec,
            anchor: None,
            segments: vec![SegmentState::Intact; spec.length],
            mobile: true,
        }
    }

    /// Ship anchored at `anchor`. No bounds or collision check is done.
    pub fn placed(spec: ShipSpec, anchor: Position) -> Self {
        let mut ship = Self::new(spec);
        ship.anchor = Some(anchor);
        ship
    }

    pub fn spec(&self) -> ShipSpec {
        self.spec
    }

    pub fn length(&self) -> usize {
        self.spec.length
    }

    pub fn orientation(&self) -> Orientation {
        self.spec.orientation
    }

    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    pub(crate) fn set_anchor(&mut self, anchor: Position) {
        self.anchor = Some(anchor);
    }

    pub fn segments(&self) -> &[SegmentState] {
        &self.segments
    }

    /// `false` once the ship has taken a hit.
    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Occupied cells from the anchor outward; empty when unplaced.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let orientation = self.spec.orientation;
        let length = self.spec.length;
        self.anchor
            .into_iter()
            .flat_map(move |anchor| (0..length).map(move |i| orientation.offset(anchor, i)))
    }

    /// Cell of the last segment.
    pub fn end(&self) -> Option<Position> {
        self.anchor
            .map(|anchor| self.spec.orientation.offset(anchor, self.spec.length - 1))
    }

    /// `true` if any segment lies outside the field, or the ship is unplaced.
    pub fn is_out_of_bounds(&self, grid_size: usize) -> bool {
        match self.end() {
            Some(end) => !end.in_bounds(grid_size),
            None => true,
        }
    }

    /// Index of the segment covering `pos`.
    pub fn segment_index(&self, pos: Position) -> Option<usize> {
        let anchor = self.anchor?;
        let (along, across_matches) = match self.spec.orientation {
            Orientation::Horizontal => (pos.x.checked_sub(anchor.x)?, pos.y == anchor.y),
            Orientation::Vertical => (pos.y.checked_sub(anchor.y)?, pos.x == anchor.x),
        };
        (across_matches && along < self.spec.length).then_some(along)
    }

    pub fn segment_at(&self, pos: Position) -> Option<SegmentState> {
        self.segment_index(pos).map(|i| self.segments[i])
    }

    /// Mark the segment at `pos` as hit and pin the ship in place.
    /// Returns `false` if `pos` is not part of the ship.
    pub fn hit(&mut self, pos: Position) -> bool {
        match self.segment_index(pos) {
            Some(i) => {
                self.segments[i] = SegmentState::Hit;
                self.mobile = false;
                true
            }
            None => false,
        }
    }

    /// A ship stays alive while at least one segment is intact.
    pub fn is_alive(&self) -> bool {
        self.segments.iter().any(|s| *s == SegmentState::Intact)
    }

    pub fn is_sunk(&self) -> bool {
        !self.is_alive()
    }

    /// Anchor one step along the ship's axis, or `None` when the step would
    /// leave the non-negative quadrant or the ship is unplaced.
    pub fn shifted(&self, direction: Direction) -> Option<Position> {
        let anchor = self.anchor?;
        match (self.spec.orientation, direction) {
            (Orientation::Horizontal, Direction::Forward) => {
                Some(Position::new(anchor.x + 1, anchor.y))
            }
            (Orientation::Horizontal, Direction::Backward) => {
                Some(Position::new(anchor.x.checked_sub(1)?, anchor.y))
            }
            (Orientation::Vertical, Direction::Forward) => {
                Some(Position::new(anchor.x, anchor.y + 1))
            }
            (Orientation::Vertical, Direction::Backward) => {
                Some(Position::new(anchor.x, anchor.y.checked_sub(1)?))
            }
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orientation = match self.spec.orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        let state = if self.mobile { "intact" } else { "damaged" };
        write!(f, "({}-deck, {}, {}", self.spec.length, orientation, state)?;
        match self.anchor {
            Some(a) => write!(f, ", x={} y={})", a.x, a.y),
            None => write!(f, ", unplaced)"),
        }
    }
}

// Deserialization goes through the same checks as the constructors.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawShipSpec {
    length: usize,
    orientation: Orientation,
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawShip {
    spec: ShipSpec,
    anchor: Option<Position>,
    segments: Vec<SegmentState>,
    mobile: bool,
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for ShipSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <RawShipSpec as serde::Deserialize>::deserialize(deserializer)?;
        ShipSpec::new(raw.length, raw.orientation).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Ship {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <RawShip as serde::Deserialize>::deserialize(deserializer)?;
        if raw.segments.len() != raw.spec.length {
            return Err(serde::de::Error::custom(BoardError::SegmentMismatch {
                length: raw.spec.length,
                segments: raw.segments.len(),
            }));
        }
        // a damaged ship stays pinned
        let mobile = raw.mobile && raw.segments.iter().all(|s| *s == SegmentState::Intact);
        Ok(Ship {
            spec: raw.spec,
            anchor: raw.anchor,
            segments: raw.segments,
            mobile,
        })
    }
}
