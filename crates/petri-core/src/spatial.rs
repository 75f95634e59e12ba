//! Board positions and compass headings.
//!
//! # Coordinate convention
//!
//! `(0, 0)` is the top-left corner of the board: `x` grows to the right,
//! `y` grows downward, so `Up` is the row with the *smaller* `y`.  A
//! `Coordinates` value is always within board bounds — the wraparound
//! arithmetic lives on the grid, which is the only place that knows the
//! board dimensions.

use std::fmt;

// ── Coordinates ───────────────────────────────────────────────────────────────

/// An in-bounds board position.  Immutable value type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Coordinates {
    pub x: usize,
    pub y: usize,
}

impl Coordinates {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of four compass headings.  There is no "no direction" state — an
/// agent always points somewhere.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four headings, in a fixed order usable for uniform draws.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step along the x axis for this heading.
    #[inline]
    pub fn dx(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }

    /// Unit step along the y axis for this heading (`Up` is −1: row 0 is
    /// the top of the board).
    #[inline]
    pub fn dy(self) -> i64 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Rotate 90° clockwise.
    #[inline]
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Rotate 90° counterclockwise.
    #[inline]
    pub fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// The heading with both unit components negated.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}
