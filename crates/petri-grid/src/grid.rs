//! The toroidal board: wraparound arithmetic, food dynamics, and the
//! board-text parser.
//!
//! # Board-file format
//!
//! One character per cell, one line per row, all rows the same length:
//!
//! ```text
//! x x x
//!  xxx
//! x x x
//! ```
//!
//! | Character | Cell                |
//! |-----------|---------------------|
//! | space     | permanently empty   |
//! | `x`       | ripe food           |
//!
//! Anything else is a fatal input error.

use petri_core::{Coordinates, Direction, SimRng};

use crate::cell::{Cell, FoodCell};
use crate::error::{GridError, GridResult};

/// Rectangular grid of [`Cell`]s with toroidal edge behavior.
///
/// Row-major storage: the cell at `(x, y)` lives at index
/// `y * width + x`.  A cached count of currently-ripe cells is kept in
/// sync incrementally by [`consume_food`][Self::consume_food] and
/// [`advance_round`][Self::advance_round].
#[derive(Clone, Debug)]
pub struct Grid {
    width:  usize,
    height: usize,
    cells:  Vec<Cell>,
    ripe_cells: usize,
}

impl Grid {
    // ── Construction ──────────────────────────────────────────────────────

    /// Parse a board from its text form.
    ///
    /// `food_energy` and `ripening_time` come from the run configuration
    /// and apply to every food cell on the board.
    pub fn parse(text: &str, food_energy: i64, ripening_time: u32) -> GridResult<Grid> {
        let mut cells = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;

        for (row, line) in text.lines().enumerate() {
            if row == 0 {
                width = line.chars().count();
            } else if line.chars().count() != width {
                return Err(GridError::UnevenRows {
                    line:     row + 1,
                    expected: width,
                    got:      line.chars().count(),
                });
            }
            for c in line.chars() {
                match c {
                    ' ' => cells.push(Cell::Empty),
                    'x' => cells.push(Cell::Food(FoodCell::new(food_energy, ripening_time))),
                    found => {
                        return Err(GridError::UnknownCharacter {
                            line: row + 1,
                            found,
                        });
                    }
                }
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(GridError::EmptyBoard);
        }

        let ripe_cells = cells.iter().filter(|c| c.has_food()).count();
        Ok(Grid {
            width,
            height,
            cells,
            ripe_cells,
        })
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Map arbitrary signed coordinates onto the board — the toroidal
    /// wrap.  Floor-modulo on both axes, so `-1` maps to `width - 1`,
    /// not to a truncated remainder.
    pub fn resolve(&self, x: i64, y: i64) -> Coordinates {
        let wrapped_x = x.rem_euclid(self.width as i64) as usize;
        let wrapped_y = y.rem_euclid(self.height as i64) as usize;
        Coordinates::new(wrapped_x, wrapped_y)
    }

    /// The cell one step from `pos` along `direction`, wrapping at edges.
    pub fn neighbor(&self, pos: Coordinates, direction: Direction) -> Coordinates {
        self.resolve(pos.x as i64 + direction.dx(), pos.y as i64 + direction.dy())
    }

    /// Uniform random position over the whole board.
    pub fn random_position(&self, rng: &mut SimRng) -> Coordinates {
        let x = rng.gen_range(0..self.width);
        let y = rng.gen_range(0..self.height);
        Coordinates::new(x, y)
    }

    // ── Food dynamics ─────────────────────────────────────────────────────

    #[inline]
    fn index(&self, pos: Coordinates) -> usize {
        pos.y * self.width + pos.x
    }

    /// Read-only view of the cell at `pos`.
    pub fn cell(&self, pos: Coordinates) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// `true` iff the cell at `pos` holds ripe food.
    pub fn has_food(&self, pos: Coordinates) -> bool {
        self.cell(pos).has_food()
    }

    /// Consume the food at `pos`, returning its energy value.
    ///
    /// Consuming an empty or unripe cell is a no-op returning 0, not an
    /// error — contention over food is expected and resolved by agent
    /// order.
    pub fn consume_food(&mut self, pos: Coordinates) -> i64 {
        let idx = self.index(pos);
        match &mut self.cells[idx] {
            Cell::Food(food) if food.ripe => {
                self.ripe_cells -= 1;
                food.eat()
            }
            _ => 0,
        }
    }

    /// Advance every food cell one round, ripening those whose counter
    /// reaches the configured ripening time.
    pub fn advance_round(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Food(food) = cell {
                if food.advance_round() {
                    self.ripe_cells += 1;
                }
            }
        }
    }

    /// Number of cells currently holding ripe food.  Maintained
    /// incrementally; O(1).
    #[inline]
    pub fn ripe_cells(&self) -> usize {
        self.ripe_cells
    }
}
