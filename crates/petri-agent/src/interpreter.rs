//! Instruction execution against the grid.
//!
//! Every instruction performs exactly one of the actions below; dispatch
//! is an exhaustive match over the closed instruction set.  Only `Move`
//! and `Eat` can change the agent's position, and only they consume food.

use petri_core::Coordinates;
use petri_core::Instruction;
use petri_grid::Grid;

use crate::agent::Agent;

impl Agent {
    /// Execute a single instruction.
    pub(crate) fn execute(&mut self, instruction: Instruction, grid: &mut Grid) {
        match instruction {
            Instruction::Move => self.step(grid),
            Instruction::Eat => self.eat_nearby(grid),
            Instruction::Sniff => self.sniff(grid),
            Instruction::TurnLeft => self.direction = self.direction.turn_left(),
            Instruction::TurnRight => self.direction = self.direction.turn_right(),
        }
    }

    /// Step one cell along the current heading (wrapping at edges) and eat
    /// whatever ripe food is at the destination.
    fn step(&mut self, grid: &mut Grid) {
        self.coordinates = grid.neighbor(self.coordinates, self.direction);
        self.energy += grid.consume_food(self.coordinates);
    }

    /// Scan the eight surrounding cells and move onto the first one with
    /// ripe food, eating it.  Without food nearby the agent stays put.
    ///
    /// The scan order is fixed and load-bearing: dx −1, 0, 1 outer, dy −1,
    /// 0, 1 inner, (0, 0) skipped — when several neighbors hold food, the
    /// first in this order wins.
    fn eat_nearby(&mut self, grid: &mut Grid) {
        let mut found: Option<Coordinates> = None;
        'scan: for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let pos = grid.resolve(
                    self.coordinates.x as i64 + dx,
                    self.coordinates.y as i64 + dy,
                );
                if grid.has_food(pos) {
                    found = Some(pos);
                    break 'scan;
                }
            }
        }
        if let Some(pos) = found {
            self.coordinates = pos;
            self.energy += grid.consume_food(pos);
        }
    }

    /// Rotate clockwise, stopping as soon as the heading points at a
    /// food-bearing neighbor.  Four fruitless turns are a full revolution,
    /// leaving the heading where it started.
    fn sniff(&mut self, grid: &mut Grid) {
        for _ in 0..4 {
            self.direction = self.direction.turn_right();
            if grid.has_food(grid.neighbor(self.coordinates, self.direction)) {
                break;
            }
        }
    }
}
