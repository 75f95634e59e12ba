//! Per-agent state and the round update.

use std::fmt;
use std::sync::Arc;

use petri_core::{Coordinates, Direction, Instruction, SimRng};
use petri_grid::Grid;

use crate::mutation;
use crate::params::AgentParams;

/// A programmable entity living on the board.
///
/// # Liveness
///
/// An agent with energy ≥ 0 is alive; energy may go negative mid-round,
/// but the driver removes dead agents only at the end-of-round cull, so
/// an agent at exactly 0 energy still acts next round.
pub struct Agent {
    /// Rounds survived.  A newborn has age 0.
    pub(crate) age: u64,
    pub(crate) energy: i64,
    /// Reproduction lot for the *next* reproduction pass; redrawn at the
    /// end of every round.
    pub(crate) will_multiply: bool,
    pub(crate) program: Vec<Instruction>,
    pub(crate) direction: Direction,
    pub(crate) coordinates: Coordinates,
    pub(crate) params: Arc<AgentParams>,
}

impl Agent {
    // ── Construction ──────────────────────────────────────────────────────

    /// Create an initial agent at a random position with a random heading.
    ///
    /// Draw order (fixed for reproducibility): reproduction lot, then
    /// position, then heading.
    pub fn spawn(
        params: Arc<AgentParams>,
        energy: i64,
        program: Vec<Instruction>,
        grid: &Grid,
        rng: &mut SimRng,
    ) -> Agent {
        let will_multiply = rng.gen_bool(params.reproduction_odds);
        let coordinates = grid.random_position(rng);
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        Agent {
            age: 0,
            energy,
            will_multiply,
            program,
            direction,
            coordinates,
            params,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.energy >= 0
    }

    #[inline]
    pub fn age(&self) -> u64 {
        self.age
    }

    #[inline]
    pub fn energy(&self) -> i64 {
        self.energy
    }

    #[inline]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// Whether this agent drew a winning reproduction lot this round.
    #[inline]
    pub fn will_multiply(&self) -> bool {
        self.will_multiply
    }

    // ── Round update ──────────────────────────────────────────────────────

    /// Advance this agent one round: age, pay the flat round cost, run the
    /// program against the grid, then redraw the reproduction lot.
    ///
    /// The lot is a Bernoulli trial against the configured odds ANDed with
    /// the energy threshold; the trial consumes one RNG draw regardless of
    /// the threshold outcome.
    pub fn new_round(&mut self, grid: &mut Grid, rng: &mut SimRng) {
        self.age += 1;
        self.energy -= self.params.round_cost;
        self.run_program(grid);
        self.will_multiply =
            rng.gen_bool(self.params.reproduction_odds) && self.energy >= self.params.reproduction_limit;
    }

    /// Execute the program from the start: one instruction, then one point
    /// of energy, until the program ends or energy drops below zero.
    fn run_program(&mut self, grid: &mut Grid) {
        let mut index = 0;
        while self.energy >= 0 && index < self.program.len() {
            let instruction = self.program[index];
            self.execute(instruction, grid);
            self.energy -= 1;
            index += 1;
        }
    }

    // ── Reproduction ──────────────────────────────────────────────────────

    /// Produce a child, or `None` if this agent did not draw a winning lot
    /// or no longer meets the energy threshold.
    ///
    /// The child gets a mutated copy of the program, the opposite of the
    /// parent's *current* heading, the parent's *current* coordinates, and
    /// `trunc(energy × parent_energy_fraction)` energy deducted from the
    /// parent — so the parent and child together hold exactly the parent's
    /// prior energy.
    pub fn multiply(&mut self, rng: &mut SimRng) -> Option<Agent> {
        if !self.will_multiply || self.energy < self.params.reproduction_limit {
            return None;
        }

        let child_program = mutation::mutated_copy(&self.program, &self.params, rng);
        let child_energy = (self.energy as f64 * self.params.parent_energy_fraction) as i64;
        self.energy -= child_energy;

        Some(Agent {
            age: 0,
            energy: child_energy,
            will_multiply: false,
            program: child_program,
            direction: self.direction.opposite(),
            coordinates: self.coordinates,
            params: Arc::clone(&self.params),
        })
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "agent: age {}, energy {}, position {}",
            self.age, self.energy, self.coordinates
        )
    }
}
