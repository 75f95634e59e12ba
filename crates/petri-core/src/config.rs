//! The validated run configuration.
//!
//! `SimConfig` is the boundary between the loading layer and the core:
//! by the time one of these exists, every field has been range-checked
//! and both instruction sequences contain only instructions from the
//! configured pool.  The core never re-validates.
//!
//! Built by the `petri-config` loader from a parameter file, or directly
//! in tests.

use crate::Instruction;

/// Top-level simulation configuration.
///
/// Energy quantities are signed (`i64`) because an agent's energy may go
/// negative before the end-of-round cull removes it.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Total rounds to simulate.
    pub rounds: u64,

    /// Agents placed on the board at round 0.
    pub initial_agents: usize,

    /// Energy each initial agent starts with.
    pub initial_energy: i64,

    /// Energy granted by one ripe food cell when eaten.
    pub food_energy: i64,

    /// Rounds an eaten cell takes to ripen again.
    pub food_ripening_time: u32,

    /// Flat energy cost charged to every agent at the start of its round,
    /// before its program runs.
    pub round_cost: i64,

    /// Minimum energy an agent must hold to be eligible to reproduce.
    pub reproduction_limit: i64,

    /// Probability that an eligible agent reproduces in a given round.
    pub reproduction_odds: f64,

    /// Fraction of the parent's energy handed to the child (truncated).
    pub parent_energy_fraction: f64,

    /// Probability that a child program loses its last instruction.
    pub removal_odds: f64,

    /// Probability that a child program gains one random instruction.
    pub addition_odds: f64,

    /// Probability that one random position of a child program is
    /// overwritten with a random instruction.
    pub change_odds: f64,

    /// Emit a full per-agent snapshot every this many rounds.
    pub print_interval: u64,

    /// Program every initial agent starts with.  May only use
    /// instructions from `instruction_set`.
    pub initial_program: Vec<Instruction>,

    /// The pool mutation draws from.  Non-empty.
    pub instruction_set: Vec<Instruction>,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}
