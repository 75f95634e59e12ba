//! Lineage-invariant agent constants.

use std::sync::Arc;

use petri_core::{Instruction, SimConfig};

/// Config-derived constants shared by an agent and all of its descendants.
///
/// Copied out of [`SimConfig`] once at simulation start and handed from
/// parent to child as an `Arc`, so reproduction never re-reads the full
/// configuration and the mutation pool is shared rather than cloned per
/// agent.
#[derive(Debug)]
pub struct AgentParams {
    /// Flat energy cost charged at the start of every round.
    pub round_cost: i64,
    /// Fraction of the parent's energy handed to a child.
    pub parent_energy_fraction: f64,
    /// Minimum energy required to be eligible to reproduce.
    pub reproduction_limit: i64,
    /// Probability of reproducing in a round, given eligibility.
    pub reproduction_odds: f64,
    /// Probability that a child program loses its last instruction.
    pub removal_odds: f64,
    /// Probability that a child program gains a random instruction.
    pub addition_odds: f64,
    /// Probability that one position of a child program is overwritten.
    pub change_odds: f64,
    /// The pool mutation draws from.  Non-empty (validated at load time).
    pub instruction_set: Vec<Instruction>,
}

impl AgentParams {
    /// Extract the agent-relevant constants from a validated config.
    pub fn from_config(config: &SimConfig) -> Arc<Self> {
        Arc::new(Self {
            round_cost: config.round_cost,
            parent_energy_fraction: config.parent_energy_fraction,
            reproduction_limit: config.reproduction_limit,
            reproduction_odds: config.reproduction_odds,
            removal_odds: config.removal_odds,
            addition_odds: config.addition_odds,
            change_odds: config.change_odds,
            instruction_set: config.instruction_set.clone(),
        })
    }
}
