//! Simulation observer trait for reporting and data collection.

use petri_agent::Agent;

use crate::sim::RunOutcome;
use crate::stats::RoundStats;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the round loop.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.  Every argument is a read-only
/// snapshot; observers never steer the simulation.
pub trait SimObserver {
    /// Called at the end of every round a living population survives.
    fn on_round(&mut self, _round: u64, _stats: &RoundStats) {}

    /// Called every `print_interval` rounds with the full population, and
    /// once more after the final round if that round wasn't already a
    /// snapshot round.
    fn on_snapshot(&mut self, _round: u64, _agents: &[Agent]) {}

    /// Called when the population empties; `round` is the round in which
    /// the last agent died.  No stats row is emitted for that round.
    fn on_extinct(&mut self, _round: u64) {}

    /// Called exactly once, after the run reached either terminal state.
    fn on_sim_end(&mut self, _outcome: &RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
